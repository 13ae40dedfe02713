use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::{
    BorrowTransformer, CreateBorrowRequest, LateFeeRequest, RenewRequest, ReturnRequest,
};
use crate::response::{BorrowPresenter, LateFeePresenter};
use application::service::{BorrowService, GetBorrowService, RenewService, ReturnService};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use kernel::interface::clock::Clock;

const BORROWED: &str = "Book borrowed successfully";
const RETURNED: &str = "Book returned successfully";
const RENEWED: &str = "Book renewed successfully";

const NOT_IN_HISTORY: &str = "Book not found in borrow history";
const NOT_OVERDUE: &str = "Book not found in overdue list";
const NOT_RENEWABLE: &str = "Book not found in borrow history or already returned";
const BORROW_FAILED: &str = "Book could not be borrowed";
const LISTING_FAILED: &str = "Borrow records could not be listed";

pub trait BorrowRouter {
    fn route_borrow(self) -> Self;
}

impl<C: Clock> BorrowRouter for Router<AppModule<C>> {
    fn route_borrow(self) -> Self {
        self.route(
            "/borrow",
            post(
                |State(module): State<AppModule<C>>,
                 req: Result<Json<CreateBorrowRequest>, JsonRejection>| async move {
                    let Json(req) = match req {
                        Ok(req) => req,
                        Err(rejection) => return Err(ErrorStatus::from(rejection)),
                    };
                    Controller::new(BorrowTransformer, BorrowPresenter::announcing(BORROWED))
                        .intake(req)
                        .handle(|dto| async move { module.borrow_book(dto).await })
                        .await
                        .map_err(ErrorStatus::with_message(BORROW_FAILED))
                },
            ),
        )
        .route(
            "/return/:id",
            put(
                |State(module): State<AppModule<C>>, Path(id): Path<String>| async move {
                    let controller =
                        Controller::new(BorrowTransformer, BorrowPresenter::announcing(RETURNED));
                    let transformed = match controller.try_intake(ReturnRequest::new(id)) {
                        Ok(transformed) => transformed,
                        Err(report) => return Err(ErrorStatus::from_report(report, NOT_IN_HISTORY)),
                    };
                    transformed
                        .handle(|dto| async move { module.return_book(dto).await })
                        .await
                        .map_err(ErrorStatus::with_message(NOT_IN_HISTORY))
                },
            ),
        )
        .route(
            "/borrow/:id/renew",
            put(
                |State(module): State<AppModule<C>>, Path(id): Path<String>| async move {
                    let controller =
                        Controller::new(BorrowTransformer, BorrowPresenter::announcing(RENEWED));
                    let transformed = match controller.try_intake(RenewRequest::new(id)) {
                        Ok(transformed) => transformed,
                        Err(report) => return Err(ErrorStatus::from_report(report, NOT_RENEWABLE)),
                    };
                    transformed
                        .handle(|dto| async move { module.renew_book(dto).await })
                        .await
                        .map_err(ErrorStatus::with_message(NOT_RENEWABLE))
                },
            ),
        )
        .route(
            "/late-fees/:id",
            get(
                |State(module): State<AppModule<C>>, Path(id): Path<String>| async move {
                    let controller = Controller::new(BorrowTransformer, LateFeePresenter);
                    let transformed = match controller.try_intake(LateFeeRequest::new(id)) {
                        Ok(transformed) => transformed,
                        Err(report) => return Err(ErrorStatus::from_report(report, NOT_OVERDUE)),
                    };
                    transformed
                        .handle(|dto| async move { module.get_late_fee(dto).await })
                        .await
                        .map_err(ErrorStatus::with_message(NOT_OVERDUE))
                },
            ),
        )
        .route(
            "/borrow/history",
            get(|State(module): State<AppModule<C>>| async move {
                Controller::new((), BorrowPresenter::listing())
                    .bypass(|| async move { module.get_history().await })
                    .await
                    .map_err(ErrorStatus::with_message(LISTING_FAILED))
            }),
        )
        .route(
            "/borrowed-books",
            get(|State(module): State<AppModule<C>>| async move {
                Controller::new((), BorrowPresenter::listing())
                    .bypass(|| async move { module.get_borrowed().await })
                    .await
                    .map_err(ErrorStatus::with_message(LISTING_FAILED))
            }),
        )
        .route(
            "/books/unreturned",
            get(|State(module): State<AppModule<C>>| async move {
                Controller::new((), BorrowPresenter::listing())
                    .bypass(|| async move { module.get_unreturned().await })
                    .await
                    .map_err(ErrorStatus::with_message(LISTING_FAILED))
            }),
        )
        .route(
            "/overdue",
            get(|State(module): State<AppModule<C>>| async move {
                Controller::new((), BorrowPresenter::listing())
                    .bypass(|| async move { module.get_overdue().await })
                    .await
                    .map_err(ErrorStatus::with_message(LISTING_FAILED))
            }),
        )
    }
}
