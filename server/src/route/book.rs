use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::response::BookPresenter;
use application::service::GetBookService;
use axum::extract::State;
use axum::routing::get;
use axum::Router;
use kernel::interface::clock::Clock;

pub trait BookRouter {
    fn route_book(self) -> Self;
}

impl<C: Clock> BookRouter for Router<AppModule<C>> {
    fn route_book(self) -> Self {
        self.route(
            "/books/available",
            get(|State(module): State<AppModule<C>>| async move {
                Controller::new((), BookPresenter)
                    .bypass(|| async move { module.get_available().await })
                    .await
                    .map_err(ErrorStatus::with_message("Available books could not be listed"))
            }),
        )
    }
}
