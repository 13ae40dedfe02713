use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::response::UserPresenter;
use application::service::GetUserService;
use axum::extract::State;
use axum::routing::get;
use axum::Router;
use kernel::interface::clock::Clock;

pub trait UserRouter {
    fn route_user(self) -> Self;
}

impl<C: Clock> UserRouter for Router<AppModule<C>> {
    fn route_user(self) -> Self {
        self.route(
            "/users",
            get(|State(module): State<AppModule<C>>| async move {
                Controller::new((), UserPresenter)
                    .bypass(|| async move { module.get_all().await })
                    .await
                    .map_err(ErrorStatus::with_message("Users could not be listed"))
            }),
        )
    }
}
