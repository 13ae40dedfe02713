mod book;
mod borrow;
mod user;

pub use self::{book::*, borrow::*, user::*};
use crate::handler::AppModule;
use axum::Router;
use kernel::interface::clock::Clock;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn router<C: Clock>(module: AppModule<C>) -> Router {
    Router::<AppModule<C>>::new()
        .route_borrow()
        .route_book()
        .route_user()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::new())
        .with_state(module)
}
