mod book;
mod borrow;
mod user;

pub use self::{book::*, borrow::*, user::*};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Success body shared by every route: `{"success": true, "data": ...}`.
#[derive(Debug, Serialize)]
pub struct Success<T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'static str>,
    data: T,
}

impl<T> Success<T> {
    pub fn new(data: T) -> Self {
        Self::with_message(data, None)
    }

    pub fn with_message(data: T, message: Option<&'static str>) -> Self {
        Self {
            success: true,
            message,
            data,
        }
    }
}

impl<T: Serialize> IntoResponse for Success<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}
