use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use error_stack::Report;
use kernel::KernelError;
use serde::Serialize;
use std::process::{ExitCode, Termination};

#[derive(Debug)]
pub struct StackTrace(Report<KernelError>);

impl From<Report<KernelError>> for StackTrace {
    fn from(e: Report<KernelError>) -> Self {
        StackTrace(e)
    }
}

impl Termination for StackTrace {
    fn report(self) -> ExitCode {
        self.0.report()
    }
}

/// Failure body shared by every route: `{"success": false, "message": ...}`.
#[derive(Debug)]
pub struct ErrorStatus {
    status: StatusCode,
    message: String,
}

impl ErrorStatus {
    /// Lookup failures answer 404 with the route's own `message`.
    pub fn from_report(report: Report<KernelError>, message: &'static str) -> Self {
        match report.current_context() {
            KernelError::NotFound | KernelError::AlreadyClosed => {
                tracing::debug!(error = ?report, "request rejected");
                Self {
                    status: StatusCode::NOT_FOUND,
                    message: message.to_string(),
                }
            }
            KernelError::Internal => {
                tracing::error!(error = ?report, "request failed");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: "Internal server error".to_string(),
                }
            }
        }
    }

    pub fn with_message(message: &'static str) -> impl FnOnce(Report<KernelError>) -> Self {
        move |report| Self::from_report(report, message)
    }
}

impl From<JsonRejection> for ErrorStatus {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(%rejection, "malformed request body");
        Self {
            status: StatusCode::BAD_REQUEST,
            message: rejection.body_text(),
        }
    }
}

#[derive(Serialize)]
struct Failure {
    success: bool,
    message: String,
}

impl IntoResponse for ErrorStatus {
    fn into_response(self) -> axum::response::Response {
        let body = Failure {
            success: false,
            message: self.message,
        };
        (self.status, axum::Json(body)).into_response()
    }
}
