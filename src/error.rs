//! Application error types and their HTTP representation.
//!
//! Every error leaving the service is rendered through [`error_response`],
//! so the wire format (`{"error": "<message>"}` with `Cache-Control:
//! no-cache`) has exactly one construction point.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// JSON body carried by every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Errors surfaced by the redirect pipeline.
///
/// The `Display` impl of each variant is the exact message sent on the
/// wire. [`AppError::Internal`] carries an internal detail for logging
/// that is never exposed to the client.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Request used a method other than GET.
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// The required fallback redirect target is not configured.
    #[error("FALLBACK environment variable is required")]
    MissingFallback,

    /// A request component could not be read, e.g. a `User-Agent` value
    /// that is not valid UTF-8.
    #[error("Internal server error")]
    Internal(String),
}

impl AppError {
    /// HTTP status code for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::MissingFallback | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error_response(self.status(), self.to_string())
    }
}

/// Builds the error wire format: JSON body, `Cache-Control: no-cache`.
pub fn error_response(status: StatusCode, message: String) -> Response {
    (
        status,
        [(header::CACHE_CONTROL, "no-cache")],
        Json(ErrorBody { error: message }),
    )
        .into_response()
}
