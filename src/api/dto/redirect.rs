//! Wire representation of a redirect decision.

use axum::http::{HeaderName, StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::error::{AppError, error_response};

/// `Cache-Control` value for redirect responses. Downstream caches may
/// reuse the decision for five minutes.
const REDIRECT_CACHE_CONTROL: &str = "public, max-age=300";

/// Diagnostic marker identifying why the redirect was issued.
const REDIRECT_REASON: &str = "User-Agent based redirect";

/// Final outcome of a request: either a redirect to a destination URL or
/// an error with a status and client-facing message.
///
/// Translation into wire format happens exactly once, in the
/// [`IntoResponse`] impl below; handlers build the variant and never touch
/// headers or bodies themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectOutcome {
    Redirect(String),
    Error { status: StatusCode, message: String },
}

impl From<AppError> for RedirectOutcome {
    fn from(err: AppError) -> Self {
        RedirectOutcome::Error {
            status: err.status(),
            message: err.to_string(),
        }
    }
}

impl IntoResponse for RedirectOutcome {
    fn into_response(self) -> Response {
        match self {
            RedirectOutcome::Redirect(url) => (
                StatusCode::FOUND,
                [
                    (header::LOCATION, url),
                    (header::CACHE_CONTROL, REDIRECT_CACHE_CONTROL.to_owned()),
                    (
                        HeaderName::from_static("x-redirect-reason"),
                        REDIRECT_REASON.to_owned(),
                    ),
                ],
            )
                .into_response(),
            RedirectOutcome::Error { status, message } => error_response(status, message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redirect_wire_format() {
        let outcome = RedirectOutcome::Redirect("https://example.com/landing".to_string());
        let response = outcome.into_response();

        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "https://example.com/landing"
        );
        assert_eq!(
            response.headers().get(header::CACHE_CONTROL).unwrap(),
            "public, max-age=300"
        );
        assert_eq!(
            response.headers().get("x-redirect-reason").unwrap(),
            "User-Agent based redirect"
        );
    }

    #[test]
    fn test_error_wire_format() {
        let outcome = RedirectOutcome::Error {
            status: StatusCode::METHOD_NOT_ALLOWED,
            message: "Method not allowed".to_string(),
        };
        let response = outcome.into_response();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(
            response.headers().get(header::CACHE_CONTROL).unwrap(),
            "no-cache"
        );
    }

    #[test]
    fn test_from_app_error() {
        let outcome = RedirectOutcome::from(AppError::MethodNotAllowed);
        assert_eq!(
            outcome,
            RedirectOutcome::Error {
                status: StatusCode::METHOD_NOT_ALLOWED,
                message: "Method not allowed".to_string(),
            }
        );
    }
}
