//! Router configuration.
//!
//! # Route Structure
//!
//! - `GET /health` - configuration health probe (public)
//! - everything else - User-Agent based redirect, any path
//!
//! The redirect handler is registered as the router fallback rather than
//! on a fixed path: the service answers on whatever path the landing link
//! points at, and the handler itself enforces the GET-only contract so
//! other methods receive the JSON 405 body instead of Axum's bare default.
//!
//! # Middleware
//!
//! - **Tracing** - structured request/response logging
//! - **Path normalization** - trailing slash handling

use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/health", get(health_handler))
        .fallback(redirect_handler)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
