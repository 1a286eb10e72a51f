#![allow(dead_code)]

use axum::Router;
use axum::routing::get;
use store_redirect::api::handlers::{health_handler, redirect_handler};
use store_redirect::config::RedirectTargets;
use store_redirect::state::AppState;

pub const APP_STORE_URL: &str = "https://apps.apple.com/app/example-app/id123456789";
pub const PLAY_STORE_URL: &str = "https://play.google.com/store/apps/details?id=com.example.app";
pub const FALLBACK_URL: &str = "https://example.com";

pub const IPHONE_UA: &str =
    "Mozilla/5.0 (iPhone; CPU iPhone OS 16_0 like Mac OS X) AppleWebKit/605.1.15";
pub const IPAD_UA: &str = "Mozilla/5.0 (iPad; CPU OS 16_0 like Mac OS X) AppleWebKit/605.1.15";
pub const ANDROID_UA: &str = "Mozilla/5.0 (Linux; Android 13; SM-G998B) AppleWebKit/537.36 \
                              (KHTML, like Gecko) Chrome/112.0.0.0 Mobile Safari/537.36";
pub const DESKTOP_UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                              (KHTML, like Gecko) Chrome/112.0.0.0 Safari/537.36";

pub fn test_targets() -> RedirectTargets {
    RedirectTargets {
        app_store_url: APP_STORE_URL.to_string(),
        play_store_url: PLAY_STORE_URL.to_string(),
        fallback_url: FALLBACK_URL.to_string(),
    }
}

/// Builds the application router exactly as served in production, minus
/// the path normalization wrapper.
pub fn test_app(targets: RedirectTargets) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .fallback(redirect_handler)
        .with_state(AppState::new(targets))
}
