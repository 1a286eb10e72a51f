//! Shared application state injected into request handlers.

use std::sync::Arc;

use crate::config::RedirectTargets;

/// State shared by all request handlers.
///
/// Redirect targets are resolved once at startup and passed in explicitly;
/// handlers never read the process environment. The targets are immutable
/// for the lifetime of the process, so concurrent requests share them
/// without synchronization.
#[derive(Clone)]
pub struct AppState {
    pub targets: Arc<RedirectTargets>,
}

impl AppState {
    pub fn new(targets: RedirectTargets) -> Self {
        Self {
            targets: Arc::new(targets),
        }
    }
}
