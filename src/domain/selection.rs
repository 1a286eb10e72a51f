//! Redirect target selection.

use crate::config::RedirectTargets;
use crate::domain::classification::Classification;

/// Placeholder destination used when no fallback is configured at
/// selection time. The request handler rejects such configurations before
/// selection runs, so this only matters for direct callers.
pub const DEFAULT_FALLBACK_URL: &str = "https://example.com";

/// Selects the destination URL for a classified request.
///
/// Priority, first match wins:
///
/// 1. iOS and a configured App Store URL
/// 2. Android and a configured Play Store URL
/// 3. the fallback URL ([`DEFAULT_FALLBACK_URL`] if unset)
///
/// An empty configured URL counts as "not configured" and falls through
/// rather than redirecting to an empty `Location`. iOS wins over Android
/// when a spoofed User-Agent sets both flags. `is_mobile` is deliberately
/// not consulted: there is no generic-mobile destination.
///
/// Total function; never fails.
pub fn select_target<'a>(
    classification: &Classification,
    targets: &'a RedirectTargets,
) -> &'a str {
    if classification.is_ios && !targets.app_store_url.is_empty() {
        return &targets.app_store_url;
    }

    if classification.is_android && !targets.play_store_url.is_empty() {
        return &targets.play_store_url;
    }

    if targets.fallback_url.is_empty() {
        DEFAULT_FALLBACK_URL
    } else {
        &targets.fallback_url
    }
}
