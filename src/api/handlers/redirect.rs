//! Handler for User-Agent based redirect.

use axum::extract::State;
use axum::http::{HeaderMap, Method, header};
use tracing::{error, info, warn};

use crate::api::dto::redirect::RedirectOutcome;
use crate::config::RedirectTargets;
use crate::domain::classification::classify;
use crate::domain::selection::select_target;
use crate::error::AppError;
use crate::state::AppState;

/// Maximum number of User-Agent characters carried into log output.
const LOG_UA_MAX_CHARS: usize = 100;

/// Redirects a request to a platform-specific destination.
///
/// # Endpoint
///
/// Registered as the router fallback, so every path and method funnels
/// through it.
///
/// # Request Flow
///
/// 1. Reject non-GET methods (405)
/// 2. Reject requests while the fallback target is unconfigured (500)
/// 3. Absent or empty `User-Agent` → redirect straight to the fallback
/// 4. Classify the User-Agent, select a target by platform priority
/// 5. Respond with 302 and a short-lived public cache hint
///
/// # Fault Recovery
///
/// The decision pipeline is fallible only where the request itself is
/// malformed (a `User-Agent` value that is not valid UTF-8). Such faults
/// degrade to a fallback redirect when a fallback is configured, so a
/// classification problem never breaks the redirect experience; without a
/// fallback they surface as 500.
pub async fn redirect_handler(
    State(state): State<AppState>,
    method: Method,
    headers: HeaderMap,
) -> RedirectOutcome {
    match decide(&method, &headers, &state.targets) {
        Ok(outcome) => outcome,
        Err(err) => recover(err, &state.targets),
    }
}

/// Runs the linear decision pipeline for one request.
///
/// Every terminal condition is either an `Ok` outcome or a typed error;
/// the caller applies the recovery policy.
fn decide(
    method: &Method,
    headers: &HeaderMap,
    targets: &RedirectTargets,
) -> Result<RedirectOutcome, AppError> {
    if method != Method::GET {
        return Err(AppError::MethodNotAllowed);
    }

    if !targets.has_fallback() {
        return Err(AppError::MissingFallback);
    }

    let user_agent = match headers.get(header::USER_AGENT) {
        None => "",
        Some(value) => value
            .to_str()
            .map_err(|_| AppError::Internal("User-Agent header is not valid UTF-8".to_string()))?,
    };

    if user_agent.is_empty() {
        warn!("no User-Agent header found, redirecting to fallback");
        return Ok(RedirectOutcome::Redirect(targets.fallback_url.clone()));
    }

    let classification = classify(user_agent);
    let target = select_target(&classification, targets);

    info!(
        user_agent = truncate_chars(user_agent, LOG_UA_MAX_CHARS),
        is_ios = classification.is_ios,
        is_android = classification.is_android,
        is_mobile = classification.is_mobile,
        url = target,
        "redirect"
    );

    Ok(RedirectOutcome::Redirect(target.to_owned()))
}

/// Maps pipeline errors to responses.
///
/// Internal faults degrade to a fallback redirect when possible; the
/// method and configuration errors surface unchanged.
fn recover(err: AppError, targets: &RedirectTargets) -> RedirectOutcome {
    if let AppError::Internal(detail) = &err {
        if targets.has_fallback() {
            error!(%detail, "request processing failed, redirecting to fallback");
            return RedirectOutcome::Redirect(targets.fallback_url.clone());
        }
        error!(%detail, "request processing failed, no fallback configured");
    }

    RedirectOutcome::from(err)
}

/// Truncates to at most `max` characters, respecting char boundaries.
fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
