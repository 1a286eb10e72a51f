//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: fallback redirect target configured
/// - **503 Service Unavailable**: fallback target missing; user traffic
///   is being answered with 500s
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "targets": {
///       "status": "ok",
///       "message": "Configured: appstore, playstore, fallback"
///     }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let targets_check = check_targets(&state);

    let healthy = targets_check.status == "ok";

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            targets: targets_check,
        },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks redirect target configuration completeness.
///
/// The fallback target is required; the store targets are optional and
/// only reported.
fn check_targets(state: &AppState) -> CheckStatus {
    let targets = &state.targets;

    if !targets.has_fallback() {
        return CheckStatus {
            status: "error".to_string(),
            message: Some("FALLBACK is not configured".to_string()),
        };
    }

    let mut configured = Vec::new();
    if !targets.app_store_url.is_empty() {
        configured.push("appstore");
    }
    if !targets.play_store_url.is_empty() {
        configured.push("playstore");
    }
    configured.push("fallback");

    CheckStatus {
        status: "ok".to_string(),
        message: Some(format!("Configured: {}", configured.join(", "))),
    }
}
