//! HTTP server initialization and runtime setup.

use crate::config::Config;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;

/// Runs the HTTP server with the given configuration.
///
/// Builds the shared state from the configured redirect targets, binds the
/// listener, and serves until the process is stopped.
///
/// # Errors
///
/// Returns an error if:
/// - the listen address does not parse
/// - the bind fails
/// - a server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = AppState::new(config.targets.clone());

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
