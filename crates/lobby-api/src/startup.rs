//! Background-task startup helper for the lobby API server.
//!
//! Provides [`spawn_server`] which binds eagerly (so the caller learns
//! the actual address, including for port 0) and then serves on a
//! background Tokio task. Test harnesses use this to run the API on an
//! ephemeral port alongside a real HTTP client.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tracing::info;

use crate::router::build_router;
use crate::server::{ServerConfig, ServerError, parse_origin};
use crate::state::AppState;

/// Bind the configured address and serve the lobby API on a background
/// Tokio task.
///
/// The bind happens before the task is spawned, so bind failures are
/// reported eagerly and the returned [`SocketAddr`] reflects the real
/// port when the config asks for port 0. The task runs until the runtime
/// shuts down or the handle is aborted.
///
/// # Errors
///
/// Returns [`ServerError::InvalidOrigin`] or [`ServerError::Bind`] if the
/// configuration is unusable.
pub async fn spawn_server(
    config: &ServerConfig,
    state: Arc<AppState>,
) -> Result<(SocketAddr, JoinHandle<()>), ServerError> {
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .map_err(|e| ServerError::Bind(format!("invalid address: {e}")))?;

    let origin = parse_origin(config)?;
    let router = build_router(state, origin);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| ServerError::Bind(format!("bind failed on {addr}: {e}")))?;
    let local_addr = listener
        .local_addr()
        .map_err(|e| ServerError::Bind(format!("local_addr failed: {e}")))?;

    let handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, router).await {
            tracing::error!(error = %e, "lobby API server exited with error");
        }
    });

    info!(%local_addr, "lobby API spawned on background task");

    Ok((local_addr, handle))
}
