//! Lobby content service binary.
//!
//! Wires together configuration, the compiled-in content catalog, and
//! the HTTP API server.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `lobby-config.yaml` (optional) plus
//!    environment overrides
//! 2. Initialize structured logging (tracing)
//! 3. Load and validate the content catalog
//! 4. Serve the API until the process is terminated

mod config;
mod error;

use std::path::Path;
use std::sync::Arc;

use lobby_api::{AppState, ServerConfig, start_server};
use lobby_catalog::Catalog;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::ServiceConfig;
use crate::error::ServiceError;

/// Application entry point for the lobby content service.
///
/// # Errors
///
/// Returns an error if configuration, catalog validation, or the HTTP
/// server fails.
#[tokio::main]
async fn main() -> Result<(), ServiceError> {
    // 1. Load configuration first so its log level can act as the
    //    fallback when RUST_LOG is unset.
    let config = ServiceConfig::load(Path::new("lobby-config.yaml"))?;

    // 2. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_target(true)
        .init();

    info!(
        host = %config.server.host,
        port = config.server.port,
        allowed_origin = %config.server.allowed_origin,
        "lobby-server starting"
    );

    // 3. Load and validate the content catalog. The dataset is compiled
    //    in; a validation failure means bad seed data, so refuse to start.
    let catalog = Catalog::load()?;
    info!(
        games = catalog.games().len(),
        promotions = catalog.promotions().len(),
        news = catalog.news().len(),
        "content catalog loaded"
    );

    // 4. Serve until terminated.
    let state = Arc::new(AppState::new(catalog));
    let server_config = ServerConfig {
        host: config.server.host,
        port: config.server.port,
        allowed_origin: config.server.allowed_origin,
    };
    start_server(&server_config, state).await?;

    Ok(())
}
