//! Shared application state for the lobby API server.
//!
//! [`AppState`] holds the validated content catalog. The catalog is
//! immutable after load, so the state needs no locks; handlers read it
//! concurrently through the shared [`Arc`].

use std::sync::Arc;

use lobby_catalog::Catalog;

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`] and injected via Axum's `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The validated, immutable content catalog.
    pub catalog: Arc<Catalog>,
}

impl AppState {
    /// Wrap a loaded catalog for sharing across handlers.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}
