//! HTTP API server for the lobby content catalog.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **REST endpoints** for the content catalog (`/api/content`,
//!   `/api/games`, `/api/games/{id}`, `/api/promotions`, `/api/news`)
//! - **Minimal HTML status page** (`GET /`) listing the API endpoints
//!
//! # Architecture
//!
//! All endpoints read from an immutable [`Catalog`](lobby_catalog::Catalog)
//! shared behind an [`Arc`](std::sync::Arc) in [`AppState`]. The dataset is
//! compiled into the binary and never mutated, so request handling takes no
//! locks. CORS is restricted to the single configured frontend origin.

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod startup;
pub mod state;

// Re-export primary types for convenience.
pub use router::build_router;
pub use server::{ServerConfig, ServerError, start_server};
pub use startup::spawn_server;
pub use state::AppState;
