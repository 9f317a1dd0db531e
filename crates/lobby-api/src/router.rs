//! Axum router construction for the lobby API.
//!
//! Assembles all routes into a single [`Router`] with CORS restricted to
//! the configured frontend origin and request tracing enabled.

use std::sync::Arc;

use axum::Router;
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router for the lobby API.
///
/// The router includes:
/// - `GET /` -- minimal HTML status page
/// - `GET /api/content` -- full dataset
/// - `GET /api/games` -- games collection
/// - `GET /api/games/{id}` -- single game (404 on unknown id)
/// - `GET /api/games/` -- same 404 body for the empty-id form
/// - `GET /api/promotions` -- promotions collection
/// - `GET /api/news` -- news collection
///
/// Cross-origin requests are permitted only from `allowed_origin`, the
/// single origin the lobby frontend is served from. All routes are GET;
/// unknown routes fall through to axum's default 404.
pub fn build_router(state: Arc<AppState>, allowed_origin: HeaderValue) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(allowed_origin)
        .allow_methods([Method::GET])
        .allow_headers(Any);

    Router::new()
        // Status page
        .route("/", get(handlers::index))
        // REST API
        .route("/api/content", get(handlers::get_content))
        .route("/api/games", get(handlers::list_games))
        .route("/api/games/{id}", get(handlers::get_game))
        // The {id} capture does not match an empty segment, so the
        // trailing-slash form gets its own route with the same body.
        .route("/api/games/", get(handlers::get_game_missing_id))
        .route("/api/promotions", get(handlers::list_promotions))
        .route("/api/news", get(handlers::list_news))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
