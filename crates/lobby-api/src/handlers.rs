//! REST endpoint handlers for the lobby API.
//!
//! All handlers read from the immutable [`Catalog`](lobby_catalog::Catalog)
//! via the shared [`AppState`]. Every route is a side-effect-free GET.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | Minimal HTML status page |
//! | `GET` | `/api/content` | Full dataset (games + promotions + news) |
//! | `GET` | `/api/games` | Games collection as an array |
//! | `GET` | `/api/games/:id` | Single game, or 404 |
//! | `GET` | `/api/promotions` | Promotions collection as an array |
//! | `GET` | `/api/news` | News collection as an array |

// The catalog takes no locks, so handlers never await; axum still
// requires async signatures.
#![allow(clippy::unused_async)]

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse};

use crate::error::ApiError;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET / -- minimal HTML status page
// ---------------------------------------------------------------------------

/// Serve a minimal HTML page showing server status and API links.
///
/// The real frontend is the React lobby; this page exists for manual
/// inspection of a running server.
pub async fn index(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let game_count = state.catalog.games().len();
    let promotion_count = state.catalog.promotions().len();
    let news_count = state.catalog.news().len();

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Lobby Content API</title>
</head>
<body>
    <h1>Lobby Content API</h1>
    <p>Status: RUNNING -- {game_count} games, {promotion_count} promotions, {news_count} news items</p>
    <h2>API Endpoints</h2>
    <ul>
        <li><a href="/api/content">/api/content</a> -- Full dataset</li>
        <li><a href="/api/games">/api/games</a> -- Games collection</li>
        <li>/api/games/:id -- Single game detail</li>
        <li><a href="/api/promotions">/api/promotions</a> -- Promotions collection</li>
        <li><a href="/api/news">/api/news</a> -- News collection</li>
    </ul>
</body>
</html>"#
    ))
}

// ---------------------------------------------------------------------------
// GET /api/content -- full dataset
// ---------------------------------------------------------------------------

/// Return the full dataset as one object with the three keyed collections
/// (`casinoGames`, `promotions`, `casinoNews`).
pub async fn get_content(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(serde_json::to_value(state.catalog.content())?))
}

// ---------------------------------------------------------------------------
// GET /api/games -- list games
// ---------------------------------------------------------------------------

/// Return the games collection as a bare JSON array, in catalog order.
pub async fn list_games(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(serde_json::to_value(state.catalog.games())?))
}

// ---------------------------------------------------------------------------
// GET /api/games/:id -- single game
// ---------------------------------------------------------------------------

/// Return the game with the given id, or a 404 with
/// `{"error":"Game not found"}` if no game matches.
pub async fn get_game(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let game = state.catalog.game(&id).ok_or(ApiError::GameNotFound)?;
    Ok(Json(serde_json::to_value(game)?))
}

/// Handle the trailing-slash form `GET /api/games/`.
///
/// An empty id can never match a game, so this responds with the same
/// 404 body as an unknown id rather than axum's bare routing 404.
pub async fn get_game_missing_id() -> Result<Json<serde_json::Value>, ApiError> {
    Err(ApiError::GameNotFound)
}

// ---------------------------------------------------------------------------
// GET /api/promotions -- list promotions
// ---------------------------------------------------------------------------

/// Return the promotions collection as a bare JSON array, in catalog order.
pub async fn list_promotions(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(serde_json::to_value(state.catalog.promotions())?))
}

// ---------------------------------------------------------------------------
// GET /api/news -- list news
// ---------------------------------------------------------------------------

/// Return the news collection as a bare JSON array, newest first.
pub async fn list_news(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(serde_json::to_value(state.catalog.news())?))
}
