//! End-to-end session tests against a live lobby API server.
//!
//! These spawn the real Axum server on an ephemeral port and drive a
//! [`Session`] through its phases with a real HTTP client.

#![allow(clippy::unwrap_used)]

use std::net::SocketAddr;
use std::sync::Arc;

use lobby_api::{AppState, ServerConfig, spawn_server};
use lobby_catalog::Catalog;
use lobby_client::{ContentClient, ContentTab, Phase, Session};

async fn spawn_api() -> SocketAddr {
    let state = Arc::new(AppState::new(Catalog::load().unwrap()));
    let config = ServerConfig {
        host: String::from("127.0.0.1"),
        port: 0,
        ..ServerConfig::default()
    };
    let (addr, _handle) = spawn_server(&config, state).await.unwrap();
    addr
}

#[tokio::test]
async fn load_reaches_ready_with_full_dataset() {
    let addr = spawn_api().await;
    let client = ContentClient::new(format!("http://{addr}"));

    let mut session = Session::new();
    session.load(&client).await;

    let content = session.content().unwrap();
    assert_eq!(content.casino_games.len(), 10);
    assert_eq!(content.promotions.len(), 5);
    assert_eq!(content.casino_news.len(), 5);
}

#[tokio::test]
async fn ready_session_filters_fetched_games() {
    let addr = spawn_api().await;
    let client = ContentClient::new(format!("http://{addr}"));

    let mut session = Session::new();
    session.load(&client).await;
    session.view.set_search("vampire");

    let content = session.content().unwrap();
    let filtered = session.view.filtered_games(content);
    assert_eq!(filtered.len(), 2);
}

#[tokio::test]
async fn unreachable_server_parks_in_error_phase() {
    // Port 1 is never listening locally.
    let client = ContentClient::new("http://127.0.0.1:1");

    let mut session = Session::new();
    session.load(&client).await;

    assert!(session.error_message().is_some());
    assert!(session.content().is_none());
}

#[tokio::test]
async fn non_success_status_becomes_an_error_phase() {
    let addr = spawn_api().await;
    // A base URL under an unknown path makes /api/content a 404.
    let client = ContentClient::new(format!("http://{addr}/nope"));

    let mut session = Session::new();
    session.load(&client).await;

    assert!(matches!(&session.phase, Phase::Error(message) if message.contains("404")));
}

#[tokio::test]
async fn retry_resets_view_state_and_refetches() {
    let addr = spawn_api().await;
    let bad_client = ContentClient::new("http://127.0.0.1:1");
    let good_client = ContentClient::new(format!("http://{addr}"));

    let mut session = Session::new();
    session.load(&bad_client).await;
    assert!(session.error_message().is_some());

    // Dirty the view state as a user would have before the failure.
    session.view.set_search("vampire");
    session.view.toggle_category("slots");
    session.view.switch_tab(ContentTab::Promotions);

    session.retry(&good_client).await;

    assert!(session.content().is_some());
    assert!(session.view.search_term.is_empty());
    assert!(session.view.selected_categories.is_empty());
    assert_eq!(session.view.active_tab, ContentTab::Games);
}
