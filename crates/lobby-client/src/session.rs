//! The session phase machine: Loading -> (Ready | Error).
//!
//! A session performs one fetch on load. On failure it parks in the
//! error phase showing the message; the only way out is [`Session::retry`],
//! which reproduces the browser's full page reload: all view state is
//! dropped and the fetch runs again from scratch.

use lobby_types::LobbyContent;
use tracing::warn;

use crate::fetch::ContentClient;
use crate::view::ViewState;

/// The lifecycle phase of a session.
#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    /// The initial fetch is in flight; render a placeholder.
    Loading,
    /// The dataset arrived; the lobby is interactive.
    Ready(Box<LobbyContent>),
    /// The fetch failed; render the message and a retry affordance.
    Error(String),
}

/// A single user's lobby session: fetched content plus local view state.
#[derive(Debug, Clone)]
pub struct Session {
    /// Current lifecycle phase.
    pub phase: Phase,
    /// Tab, search, filter, and expansion state.
    pub view: ViewState,
}

impl Session {
    /// Create a session in the loading phase with default view state.
    pub fn new() -> Self {
        Self {
            phase: Phase::Loading,
            view: ViewState::default(),
        }
    }

    /// Perform the one-shot content fetch and settle into Ready or Error.
    pub async fn load(&mut self, client: &ContentClient) {
        self.phase = Phase::Loading;
        match client.fetch_content().await {
            Ok(content) => self.phase = Phase::Ready(Box::new(content)),
            Err(e) => {
                warn!(error = %e, "lobby content fetch failed");
                self.phase = Phase::Error(e.to_string());
            }
        }
    }

    /// Full-reload retry: drop all view state and fetch again.
    pub async fn retry(&mut self, client: &ContentClient) {
        self.view = ViewState::default();
        self.load(client).await;
    }

    /// The fetched dataset, if the session is ready.
    pub fn content(&self) -> Option<&LobbyContent> {
        match &self.phase {
            Phase::Ready(content) => Some(content),
            Phase::Loading | Phase::Error(_) => None,
        }
    }

    /// Whether the initial fetch is still in flight.
    pub const fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading)
    }

    /// The error message, if the fetch failed.
    pub fn error_message(&self) -> Option<&str> {
        match &self.phase {
            Phase::Error(message) => Some(message),
            Phase::Loading | Phase::Ready(_) => None,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_is_loading_with_default_view() {
        let session = Session::new();
        assert!(session.is_loading());
        assert!(session.content().is_none());
        assert!(session.error_message().is_none());
        assert_eq!(session.view, ViewState::default());
    }
}
