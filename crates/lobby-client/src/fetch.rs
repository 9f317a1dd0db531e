//! HTTP fetch of the lobby content.
//!
//! The client issues exactly one request per session load:
//! `GET {base}/api/content`. There is no caching, cancellation, or
//! retry logic; failures surface to the session as a [`ClientError`].

use lobby_types::LobbyContent;
use tracing::debug;

use crate::error::ClientError;

/// HTTP client for the lobby content API.
#[derive(Debug, Clone)]
pub struct ContentClient {
    client: reqwest::Client,
    base_url: String,
}

impl ContentClient {
    /// Create a client for the API at `base_url`
    /// (e.g. `http://localhost:5000`, no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetch the full dataset from `GET /api/content`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] if no response arrives,
    /// [`ClientError::Status`] on a non-success status, or
    /// [`ClientError::Decode`] if the body is not valid content JSON.
    pub async fn fetch_content(&self) -> Result<LobbyContent, ClientError> {
        let url = format!("{}/api/content", self.base_url);
        debug!(%url, "fetching lobby content");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
            });
        }

        response
            .json::<LobbyContent>()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }
}
