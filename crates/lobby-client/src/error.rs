//! Error types for the client session.

/// Errors that can occur while fetching the lobby content.
///
/// The session does not distinguish error kinds beyond displaying the
/// message; there is no retry-with-backoff, only the user-driven
/// full reload.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request never produced an HTTP response (connection refused,
    /// DNS failure, timeout).
    #[error("request failed: {0}")]
    Transport(String),

    /// The server responded with a non-success status.
    #[error("server returned {status}")]
    Status {
        /// The HTTP status code received.
        status: u16,
    },

    /// The response body was not valid lobby content JSON.
    #[error("response decode failed: {0}")]
    Decode(String),
}
