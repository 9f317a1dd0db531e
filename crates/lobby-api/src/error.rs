//! Error types for the lobby API layer.
//!
//! [`ApiError`] unifies all failure modes into a single enum that can be
//! converted into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation. The
//! response body is always `{"error": "<message>"}` with no extra fields,
//! matching what the frontend expects.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Errors that can occur in the lobby API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The requested game id does not exist in the catalog. This is the
    /// only designed error path; the remaining routes serve static data
    /// unconditionally.
    #[error("Game not found")]
    GameNotFound,

    /// A serialization error while building a response body.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::GameNotFound => (StatusCode::NOT_FOUND, self.to_string()),
            Self::Serialization(e) => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("JSON error: {e}"))
            }
        };

        let body = serde_json::json!({ "error": message });

        (status, axum::Json(body)).into_response()
    }
}
