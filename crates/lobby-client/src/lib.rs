//! Client session model for the lobby frontend.
//!
//! Mirrors the single-page application's behavior as a plain state
//! machine so it can be driven and tested headlessly:
//!
//! - one fetch of `/api/content` on startup ([`fetch::ContentClient`])
//! - a Loading -> (Ready | Error) phase machine with a full-reload
//!   retry affordance ([`session::Session`])
//! - local view state: active tab, free-text search, category filter
//!   set, and per-card expansion sets ([`view::ViewState`])
//!
//! Nothing here is persisted; the view state lives and dies with the
//! session, exactly like component state in the browser.

pub mod error;
pub mod fetch;
pub mod session;
pub mod view;

// Re-export primary types for convenience.
pub use error::ClientError;
pub use fetch::ContentClient;
pub use session::{Phase, Session};
pub use view::{ContentTab, ViewState, all_categories};
