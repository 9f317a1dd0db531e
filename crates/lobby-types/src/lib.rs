//! Shared type definitions for the casino lobby content service.
//!
//! This crate is the single source of truth for the entities served by the
//! content API and consumed by the client session. Types defined here flow
//! downstream to `TypeScript` via `ts-rs` for the lobby frontend.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe string wrappers for entity identifiers
//! - [`enums`] -- Enumeration types (game volatility)
//! - [`structs`] -- Wire-format entity structs and the full content container

pub mod enums;
pub mod ids;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::Volatility;
pub use ids::{GameId, NewsId, PromotionId};
pub use structs::{Game, LobbyContent, NewsItem, Promotion};

#[cfg(test)]
mod tests {
    //! Integration tests for type exports and `TypeScript` binding generation.

    #[test]
    fn export_bindings() {
        // ts-rs generates TypeScript bindings when types with
        // #[ts(export)] are used. Importing them here triggers generation.
        // The actual files are written to the `bindings/` directory
        // relative to the crate root.
        use ts_rs::TS;

        // IDs
        let _ = crate::ids::GameId::export_all();
        let _ = crate::ids::PromotionId::export_all();
        let _ = crate::ids::NewsId::export_all();

        // Enums
        let _ = crate::enums::Volatility::export_all();

        // Structs
        let _ = crate::structs::Game::export_all();
        let _ = crate::structs::Promotion::export_all();
        let _ = crate::structs::NewsItem::export_all();
        let _ = crate::structs::LobbyContent::export_all();
    }
}
