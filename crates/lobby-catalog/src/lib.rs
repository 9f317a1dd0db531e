//! Immutable content catalog for the lobby service.
//!
//! The catalog is the process-wide read-only dataset behind the HTTP API:
//! ten games, five promotions, and five news items compiled into the
//! binary. It is built once at startup via [`Catalog::load`], which seeds
//! the data and checks the catalog invariants (unique identifiers, RTP
//! range, non-empty required fields), and is never mutated afterwards.
//!
//! # Modules
//!
//! - [`catalog`] -- The [`Catalog`] store and invariant validation
//! - [`seed`] -- The hard-coded dataset
//! - [`error`] -- Typed validation errors

pub mod catalog;
pub mod error;
pub mod seed;

pub use catalog::{Catalog, validate};
pub use error::CatalogError;
pub use seed::seed_content;
