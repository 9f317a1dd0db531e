//! Typed errors for catalog construction and validation.

/// Errors that can occur when building or validating the catalog.
///
/// These only surface at process startup: the dataset is fixed, so a
/// validation failure means the seed data itself is wrong and the
/// service refuses to start.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// A seed record carries a year/month/day that is not a real
    /// calendar date.
    #[error("invalid calendar date in seed data for {entity}")]
    InvalidDate {
        /// Identifier of the record with the bad date.
        entity: String,
    },

    /// Two records in the same collection share an identifier.
    #[error("duplicate id in {collection}: {id}")]
    DuplicateId {
        /// Which collection the duplicate was found in.
        collection: &'static str,
        /// The offending identifier.
        id: String,
    },

    /// A required text field is empty after trimming.
    #[error("empty required field `{field}` on {id}")]
    EmptyField {
        /// Name of the empty field.
        field: &'static str,
        /// Identifier of the offending record.
        id: String,
    },

    /// A game's RTP is outside the half-open range (0, 100].
    #[error("rtp out of range on {id}: {rtp}")]
    RtpOutOfRange {
        /// Identifier of the offending game.
        id: String,
        /// The out-of-range value.
        rtp: f64,
    },

    /// A game has no categories, or a category/tag entry is blank.
    #[error("empty categories or blank label on {id}")]
    EmptyLabels {
        /// Identifier of the offending record.
        id: String,
    },
}
