//! Enumeration types for the lobby catalog.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Qualitative payout variance of a game.
///
/// The wire format uses the display labels the frontend renders,
/// including the hyphenated intermediate grades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum Volatility {
    /// Frequent small payouts.
    Low,
    /// Balanced payout variance.
    Medium,
    /// Rare large payouts.
    High,
    /// Between low and medium variance. Serialized as `Medium-Low`.
    #[serde(rename = "Medium-Low")]
    MediumLow,
    /// Between medium and high variance. Serialized as `Medium-High`.
    #[serde(rename = "Medium-High")]
    MediumHigh,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_grades_use_variant_names() {
        assert_eq!(serde_json::to_string(&Volatility::Low).ok().as_deref(), Some("\"Low\""));
        assert_eq!(serde_json::to_string(&Volatility::High).ok().as_deref(), Some("\"High\""));
    }

    #[test]
    fn intermediate_grades_are_hyphenated() {
        assert_eq!(
            serde_json::to_string(&Volatility::MediumLow).ok().as_deref(),
            Some("\"Medium-Low\"")
        );
        assert_eq!(
            serde_json::to_string(&Volatility::MediumHigh).ok().as_deref(),
            Some("\"Medium-High\"")
        );
    }

    #[test]
    fn hyphenated_grade_roundtrip() {
        let restored: Result<Volatility, _> = serde_json::from_str("\"Medium-High\"");
        assert_eq!(restored.ok(), Some(Volatility::MediumHigh));
    }
}
