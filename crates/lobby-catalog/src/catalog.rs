//! The [`Catalog`] store and its invariant validation.
//!
//! [`Catalog::load`] seeds the dataset and validates it once; afterwards
//! the catalog is immutable and safe to share behind an [`Arc`] with no
//! locking. Lookups are linear scans, which is fine for a fixed
//! ten-element collection.
//!
//! [`Arc`]: std::sync::Arc

use std::collections::BTreeSet;

use lobby_types::{Game, LobbyContent, NewsItem, Promotion};

use crate::error::CatalogError;
use crate::seed::seed_content;

/// The immutable, validated lobby dataset.
#[derive(Debug, Clone)]
pub struct Catalog {
    content: LobbyContent,
}

impl Catalog {
    /// Build the catalog from the compiled-in seed data and validate it.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the seed data violates a catalog
    /// invariant. This aborts service startup; it cannot occur at
    /// request time.
    pub fn load() -> Result<Self, CatalogError> {
        let content = seed_content()?;
        validate(&content)?;
        Ok(Self { content })
    }

    /// The full dataset, all three collections in insertion order.
    pub const fn content(&self) -> &LobbyContent {
        &self.content
    }

    /// All games, in catalog order.
    pub fn games(&self) -> &[Game] {
        &self.content.casino_games
    }

    /// All promotions, in catalog order.
    pub fn promotions(&self) -> &[Promotion] {
        &self.content.promotions
    }

    /// All news items, newest first.
    pub fn news(&self) -> &[NewsItem] {
        &self.content.casino_news
    }

    /// Look up a game by identifier. Absent ids yield `None`, not an error.
    pub fn game(&self, id: &str) -> Option<&Game> {
        self.content
            .casino_games
            .iter()
            .find(|game| game.id.as_str() == id)
    }
}

/// Check the catalog invariants over a content set.
///
/// - identifiers unique within each collection
/// - required text fields non-empty after trimming
/// - every game has at least one category; category and tag labels non-blank
/// - RTP within (0, 100]
///
/// # Errors
///
/// Returns the first violation found as a typed [`CatalogError`].
pub fn validate(content: &LobbyContent) -> Result<(), CatalogError> {
    let mut game_ids = BTreeSet::new();
    for game in &content.casino_games {
        let id = game.id.as_str();
        if !game_ids.insert(id) {
            return Err(CatalogError::DuplicateId {
                collection: "casinoGames",
                id: id.to_owned(),
            });
        }
        require("title", &game.title, id)?;
        require("provider", &game.provider, id)?;
        require("imageUrl", &game.image_url, id)?;
        require("description", &game.description, id)?;
        if game.categories.is_empty()
            || game.categories.iter().any(|c| c.trim().is_empty())
        {
            return Err(CatalogError::EmptyLabels { id: id.to_owned() });
        }
        if game.rtp <= 0.0 || game.rtp > 100.0 {
            return Err(CatalogError::RtpOutOfRange {
                id: id.to_owned(),
                rtp: game.rtp,
            });
        }
    }

    let mut promotion_ids = BTreeSet::new();
    for promotion in &content.promotions {
        let id = promotion.id.as_str();
        if !promotion_ids.insert(id) {
            return Err(CatalogError::DuplicateId {
                collection: "promotions",
                id: id.to_owned(),
            });
        }
        require("title", &promotion.title, id)?;
        require("snippet", &promotion.snippet, id)?;
        require("fullTerms", &promotion.full_terms, id)?;
        require("imageUrl", &promotion.image_url, id)?;
    }

    let mut news_ids = BTreeSet::new();
    for item in &content.casino_news {
        let id = item.id.as_str();
        if !news_ids.insert(id) {
            return Err(CatalogError::DuplicateId {
                collection: "casinoNews",
                id: id.to_owned(),
            });
        }
        require("title", &item.title, id)?;
        require("snippet", &item.snippet, id)?;
        require("fullContent", &item.full_content, id)?;
        // Tags may be empty as a collection, but a present tag must not
        // be a blank string.
        if item.tags.iter().any(|t| t.trim().is_empty()) {
            return Err(CatalogError::EmptyLabels { id: id.to_owned() });
        }
    }

    Ok(())
}

/// Reject a required text field that is empty after trimming.
fn require(field: &'static str, value: &str, id: &str) -> Result<(), CatalogError> {
    if value.trim().is_empty() {
        return Err(CatalogError::EmptyField {
            field,
            id: id.to_owned(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use lobby_types::Volatility;

    use super::*;

    fn loaded() -> Catalog {
        Catalog::load().unwrap()
    }

    #[test]
    fn load_succeeds() {
        assert!(Catalog::load().is_ok());
    }

    #[test]
    fn game_ids_are_unique() {
        let catalog = loaded();
        let ids: BTreeSet<&str> = catalog.games().iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids.len(), catalog.games().len());
    }

    #[test]
    fn promotion_and_news_ids_are_unique() {
        let catalog = loaded();
        let promo_ids: BTreeSet<&str> =
            catalog.promotions().iter().map(|p| p.id.as_str()).collect();
        let news_ids: BTreeSet<&str> =
            catalog.news().iter().map(|n| n.id.as_str()).collect();
        assert_eq!(promo_ids.len(), catalog.promotions().len());
        assert_eq!(news_ids.len(), catalog.news().len());
    }

    #[test]
    fn all_rtp_values_in_range() {
        let catalog = loaded();
        assert!(catalog
            .games()
            .iter()
            .all(|g| g.rtp > 0.0 && g.rtp <= 100.0));
    }

    #[test]
    fn all_games_have_categories() {
        let catalog = loaded();
        assert!(catalog.games().iter().all(|g| !g.categories.is_empty()));
    }

    #[test]
    fn volatility_stays_in_the_defined_domain() {
        // The enum makes out-of-domain values unrepresentable; assert the
        // seed only uses the three plain grades.
        let catalog = loaded();
        assert!(catalog.games().iter().all(|g| matches!(
            g.volatility,
            Volatility::Low | Volatility::Medium | Volatility::High
        )));
    }

    #[test]
    fn lookup_starburst() {
        let catalog = loaded();
        let game = catalog.game("game_starburst");
        assert_eq!(game.map(|g| g.title.as_str()), Some("Starburst"));
        assert_eq!(game.map(|g| g.provider.as_str()), Some("NetEnt"));
    }

    #[test]
    fn lookup_absent_id_is_none() {
        let catalog = loaded();
        assert!(catalog.game("non-existent-game-id").is_none());
    }

    #[test]
    fn lookup_empty_id_is_none() {
        let catalog = loaded();
        assert!(catalog.game("").is_none());
    }

    #[test]
    fn full_dataset_roundtrips_through_json() {
        let catalog = loaded();
        let json = serde_json::to_string(catalog.content()).unwrap();
        let restored: LobbyContent = serde_json::from_str(&json).unwrap();
        assert_eq!(&restored, catalog.content());
    }

    #[test]
    fn validate_rejects_duplicate_game_ids() {
        let mut content = seed_content().unwrap();
        let first = content.casino_games.first().cloned().unwrap();
        content.casino_games.push(first);
        assert!(matches!(
            validate(&content),
            Err(CatalogError::DuplicateId { collection: "casinoGames", .. })
        ));
    }

    #[test]
    fn validate_rejects_out_of_range_rtp() {
        let mut content = seed_content().unwrap();
        if let Some(first) = content.casino_games.first_mut() {
            first.rtp = 0.0;
        }
        assert!(matches!(
            validate(&content),
            Err(CatalogError::RtpOutOfRange { .. })
        ));
    }

    #[test]
    fn validate_rejects_blank_required_field() {
        let mut content = seed_content().unwrap();
        if let Some(first) = content.promotions.first_mut() {
            first.snippet = String::from("   ");
        }
        assert!(matches!(
            validate(&content),
            Err(CatalogError::EmptyField { field: "snippet", .. })
        ));
    }
}
