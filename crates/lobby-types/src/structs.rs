//! Wire-format entity structs for the lobby catalog.
//!
//! Field names follow the `camelCase` JSON the frontend already consumes
//! (`imageUrl`, `fullTerms`, `casinoGames`, ...). Dates are
//! [`NaiveDate`] so that a record with an unparseable calendar date
//! cannot be constructed in the first place.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::Volatility;
use crate::ids::{GameId, NewsId, PromotionId};

/// A playable casino game listed in the lobby.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct Game {
    /// Unique identifier (slug, e.g. `game_starburst`).
    pub id: GameId,
    /// Display title.
    pub title: String,
    /// Studio that produced the game.
    pub provider: String,
    /// Category labels used by the lobby filter chips. Never empty.
    pub categories: Vec<String>,
    /// Thumbnail image URL.
    pub image_url: String,
    /// One-sentence teaser shown on the game card.
    pub description: String,
    /// Return-to-player percentage, in the half-open range (0, 100].
    pub rtp: f64,
    /// Qualitative payout variance.
    pub volatility: Volatility,
    /// Present and `true` for recently added games; absent otherwise.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub is_new: Option<bool>,
    /// Present and `true` for player favourites; absent otherwise.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub is_popular: Option<bool>,
}

/// A promotional offer with expandable terms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct Promotion {
    /// Unique identifier (slug, e.g. `promo_welcome`).
    pub id: PromotionId,
    /// Offer headline.
    pub title: String,
    /// Short teaser shown before the card is expanded.
    pub snippet: String,
    /// Complete terms and conditions shown after expansion.
    pub full_terms: String,
    /// Banner image URL.
    pub image_url: String,
    /// Last day the offer is valid (ISO `YYYY-MM-DD` on the wire).
    pub expiry_date: NaiveDate,
}

/// A news article with expandable body text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct NewsItem {
    /// Unique identifier (slug, e.g. `news_bigwin`).
    pub id: NewsId,
    /// Article headline.
    pub title: String,
    /// Short teaser shown before the card is expanded.
    pub snippet: String,
    /// Complete article body shown after expansion.
    pub full_content: String,
    /// Publication date (ISO `YYYY-MM-DD` on the wire).
    pub date: NaiveDate,
    /// Topic tags, in editorial order.
    pub tags: Vec<String>,
}

/// The full lobby dataset: all three collections in insertion order.
///
/// This is the body of `GET /api/content` and the payload the client
/// session holds after a successful fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct LobbyContent {
    /// All games, in catalog order.
    pub casino_games: Vec<Game>,
    /// All promotions, in catalog order.
    pub promotions: Vec<Promotion>,
    /// All news items, newest first.
    pub casino_news: Vec<NewsItem>,
}
