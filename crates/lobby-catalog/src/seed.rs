//! The hard-coded lobby dataset.
//!
//! Ten games, five promotions, and five news items, compiled into the
//! binary. Record order is the order the frontend renders, so it is
//! preserved as-is. Image URLs follow the placeholder pattern
//! `https://picsum.photos/seed/{slug}/{w}/{h}` used across the lobby.

use chrono::NaiveDate;
use lobby_types::{
    Game, GameId, LobbyContent, NewsId, NewsItem, Promotion, PromotionId, Volatility,
};

use crate::error::CatalogError;

/// Build a category or tag list from string literals.
fn labels(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_owned()).collect()
}

/// Game card thumbnail URL for a placeholder image slug.
fn thumb(slug: &str) -> String {
    format!("https://picsum.photos/seed/{slug}/300/200")
}

/// Promotion banner URL for a placeholder image slug.
fn banner(slug: &str) -> String {
    format!("https://picsum.photos/seed/{slug}/600/300")
}

/// Build a calendar date, reporting the owning record on failure.
fn date(entity: &str, year: i32, month: u32, day: u32) -> Result<NaiveDate, CatalogError> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| CatalogError::InvalidDate {
        entity: entity.to_owned(),
    })
}

/// Build the full seed dataset.
///
/// # Errors
///
/// Returns [`CatalogError::InvalidDate`] if a seed record carries an
/// impossible calendar date (cannot happen with the data below, but the
/// date constructors are fallible).
#[allow(clippy::too_many_lines)]
pub fn seed_content() -> Result<LobbyContent, CatalogError> {
    let casino_games = vec![
        Game {
            id: GameId::new("game_starburst"),
            title: String::from("Starburst"),
            provider: String::from("NetEnt"),
            categories: labels(&["slots", "popular", "low-volatility"]),
            image_url: thumb("starburst"),
            description: String::from(
                "A vibrant and cosmic slot game with expanding wilds and re-spins.",
            ),
            rtp: 96.09,
            volatility: Volatility::Low,
            is_new: None,
            is_popular: Some(true),
        },
        Game {
            id: GameId::new("game_bookofdead"),
            title: String::from("Book of Dead"),
            provider: String::from("Play'n GO"),
            categories: labels(&["slots", "adventure", "high-volatility"]),
            image_url: thumb("bookofdead"),
            description: String::from(
                "Join Rich Wilde on an adventure to uncover ancient Egyptian treasures.",
            ),
            rtp: 96.21,
            volatility: Volatility::High,
            is_new: None,
            is_popular: Some(true),
        },
        Game {
            id: GameId::new("game_bonanzamegaways"),
            title: String::from("Bonanza Megaways"),
            provider: String::from("Big Time Gaming"),
            categories: labels(&["slots", "megaways", "high-volatility"]),
            image_url: thumb("bonanza"),
            description: String::from(
                "Experience cascading reels and up to 117,649 ways to win.",
            ),
            rtp: 96.0,
            volatility: Volatility::High,
            is_new: None,
            is_popular: None,
        },
        Game {
            id: GameId::new("game_lightningroulette"),
            title: String::from("Lightning Roulette"),
            provider: String::from("Evolution Gaming"),
            categories: labels(&["live-casino", "roulette", "popular"]),
            image_url: thumb("lightningroulette"),
            description: String::from(
                "Live Roulette with electrifying multipliers on straight up bets.",
            ),
            rtp: 97.3,
            volatility: Volatility::Medium,
            is_new: None,
            is_popular: Some(true),
        },
        Game {
            id: GameId::new("game_blackjackclassic"),
            title: String::from("Classic Blackjack"),
            provider: String::from("NetEnt"),
            categories: labels(&["table-games", "blackjack"]),
            image_url: thumb("classicblackjack"),
            description: String::from(
                "The timeless casino card game, aim for 21 without going bust.",
            ),
            rtp: 99.59,
            volatility: Volatility::Low,
            is_new: None,
            is_popular: None,
        },
        Game {
            id: GameId::new("game_megamoolah"),
            title: String::from("Mega Moolah"),
            provider: String::from("Microgaming"),
            categories: labels(&["slots", "jackpot", "progressive"]),
            image_url: thumb("megamoolah"),
            description: String::from(
                "Progressive jackpot slot with African wildlife theme and free spins.",
            ),
            rtp: 88.12,
            volatility: Volatility::High,
            is_new: None,
            is_popular: Some(true),
        },
        Game {
            id: GameId::new("game_gonzoquest"),
            title: String::from("Gonzo's Quest"),
            provider: String::from("NetEnt"),
            categories: labels(&["slots", "adventure", "medium-volatility"]),
            image_url: thumb("gonzosquest"),
            description: String::from(
                "Join Gonzo on his quest for El Dorado with avalanche reels and multipliers.",
            ),
            rtp: 95.97,
            volatility: Volatility::Medium,
            is_new: None,
            is_popular: None,
        },
        Game {
            id: GameId::new("game_immortalromance"),
            title: String::from("Immortal Romance"),
            provider: String::from("Microgaming"),
            categories: labels(&["slots", "vampire", "high-volatility"]),
            image_url: thumb("immortalromance"),
            description: String::from(
                "Gothic vampire-themed slot with multiple bonus features and free spins.",
            ),
            rtp: 96.86,
            volatility: Volatility::High,
            is_new: None,
            is_popular: None,
        },
        Game {
            id: GameId::new("game_bloodsuckers"),
            title: String::from("Bloodsuckers"),
            provider: String::from("NetEnt"),
            categories: labels(&["slots", "vampire", "low-volatility"]),
            image_url: thumb("bloodsuckers"),
            description: String::from(
                "Vampire-themed slot with free spins and no wagering requirements.",
            ),
            rtp: 98.0,
            volatility: Volatility::Low,
            is_new: None,
            is_popular: None,
        },
        Game {
            id: GameId::new("game_cleopatra"),
            title: String::from("Cleopatra"),
            provider: String::from("IGT"),
            categories: labels(&["slots", "egyptian", "medium-volatility"]),
            image_url: thumb("cleopatra"),
            description: String::from(
                "Ancient Egyptian slot with expanding wilds and free spins.",
            ),
            rtp: 95.02,
            volatility: Volatility::Medium,
            is_new: None,
            is_popular: Some(true),
        },
    ];

    let promotions = vec![
        Promotion {
            id: PromotionId::new("promo_welcome"),
            title: String::from("100% Welcome Bonus + 50 Free Spins!"),
            snippet: String::from(
                "Double your first deposit up to $500 and get 50 free spins on Starburst!",
            ),
            full_terms: String::from(
                "Minimum deposit $20. Wagering requirements 35x bonus and free spins \
                 winnings. Free spins valid for 7 days. Maximum bonus $500. New players \
                 only. Terms and conditions apply.",
            ),
            image_url: banner("welcomebonus"),
            expiry_date: date("promo_welcome", 2025, 7, 31)?,
        },
        Promotion {
            id: PromotionId::new("promo_reload"),
            title: String::from("50% Reload Bonus Every Tuesday"),
            snippet: String::from(
                "Get 50% bonus on your deposits every Tuesday, up to $200!",
            ),
            full_terms: String::from(
                "Minimum deposit $25. Wagering requirements 30x bonus. Valid every \
                 Tuesday. Maximum bonus $200. Existing players only. Cannot be combined \
                 with other offers.",
            ),
            image_url: banner("reloadbonus"),
            expiry_date: date("promo_reload", 2025, 12, 31)?,
        },
        Promotion {
            id: PromotionId::new("promo_cashback"),
            title: String::from("10% Weekly Cashback"),
            snippet: String::from(
                "Get 10% cashback on your weekly losses, no wagering requirements!",
            ),
            full_terms: String::from(
                "Cashback calculated on net losses from Monday to Sunday. Minimum loss \
                 $50 to qualify. Maximum cashback $500 per week. Paid every Monday. No \
                 wagering requirements.",
            ),
            image_url: banner("cashback"),
            expiry_date: date("promo_cashback", 2025, 12, 31)?,
        },
        Promotion {
            id: PromotionId::new("promo_freespins"),
            title: String::from("100 Free Spins on Book of Dead"),
            snippet: String::from(
                "Get 100 free spins on Book of Dead with no deposit required!",
            ),
            full_terms: String::from(
                "No deposit required. Wagering requirements 50x free spins winnings. \
                 Free spins valid for 3 days. Maximum withdrawal from free spins $100. \
                 New players only.",
            ),
            image_url: banner("freespins"),
            expiry_date: date("promo_freespins", 2025, 8, 15)?,
        },
        Promotion {
            id: PromotionId::new("promo_tournament"),
            title: String::from("Weekly Slot Tournament - $10,000 Prize Pool"),
            snippet: String::from(
                "Compete in our weekly slot tournament for a chance to win from $10,000 \
                 prize pool!",
            ),
            full_terms: String::from(
                "Tournament runs from Monday to Sunday. Minimum bet $0.20 to qualify. \
                 Prize pool $10,000 distributed among top 100 players. Leaderboard \
                 updates every hour.",
            ),
            image_url: banner("tournament"),
            expiry_date: date("promo_tournament", 2025, 12, 31)?,
        },
    ];

    let casino_news = vec![
        NewsItem {
            id: NewsId::new("news_bigwin"),
            title: String::from("Lucky Player Hits Mega Jackpot on Mega Moolah!"),
            snippet: String::from(
                "A massive $5.4 million jackpot was just won on Mega Moolah by one of \
                 our lucky players.",
            ),
            full_content: String::from(
                "We are thrilled to announce that a new millionaire has been made on our \
                 platform! A lucky player from Canada has just hit the incredible Mega \
                 Jackpot on Mega Moolah, walking away with a life-changing $5.4 million. \
                 This marks the third major jackpot win on our platform this year, and \
                 we couldn't be happier for our players. The win occurred during a $2.50 \
                 spin, proving that big wins can happen to anyone at any time. \
                 Congratulations to our lucky winner!",
            ),
            date: date("news_bigwin", 2025, 6, 20)?,
            tags: labels(&["jackpot", "big-win", "mega-moolah"]),
        },
        NewsItem {
            id: NewsId::new("news_newgames"),
            title: String::from("New Games Added: 10 Exciting Slots Join Our Collection"),
            snippet: String::from(
                "We've just added 10 brand new slot games from top providers including \
                 NetEnt and Microgaming.",
            ),
            full_content: String::from(
                "We're excited to announce the addition of 10 new slot games to our \
                 collection! This month's new releases include Starburst XXXtreme from \
                 NetEnt, Book of Dead from Play'n GO, and several other high-quality \
                 titles. All new games feature stunning graphics, immersive soundtracks, \
                 and exciting bonus features. Players can now enjoy these games with our \
                 generous welcome bonus and regular promotions. Check out the new games \
                 in our slots section!",
            ),
            date: date("news_newgames", 2025, 6, 15)?,
            tags: labels(&["new-games", "slots", "netent", "microgaming"]),
        },
        NewsItem {
            id: NewsId::new("news_mobile"),
            title: String::from(
                "Mobile App Update: Enhanced User Experience and New Features",
            ),
            snippet: String::from(
                "Our mobile app has been updated with improved navigation, faster \
                 loading times, and new features.",
            ),
            full_content: String::from(
                "We're pleased to announce a major update to our mobile casino app! The \
                 new version includes improved navigation with a more intuitive \
                 interface, faster loading times for games and pages, and several new \
                 features including push notifications for promotions and jackpot \
                 alerts. The app now supports all our games and features, providing the \
                 same high-quality experience as our desktop platform. Download the \
                 latest version from the App Store or Google Play Store.",
            ),
            date: date("news_mobile", 2025, 6, 10)?,
            tags: labels(&["mobile-app", "update", "user-experience"]),
        },
        NewsItem {
            id: NewsId::new("news_security"),
            title: String::from(
                "Enhanced Security Measures: Protecting Your Gaming Experience",
            ),
            snippet: String::from(
                "We've implemented additional security measures to ensure the safety of \
                 all player accounts and transactions.",
            ),
            full_content: String::from(
                "Your security is our top priority. We've recently implemented enhanced \
                 security measures including two-factor authentication, advanced \
                 encryption for all transactions, and improved fraud detection systems. \
                 These measures ensure that your personal information and funds are \
                 always protected. We also recommend enabling two-factor authentication \
                 on your account for an additional layer of security. Our commitment to \
                 player safety remains unwavering.",
            ),
            date: date("news_security", 2025, 6, 5)?,
            tags: labels(&["security", "two-factor-authentication", "encryption"]),
        },
        NewsItem {
            id: NewsId::new("news_promotions"),
            title: String::from("Summer Promotions: Hot Deals and Cool Rewards"),
            snippet: String::from(
                "Get ready for our biggest summer promotion yet with daily bonuses, \
                 free spins, and cashback offers.",
            ),
            full_content: String::from(
                "Summer is here and so are our hottest promotions! Starting July 1st, \
                 we're launching our biggest summer campaign yet featuring daily deposit \
                 bonuses, free spins on popular slots, and enhanced cashback offers. \
                 Players can enjoy up to 200% deposit bonuses, 500 free spins, and 15% \
                 weekly cashback. The promotion runs until August 31st, giving players \
                 plenty of time to take advantage of these amazing offers. Don't miss \
                 out on the summer gaming fun!",
            ),
            date: date("news_promotions", 2025, 6, 1)?,
            tags: labels(&["summer-promotions", "bonuses", "free-spins", "cashback"]),
        },
    ];

    Ok(LobbyContent {
        casino_games,
        promotions,
        casino_news,
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn seed_collection_sizes() {
        let content = seed_content().unwrap();
        assert_eq!(content.casino_games.len(), 10);
        assert_eq!(content.promotions.len(), 5);
        assert_eq!(content.casino_news.len(), 5);
    }

    #[test]
    fn bad_date_is_reported_with_entity() {
        let err = date("promo_bogus", 2025, 13, 1);
        assert!(matches!(
            err,
            Err(CatalogError::InvalidDate { entity }) if entity == "promo_bogus"
        ));
    }
}
