//! Local view state: tabs, search, category filter, card expansion.
//!
//! This is the in-memory state the frontend component owns. It is
//! single-user and never persisted. The one behavior worth calling out
//! is reset-on-navigate: switching away from the promotions or news tab
//! collapses all of that tab's expanded cards. That is the shipped UX,
//! preserved here exactly.

use std::collections::BTreeSet;

use lobby_types::{Game, LobbyContent, NewsId, PromotionId};

/// The three content tabs of the lobby.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContentTab {
    /// The games grid with search and category filters.
    #[default]
    Games,
    /// Promotion cards with expandable terms.
    Promotions,
    /// News cards with expandable article bodies.
    News,
}

/// Mutable UI state owned by the session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    /// Which tab is currently shown.
    pub active_tab: ContentTab,
    /// Free-text search over title, description, and provider.
    pub search_term: String,
    /// Selected category filter chips.
    pub selected_categories: BTreeSet<String>,
    /// Promotion cards currently showing their full terms.
    pub expanded_promotions: BTreeSet<PromotionId>,
    /// News cards currently showing their full body.
    pub expanded_news: BTreeSet<NewsId>,
}

impl ViewState {
    /// Replace the free-text search term.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Flip a category chip in or out of the selected set.
    pub fn toggle_category(&mut self, category: &str) {
        if !self.selected_categories.remove(category) {
            self.selected_categories.insert(category.to_owned());
        }
    }

    /// Clear the search term and all selected categories.
    pub fn clear_filters(&mut self) {
        self.search_term.clear();
        self.selected_categories.clear();
    }

    /// Flip the expansion state of a promotion card.
    pub fn toggle_promotion(&mut self, id: &PromotionId) {
        if !self.expanded_promotions.remove(id) {
            self.expanded_promotions.insert(id.clone());
        }
    }

    /// Flip the expansion state of a news card.
    pub fn toggle_news(&mut self, id: &NewsId) {
        if !self.expanded_news.remove(id) {
            self.expanded_news.insert(id.clone());
        }
    }

    /// Switch to another tab, collapsing expanded cards on whichever of
    /// the promotions/news tabs is being left behind.
    pub fn switch_tab(&mut self, tab: ContentTab) {
        self.active_tab = tab;
        if tab != ContentTab::Promotions {
            self.expanded_promotions.clear();
        }
        if tab != ContentTab::News {
            self.expanded_news.clear();
        }
    }

    /// Apply the games-tab filter to the fetched content.
    ///
    /// A game is included when the search term is empty or matches its
    /// title, description, or provider case-insensitively, AND no
    /// categories are selected or the game carries at least one selected
    /// category.
    pub fn filtered_games<'a>(&self, content: &'a LobbyContent) -> Vec<&'a Game> {
        let needle = self.search_term.to_lowercase();

        content
            .casino_games
            .iter()
            .filter(|game| {
                let matches_search = needle.is_empty()
                    || game.title.to_lowercase().contains(&needle)
                    || game.description.to_lowercase().contains(&needle)
                    || game.provider.to_lowercase().contains(&needle);

                let matches_category = self.selected_categories.is_empty()
                    || game
                        .categories
                        .iter()
                        .any(|c| self.selected_categories.contains(c));

                matches_search && matches_category
            })
            .collect()
    }
}

/// The sorted, de-duplicated category universe across all games,
/// used to render the filter chips.
pub fn all_categories(content: &LobbyContent) -> Vec<String> {
    let categories: BTreeSet<&String> = content
        .casino_games
        .iter()
        .flat_map(|game| game.categories.iter())
        .collect();
    categories.into_iter().cloned().collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use lobby_catalog::seed_content;

    use super::*;

    fn content() -> LobbyContent {
        seed_content().unwrap()
    }

    fn ids(games: &[&Game]) -> Vec<String> {
        games.iter().map(|g| g.id.as_str().to_owned()).collect()
    }

    #[test]
    fn no_filters_shows_everything() {
        let content = content();
        let view = ViewState::default();
        assert_eq!(view.filtered_games(&content).len(), 10);
    }

    #[test]
    fn vampire_search_matches_two_games() {
        let content = content();
        let mut view = ViewState::default();
        view.set_search("vampire");

        let filtered = view.filtered_games(&content);
        assert_eq!(
            ids(&filtered),
            vec!["game_immortalromance", "game_bloodsuckers"]
        );
    }

    #[test]
    fn search_is_case_insensitive_and_covers_provider() {
        let content = content();
        let mut view = ViewState::default();
        view.set_search("NETENT");

        // Starburst, Classic Blackjack, Gonzo's Quest, Bloodsuckers.
        assert_eq!(view.filtered_games(&content).len(), 4);
    }

    #[test]
    fn selected_categories_are_a_union() {
        let content = content();
        let mut view = ViewState::default();
        view.toggle_category("slots");
        view.toggle_category("jackpot");

        // Eight slots games; the only jackpot game is also a slot.
        let filtered = view.filtered_games(&content);
        assert_eq!(filtered.len(), 8);
        assert!(filtered.iter().any(|g| g.id.as_str() == "game_megamoolah"));
        assert!(!filtered.iter().any(|g| g.id.as_str() == "game_lightningroulette"));
    }

    #[test]
    fn search_and_categories_combine_with_and() {
        let content = content();
        let mut view = ViewState::default();
        view.set_search("vampire");
        view.toggle_category("low-volatility");

        // Immortal Romance matches the search but not the category.
        assert_eq!(ids(&view.filtered_games(&content)), vec!["game_bloodsuckers"]);
    }

    #[test]
    fn category_toggle_flips_membership() {
        let mut view = ViewState::default();
        view.toggle_category("slots");
        assert!(view.selected_categories.contains("slots"));
        view.toggle_category("slots");
        assert!(view.selected_categories.is_empty());
    }

    #[test]
    fn clear_filters_resets_search_and_categories() {
        let mut view = ViewState::default();
        view.set_search("vampire");
        view.toggle_category("slots");
        view.clear_filters();
        assert!(view.search_term.is_empty());
        assert!(view.selected_categories.is_empty());
    }

    #[test]
    fn expansion_toggle_flips_membership() {
        let mut view = ViewState::default();
        let id = PromotionId::new("promo_welcome");
        view.toggle_promotion(&id);
        assert!(view.expanded_promotions.contains(&id));
        view.toggle_promotion(&id);
        assert!(view.expanded_promotions.is_empty());
    }

    #[test]
    fn leaving_a_tab_collapses_its_cards() {
        let mut view = ViewState::default();
        view.switch_tab(ContentTab::Promotions);
        view.toggle_promotion(&PromotionId::new("promo_welcome"));

        view.switch_tab(ContentTab::News);
        assert!(view.expanded_promotions.is_empty());

        view.toggle_news(&NewsId::new("news_bigwin"));
        view.switch_tab(ContentTab::Promotions);
        assert!(view.expanded_news.is_empty());
    }

    #[test]
    fn switching_to_games_collapses_both_sets() {
        let mut view = ViewState::default();
        view.toggle_promotion(&PromotionId::new("promo_welcome"));
        view.toggle_news(&NewsId::new("news_bigwin"));

        view.switch_tab(ContentTab::Games);
        assert!(view.expanded_promotions.is_empty());
        assert!(view.expanded_news.is_empty());
    }

    #[test]
    fn category_universe_is_sorted_and_unique() {
        let content = content();
        let categories = all_categories(&content);

        let mut sorted = categories.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(categories, sorted);
        assert!(categories.iter().any(|c| c == "slots"));
        assert!(categories.iter().any(|c| c == "live-casino"));
    }
}
