//! Record module for player-search
//!
//! This module defines the normalized shapes every payload is mapped
//! into before it is rendered.

use serde::Serialize;

/// Ratings of a player, one optional value per category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Ratings {
    /// Regular (classical) rating
    pub regular: Option<String>,
    /// Quick rating
    pub quick: Option<String>,
    /// Blitz rating
    pub blitz: Option<String>,
}

impl Ratings {
    /// Iterate over the categories in display order
    pub fn categories(&self) -> [(&'static str, Option<&str>); 3] {
        [
            ("regular", self.regular.as_deref()),
            ("quick", self.quick.as_deref()),
            ("blitz", self.blitz.as_deref()),
        ]
    }

    /// Check if no category carries a value
    pub fn is_empty(&self) -> bool {
        self.regular.is_none() && self.quick.is_none() && self.blitz.is_none()
    }
}

/// A player as displayed by the client
///
/// Built once from a JSON object or a CSV row by the functions in
/// [`crate::core::normalize`] and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlayerRecord {
    name: String,
    member_id: String,
    state: Option<String>,
    ratings: Ratings,
    expiration_date: Option<String>,
}

impl PlayerRecord {
    /// Create a new record from already-normalized fields
    pub fn new(
        name: String,
        member_id: String,
        state: Option<String>,
        ratings: Ratings,
        expiration_date: Option<String>,
    ) -> Self {
        PlayerRecord {
            name,
            member_id,
            state,
            ratings,
            expiration_date,
        }
    }

    /// Player name, newlines already collapsed
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Member identifier
    pub fn member_id(&self) -> &str {
        &self.member_id
    }

    /// State, `None` when absent, null or blank in the payload
    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    /// Ratings by category
    pub fn ratings(&self) -> &Ratings {
        &self.ratings
    }

    /// Membership expiration date, when the payload carries one
    pub fn expiration_date(&self) -> Option<&str> {
        self.expiration_date.as_deref()
    }
}

/// Top-level response of a search
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    /// Count announced by the service
    pub count: usize,
    /// Players in service order
    pub players: Vec<PlayerRecord>,
}

impl SearchResult {
    /// Build a result whose count matches its players
    pub fn from_players(players: Vec<PlayerRecord>) -> Self {
        SearchResult {
            count: players.len(),
            players,
        }
    }

    /// Check if the result holds no players
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratings_categories_order() {
        let ratings = Ratings {
            regular: Some("1500".to_string()),
            quick: None,
            blitz: Some("1420".to_string()),
        };

        let names: Vec<_> = ratings.categories().iter().map(|(c, _)| *c).collect();
        assert_eq!(names, vec!["regular", "quick", "blitz"]);
        assert!(!ratings.is_empty());
        assert!(Ratings::default().is_empty());
    }

    #[test]
    fn test_search_result_from_players() {
        let result = SearchResult::from_players(vec![PlayerRecord::default(); 3]);
        assert_eq!(result.count, 3);
        assert!(!result.is_empty());
        assert!(SearchResult::default().is_empty());
    }
}
