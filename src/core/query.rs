//! Query module for player-search
//!
//! Endpoints of the remote service and the parameters sent to them.

use std::fmt;
use crate::core::errors::InputError;

/// Number of results requested when none (or an invalid one) is given
pub const DEFAULT_MAX_RESULTS: u32 = 10;

/// Name searched when the command line gives none
pub const DEFAULT_PLAYER_NAME: &str = "Smith";

/// Endpoints exposed by the player-search service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// `/api/search`, answers JSON
    Search,
    /// `/api/export`, answers CSV text
    Export,
}

impl Endpoint {
    /// Path of the endpoint relative to the base URL
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Search => "/api/search",
            Endpoint::Export => "/api/export",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Search => write!(f, "search"),
            Endpoint::Export => write!(f, "export"),
        }
    }
}

/// Parameters of a single search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Name (or part of a name) to look for
    pub name: String,
    /// Maximum number of players to return
    pub max: u32,
}

impl SearchQuery {
    /// Create a query with an explicit maximum
    pub fn new(name: impl Into<String>, max: u32) -> Self {
        SearchQuery {
            name: name.into(),
            max,
        }
    }

    /// Query parameters in the order the service documents them
    pub fn params(&self) -> [(&'static str, String); 2] {
        [("name", self.name.clone()), ("max", self.max.to_string())]
    }
}

impl Default for SearchQuery {
    fn default() -> Self {
        SearchQuery::new(DEFAULT_PLAYER_NAME, DEFAULT_MAX_RESULTS)
    }
}

/// Parse the max-results argument as a positive integer
///
/// The caller decides how to recover; the CLI falls back to
/// [`DEFAULT_MAX_RESULTS`] and prints a warning.
pub fn parse_max_results(raw: &str) -> Result<u32, InputError> {
    match raw.trim().parse::<u32>() {
        Ok(max) if max > 0 => Ok(max),
        _ => Err(InputError::InvalidMaxResults(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_max_results() {
        assert_eq!(parse_max_results("20"), Ok(20));
        assert_eq!(parse_max_results(" 5 "), Ok(5));
    }

    #[test]
    fn test_parse_max_results_rejects_garbage() {
        for raw in ["abc", "", "0", "-3", "2.5", "--verbose"] {
            assert_eq!(
                parse_max_results(raw),
                Err(InputError::InvalidMaxResults(raw.to_string())),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_endpoint_paths() {
        assert_eq!(Endpoint::Search.path(), "/api/search");
        assert_eq!(Endpoint::Export.path(), "/api/export");
        assert_eq!(Endpoint::Export.to_string(), "export");
    }

    #[test]
    fn test_default_query() {
        let query = SearchQuery::default();
        assert_eq!(query.name, "Smith");
        assert_eq!(query.max, 10);
        assert_eq!(query.params()[1], ("max", "10".to_string()));
    }
}
