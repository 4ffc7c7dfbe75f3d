//! player-search: a client for the player-search HTTP service
//!
//! This crate queries the service's `/api/search` (JSON) and
//! `/api/export` (CSV) endpoints and renders the players it returns
//! as a fixed-width table, a detail listing, or the raw payload.

pub mod client;
pub mod core;
pub mod render;

// Ré-exporter les types principaux pour faciliter l'utilisation
pub use client::{ClientConfig, PlayerSearchClient, SearchResponse};
pub use crate::core::errors::{InputError, RequestError, Result};
pub use crate::core::query::{parse_max_results, Endpoint, SearchQuery, DEFAULT_MAX_RESULTS, DEFAULT_PLAYER_NAME};
pub use crate::core::record::{PlayerRecord, Ratings, SearchResult};
pub use render::TableStyle;
