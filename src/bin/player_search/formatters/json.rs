use anyhow::Result;
use player_search::core::normalize::records_from_csv;
use player_search::{SearchResponse, SearchResult};
use crate::formatters::Formatter;

/// Formateur au format JSON
pub struct JsonFormatter {
    /// Indique si les couleurs sont activées
    colored: bool,
}

impl JsonFormatter {
    /// Crée un nouveau formateur JSON
    pub fn new() -> Self {
        JsonFormatter {
            colored: true,
        }
    }

    /// Désactive les couleurs
    pub fn without_colors(mut self) -> Self {
        self.colored = false;
        self
    }

    fn to_json(&self, result: &SearchResult) -> Result<String> {
        Ok(serde_json::to_string_pretty(result)?)
    }
}

impl Formatter for JsonFormatter {
    fn format_search(&self, response: &SearchResponse) -> Result<String> {
        self.to_json(&response.result)
    }

    fn format_export(&self, csv: &str) -> Result<String> {
        self.to_json(&SearchResult::from_players(records_from_csv(csv)))
    }

    fn colored(&self) -> bool {
        self.colored
    }
}
