use anyhow::Result;
use player_search::core::normalize::records_from_csv;
use player_search::render::{render_details, render_table, summary_line};
use player_search::{PlayerRecord, SearchResponse, TableStyle};
use crate::formatters::Formatter;

/// Formateur au format tableau
pub struct TableFormatter {
    /// Style appliqué à tout le tableau
    style: TableStyle,
    /// Ajoute le détail de chaque joueur
    verbose: bool,
    /// Indique si les couleurs sont activées
    colored: bool,
}

impl TableFormatter {
    /// Crée un nouveau formateur tableau
    pub fn new(style: TableStyle, verbose: bool) -> Self {
        TableFormatter {
            style,
            verbose,
            colored: true,
        }
    }

    /// Désactive les couleurs
    pub fn without_colors(mut self) -> Self {
        self.colored = false;
        self
    }

    fn format_players(&self, players: &[PlayerRecord]) -> String {
        let mut out = render_table(players, self.style);

        if !players.is_empty() {
            out.push_str("\n\n");
            out.push_str(&summary_line(players.len()));

            if self.verbose {
                out.push_str("\n\nPlayer details:\n");
                out.push_str(&render_details(players));
            }
        }

        out
    }
}

impl Formatter for TableFormatter {
    fn format_search(&self, response: &SearchResponse) -> Result<String> {
        Ok(self.format_players(&response.result.players))
    }

    fn format_export(&self, csv: &str) -> Result<String> {
        Ok(self.format_players(&records_from_csv(csv)))
    }

    fn colored(&self) -> bool {
        self.colored
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use player_search::core::normalize::search_result_from_json;
    use serde_json::json;

    fn response(body: serde_json::Value) -> SearchResponse {
        SearchResponse {
            result: search_result_from_json(&body).unwrap(),
            body: body.to_string(),
        }
    }

    #[test]
    fn test_format_search_with_summary() {
        let formatter = TableFormatter::new(TableStyle::Compact, false);
        let out = formatter
            .format_search(&response(json!({"count": 1, "players": [{"name": "Smith, John"}]})))
            .unwrap();

        assert!(out.contains("Smith, John"));
        assert!(out.ends_with("Found 1 player(s)"));
        assert!(!out.contains("Player details"));
    }

    #[test]
    fn test_format_search_verbose() {
        let formatter = TableFormatter::new(TableStyle::Compact, true);
        let out = formatter
            .format_search(&response(json!({"players": [
                {"name": "Smith, John", "expiration_date": "2027-01-31"}
            ]})))
            .unwrap();

        assert!(out.contains("Player details"));
        assert!(out.contains("2027-01-31"));
    }

    #[test]
    fn test_format_export_empty() {
        let formatter = TableFormatter::new(TableStyle::Wide, true).without_colors();
        let out = formatter.format_export("No players found").unwrap();
        assert_eq!(out, "No players found.");
        assert_eq!(formatter.format_error("boom"), "Error: boom");
    }
}
