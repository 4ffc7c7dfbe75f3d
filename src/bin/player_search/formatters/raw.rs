use anyhow::Result;
use player_search::render::raw::{render_raw, CSV_LABEL, JSON_LABEL};
use player_search::SearchResponse;
use crate::formatters::Formatter;

/// Formateur brut : la réponse est recopiée sans modification
pub struct RawFormatter {
    /// Indique si les couleurs sont activées
    colored: bool,
}

impl RawFormatter {
    /// Crée un nouveau formateur brut
    pub fn new() -> Self {
        RawFormatter {
            colored: true,
        }
    }

    /// Désactive les couleurs
    pub fn without_colors(mut self) -> Self {
        self.colored = false;
        self
    }
}

impl Formatter for RawFormatter {
    fn format_search(&self, response: &SearchResponse) -> Result<String> {
        Ok(render_raw(JSON_LABEL, &response.body))
    }

    fn format_export(&self, csv: &str) -> Result<String> {
        Ok(render_raw(CSV_LABEL, csv))
    }

    fn colored(&self) -> bool {
        self.colored
    }
}
