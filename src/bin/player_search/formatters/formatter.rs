use anyhow::Result;
use colored::*;
use player_search::SearchResponse;

/// Trait définissant un formateur de sortie
pub trait Formatter {
    /// Formate la réponse de `/api/search`
    fn format_search(&self, response: &SearchResponse) -> Result<String>;

    /// Formate le CSV renvoyé par `/api/export`
    fn format_export(&self, csv: &str) -> Result<String>;

    /// Indique si les couleurs sont activées
    fn colored(&self) -> bool;

    /// Formate un message d'erreur
    fn format_error(&self, error: &str) -> String {
        if self.colored() {
            format!("{}", error.red().bold())
        } else {
            format!("Error: {}", error)
        }
    }

    /// Formate un avertissement
    fn format_warning(&self, warning: &str) -> String {
        if self.colored() {
            format!("{} {}", "Warning:".yellow().bold(), warning)
        } else {
            format!("Warning: {}", warning)
        }
    }

    /// Formate un message d'information
    fn format_info(&self, info: &str) -> String {
        if self.colored() {
            format!("{}", info.blue())
        } else {
            info.to_string()
        }
    }

    /// Formate un message de succès
    fn format_success(&self, success: &str) -> String {
        if self.colored() {
            format!("{}", success.green().bold())
        } else {
            success.to_string()
        }
    }
}
