pub mod formatter;
pub mod raw;
pub mod json;
pub mod table;

pub use formatter::Formatter;
use clap::ValueEnum;
use player_search::TableStyle;

/// Formats de sortie disponibles
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Tableau à colonnes fixes
    Table,

    /// Réponse brute, telle que reçue
    Raw,

    /// Joueurs normalisés en JSON
    Json,
}

/// Styles de tableau disponibles
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum StyleArg {
    /// 92 colonnes, "ID", noms tronqués avec "..."
    Compact,

    /// 120 colonnes, "Member ID", noms coupés net
    Wide,
}

impl From<StyleArg> for TableStyle {
    fn from(style: StyleArg) -> Self {
        match style {
            StyleArg::Compact => TableStyle::Compact,
            StyleArg::Wide => TableStyle::Wide,
        }
    }
}
