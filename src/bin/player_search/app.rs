use anyhow::Result;
use clap::{Parser, ValueEnum};
use log::{info, warn};
use std::time::Duration;

use player_search::client::DEFAULT_BASE_URL;
use player_search::{
    parse_max_results, ClientConfig, SearchQuery, DEFAULT_MAX_RESULTS, DEFAULT_PLAYER_NAME,
};

use crate::commands;
use crate::context::{Context, RenderOptions};
use crate::formatters::{OutputFormat, StyleArg};
use crate::utils::error::CliError;

/// Point d'accès interrogé
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Recherche JSON (/api/search)
    Search,
    /// Export CSV (/api/export)
    Export,
    /// Recherche puis export
    All,
}

#[derive(Parser)]
#[command(name = "player-search")]
#[command(about = "Search players through the player-search API", long_about = None)]
struct Cli {
    /// Nom du joueur à rechercher
    name: Option<String>,

    /// Nombre maximal de résultats (entier positif)
    #[arg(allow_negative_numbers = true)]
    max: Option<String>,

    /// Point d'accès à interroger
    #[arg(short, long, value_enum, default_value_t = Mode::Search)]
    endpoint: Mode,

    /// Format de sortie (table, raw, json)
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Style du tableau
    #[arg(short, long, value_enum, default_value_t = StyleArg::Compact)]
    style: StyleArg,

    /// URL de base du service
    #[arg(short, long, default_value = DEFAULT_BASE_URL)]
    url: String,

    /// Délai maximal de la requête, en secondes
    #[arg(short, long, default_value_t = 30, value_parser = clap::value_parser!(u64).range(1..))]
    timeout: u64,

    /// Affiche le détail de chaque joueur
    #[arg(short, long)]
    verbose: bool,

    /// Désactive les couleurs
    #[arg(long)]
    no_color: bool,

    /// Échoue si le nom manque ou si une requête échoue
    #[arg(long)]
    strict: bool,
}

fn print_usage() {
    eprintln!("Usage: player-search \"Player Name\" [max_results]");
    eprintln!();
    eprintln!("Example:");
    eprintln!("  player-search Smith");
    eprintln!("  player-search \"Chugh\" 20");
}

/// Exécute l'application CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let context = Context::new(
        ClientConfig {
            base_url: cli.url.clone(),
            timeout: Duration::from_secs(cli.timeout),
        },
        RenderOptions {
            format: cli.format,
            style: cli.style.into(),
            verbose: cli.verbose,
            colored: !cli.no_color,
        },
    )?;
    let formatter = context.formatter();

    let name = match cli.name {
        Some(name) => name,
        None if cli.strict => {
            print_usage();
            return Err(CliError::MissingPlayerName.into());
        },
        None => DEFAULT_PLAYER_NAME.to_string(),
    };

    // Un maximum invalide n'est pas fatal : on garde la valeur par défaut
    let max = match cli.max.as_deref().map(parse_max_results) {
        Some(Ok(max)) => max,
        Some(Err(e)) => {
            warn!("{}", e);
            eprintln!("{}", formatter.format_warning(&format!("{}, using default ({})", e, DEFAULT_MAX_RESULTS)));
            DEFAULT_MAX_RESULTS
        },
        None => DEFAULT_MAX_RESULTS,
    };

    let query = SearchQuery::new(name, max);
    info!("Query {:?} against {} ({:?})", query, cli.url, cli.endpoint);

    let mut failures = 0;
    if matches!(cli.endpoint, Mode::Search | Mode::All) && !commands::search::execute(&context, &query)? {
        failures += 1;
    }
    // En mode all : le tableau de l'export, puis le même CSV brut
    let with_raw = cli.endpoint == Mode::All && cli.format != OutputFormat::Raw;
    if matches!(cli.endpoint, Mode::Export | Mode::All) && !commands::export::execute(&context, &query, with_raw)? {
        failures += 1;
    }

    if cli.strict && failures > 0 {
        return Err(CliError::RequestsFailed(failures).into());
    }

    Ok(())
}
