use log::info;
use tokio::runtime::Runtime;
use player_search::{ClientConfig, PlayerSearchClient, TableStyle};
use crate::formatters::{OutputFormat, Formatter};
use crate::formatters::table::TableFormatter;
use crate::formatters::raw::RawFormatter;
use crate::formatters::json::JsonFormatter;
use crate::utils::error::CliError;
use anyhow::{Result, anyhow};

/// Options de rendu choisies sur la ligne de commande
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Format de sortie
    pub format: OutputFormat,
    /// Style du tableau
    pub style: TableStyle,
    /// Détail complet de chaque joueur
    pub verbose: bool,
    /// Couleurs des messages
    pub colored: bool,
}

/// Contexte d'exécution du CLI
pub struct Context {
    /// Client du service de recherche
    client: PlayerSearchClient,

    /// Formateur actuel
    formatter: Box<dyn Formatter>,

    /// Runtime Tokio pour les appels asynchrones
    runtime: Runtime,
}

impl Context {
    /// Crée un nouveau contexte
    pub fn new(config: ClientConfig, options: RenderOptions) -> Result<Self> {
        let formatter: Box<dyn Formatter> = match (options.format, options.colored) {
            (OutputFormat::Table, true) => Box::new(TableFormatter::new(options.style, options.verbose)),
            (OutputFormat::Table, false) => {
                Box::new(TableFormatter::new(options.style, options.verbose).without_colors())
            }
            (OutputFormat::Raw, true) => Box::new(RawFormatter::new()),
            (OutputFormat::Raw, false) => Box::new(RawFormatter::new().without_colors()),
            (OutputFormat::Json, true) => Box::new(JsonFormatter::new()),
            (OutputFormat::Json, false) => Box::new(JsonFormatter::new().without_colors()),
        };

        let client = PlayerSearchClient::with_config(config).map_err(CliError::Startup)?;
        info!(
            "Client ready for {} (timeout {}s)",
            client.config().base_url,
            client.config().timeout.as_secs()
        );

        // Créer un runtime Tokio
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| anyhow!("Failed to create Tokio runtime: {}", e))?;

        Ok(Context {
            client,
            formatter,
            runtime,
        })
    }

    /// Obtient le client
    pub fn client(&self) -> &PlayerSearchClient {
        &self.client
    }

    /// Obtient le formateur actuel
    pub fn formatter(&self) -> &dyn Formatter {
        self.formatter.as_ref()
    }

    /// Obtient le runtime Tokio
    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }
}
