mod app;
mod context;
mod commands;
mod formatters;
mod utils;

use anyhow::Result;
use log::info;

fn main() -> Result<()> {
    // Initialiser le logger
    env_logger::init();

    info!("Starting player-search");

    let result = app::run();

    info!("player-search finished");

    result
}
