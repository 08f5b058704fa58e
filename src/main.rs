//! Artist Cache CLI entry point.

use anyhow::Result;
use clap::Parser;

use artist_cache::cli::commands::{self, artists, names};
use artist_cache::cli::{Cli, Commands};
use artist_cache::{ConfigLoader, LoggerImpl};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(&cli).await {
        artist_cache::cli::handle_error(err, cli.json);
    }
}

async fn run(cli: &Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load()?,
    };

    let _logger = LoggerImpl::init(&config.logging)?;
    let service = commands::build_service(&config)?;

    match &cli.command {
        Commands::Names { ids } => names::execute(&service, ids, cli.json).await,
        Commands::Artists { ids } => artists::execute(&service, ids, cli.json).await,
    }
}
