//! Stats Gateway service
//!
//! Serves the player stats API, or prints one response computed offline.

use anyhow::{Context, Result};
use clap::Parser;
use game_logs::{LogQuery, PgLogRepository};
use stat_engine::StatsPipeline;
use std::sync::Arc;
use tracing::info;

use stats_gateway::cli::{report, Cli, Commands};
use stats_gateway::config::load_config;
use stats_gateway::{initialize_logging, serve, StatsService};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref()).context("Failed to load configuration")?;
    initialize_logging(&config.logging)?;

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            info!("Starting Stats Gateway v{}", env!("CARGO_PKG_VERSION"));

            let repository = PgLogRepository::connect_lazy(&config.database)
                .context("Failed to configure game log database")?;
            let service =
                Arc::new(StatsService::new(Arc::new(repository), StatsPipeline::new(config.pipeline)));

            serve(&config.server, service).await?;
        }
        Commands::Report { logs, name, start_year, end_year, min_def_rtg, max_def_rtg } => {
            let query = LogQuery { name, start_year, end_year, min_def_rtg, max_def_rtg };
            let output = report(&logs, &query, config.pipeline).await?;
            println!("{}", output);
        }
    }

    Ok(())
}
