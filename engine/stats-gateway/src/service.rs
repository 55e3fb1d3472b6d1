//! Request handling and server lifecycle

use anyhow::{Context, Result};
use game_logs::{LogQuery, LogRepository};
use stat_engine::{StatTable, StatsPipeline};
use std::net::{SocketAddr, ToSocketAddrs};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::config::ServerConfig;
use crate::error::{GatewayError, GatewayResult};
use crate::rest_api::create_routes;
use crate::signals::shutdown_signal;

/// Fetches logs for a query and runs them through the stats pipeline
pub struct StatsService {
    repository: Arc<dyn LogRepository>,
    pipeline: StatsPipeline,
}

impl StatsService {
    pub fn new(repository: Arc<dyn LogRepository>, pipeline: StatsPipeline) -> Self {
        Self { repository, pipeline }
    }

    /// Compute the four stat tables for one query.
    ///
    /// Invalid queries fail before the repository is touched; a repository
    /// failure fails the whole request.
    pub async fn stats(&self, query: &LogQuery) -> GatewayResult<Vec<StatTable>> {
        query.validate()?;

        info!(
            player = %query.name,
            start_year = query.start_year,
            end_year = query.end_year,
            min_def_rtg = query.min_def_rtg,
            max_def_rtg = query.max_def_rtg,
            "Computing stats"
        );

        let logs = self.repository.fetch(query).await.map_err(|e| {
            warn!("Failed to fetch game logs for {}: {}", query.name, e);
            GatewayError::from(e)
        })?;
        debug!("Fetched {} game logs", logs.len());

        Ok(self.pipeline.run(&logs)?)
    }
}

/// Resolve the configured listen address
pub fn listen_addr(config: &ServerConfig) -> Result<SocketAddr> {
    (config.host.as_str(), config.port)
        .to_socket_addrs()
        .with_context(|| format!("Failed to resolve {}:{}", config.host, config.port))?
        .next()
        .ok_or_else(|| anyhow::anyhow!("No address for {}:{}", config.host, config.port))
}

/// Serve the REST API until a shutdown signal arrives
pub async fn serve(config: &ServerConfig, service: Arc<StatsService>) -> Result<()> {
    let addr = listen_addr(config)?;
    let routes = create_routes(service);

    let (bound, server) = warp::serve(routes)
        .try_bind_with_graceful_shutdown(addr, shutdown_signal())
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Stats gateway listening on http://{}", bound);
    server.await;
    info!("Stats gateway stopped");

    Ok(())
}
