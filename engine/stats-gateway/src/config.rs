//! Service configuration management

use anyhow::{Context, Result};
use game_logs::DatabaseConfig;
use serde::{Deserialize, Serialize};
use stat_engine::PipelineConfig;
use std::path::Path;

use crate::logging::LogFormat;

/// Main service configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// HTTP listener settings
    pub server: ServerConfig,

    /// Game log database settings
    pub database: DatabaseConfig,

    /// Stats pipeline settings
    pub pipeline: PipelineConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (json, pretty, compact)
    pub format: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".to_string(), port: 5000 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string(), format: "pretty".to_string() }
    }
}

/// Load configuration: defaults, then the TOML file if one is given (or named
/// by `STATS_CONFIG`), then environment variables
pub fn load_config(path: Option<&Path>) -> Result<GatewayConfig> {
    let file = path.map(Path::to_path_buf).or_else(|| std::env::var("STATS_CONFIG").ok().map(Into::into));

    let mut config = match file {
        Some(file) => {
            tracing::debug!("Loading configuration from file: {:?}", file);
            load_from_file(&file)?
        }
        None => GatewayConfig::default(),
    };

    apply_env(&mut config, |key| std::env::var(key).ok())?;
    validate_config(&config)?;

    Ok(config)
}

/// Load configuration from a TOML file
pub fn load_from_file(path: &Path) -> Result<GatewayConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {:?}", path))?;
    toml::from_str(&content).with_context(|| format!("Invalid configuration file: {:?}", path))
}

/// Override configuration from a variable lookup
pub fn apply_env(config: &mut GatewayConfig, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
    if let Some(host) = lookup("STATS_HOST") {
        config.server.host = host;
    }

    if let Some(port) = lookup("STATS_PORT") {
        config.server.port = port.parse().with_context(|| format!("Invalid STATS_PORT: {port}"))?;
    }

    if let Some(level) = lookup("STATS_LOG_LEVEL") {
        config.logging.level = level;
    }

    if let Some(format) = lookup("STATS_LOG_FORMAT") {
        config.logging.format = format;
    }

    if let Some(rating) = lookup("STATS_REFERENCE_DEF_RTG") {
        config.pipeline.reference_def_rtg = rating
            .parse()
            .with_context(|| format!("Invalid STATS_REFERENCE_DEF_RTG: {rating}"))?;
    }

    if let Some(baseline) = lookup("STATS_RELATIVE_BASELINE") {
        config.pipeline.relative_baseline = baseline.parse().map_err(anyhow::Error::msg)?;
    }

    if let Some(policy) = lookup("STATS_UNDEFINED_RATES") {
        config.pipeline.undefined_rates = policy.parse().map_err(anyhow::Error::msg)?;
    }

    config.database.apply_overrides(&lookup);

    Ok(())
}

/// Validate configuration
pub fn validate_config(config: &GatewayConfig) -> Result<()> {
    if config.database.url.trim().is_empty() {
        return Err(anyhow::anyhow!("Database URL must not be empty"));
    }

    if config.server.port == 0 {
        return Err(anyhow::anyhow!("Invalid server port: {}", config.server.port));
    }

    match config.logging.level.as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => return Err(anyhow::anyhow!("Invalid log level: {}", config.logging.level)),
    }

    config.logging.format.parse::<LogFormat>().map_err(anyhow::Error::msg)?;

    let rating = config.pipeline.reference_def_rtg;
    if !rating.is_finite() || rating <= 0.0 {
        return Err(anyhow::anyhow!("Invalid reference defensive rating: {}", rating));
    }

    Ok(())
}
