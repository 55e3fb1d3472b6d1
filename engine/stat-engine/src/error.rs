//! Error types for the stat engine

use thiserror::Error;

/// Result type for stat engine operations
pub type Result<T> = std::result::Result<T, StatsError>;

/// Errors that can occur while deriving stats from game logs
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatsError {
    #[error("No game logs matched the query")]
    NoData,

    #[error("Undefined rate for {metric}: denominator is zero")]
    UndefinedRate { metric: &'static str },

    #[error("Undefined rates for {}: denominators are zero", .metrics.join(", "))]
    UndefinedRates { metrics: Vec<&'static str> },

    #[error("Stat view '{view}' has no value for '{key}'")]
    MissingStat { view: String, key: &'static str },

    #[error("Non-finite value computed for {metric}")]
    NonFinite { metric: &'static str },
}

impl StatsError {
    /// Name of the metric this error refers to, if any
    pub fn metric(&self) -> Option<&'static str> {
        match self {
            StatsError::UndefinedRate { metric } | StatsError::NonFinite { metric } => Some(metric),
            StatsError::UndefinedRates { metrics } => metrics.first().copied(),
            StatsError::MissingStat { key, .. } => Some(key),
            StatsError::NoData => None,
        }
    }
}
