//! Request-level errors and their HTTP mapping

use game_logs::RepositoryError;
use stat_engine::StatsError;
use thiserror::Error;
use warp::http::StatusCode;

/// Result type for gateway operations
pub type GatewayResult<T> = std::result::Result<T, GatewayError>;

/// Errors surfaced to API callers
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Invalid request: {0}")]
    ClientInput(String),

    #[error("No game logs matched the query")]
    NoData,

    #[error("Undefined rate for {}", .metrics.join(", "))]
    UndefinedRate { metrics: Vec<&'static str> },

    #[error("Game log store unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl GatewayError {
    pub fn status(&self) -> StatusCode {
        match self {
            GatewayError::ClientInput(_) => StatusCode::BAD_REQUEST,
            GatewayError::NoData => StatusCode::NOT_FOUND,
            GatewayError::UndefinedRate { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            GatewayError::UpstreamUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            GatewayError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            GatewayError::ClientInput(_) => "INVALID_REQUEST",
            GatewayError::NoData => "NO_DATA",
            GatewayError::UndefinedRate { .. } => "UNDEFINED_RATE",
            GatewayError::UpstreamUnavailable(_) => "UPSTREAM_UNAVAILABLE",
            GatewayError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Extra structured context for the error body
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            GatewayError::UndefinedRate { metrics } => {
                Some(serde_json::json!({ "metrics": metrics }))
            }
            _ => None,
        }
    }
}

impl warp::reject::Reject for GatewayError {}

impl From<StatsError> for GatewayError {
    fn from(err: StatsError) -> Self {
        match err {
            StatsError::NoData => GatewayError::NoData,
            StatsError::UndefinedRate { metric } => {
                GatewayError::UndefinedRate { metrics: vec![metric] }
            }
            StatsError::UndefinedRates { metrics } => GatewayError::UndefinedRate { metrics },
            other => GatewayError::Internal(other.to_string()),
        }
    }
}

impl From<RepositoryError> for GatewayError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::InvalidQuery(message) => GatewayError::ClientInput(message),
            RepositoryError::Unavailable(message) => GatewayError::UpstreamUnavailable(message),
            other => GatewayError::Internal(other.to_string()),
        }
    }
}
