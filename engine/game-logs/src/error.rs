//! Error types for the game log repository

use thiserror::Error;

/// Result type for repository operations
pub type Result<T> = std::result::Result<T, RepositoryError>;

/// Errors that can occur while fetching game logs
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Log store unavailable: {0}")]
    Unavailable(String),

    #[error("Database error: {0}")]
    Database(sqlx::Error),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl RepositoryError {
    /// Whether the store itself could not be reached
    pub fn is_unavailable(&self) -> bool {
        matches!(self, RepositoryError::Unavailable(_))
    }
}

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => RepositoryError::Unavailable(err.to_string()),
            other => RepositoryError::Database(other),
        }
    }
}
