//! Game Logs - player game log repository
//!
//! Supplies the raw logs the stat engine works on: one player, a season
//! range and an opponent defensive-rating range. Backed by Postgres in
//! production and by an in-memory collection for tests and offline reports.

pub mod config;
pub mod error;
pub mod postgres;
pub mod query;
pub mod repository;

pub use config::DatabaseConfig;
pub use error::{RepositoryError, Result};
pub use postgres::PgLogRepository;
pub use query::LogQuery;
pub use repository::{InMemoryLogRepository, LogRepository};
