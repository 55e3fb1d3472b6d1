//! Stat Engine
//!
//! Derives a player's per-game, per-100-possession, defense-adjusted and
//! shooting-efficiency figures from raw game logs, and lays them out as the
//! four ID-indexed tables served by the stats API.

pub mod adjusted;
pub mod aggregation;
pub mod config;
pub mod error;
pub mod models;
pub mod percentages;
pub mod pipeline;
pub mod projection;
pub mod schema;
pub mod summary;
pub mod tables;

#[cfg(test)]
mod fixtures;
#[cfg(test)]
mod properties;

pub use config::{PipelineConfig, RelativeShootingBaseline, UndefinedRatePolicy};
pub use error::{Result, StatsError};
pub use models::{GameLogRecord, MiscStats, StatView};
pub use pipeline::{DerivedViews, StatsPipeline};
pub use tables::{CellValue, ColumnName, StatRow, StatTable};
