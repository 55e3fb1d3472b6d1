//! Stats pipeline: raw game logs in, presentation tables out

use crate::adjusted::adjusted_points;
use crate::aggregation::{per_100, per_game};
use crate::config::PipelineConfig;
use crate::error::{Result, StatsError};
use crate::models::{GameLogRecord, MiscStats, StatView};
use crate::percentages::calculate_percentages;
use crate::projection::project;
use crate::summary::{mean_opponent_true_shooting, summarize_misc};
use crate::tables::{present, StatTable};

/// Every intermediate view produced for one set of logs
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedViews {
    pub misc: MiscStats,
    pub percentages: StatView,
    pub per_game: StatView,
    pub per_100: StatView,
    pub adjusted: StatView,
}

/// Turns a player's filtered game logs into the four stat tables.
///
/// Holds nothing but configuration, so a single instance can serve any
/// number of concurrent requests.
#[derive(Debug, Clone, Default)]
pub struct StatsPipeline {
    config: PipelineConfig,
}

impl StatsPipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Compute the derived views without assembling tables
    pub fn derive(&self, logs: &[GameLogRecord]) -> Result<DerivedViews> {
        if logs.is_empty() {
            return Err(StatsError::NoData);
        }

        let opponent_ts = mean_opponent_true_shooting(logs)?;
        let misc = summarize_misc(logs)?;

        let lines = project(logs);

        let percentages =
            calculate_percentages(&lines, opponent_ts, self.config.relative_baseline)
                .to_view(self.config.undefined_rates)?;
        let per_game = per_game(&lines)?;
        let per_100 = per_100(&lines, &misc)?;
        let adjusted = adjusted_points(&per_100, &misc, self.config.reference_def_rtg)?;

        Ok(DerivedViews { misc, percentages, per_game, per_100, adjusted })
    }

    /// Compute and present: points, percentages, box scores, misc
    pub fn run(&self, logs: &[GameLogRecord]) -> Result<Vec<StatTable>> {
        let views = self.derive(logs)?;
        tracing::debug!(games = logs.len(), "Derived stat views");

        present(
            &views.per_game,
            &views.per_100,
            &views.adjusted,
            &views.percentages,
            &views.misc,
        )
    }
}
