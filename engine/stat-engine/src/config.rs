//! Configuration for the stats pipeline

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Reference defensive rating used to adjust scoring
pub const DEFAULT_REFERENCE_DEF_RTG: f64 = 110.0;

/// Baseline that relative true shooting is measured against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelativeShootingBaseline {
    /// The player's own TS%, which makes rTS% zero whenever TS% is defined.
    /// Matches the figures the endpoint has always served.
    #[default]
    Own,
    /// Mean true shooting allowed by the opponents in the filtered games
    Opponent,
}

/// What to do with a percentage whose denominator is zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UndefinedRatePolicy {
    /// Fail the request with the first undefined metric
    #[default]
    Reject,
    /// Emit the cell as null and keep the other metrics
    Null,
}

impl FromStr for RelativeShootingBaseline {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "own" => Ok(RelativeShootingBaseline::Own),
            "opponent" => Ok(RelativeShootingBaseline::Opponent),
            other => Err(format!("unknown relative shooting baseline: {other}")),
        }
    }
}

impl FromStr for UndefinedRatePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "reject" => Ok(UndefinedRatePolicy::Reject),
            "null" => Ok(UndefinedRatePolicy::Null),
            other => Err(format!("unknown undefined rate policy: {other}")),
        }
    }
}

/// Stats pipeline configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// League-average-like defensive rating that adjusted scoring is scaled to
    pub reference_def_rtg: f64,

    /// Baseline for rTS%
    pub relative_baseline: RelativeShootingBaseline,

    /// Handling of zero-attempt percentages
    pub undefined_rates: UndefinedRatePolicy,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            reference_def_rtg: DEFAULT_REFERENCE_DEF_RTG,
            relative_baseline: RelativeShootingBaseline::default(),
            undefined_rates: UndefinedRatePolicy::default(),
        }
    }
}
