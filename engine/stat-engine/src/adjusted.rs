use crate::aggregation::MINUTES_PER_GAME;
use crate::error::{Result, StatsError};
use crate::models::{MiscStats, StatView};

pub const ADJUSTED: &str = "Per Game (Adjusted)";

/// (reference / mean opponent rating) * (mean minutes / 48)
pub fn points_factor(misc: &MiscStats, reference_def_rtg: f64) -> Result<f64> {
    if misc.def_rtg == 0.0 {
        return Err(StatsError::UndefinedRate { metric: "def_rtg" });
    }
    let factor = (reference_def_rtg / misc.def_rtg) * (misc.minutes / MINUTES_PER_GAME);
    if !factor.is_finite() {
        return Err(StatsError::NonFinite { metric: "def_rtg" });
    }
    Ok(factor)
}

/// Per-100 scoring rescaled for opponent defense and playing time
pub fn adjusted_points(
    per_100: &StatView,
    misc: &MiscStats,
    reference_def_rtg: f64,
) -> Result<StatView> {
    let factor = points_factor(misc, reference_def_rtg)?;
    let points = per_100.require("points")? * factor;

    tracing::debug!(factor, points, "Adjusted scoring");
    Ok(StatView::new(ADJUSTED).with("points", points))
}
