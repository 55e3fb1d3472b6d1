use crate::error::{Result, StatsError};
use crate::models::{GameLogRecord, MiscStats};

/// Arithmetic mean; `None` for an empty input
pub(crate) fn mean(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.into_iter().fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
    (count > 0).then(|| sum / count as f64)
}

/// Season-level averages of minutes, pace and opponent defensive rating
pub fn summarize_misc(logs: &[GameLogRecord]) -> Result<MiscStats> {
    let minutes = mean(logs.iter().map(|log| log.minutes)).ok_or(StatsError::NoData)?;
    let pace = mean(logs.iter().map(|log| log.pace)).ok_or(StatsError::NoData)?;
    let def_rtg = mean(logs.iter().map(|log| log.def_rtg)).ok_or(StatsError::NoData)?;

    tracing::debug!(
        games = logs.len(),
        minutes,
        pace,
        def_rtg,
        "Summarized misc stats"
    );

    Ok(MiscStats { minutes, pace, def_rtg })
}

/// Mean opponent true-shooting allowed across the logs
pub fn mean_opponent_true_shooting(logs: &[GameLogRecord]) -> Result<f64> {
    mean(logs.iter().map(|log| log.ts_pct)).ok_or(StatsError::NoData)
}
