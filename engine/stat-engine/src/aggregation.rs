//! Per-game and per-100-possession averages

use crate::error::{Result, StatsError};
use crate::models::{MiscStats, StatView};
use crate::projection::BoxScoreLine;
use crate::schema::BoxScoreField;

/// Regulation game length in minutes
pub const MINUTES_PER_GAME: f64 = 48.0;

pub const PER_GAME: &str = "Per Game";
pub const PER_100: &str = "Per 100";

/// Possessions a player is on the floor for: (minutes / 48) * pace
pub fn estimated_possessions(minutes: f64, pace: f64) -> f64 {
    (minutes / MINUTES_PER_GAME) * pace
}

/// Factor that rescales per-game figures to a 100-possession basis
pub fn per_100_factor(misc: &MiscStats) -> Result<f64> {
    if misc.minutes == 0.0 {
        return Err(StatsError::UndefinedRate { metric: "minutes" });
    }
    let possessions = estimated_possessions(misc.minutes, misc.pace);
    if possessions == 0.0 {
        return Err(StatsError::UndefinedRate { metric: "possessions" });
    }
    let factor = 100.0 / possessions;
    if !factor.is_finite() {
        return Err(StatsError::NonFinite { metric: "possessions" });
    }
    Ok(factor)
}

fn mean_view(name: &str, lines: &[BoxScoreLine]) -> Result<StatView> {
    if lines.is_empty() {
        return Err(StatsError::NoData);
    }
    let games = lines.len() as f64;
    let totals = BoxScoreLine::sum(lines);

    let mut view = StatView::new(name);
    for field in BoxScoreField::ALL {
        let value = totals.get(field) / games;
        if !value.is_finite() {
            return Err(StatsError::NonFinite { metric: field.key() });
        }
        view.insert(field.key(), Some(value));
    }
    Ok(view)
}

/// Mean of every box-score field across games
pub fn per_game(lines: &[BoxScoreLine]) -> Result<StatView> {
    mean_view(PER_GAME, lines)
}

/// Per-game means with each game first rescaled to 100 possessions
pub fn per_100(lines: &[BoxScoreLine], misc: &MiscStats) -> Result<StatView> {
    let factor = per_100_factor(misc)?;
    tracing::debug!(factor, "Scaling box scores to 100 possessions");

    let scaled: Vec<BoxScoreLine> = lines.iter().map(|line| line.scaled(factor)).collect();
    mean_view(PER_100, &scaled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::shooting_log;
    use crate::models::GameLogRecord;
    use crate::projection::project;

    fn misc(minutes: f64, pace: f64) -> MiscStats {
        MiscStats { minutes, pace, def_rtg: 110.0 }
    }

    #[test]
    fn test_per_game_means() {
        let logs = vec![
            GameLogRecord { points: 20, assists: 4, ..shooting_log() },
            GameLogRecord { points: 31, assists: 9, ..shooting_log() },
        ];
        let view = per_game(&project(&logs)).unwrap();

        assert_eq!(view.name, "Per Game");
        assert_eq!(view.require("points").unwrap(), 25.5);
        assert_eq!(view.require("assists").unwrap(), 6.5);
        assert_eq!(view.len(), BoxScoreField::COUNT);
    }

    #[test]
    fn test_per_100_scaling() {
        // 24 minutes at pace 100 is 50 possessions, so everything doubles
        let lines = project(&[shooting_log()]);
        let view = per_100(&lines, &misc(24.0, 100.0)).unwrap();

        assert_eq!(view.name, "Per 100");
        assert_eq!(view.require("points").unwrap(), 30.0);
        assert_eq!(view.require("field_goals_attempted").unwrap(), 20.0);
    }

    #[test]
    fn test_per_100_matches_scaled_per_game() {
        let logs = vec![
            GameLogRecord { points: 12, ..shooting_log() },
            GameLogRecord { points: 27, ..shooting_log() },
            GameLogRecord { points: 18, ..shooting_log() },
        ];
        let lines = project(&logs);
        let stats = misc(33.5, 97.2);
        let factor = per_100_factor(&stats).unwrap();

        let game = per_game(&lines).unwrap();
        let hundred = per_100(&lines, &stats).unwrap();
        let expected = game.require("points").unwrap() * factor;
        assert!((hundred.require("points").unwrap() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_possessions() {
        assert_eq!(
            per_100_factor(&misc(0.0, 100.0)),
            Err(StatsError::UndefinedRate { metric: "minutes" })
        );
        assert_eq!(
            per_100_factor(&misc(30.0, 0.0)),
            Err(StatsError::UndefinedRate { metric: "possessions" })
        );
    }

    #[test]
    fn test_empty_lines() {
        assert_eq!(per_game(&[]), Err(StatsError::NoData));
    }
}
