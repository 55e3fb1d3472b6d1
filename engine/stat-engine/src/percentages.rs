//! Shooting efficiency from summed makes and attempts
//!
//! Every rate is computed on totals across the filtered games, never on
//! per-game averages. Each metric carries its own result so a zero-attempt
//! category fails alone.

use crate::config::{RelativeShootingBaseline, UndefinedRatePolicy};
use crate::error::{Result, StatsError};
use crate::models::StatView;
use crate::projection::BoxScoreLine;
use crate::schema::BoxScoreField;

/// Free throws per true-shooting attempt
pub const FREE_THROW_ATTEMPT_WEIGHT: f64 = 0.44;

/// A derived rate; `Err` when it is undefined for the inputs
pub type Rate = Result<f64>;

/// Shooting percentages, already scaled by 100 and rounded
#[derive(Debug, Clone, PartialEq)]
pub struct PercentageStats {
    pub true_shooting: Rate,
    pub relative_true_shooting: Rate,
    pub field_goal: Rate,
    pub three_point: Rate,
    pub free_throw: Rate,
}

impl PercentageStats {
    pub const NAME: &'static str = "-";

    /// Convert to a table row, applying the undefined-rate policy.
    ///
    /// Under [`UndefinedRatePolicy::Reject`] every undefined metric is
    /// reported together, in column order.
    pub fn to_view(&self, policy: UndefinedRatePolicy) -> Result<StatView> {
        let mut view = StatView::new(Self::NAME);
        let mut undefined = Vec::new();
        let metrics = [
            ("true_shooting_percentage", &self.true_shooting),
            ("relative_true_shooting_percentage", &self.relative_true_shooting),
            ("field_goal_percentage", &self.field_goal),
            ("three_pointer_percentage", &self.three_point),
            ("free_throw_percentage", &self.free_throw),
        ];

        for (key, rate) in metrics {
            match rate {
                Ok(value) => view.insert(key, Some(*value)),
                Err(StatsError::UndefinedRate { metric }) => {
                    tracing::debug!(metric, "Undefined rate");
                    undefined.push(*metric);
                    view.insert(key, None);
                }
                Err(e) => return Err(e.clone()),
            }
        }

        if policy == UndefinedRatePolicy::Reject && !undefined.is_empty() {
            return Err(StatsError::UndefinedRates { metrics: undefined });
        }

        Ok(view)
    }
}

/// Round to `places` decimals, exact ties going to the even digit
pub fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round_ties_even() / scale
}

fn ratio(numerator: f64, denominator: f64, metric: &'static str) -> Rate {
    if denominator == 0.0 {
        return Err(StatsError::UndefinedRate { metric });
    }
    let value = numerator / denominator;
    if !value.is_finite() {
        return Err(StatsError::NonFinite { metric });
    }
    Ok(value)
}

/// Compute shooting percentages from projected lines.
///
/// `opponent_true_shooting` is the mean TS% allowed by the opponents, as a
/// fraction; it only matters for [`RelativeShootingBaseline::Opponent`].
pub fn calculate_percentages(
    lines: &[BoxScoreLine],
    opponent_true_shooting: f64,
    baseline: RelativeShootingBaseline,
) -> PercentageStats {
    let totals = BoxScoreLine::sum(lines);
    let fg = totals.get(BoxScoreField::FieldGoals);
    let fga = totals.get(BoxScoreField::FieldGoalsAttempted);
    let threes = totals.get(BoxScoreField::ThreePointers);
    let threes_attempted = totals.get(BoxScoreField::ThreePointersAttempted);
    let ft = totals.get(BoxScoreField::FreeThrows);
    let fta = totals.get(BoxScoreField::FreeThrowsAttempted);
    let points = totals.get(BoxScoreField::Points);

    let fg_pct = ratio(fg, fga, "field_goal_percentage");
    let three_pct = ratio(threes, threes_attempted, "three_pointer_percentage");
    let ft_pct = ratio(ft, fta, "free_throw_percentage");
    let ts_pct = ratio(
        points,
        2.0 * (fga + FREE_THROW_ATTEMPT_WEIGHT * fta),
        "true_shooting_percentage",
    );

    let rts_pct = match (&ts_pct, baseline) {
        (Ok(ts), RelativeShootingBaseline::Own) => Ok(100.0 * (ts - ts)),
        (Ok(ts), RelativeShootingBaseline::Opponent) => {
            if opponent_true_shooting.is_finite() {
                Ok(100.0 * (ts - opponent_true_shooting))
            } else {
                Err(StatsError::NonFinite { metric: "relative_true_shooting_percentage" })
            }
        }
        (Err(_), _) => Err(StatsError::UndefinedRate { metric: "relative_true_shooting_percentage" }),
    };

    PercentageStats {
        true_shooting: ts_pct.map(|v| round_to(100.0 * v, 1)),
        relative_true_shooting: rts_pct.map(|v| round_to(v, 2)),
        field_goal: fg_pct.map(|v| round_to(100.0 * v, 1)),
        three_point: three_pct.map(|v| round_to(100.0 * v, 1)),
        free_throw: ft_pct.map(|v| round_to(100.0 * v, 1)),
    }
}
