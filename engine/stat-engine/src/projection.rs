//! Column projection from raw logs to numeric box-score lines
//!
//! Identifiers, descriptive text, stored percentages and the context columns
//! (minutes, pace, defensive rating, true-shooting allowed) are left behind;
//! they are consumed before projection by the misc summary and the
//! percentage calculator.

use crate::models::GameLogRecord;
use crate::schema::BoxScoreField;

/// The numeric box-score fields of one game, indexed by [`BoxScoreField`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxScoreLine {
    values: [f64; BoxScoreField::COUNT],
}

impl BoxScoreLine {
    pub fn from_log(log: &GameLogRecord) -> Self {
        Self { values: BoxScoreField::ALL.map(|field| field.read(log)) }
    }

    pub fn get(&self, field: BoxScoreField) -> f64 {
        self.values[field.index()]
    }

    /// Every field multiplied by `factor`
    pub fn scaled(&self, factor: f64) -> Self {
        Self { values: self.values.map(|v| v * factor) }
    }

    /// Field-wise sum over a set of lines
    pub fn sum<'a>(lines: impl IntoIterator<Item = &'a BoxScoreLine>) -> Self {
        let mut values = [0.0; BoxScoreField::COUNT];
        for line in lines {
            for (total, v) in values.iter_mut().zip(line.values.iter()) {
                *total += v;
            }
        }
        Self { values }
    }
}

/// Project raw logs onto their box-score fields, one line per log
pub fn project(logs: &[GameLogRecord]) -> Vec<BoxScoreLine> {
    logs.iter().map(BoxScoreLine::from_log).collect()
}
