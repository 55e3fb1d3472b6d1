use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Result, StatsError};

/// One player-game observation as returned by the log repository
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameLogRecord {
    pub log_id: i64,
    pub season: i32,
    pub player_id: i64,
    pub full_name: String,
    pub game_day: NaiveDate,
    pub team: String,
    pub opponent: String,
    pub minutes: f64,
    pub field_goals: i32,
    pub field_goals_attempted: i32,
    pub field_goal_percentage: Option<f64>,
    pub three_pointers: i32,
    pub three_pointers_attempted: i32,
    pub three_pointer_percentage: Option<f64>,
    pub free_throws: i32,
    pub free_throws_attempted: i32,
    pub free_throw_percentage: Option<f64>,
    pub offensive_rebounds: i32,
    pub defensive_rebounds: i32,
    pub total_rebounds: i32,
    pub assists: i32,
    pub steals: i32,
    pub blocks: i32,
    pub turnovers: i32,
    pub personal_fouls: i32,
    pub points: i32,
    pub plus_minus: i32,
    /// Opponent defensive rating
    pub def_rtg: f64,
    /// Opponent true-shooting allowed
    pub ts_pct: f64,
    /// Game pace
    pub pace: f64,
}

/// Season-level context averages
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MiscStats {
    pub minutes: f64,
    pub pace: f64,
    pub def_rtg: f64,
}

impl MiscStats {
    pub const NAME: &'static str = "-";

    pub fn to_view(&self) -> StatView {
        StatView::new(Self::NAME)
            .with("minutes", self.minutes)
            .with("pace", self.pace)
            .with("def_rtg", self.def_rtg)
    }
}

/// A named row of derived statistics.
///
/// Values keep insertion order. A `None` value marks a rate that is undefined
/// for the underlying logs; it is never a stand-in for zero.
#[derive(Debug, Clone, PartialEq)]
pub struct StatView {
    pub name: String,
    values: Vec<(&'static str, Option<f64>)>,
}

impl StatView {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), values: Vec::new() }
    }

    /// Builder-style insert of a defined value
    pub fn with(mut self, key: &'static str, value: f64) -> Self {
        self.insert(key, Some(value));
        self
    }

    /// Insert or replace a value
    pub fn insert(&mut self, key: &'static str, value: Option<f64>) {
        match self.values.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.values.push((key, value)),
        }
    }

    /// Look up a value; a missing key is an upstream aggregation defect
    pub fn get(&self, key: &'static str) -> Result<Option<f64>> {
        self.values
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
            .ok_or_else(|| StatsError::MissingStat { view: self.name.clone(), key })
    }

    /// Look up a value that must be defined
    pub fn require(&self, key: &'static str) -> Result<f64> {
        self.get(key)?.ok_or(StatsError::UndefinedRate { metric: key })
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.values.iter().map(|(k, _)| *k)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
