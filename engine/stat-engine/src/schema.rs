//! Column schema for the presented tables
//!
//! A [`ColumnMapping`] is an ordered list of `(key, label)` pairs. Its
//! declaration order defines both the 1-based column ids and the order in
//! which row values are read, so the constants below are the output schema.

use crate::models::GameLogRecord;

/// Ordered key-to-label column mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMapping {
    columns: &'static [(&'static str, &'static str)],
}

impl ColumnMapping {
    pub const fn new(columns: &'static [(&'static str, &'static str)]) -> Self {
        Self { columns }
    }

    /// Columns with their 1-based ids, in declaration order
    pub fn columns(&self) -> impl Iterator<Item = (u32, &'static str, &'static str)> + '_ {
        self.columns.iter().enumerate().map(|(i, (key, label))| (i as u32 + 1, *key, *label))
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.columns.iter().map(|(key, _)| *key)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

pub const POINTS_TABLE_ID: u32 = 1;
// Percentages and box scores share id 2; clients key on it as-is.
pub const PERCENTAGES_TABLE_ID: u32 = 2;
pub const BOX_SCORES_TABLE_ID: u32 = 2;
pub const MISC_TABLE_ID: u32 = 3;

pub const POINTS_COLUMNS: ColumnMapping = ColumnMapping::new(&[("points", "PTS")]);

pub const PERCENTAGE_COLUMNS: ColumnMapping = ColumnMapping::new(&[
    ("true_shooting_percentage", "TS%"),
    ("relative_true_shooting_percentage", "rTS%"),
    ("field_goal_percentage", "FG%"),
    ("three_pointer_percentage", "3PT%"),
    ("free_throw_percentage", "FT%"),
]);

pub const BOX_SCORE_COLUMNS: ColumnMapping = ColumnMapping::new(&[
    ("assists", "AST"),
    ("total_rebounds", "REB"),
    ("offensive_rebounds", "ORB"),
    ("defensive_rebounds", "DRB"),
    ("steals", "STL"),
    ("blocks", "BLK"),
    ("turnovers", "TO"),
    ("personal_fouls", "PF"),
    ("field_goals", "FG"),
    ("field_goals_attempted", "FGA"),
    ("three_pointers", "3P"),
    ("three_pointers_attempted", "3PA"),
    ("free_throws", "FT"),
    ("free_throws_attempted", "FTA"),
]);

pub const MISC_COLUMNS: ColumnMapping =
    ColumnMapping::new(&[("minutes", "MIN"), ("pace", "Pace"), ("def_rtg", "DRTG")]);

/// Numeric box-score fields kept after projection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoxScoreField {
    FieldGoals,
    FieldGoalsAttempted,
    ThreePointers,
    ThreePointersAttempted,
    FreeThrows,
    FreeThrowsAttempted,
    OffensiveRebounds,
    DefensiveRebounds,
    TotalRebounds,
    Assists,
    Steals,
    Blocks,
    Turnovers,
    PersonalFouls,
    Points,
    PlusMinus,
}

impl BoxScoreField {
    pub const COUNT: usize = 16;

    pub const ALL: [BoxScoreField; Self::COUNT] = [
        BoxScoreField::FieldGoals,
        BoxScoreField::FieldGoalsAttempted,
        BoxScoreField::ThreePointers,
        BoxScoreField::ThreePointersAttempted,
        BoxScoreField::FreeThrows,
        BoxScoreField::FreeThrowsAttempted,
        BoxScoreField::OffensiveRebounds,
        BoxScoreField::DefensiveRebounds,
        BoxScoreField::TotalRebounds,
        BoxScoreField::Assists,
        BoxScoreField::Steals,
        BoxScoreField::Blocks,
        BoxScoreField::Turnovers,
        BoxScoreField::PersonalFouls,
        BoxScoreField::Points,
        BoxScoreField::PlusMinus,
    ];

    pub fn key(self) -> &'static str {
        match self {
            BoxScoreField::FieldGoals => "field_goals",
            BoxScoreField::FieldGoalsAttempted => "field_goals_attempted",
            BoxScoreField::ThreePointers => "three_pointers",
            BoxScoreField::ThreePointersAttempted => "three_pointers_attempted",
            BoxScoreField::FreeThrows => "free_throws",
            BoxScoreField::FreeThrowsAttempted => "free_throws_attempted",
            BoxScoreField::OffensiveRebounds => "offensive_rebounds",
            BoxScoreField::DefensiveRebounds => "defensive_rebounds",
            BoxScoreField::TotalRebounds => "total_rebounds",
            BoxScoreField::Assists => "assists",
            BoxScoreField::Steals => "steals",
            BoxScoreField::Blocks => "blocks",
            BoxScoreField::Turnovers => "turnovers",
            BoxScoreField::PersonalFouls => "personal_fouls",
            BoxScoreField::Points => "points",
            BoxScoreField::PlusMinus => "plus_minus",
        }
    }

    /// Position of this field in [`BoxScoreField::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }

    /// Read this field from a raw log record
    pub fn read(self, log: &GameLogRecord) -> f64 {
        let value = match self {
            BoxScoreField::FieldGoals => log.field_goals,
            BoxScoreField::FieldGoalsAttempted => log.field_goals_attempted,
            BoxScoreField::ThreePointers => log.three_pointers,
            BoxScoreField::ThreePointersAttempted => log.three_pointers_attempted,
            BoxScoreField::FreeThrows => log.free_throws,
            BoxScoreField::FreeThrowsAttempted => log.free_throws_attempted,
            BoxScoreField::OffensiveRebounds => log.offensive_rebounds,
            BoxScoreField::DefensiveRebounds => log.defensive_rebounds,
            BoxScoreField::TotalRebounds => log.total_rebounds,
            BoxScoreField::Assists => log.assists,
            BoxScoreField::Steals => log.steals,
            BoxScoreField::Blocks => log.blocks,
            BoxScoreField::Turnovers => log.turnovers,
            BoxScoreField::PersonalFouls => log.personal_fouls,
            BoxScoreField::Points => log.points,
            BoxScoreField::PlusMinus => log.plus_minus,
        };
        f64::from(value)
    }
}
