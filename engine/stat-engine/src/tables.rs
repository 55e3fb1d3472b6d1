//! Table presentation
//!
//! Each table lists its columns as `boxScoreStats` and its rows as
//! `statTypes`. A row's `boxScores` are parallel to the column list: the
//! value at position `i` belongs to the column at position `i`, and both
//! carry the same 1-based id.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{MiscStats, StatView};
use crate::schema::{
    ColumnMapping, BOX_SCORES_TABLE_ID, BOX_SCORE_COLUMNS, MISC_COLUMNS, MISC_TABLE_ID,
    PERCENTAGES_TABLE_ID, PERCENTAGE_COLUMNS, POINTS_COLUMNS, POINTS_TABLE_ID,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatTable {
    pub id: u32,
    pub box_score_stats: Vec<ColumnName>,
    pub stat_types: Vec<StatRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnName {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatRow {
    pub id: u32,
    pub name: String,
    pub box_scores: Vec<CellValue>,
}

/// One cell; `None` serializes as `null` for an undefined rate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellValue {
    pub id: u32,
    pub value: Option<f64>,
}

/// Build one table from a column mapping and its rows, in the given order
pub fn build_table(mapping: &ColumnMapping, rows: &[&StatView], table_id: u32) -> Result<StatTable> {
    let box_score_stats = mapping
        .columns()
        .map(|(id, _, label)| ColumnName { id, name: label.to_string() })
        .collect();

    let stat_types = rows
        .iter()
        .enumerate()
        .map(|(i, row)| -> Result<StatRow> {
            let box_scores = mapping
                .columns()
                .map(|(id, key, _)| row.get(key).map(|value| CellValue { id, value }))
                .collect::<Result<Vec<_>>>()?;
            Ok(StatRow { id: i as u32 + 1, name: row.name.clone(), box_scores })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(StatTable { id: table_id, box_score_stats, stat_types })
}

/// Assemble the points, percentages, box-score and misc tables, in that order
pub fn present(
    per_game: &StatView,
    per_100: &StatView,
    adjusted: &StatView,
    percentages: &StatView,
    misc: &MiscStats,
) -> Result<Vec<StatTable>> {
    let misc = misc.to_view();

    Ok(vec![
        build_table(&POINTS_COLUMNS, &[per_game, per_100, adjusted], POINTS_TABLE_ID)?,
        build_table(&PERCENTAGE_COLUMNS, &[percentages], PERCENTAGES_TABLE_ID)?,
        build_table(&BOX_SCORE_COLUMNS, &[per_game, per_100], BOX_SCORES_TABLE_ID)?,
        build_table(&MISC_COLUMNS, &[&misc], MISC_TABLE_ID)?,
    ])
}
