use serde::{Deserialize, Serialize};

use crate::error::{RepositoryError, Result};

/// Filter for one player's game logs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogQuery {
    /// Exact player full name
    pub name: String,
    /// First season, inclusive
    pub start_year: i32,
    /// Last season, inclusive
    pub end_year: i32,
    /// Lowest opponent defensive rating, inclusive
    pub min_def_rtg: f64,
    /// Highest opponent defensive rating, exclusive
    pub max_def_rtg: f64,
}

impl LogQuery {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(RepositoryError::InvalidQuery("name must not be empty".to_string()));
        }
        if self.start_year > self.end_year {
            return Err(RepositoryError::InvalidQuery(format!(
                "start_year {} is after end_year {}",
                self.start_year, self.end_year
            )));
        }
        if !self.min_def_rtg.is_finite() || !self.max_def_rtg.is_finite() {
            return Err(RepositoryError::InvalidQuery(
                "defensive rating bounds must be finite".to_string(),
            ));
        }
        if self.min_def_rtg > self.max_def_rtg {
            return Err(RepositoryError::InvalidQuery(format!(
                "min_def_rtg {} is above max_def_rtg {}",
                self.min_def_rtg, self.max_def_rtg
            )));
        }
        Ok(())
    }

    /// Whether a season falls in `[start_year, end_year]`
    pub fn covers_season(&self, season: i32) -> bool {
        season >= self.start_year && season <= self.end_year
    }

    /// Whether a rating falls in `[min_def_rtg, max_def_rtg)`
    pub fn covers_def_rtg(&self, def_rtg: f64) -> bool {
        def_rtg >= self.min_def_rtg && def_rtg < self.max_def_rtg
    }
}
