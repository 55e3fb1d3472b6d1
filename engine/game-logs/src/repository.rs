use async_trait::async_trait;
use stat_engine::GameLogRecord;
use std::path::Path;
use tracing::info;

use crate::error::Result;
use crate::query::LogQuery;

/// Source of filtered game logs.
///
/// Implementations return an empty collection, not an error, when nothing
/// matches the query.
#[async_trait]
pub trait LogRepository: Send + Sync {
    async fn fetch(&self, query: &LogQuery) -> Result<Vec<GameLogRecord>>;
}

/// Log repository backed by a vector of records
#[derive(Debug, Clone, Default)]
pub struct InMemoryLogRepository {
    logs: Vec<GameLogRecord>,
}

impl InMemoryLogRepository {
    pub fn new(logs: Vec<GameLogRecord>) -> Self {
        Self { logs }
    }

    /// Load records from a JSON array file
    pub async fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        info!("Loading game logs from: {:?}", path.as_ref());

        let json_content = tokio::fs::read_to_string(&path).await?;
        let logs: Vec<GameLogRecord> = serde_json::from_str(&json_content)?;

        info!("Loaded {} game logs", logs.len());
        Ok(Self::new(logs))
    }

    pub fn len(&self) -> usize {
        self.logs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.logs.is_empty()
    }
}

#[async_trait]
impl LogRepository for InMemoryLogRepository {
    async fn fetch(&self, query: &LogQuery) -> Result<Vec<GameLogRecord>> {
        query.validate()?;

        let mut matched: Vec<GameLogRecord> = self
            .logs
            .iter()
            .filter(|log| {
                log.full_name == query.name
                    && query.covers_season(log.season)
                    && query.covers_def_rtg(log.def_rtg)
            })
            .cloned()
            .collect();
        matched.sort_by(|a, b| a.game_day.cmp(&b.game_day).then(a.log_id.cmp(&b.log_id)));
        Ok(matched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::Write;

    fn log(log_id: i64, name: &str, season: i32, def_rtg: f64, day: u32) -> GameLogRecord {
        GameLogRecord {
            log_id,
            season,
            player_id: 1,
            full_name: name.to_string(),
            game_day: NaiveDate::from_ymd_opt(season, 1, day).unwrap(),
            team: "DEN".to_string(),
            opponent: "LAL".to_string(),
            minutes: 34.0,
            field_goals: 10,
            field_goals_attempted: 17,
            field_goal_percentage: Some(0.588),
            three_pointers: 1,
            three_pointers_attempted: 3,
            three_pointer_percentage: Some(0.333),
            free_throws: 5,
            free_throws_attempted: 6,
            free_throw_percentage: Some(0.833),
            offensive_rebounds: 3,
            defensive_rebounds: 9,
            total_rebounds: 12,
            assists: 10,
            steals: 1,
            blocks: 1,
            turnovers: 3,
            personal_fouls: 2,
            points: 26,
            plus_minus: 8,
            def_rtg,
            ts_pct: 0.58,
            pace: 98.0,
        }
    }

    fn query() -> LogQuery {
        LogQuery {
            name: "Nikola Jokic".to_string(),
            start_year: 2022,
            end_year: 2023,
            min_def_rtg: 108.0,
            max_def_rtg: 114.0,
        }
    }

    #[tokio::test]
    async fn test_fetch_filters() {
        let repo = InMemoryLogRepository::new(vec![
            log(1, "Nikola Jokic", 2022, 110.0, 5),
            log(2, "Nikola Jokic", 2021, 110.0, 5),
            log(3, "Nikola Jokic", 2023, 114.0, 5),
            log(4, "Nikola Jokic", 2023, 108.0, 6),
            log(5, "Jamal Murray", 2023, 110.0, 6),
        ]);

        let logs = repo.fetch(&query()).await.unwrap();
        let ids: Vec<i64> = logs.iter().map(|l| l.log_id).collect();
        assert_eq!(ids, vec![1, 4]);
    }

    #[tokio::test]
    async fn test_fetch_orders_by_game_day() {
        let repo = InMemoryLogRepository::new(vec![
            log(7, "Nikola Jokic", 2023, 110.0, 20),
            log(9, "Nikola Jokic", 2022, 110.0, 2),
            log(8, "Nikola Jokic", 2023, 110.0, 3),
        ]);

        let logs = repo.fetch(&query()).await.unwrap();
        let ids: Vec<i64> = logs.iter().map(|l| l.log_id).collect();
        assert_eq!(ids, vec![9, 8, 7]);
    }

    #[tokio::test]
    async fn test_no_match_is_empty() {
        let repo = InMemoryLogRepository::new(vec![log(1, "Jamal Murray", 2022, 110.0, 1)]);
        let logs = repo.fetch(&query()).await.unwrap();
        assert!(logs.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_query_rejected() {
        let repo = InMemoryLogRepository::new(vec![log(1, "Nikola Jokic", 2022, 110.0, 1)]);

        let inverted = LogQuery { start_year: 2024, ..query() };
        assert!(matches!(
            repo.fetch(&inverted).await,
            Err(crate::error::RepositoryError::InvalidQuery(_))
        ));

        let blank = LogQuery { name: "  ".to_string(), ..query() };
        assert!(matches!(
            repo.fetch(&blank).await,
            Err(crate::error::RepositoryError::InvalidQuery(_))
        ));
    }

    #[tokio::test]
    async fn test_load_from_json_file() {
        let records = vec![log(1, "Nikola Jokic", 2022, 110.0, 1)];
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", serde_json::to_string(&records).unwrap()).unwrap();

        let repo = InMemoryLogRepository::from_json_file(file.path()).await.unwrap();
        assert_eq!(repo.len(), 1);
        assert_eq!(repo.fetch(&query()).await.unwrap(), records);
    }
}
