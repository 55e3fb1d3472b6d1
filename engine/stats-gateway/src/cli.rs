//! # Command Line Interface
//!
//! Runs the HTTP service, or computes one response offline from a JSON file
//! of game logs.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use game_logs::{InMemoryLogRepository, LogQuery};
use stat_engine::{PipelineConfig, StatsPipeline};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::service::StatsService;

/// Player stats API
#[derive(Parser, Debug)]
#[command(name = "stats-gateway")]
#[command(about = "Serves per-game, per-100 and adjusted player stats tables")]
#[command(version)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Command to execute (defaults to `serve`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP service
    Serve,
    /// Compute the stats tables for one query from a JSON file of game logs
    Report {
        /// JSON array of game log records
        #[arg(long)]
        logs: PathBuf,

        /// Exact player full name
        #[arg(long)]
        name: String,

        /// First season (inclusive)
        #[arg(long)]
        start_year: i32,

        /// Last season (inclusive)
        #[arg(long)]
        end_year: i32,

        /// Lowest opponent defensive rating (inclusive)
        #[arg(long)]
        min_def_rtg: f64,

        /// Highest opponent defensive rating (exclusive)
        #[arg(long)]
        max_def_rtg: f64,
    },
}

/// Run a query against logs loaded from `logs` and render the response
/// payload as pretty-printed JSON
pub async fn report(logs: &Path, query: &LogQuery, pipeline: PipelineConfig) -> Result<String> {
    let repository = InMemoryLogRepository::from_json_file(logs)
        .await
        .with_context(|| format!("Failed to load game logs from {:?}", logs))?;

    let service = StatsService::new(Arc::new(repository), StatsPipeline::new(pipeline));
    let tables = service.stats(query).await?;

    serde_json::to_string_pretty(&tables).context("Failed to serialize stats tables")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use stat_engine::{GameLogRecord, StatTable};
    use std::io::Write;

    fn record() -> GameLogRecord {
        GameLogRecord {
            log_id: 11,
            season: 2019,
            player_id: 2544,
            full_name: "LeBron James".to_string(),
            game_day: NaiveDate::from_ymd_opt(2019, 3, 2).unwrap(),
            team: "LAL".to_string(),
            opponent: "PHX".to_string(),
            minutes: 48.0,
            field_goals: 11,
            field_goals_attempted: 20,
            field_goal_percentage: Some(0.55),
            three_pointers: 2,
            three_pointers_attempted: 6,
            three_pointer_percentage: Some(0.333),
            free_throws: 6,
            free_throws_attempted: 8,
            free_throw_percentage: Some(0.75),
            offensive_rebounds: 1,
            defensive_rebounds: 7,
            total_rebounds: 8,
            assists: 9,
            steals: 1,
            blocks: 1,
            turnovers: 4,
            personal_fouls: 1,
            points: 30,
            plus_minus: 4,
            def_rtg: 110.0,
            ts_pct: 0.56,
            pace: 100.0,
        }
    }

    #[test]
    fn test_parse_report_args() {
        let cli = Cli::try_parse_from([
            "stats-gateway",
            "report",
            "--logs",
            "logs.json",
            "--name",
            "LeBron James",
            "--start-year",
            "2018",
            "--end-year",
            "2020",
            "--min-def-rtg",
            "100",
            "--max-def-rtg",
            "115.5",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Report { name, max_def_rtg, .. }) => {
                assert_eq!(name, "LeBron James");
                assert_eq!(max_def_rtg, 115.5);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_serve_is_default() {
        let cli = Cli::try_parse_from(["stats-gateway", "--config", "stats.toml"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.config, Some(PathBuf::from("stats.toml")));
    }

    #[tokio::test]
    async fn test_report_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", serde_json::to_string(&vec![record()]).unwrap()).unwrap();

        let query = LogQuery {
            name: "LeBron James".to_string(),
            start_year: 2018,
            end_year: 2020,
            min_def_rtg: 100.0,
            max_def_rtg: 115.0,
        };

        let output = report(file.path(), &query, PipelineConfig::default()).await.unwrap();
        let tables: Vec<StatTable> = serde_json::from_str(&output).unwrap();

        assert_eq!(tables.len(), 4);
        // 48 minutes at pace 100: per 100 equals per game, factor 1.0
        let points: Vec<Option<f64>> =
            tables[0].stat_types.iter().map(|row| row.box_scores[0].value).collect();
        assert_eq!(points, vec![Some(30.0), Some(30.0), Some(30.0)]);
    }

    #[tokio::test]
    async fn test_report_missing_file() {
        let query = LogQuery {
            name: "LeBron James".to_string(),
            start_year: 2018,
            end_year: 2020,
            min_def_rtg: 100.0,
            max_def_rtg: 115.0,
        };

        let result =
            report(Path::new("/nonexistent/logs.json"), &query, PipelineConfig::default()).await;
        assert!(result.is_err());
    }
}
