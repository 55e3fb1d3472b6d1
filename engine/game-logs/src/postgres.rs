//! Postgres-backed log repository

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use stat_engine::GameLogRecord;
use tracing::{debug, info};

use crate::config::DatabaseConfig;
use crate::error::Result;
use crate::query::LogQuery;
use crate::repository::LogRepository;

/// Player logs joined with the opponent's team ratings and the game's pace.
/// Opponent rating is filtered on `[min, max)`.
const SELECT_PLAYER_LOGS: &str = r#"
SELECT log.id::int8 AS log_id, log.season::int4 AS season, player.id::int8 AS player_id,
       player.full_name, log.game_day::date AS game_day, log.team, log.opponent,
       log.minutes::float8 AS minutes,
       log.field_goals::int4 AS field_goals,
       log.field_goals_attempted::int4 AS field_goals_attempted,
       log.field_goal_percentage::float8 AS field_goal_percentage,
       log.three_pointers::int4 AS three_pointers,
       log.three_pointers_attempted::int4 AS three_pointers_attempted,
       log.three_pointer_percentage::float8 AS three_pointer_percentage,
       log.free_throws::int4 AS free_throws,
       log.free_throws_attempted::int4 AS free_throws_attempted,
       log.free_throw_percentage::float8 AS free_throw_percentage,
       log.offensive_rebounds::int4 AS offensive_rebounds,
       log.defensive_rebounds::int4 AS defensive_rebounds,
       log.total_rebounds::int4 AS total_rebounds,
       log.assists::int4 AS assists, log.steals::int4 AS steals, log.blocks::int4 AS blocks,
       log.turnovers::int4 AS turnovers, log.personal_fouls::int4 AS personal_fouls,
       log.points::int4 AS points, log.plus_minus::int4 AS plus_minus,
       team.def_rtg::float8 AS def_rtg, team.ts_pct::float8 AS ts_pct, game.pace::float8 AS pace
FROM log
JOIN player ON log.player_id = player.id
JOIN game ON log.game_id = game.id
JOIN team ON log.opponent_id = team.id
WHERE player.full_name = $1
  AND log.season >= $2 AND log.season <= $3
  AND team.def_rtg::float8 >= $4 AND team.def_rtg::float8 < $5
ORDER BY log.game_day, log.id
"#;

#[derive(Debug, sqlx::FromRow)]
struct LogRow {
    log_id: i64,
    season: i32,
    player_id: i64,
    full_name: String,
    game_day: NaiveDate,
    team: String,
    opponent: String,
    minutes: f64,
    field_goals: i32,
    field_goals_attempted: i32,
    field_goal_percentage: Option<f64>,
    three_pointers: i32,
    three_pointers_attempted: i32,
    three_pointer_percentage: Option<f64>,
    free_throws: i32,
    free_throws_attempted: i32,
    free_throw_percentage: Option<f64>,
    offensive_rebounds: i32,
    defensive_rebounds: i32,
    total_rebounds: i32,
    assists: i32,
    steals: i32,
    blocks: i32,
    turnovers: i32,
    personal_fouls: i32,
    points: i32,
    plus_minus: i32,
    def_rtg: f64,
    ts_pct: f64,
    pace: f64,
}

impl From<LogRow> for GameLogRecord {
    fn from(row: LogRow) -> Self {
        GameLogRecord {
            log_id: row.log_id,
            season: row.season,
            player_id: row.player_id,
            full_name: row.full_name,
            game_day: row.game_day,
            team: row.team,
            opponent: row.opponent,
            minutes: row.minutes,
            field_goals: row.field_goals,
            field_goals_attempted: row.field_goals_attempted,
            field_goal_percentage: row.field_goal_percentage,
            three_pointers: row.three_pointers,
            three_pointers_attempted: row.three_pointers_attempted,
            three_pointer_percentage: row.three_pointer_percentage,
            free_throws: row.free_throws,
            free_throws_attempted: row.free_throws_attempted,
            free_throw_percentage: row.free_throw_percentage,
            offensive_rebounds: row.offensive_rebounds,
            defensive_rebounds: row.defensive_rebounds,
            total_rebounds: row.total_rebounds,
            assists: row.assists,
            steals: row.steals,
            blocks: row.blocks,
            turnovers: row.turnovers,
            personal_fouls: row.personal_fouls,
            points: row.points,
            plus_minus: row.plus_minus,
            def_rtg: row.def_rtg,
            ts_pct: row.ts_pct,
            pace: row.pace,
        }
    }
}

/// Log repository reading from the stats Postgres database
#[derive(Debug, Clone)]
pub struct PgLogRepository {
    pool: PgPool,
}

impl PgLogRepository {
    /// Build a pool that opens connections on first use, so an unreachable
    /// database fails individual requests instead of startup
    pub fn connect_lazy(config: &DatabaseConfig) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.connect_timeout())
            .connect_lazy(&config.url)?;

        info!("Configured game log database pool (max {} connections)", config.max_connections);
        Ok(Self { pool })
    }
}

#[async_trait]
impl LogRepository for PgLogRepository {
    async fn fetch(&self, query: &LogQuery) -> Result<Vec<GameLogRecord>> {
        query.validate()?;

        let rows: Vec<LogRow> = sqlx::query_as(SELECT_PLAYER_LOGS)
            .bind(query.name.as_str())
            .bind(query.start_year)
            .bind(query.end_year)
            .bind(query.min_def_rtg)
            .bind(query.max_def_rtg)
            .fetch_all(&self.pool)
            .await?;

        debug!("Fetched {} game logs for {}", rows.len(), query.name);
        Ok(rows.into_iter().map(GameLogRecord::from).collect())
    }
}
