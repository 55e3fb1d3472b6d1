//! Shared game-log builders for unit tests

use chrono::NaiveDate;

use crate::models::GameLogRecord;

/// A plain 30-minute game with no made or attempted shots
pub fn blank_log() -> GameLogRecord {
    GameLogRecord {
        log_id: 1,
        season: 2023,
        player_id: 201939,
        full_name: "Stephen Curry".to_string(),
        game_day: NaiveDate::from_ymd_opt(2023, 1, 15).unwrap(),
        team: "GSW".to_string(),
        opponent: "BOS".to_string(),
        minutes: 30.0,
        field_goals: 0,
        field_goals_attempted: 0,
        field_goal_percentage: None,
        three_pointers: 0,
        three_pointers_attempted: 0,
        three_pointer_percentage: None,
        free_throws: 0,
        free_throws_attempted: 0,
        free_throw_percentage: None,
        offensive_rebounds: 0,
        defensive_rebounds: 0,
        total_rebounds: 0,
        assists: 0,
        steals: 0,
        blocks: 0,
        turnovers: 0,
        personal_fouls: 0,
        points: 0,
        plus_minus: 0,
        def_rtg: 110.0,
        ts_pct: 0.57,
        pace: 100.0,
    }
}

/// The single-game shooting line used across the engine tests
pub fn shooting_log() -> GameLogRecord {
    GameLogRecord {
        field_goals: 5,
        field_goals_attempted: 10,
        three_pointers: 2,
        three_pointers_attempted: 5,
        free_throws: 3,
        free_throws_attempted: 4,
        points: 15,
        assists: 6,
        offensive_rebounds: 1,
        defensive_rebounds: 4,
        total_rebounds: 5,
        steals: 2,
        blocks: 1,
        turnovers: 3,
        personal_fouls: 2,
        plus_minus: 7,
        ..blank_log()
    }
}
