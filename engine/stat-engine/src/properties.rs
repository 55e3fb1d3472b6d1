//! Property tests for the stats pipeline

use proptest::prelude::*;

use crate::aggregation::{per_100_factor, per_game};
use crate::config::RelativeShootingBaseline;
use crate::fixtures::blank_log;
use crate::models::{GameLogRecord, MiscStats};
use crate::percentages::calculate_percentages;
use crate::pipeline::StatsPipeline;
use crate::projection::project;
use crate::schema::BoxScoreField;

/// A shooting line where makes never exceed attempts and every attempt count is non-zero
fn shooting_line() -> impl Strategy<Value = GameLogRecord> {
    (1i32..25, 0i32..25, 1i32..12, 0i32..12, 1i32..15, 0i32..15, 10.0..48.0f64, 90.0..110.0f64)
        .prop_map(|(fga, fg, tpa, tp, fta, ft, minutes, pace)| {
            let field_goals = fg % (fga + 1);
            let three_pointers_attempted = tpa.min(fga);
            let three_pointers = (tp % (tpa + 1)).min(three_pointers_attempted).min(field_goals);
            let free_throws = ft % (fta + 1);
            GameLogRecord {
                field_goals,
                field_goals_attempted: fga,
                three_pointers,
                three_pointers_attempted,
                free_throws,
                free_throws_attempted: fta,
                points: 2 * field_goals + three_pointers + free_throws,
                assists: fg % 9,
                total_rebounds: ft % 11,
                minutes,
                pace,
                ..blank_log()
            }
        })
}

proptest! {
    #[test]
    fn uniform_logs_average_to_their_value(log in shooting_line(), games in 1usize..20) {
        let logs = vec![log.clone(); games];
        let view = per_game(&project(&logs)).unwrap();

        for field in BoxScoreField::ALL {
            let value = view.require(field.key()).unwrap();
            prop_assert!((value - field.read(&log)).abs() < 1e-9);
        }
    }

    #[test]
    fn trading_minutes_for_pace_keeps_possessions(
        minutes in 1.0..48.0f64,
        pace in 80.0..120.0f64,
        k in 0.25..4.0f64,
    ) {
        let base = per_100_factor(&MiscStats { minutes, pace, def_rtg: 110.0 }).unwrap();
        let traded = per_100_factor(&MiscStats { minutes: minutes * k, pace: pace / k, def_rtg: 110.0 }).unwrap();
        let longer = per_100_factor(&MiscStats { minutes: minutes * k, pace, def_rtg: 110.0 }).unwrap();

        prop_assert!((base - traded).abs() < 1e-9 * base);
        prop_assert!((base / k - longer).abs() < 1e-9 * base);
    }

    #[test]
    fn percentages_stay_in_bounds(logs in prop::collection::vec(shooting_line(), 1..10)) {
        let stats = calculate_percentages(&project(&logs), 0.57, RelativeShootingBaseline::Own);

        for rate in [&stats.field_goal, &stats.three_point, &stats.free_throw] {
            let value = rate.clone().unwrap();
            prop_assert!((0.0..=100.0).contains(&value));
        }
        // Three points per field goal attempt is the ceiling
        let ts = stats.true_shooting.clone().unwrap();
        prop_assert!((0.0..=150.0).contains(&ts));
    }

    #[test]
    fn tables_are_rectangular(logs in prop::collection::vec(shooting_line(), 1..10)) {
        let tables = StatsPipeline::default().run(&logs).unwrap();

        prop_assert_eq!(tables.len(), 4);
        for table in &tables {
            let ids: Vec<u32> = table.box_score_stats.iter().map(|c| c.id).collect();
            let expected: Vec<u32> = (1..=table.box_score_stats.len() as u32).collect();
            prop_assert_eq!(&ids, &expected);

            for row in &table.stat_types {
                prop_assert_eq!(row.box_scores.len(), table.box_score_stats.len());
                let row_ids: Vec<u32> = row.box_scores.iter().map(|c| c.id).collect();
                prop_assert_eq!(&row_ids, &expected);
            }
        }
    }

    #[test]
    fn repeated_runs_are_bit_identical(logs in prop::collection::vec(shooting_line(), 1..10)) {
        let pipeline = StatsPipeline::default();
        prop_assert_eq!(pipeline.run(&logs), pipeline.run(&logs));
    }
}
