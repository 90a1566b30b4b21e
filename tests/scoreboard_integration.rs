//! Integration tests for the scoreboard registry
//!
//! These tests drive the public API with a hand-set clock so that summary
//! ordering, including the start-time tie-break, is fully deterministic.

use chrono::{DateTime, Duration, TimeZone, Utc};
use live_scoreboard::domain::providers::{Clock, IdGenerator, UuidGenerator};
use live_scoreboard::{Match, MatchId, Scoreboard, ScoreboardError, Team};
use parking_lot::Mutex;
use std::sync::Arc;
use uuid::Uuid;

/// Clock returning whatever instant the test last set
struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    fn starting_at(instant: DateTime<Utc>) -> Arc<Self> {
        Arc::new(Self {
            now: Mutex::new(instant),
        })
    }

    fn set(&self, instant: DateTime<Utc>) {
        *self.now.lock() = instant;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock()
    }
}

/// Issues 1, 2, 3, ... as UUIDs
struct SequentialIds {
    next: Mutex<u128>,
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> MatchId {
        let mut next = self.next.lock();
        *next += 1;
        MatchId::from_uuid(Uuid::from_u128(*next))
    }
}

fn at(second: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 12, 1, 0, 0, 0).unwrap() + Duration::seconds(second)
}

fn rows(summary: &[&Match]) -> Vec<(String, i32, String, i32)> {
    summary
        .iter()
        .map(|game| {
            (
                game.home_team().name().to_string(),
                game.home_score(),
                game.away_team().name().to_string(),
                game.away_score(),
            )
        })
        .collect()
}

fn row(home: &str, home_score: i32, away: &str, away_score: i32) -> (String, i32, String, i32) {
    (home.to_string(), home_score, away.to_string(), away_score)
}

#[test]
fn test_summary_orders_world_cup_scenario() {
    let clock = ManualClock::starting_at(at(0));
    let mut board = Scoreboard::with_providers(Arc::clone(&clock), UuidGenerator);

    let fixtures = [
        ("Mexico", "Canada", (0, 5)),
        ("Spain", "Brazil", (10, 2)),
        ("Germany", "France", (2, 2)),
        ("Uruguay", "Italy", (6, 6)),
        ("Argentina", "Australia", (3, 1)),
    ];

    let mut started = Vec::new();
    for (second, (home, away, _)) in fixtures.iter().enumerate() {
        clock.set(at(second as i64));
        started.push(board.start_new_match(Team::new(*home), Team::new(*away)));
    }

    for (game, (_, _, (home_score, away_score))) in started.iter().zip(fixtures.iter()) {
        board
            .update_score(game.id(), *home_score, *away_score)
            .expect("match should be active");
    }

    assert_eq!(
        rows(&board.summary()),
        vec![
            row("Uruguay", 6, "Italy", 6),
            row("Spain", 10, "Brazil", 2),
            row("Mexico", 0, "Canada", 5),
            row("Argentina", 3, "Australia", 1),
            row("Germany", 2, "France", 2),
        ]
    );
}

#[test]
fn test_equal_totals_rank_later_start_first() {
    let clock = ManualClock::starting_at(at(0));
    let ids = SequentialIds {
        next: Mutex::new(0),
    };
    let mut board = Scoreboard::with_providers(Arc::clone(&clock), ids);

    let totals = [(6, 5), (3, 2), (7, 5), (2, 2), (4, 0)];
    let mut started = Vec::new();
    for (index, (home_score, away_score)) in totals.iter().enumerate() {
        clock.set(at(index as i64 + 1));
        let game = board.start_new_match(
            Team::new(format!("Home {}", index + 1)),
            Team::new(format!("Away {}", index + 1)),
        );
        board.update_score(game.id(), *home_score, *away_score).unwrap();
        started.push(game.id());
    }

    let order: Vec<MatchId> = board.summary().iter().map(|game| game.id()).collect();
    assert_eq!(
        order,
        vec![started[2], started[0], started[1], started[4], started[3]]
    );

    // Drop match 2 (total 5) so the remaining totals are 11, 12, 4, 4
    board.end_match(started[1]).unwrap();

    let order: Vec<MatchId> = board.summary().iter().map(|game| game.id()).collect();
    assert_eq!(order, vec![started[2], started[0], started[4], started[3]]);
}

#[test]
fn test_tie_break_ignores_insertion_order() {
    let clock = ManualClock::starting_at(at(10));
    let mut board = Scoreboard::with_providers(Arc::clone(&clock), UuidGenerator);

    // Inserted first but started later
    let late = board.start_new_match(Team::new("Late"), Team::new("Starter"));
    clock.set(at(5));
    let early = board.start_new_match(Team::new("Early"), Team::new("Starter"));

    board.update_score(late.id(), 1, 1).unwrap();
    board.update_score(early.id(), 2, 0).unwrap();

    let order: Vec<MatchId> = board.summary().iter().map(|game| game.id()).collect();
    assert_eq!(order, vec![late.id(), early.id()]);
}

#[test]
fn test_start_match_sets_score_to_nil_nil() {
    let mut board = Scoreboard::new();

    board.start_new_match(Team::new("Mexico"), Team::new("Canada"));

    assert_eq!(rows(&board.summary()), vec![row("Mexico", 0, "Canada", 0)]);
}

#[test]
fn test_update_score_only_touches_requested_match() {
    let mut board = Scoreboard::new();

    board.start_new_match(Team::new("Mexico"), Team::new("Canada"));
    let spain = board.start_new_match(Team::new("Spain"), Team::new("Brazil"));
    board.start_new_match(Team::new("Germany"), Team::new("France"));

    board.update_score(spain.id(), 20, 10).unwrap();

    let mut actual = rows(&board.summary());
    actual.sort();
    let mut expected = vec![
        row("Spain", 20, "Brazil", 10),
        row("Mexico", 0, "Canada", 0),
        row("Germany", 0, "France", 0),
    ];
    expected.sort();
    assert_eq!(actual, expected);
}

#[test]
fn test_end_match_removes_only_that_match() {
    let mut board = Scoreboard::new();

    let mexico = board.start_new_match(Team::new("Mexico"), Team::new("Canada"));
    board.start_new_match(Team::new("Spain"), Team::new("Brazil"));
    board.start_new_match(Team::new("Germany"), Team::new("France"));

    board.end_match(mexico.id()).unwrap();

    let mut pairs: Vec<(String, String)> = board
        .summary()
        .iter()
        .map(|game| (game.home_team().to_string(), game.away_team().to_string()))
        .collect();
    pairs.sort();
    assert_eq!(
        pairs,
        vec![
            ("Germany".to_string(), "France".to_string()),
            ("Spain".to_string(), "Brazil".to_string()),
        ]
    );
}

#[test]
fn test_update_score_of_unknown_match_fails() {
    let mut board = Scoreboard::new();
    let unknown = MatchId::new();

    let err = board.update_score(unknown, 0, 5).unwrap_err();

    assert_eq!(err, ScoreboardError::NotFound(unknown));
    assert!(err.to_string().starts_with("Match not found"));
}

#[test]
fn test_update_score_of_ended_match_fails() {
    let mut board = Scoreboard::new();
    let game = board.start_new_match(Team::new("Mexico"), Team::new("Canada"));
    board.end_match(game.id()).unwrap();

    let result = board.update_score(game.id(), 0, 5);

    assert!(matches!(result, Err(ScoreboardError::NotFound(id)) if id == game.id()));
}

#[test]
fn test_end_match_of_unknown_match_fails() {
    let mut board = Scoreboard::new();
    let unknown = MatchId::new();

    assert_eq!(
        board.end_match(unknown),
        Err(ScoreboardError::NotFound(unknown))
    );
}

#[test]
fn test_summary_is_stable_without_mutation() {
    let clock = ManualClock::starting_at(at(0));
    let mut board = Scoreboard::with_providers(Arc::clone(&clock), UuidGenerator);
    for (second, name) in ["A", "B", "C", "D"].iter().enumerate() {
        clock.set(at(second as i64 / 2));
        board.start_new_match(Team::new(*name), Team::new("Rival"));
    }

    let first: Vec<Match> = board.summary().into_iter().cloned().collect();
    let second: Vec<Match> = board.summary().into_iter().cloned().collect();

    assert_eq!(first, second);
}

#[test]
fn test_negative_scores_are_kept_as_given() {
    let mut board = Scoreboard::new();
    let game = board.start_new_match(Team::new("Mexico"), Team::new("Canada"));

    board.update_score(game.id(), -1, 3).unwrap();

    let stored = board.get_match(game.id()).unwrap();
    assert_eq!((stored.home_score(), stored.away_score()), (-1, 3));
    assert_eq!(stored.total_score(), 2);
}

#[test]
fn test_started_at_comes_from_injected_clock() {
    let clock = ManualClock::starting_at(at(42));
    let mut board = Scoreboard::with_providers(Arc::clone(&clock), UuidGenerator);

    let game = board.start_new_match(Team::new("Mexico"), Team::new("Canada"));

    assert_eq!(game.started_at(), at(42));
    assert!(game.updated_at().is_none());
}
