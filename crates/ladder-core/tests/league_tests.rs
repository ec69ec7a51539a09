// Integration tests for the league through the crate's public API: ladder
// growth, promotions over several matches, and save/load through the file
// store.

use ladder_core::render::render;
use ladder_core::store::{JsonFileStore, LeagueStore};
use ladder_core::{capacity, League, LeagueError, Row, RowGrowth};

// ===========================================================================
// Test helpers
// ===========================================================================

fn league_of(names: &[&str]) -> League {
    let mut league = League::new();
    for name in names {
        league.add_player(name).unwrap();
    }
    league
}

fn row_sizes(league: &League) -> Vec<usize> {
    league.players().iter().map(Vec::len).collect()
}

fn generated_names(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("player_{i}")).collect()
}

// ===========================================================================
// Growth
// ===========================================================================

#[test]
fn every_full_row_matches_its_capacity() {
    let mut league = League::new();
    for name in generated_names(40) {
        league.add_player(&name).unwrap();
    }

    let sizes = row_sizes(&league);
    let (last, full) = sizes.split_last().unwrap();
    for (row, size) in full.iter().enumerate() {
        assert_eq!(*size, capacity(row), "row {row} should be full");
    }
    assert!(*last >= 1 && *last <= capacity(sizes.len() - 1));
    assert_eq!(sizes.iter().sum::<usize>(), 40);
}

#[test]
fn each_added_name_appears_exactly_once() {
    let names = generated_names(25);
    let mut league = League::with_growth(RowGrowth::Triangular);
    for name in &names {
        league.add_player(name).unwrap();
    }

    for name in &names {
        let hits = league.players().iter().flatten().filter(|n| *n == name).count();
        assert_eq!(hits, 1, "{name} should be seated once");
    }
}

#[test]
fn rejected_adds_leave_league_untouched() {
    let mut league = league_of(&["Amy", "Bob", "Charlie"]);
    let before = league.players().to_vec();

    for bad in ["Amy", "Bob ", " Charlie", "Dan#", "Eve Lynn", ""] {
        assert!(league.add_player(bad).is_err(), "{bad:?} should be refused");
    }
    assert_eq!(league.players(), before.as_slice());
    assert_eq!(league.player_count(), 3);
}

// ===========================================================================
// Matches
// ===========================================================================

#[test]
fn sequential_wins_crown_daniel() {
    let mut league = league_of(&["Amy", "Bob", "Charlie", "Daniel", "Eve"]);
    league.record_win("Bob", "Amy").unwrap();
    league.record_win("Daniel", "Charlie").unwrap();
    league.record_win("Daniel", "Bob").unwrap();

    assert_eq!(league.winner(), Some("Daniel"));
    assert_eq!(row_sizes(&league), vec![1, 2, 2]);
    assert_eq!(render(&league), "Daniel\nAmy Bob\nCharlie Eve");
}

#[test]
fn adjacency_violations_share_one_message() {
    let mut league = league_of(&["Amy", "Bob", "Charlie", "Daniel", "Eve"]);
    for (winner, loser) in [("Eve", "Daniel"), ("Charlie", "Daniel"), ("Amy", "Daniel")] {
        let err = league.record_win(winner, loser).unwrap_err();
        assert_eq!(
            err,
            LeagueError::InvalidMatch {
                winner: winner.into(),
                loser: loser.into()
            }
        );
        assert!(err.to_string().contains("must be one row below"));
    }
    assert_eq!(league.winner(), Some("Amy"));
}

#[test]
fn players_added_after_wins_go_to_bottom() {
    let mut league = league_of(&["Amy", "Bob", "Charlie", "Daniel"]);
    league.record_win("Daniel", "Bob").unwrap();
    league.add_player("Eve").unwrap();

    let expected: Vec<Row> = vec![
        vec!["Amy".into()],
        vec!["Daniel".into(), "Charlie".into()],
        vec!["Bob".into(), "Eve".into()],
    ];
    assert_eq!(league.players(), expected.as_slice());
}

// ===========================================================================
// Persistence
// ===========================================================================

#[test]
fn file_round_trip_reproduces_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("league.json");
    let store = JsonFileStore::default();

    let mut league = League::new();
    for name in generated_names(12) {
        league.add_player(&name).unwrap();
    }
    league.record_win("player_1", "player_0").unwrap();
    league.record_win("player_4", "player_2").unwrap();

    store.save(&path, &league).unwrap();
    let loaded = store.load(&path, league.growth()).unwrap();

    assert_eq!(loaded.players(), league.players());
    assert_eq!(loaded.winner(), Some("player_1"));
}
