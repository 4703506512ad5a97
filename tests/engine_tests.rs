//! Integration tests for the round engine.

use proptest::prelude::*;
use rust_craps::core::ScriptedDice;
use rust_craps::game::Game;
use rust_craps::rules::GameState;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

// =============================================================================
// End-to-End Scenarios (fixed dice)
// =============================================================================

#[test]
fn test_come_out_natural_ends_round_on_first_throw() {
    // (3,4) totals 7: an instant win; the scripted (2,3) is never drawn
    let mut game = Game::new(ScriptedDice::from_pairs([(3, 4), (2, 3)]));

    assert_eq!(game.play(), GameState::Win);
    assert_eq!(game.wins(), 1);
    assert_eq!(game.losses(), 0);

    let rolls = game.rolls();
    assert_eq!(rolls.len(), 1);
    assert_eq!(rolls[0].dice.die1(), 3);
    assert_eq!(rolls[0].dice.die2(), 4);
    assert_eq!(rolls[0].state, GameState::Win);

    // A natural resolves before any point is ever locked
    assert_eq!(game.point(), None);
}

#[test]
fn test_point_established_then_hit() {
    // 2+3 locks the point at 5; the second 5 hits it
    let mut game = Game::new(ScriptedDice::from_pairs([(2, 3), (1, 4)]));

    assert_eq!(game.play(), GameState::Win);

    let rolls = game.rolls();
    assert_eq!(rolls.len(), 2);
    assert_eq!(rolls[0].state, GameState::Point);
    assert_eq!(rolls[1].state, GameState::Win);
    assert_eq!(game.point(), Some(5));
}

#[test]
fn test_point_then_seven_out() {
    // 4+4 locks the point at 8, 3+3 keeps rolling, 3+4 sevens out
    let mut game = Game::new(ScriptedDice::from_pairs([(4, 4), (3, 3), (3, 4)]));

    assert_eq!(game.play(), GameState::Loss);
    assert_eq!(game.losses(), 1);

    let rolls = game.rolls();
    assert_eq!(rolls.len(), 3);
    assert_eq!(rolls[0].state, GameState::Point);
    assert_eq!(rolls[1].state, GameState::Point);
    assert_eq!(rolls[2].state, GameState::Loss);
    assert_eq!(game.point(), Some(8));
}

#[test]
fn test_come_out_craps_loses_immediately() {
    let mut game = Game::new(ScriptedDice::from_pairs([(1, 1)]));

    assert_eq!(game.play(), GameState::Loss);
    assert_eq!(game.wins(), 0);
    assert_eq!(game.losses(), 1);
    assert_eq!(game.rolls().len(), 1);
    assert_eq!(game.point(), None);
}

// =============================================================================
// Counter Conservation
// =============================================================================

#[test]
fn test_counters_conserve_round_count() {
    let mut game = Game::seeded(42);

    for played in 1..=50u64 {
        game.play();
        assert_eq!(game.wins() + game.losses(), played);
    }

    assert_eq!(game.tally().rounds(), 50);
}

#[test]
fn test_counters_survive_reset() {
    let mut game = Game::seeded(7);
    game.play();
    let tally = game.tally();

    game.reset();
    assert_eq!(game.tally(), tally);
}

// =============================================================================
// History Integrity
// =============================================================================

#[test]
fn test_reset_empties_history_immediately() {
    let mut game = Game::seeded(3);
    game.play();
    assert!(!game.rolls().is_empty());

    let observer = game.history();
    game.reset();
    assert!(observer.is_empty());
    assert!(game.rolls().is_empty());
}

#[test]
fn test_history_is_one_round_only() {
    let mut game = Game::seeded(12);

    game.play();
    let first_round = game.rolls();

    game.play();
    let second_round = game.rolls();

    // play() resets, so the history never accumulates across rounds
    assert_eq!(second_round.len(), game.history().len());
    assert!(first_round.len() >= 1);
    assert!(second_round.len() >= 1);
}

// =============================================================================
// Snapshot Isolation
// =============================================================================

#[test]
fn test_snapshots_never_change_after_the_fact() {
    let mut game = Game::seeded(5);
    game.play();

    let snapshot = game.rolls();
    let recorded: Vec<_> = snapshot.iter().copied().collect();

    game.play();
    game.play();

    let after: Vec<_> = snapshot.iter().copied().collect();
    assert_eq!(recorded, after);
}

#[test]
fn test_mutating_a_snapshot_leaves_the_engine_alone() {
    let mut game = Game::new(ScriptedDice::from_pairs([(3, 4)]));
    game.play();

    let mut snapshot = game.rolls();
    snapshot.clear();

    assert_eq!(game.rolls().len(), 1);
}

// =============================================================================
// Point Capture (property over seeds)
// =============================================================================

proptest! {
    #[test]
    fn prop_point_captured_from_first_throw_only(seed in any::<u64>()) {
        let mut game = Game::seeded(seed);
        game.play();

        let rolls = game.rolls();
        let first = rolls[0];

        if first.state == GameState::Point {
            // Locked on the come-out to point transition, to that exact total
            prop_assert_eq!(game.point(), Some(first.dice.total()));
        } else {
            // Round resolved on the come-out roll; no point was ever locked
            prop_assert_eq!(rolls.len(), 1);
            prop_assert_eq!(game.point(), None);
        }
    }

    #[test]
    fn prop_history_is_points_then_one_terminal(seed in any::<u64>()) {
        let mut game = Game::seeded(seed);
        let outcome = game.play();

        let rolls = game.rolls();
        prop_assert!(rolls.len() >= 1);

        for record in rolls.iter().take(rolls.len() - 1) {
            prop_assert_eq!(record.state, GameState::Point);
        }
        let last = rolls[rolls.len() - 1];
        prop_assert!(last.state.is_terminal());
        prop_assert_eq!(last.state, outcome);

        for record in rolls.iter() {
            prop_assert!((1..=6).contains(&record.dice.die1()));
            prop_assert!((1..=6).contains(&record.dice.die2()));
        }
    }
}

// =============================================================================
// Seed Determinism
// =============================================================================

#[test]
fn test_same_seed_same_rounds() {
    let mut a = Game::seeded(1234);
    let mut b = Game::seeded(1234);

    for _ in 0..20 {
        assert_eq!(a.play(), b.play());
        assert_eq!(a.rolls(), b.rolls());
    }

    assert_eq!(a.tally(), b.tally());
}

#[test]
fn test_different_seeds_diverge() {
    let mut a = Game::seeded(1);
    let mut b = Game::seeded(2);

    let outcomes_a: Vec<_> = (0..30).map(|_| (a.play(), a.rolls())).collect();
    let outcomes_b: Vec<_> = (0..30).map(|_| (b.play(), b.rolls())).collect();

    assert_ne!(outcomes_a, outcomes_b);
}

// =============================================================================
// Concurrent History Readers
// =============================================================================

#[test]
fn test_readers_only_ever_see_well_formed_snapshots() {
    let mut game = Game::seeded(99);
    let history = game.history();
    let stop = Arc::new(AtomicBool::new(false));

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let history = history.clone();
            let stop = Arc::clone(&stop);
            thread::spawn(move || {
                while !stop.load(Ordering::Relaxed) {
                    let snapshot = history.snapshot();
                    for (i, record) in snapshot.iter().enumerate() {
                        // Every record is a real throw...
                        assert!((1..=6).contains(&record.dice.die1()));
                        assert!((1..=6).contains(&record.dice.die2()));
                        // ...no roll ever records the come-out state...
                        assert_ne!(record.state, GameState::ComeOut);
                        // ...and only the final record may be terminal
                        if i + 1 < snapshot.len() {
                            assert_eq!(record.state, GameState::Point);
                        }
                    }
                }
            })
        })
        .collect();

    for _ in 0..200 {
        game.play();
    }
    stop.store(true, Ordering::Relaxed);

    for reader in readers {
        reader.join().unwrap();
    }
}

// =============================================================================
// Lifecycle
// =============================================================================

#[test]
fn test_close_consumes_the_game() {
    let mut game = Game::seeded(8);
    game.play();
    game.close();
}

#[test]
fn test_from_entropy_games_are_usable() {
    let mut game = Game::from_entropy().unwrap();
    let outcome = game.play();

    assert!(outcome.is_terminal());
    assert_eq!(game.tally().rounds(), 1);
}
