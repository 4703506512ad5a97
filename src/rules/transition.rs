//! The craps round rules as one transition function.
//!
//! The entire rule table lives in [`next_state`]: a single exhaustive match
//! over [`GameState`], auditable in one place. The function is pure, so the
//! win/loss rules are testable without randomness or an engine behind them.
//!
//! ```
//! use rust_craps::rules::{next_state, GameState};
//!
//! // Come-out 7 wins outright
//! assert_eq!(next_state(GameState::ComeOut, 7, None), GameState::Win);
//!
//! // With a point of 6 locked, a 7 loses
//! assert_eq!(next_state(GameState::Point, 7, Some(6)), GameState::Loss);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Phase of a craps round.
///
/// `ComeOut` is the unique initial state of every round; `Win` and `Loss`
/// are terminal. `Point` carries no number: the engine tracks the locked
/// point separately, capturing it exactly once on the come-out to point
/// transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameState {
    /// First roll of the round, no point established yet.
    ComeOut,
    /// A point is locked; rolling until the point repeats or a 7 shows.
    Point,
    /// Round resolved for the shooter.
    Win,
    /// Round resolved against the shooter.
    Loss,
}

impl GameState {
    /// True for `Win` and `Loss`, from which a round never continues.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Win | Self::Loss)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ComeOut => "come-out",
            Self::Point => "point",
            Self::Win => "win",
            Self::Loss => "loss",
        };
        f.write_str(name)
    }
}

/// Decide the next state from the current state, the dice total, and the
/// locked point.
///
/// The table:
/// - Come-out: 2, 3, 12 lose; 7, 11 win; anything else locks the point.
/// - Point: the point wins, 7 loses, anything else keeps rolling.
/// - Terminal states return themselves. A correctly driven round stops
///   rolling at the first terminal state, so this arm is a defensive
///   default, never an outcome.
///
/// `total` must come from two six-sided dice; that is debug-asserted, since
/// an impossible total means the driving loop is broken, not that the
/// caller handed in bad data. `point` participates only in the `Point` arm;
/// with no point locked, only a 7 can resolve the roll.
#[must_use]
pub fn next_state(state: GameState, total: u8, point: Option<u8>) -> GameState {
    debug_assert!((2..=12).contains(&total), "impossible two-die total {total}");

    match state {
        GameState::ComeOut => match total {
            2 | 3 | 12 => GameState::Loss,
            7 | 11 => GameState::Win,
            _ => GameState::Point,
        },
        GameState::Point => match total {
            t if Some(t) == point => GameState::Win,
            7 => GameState::Loss,
            _ => GameState::Point,
        },
        GameState::Win | GameState::Loss => state,
    }
}
