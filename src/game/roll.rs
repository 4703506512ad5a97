//! Per-throw history records.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::DiceRoll;
use crate::rules::GameState;

/// Immutable record of one dice throw and the state it produced.
///
/// Created exactly once per throw and never mutated afterward. Both fields
/// are `Copy`, so a record handed to a caller is always an independent
/// snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollRecord {
    /// The dice as thrown.
    pub dice: DiceRoll,
    /// State of the round after evaluating this throw.
    pub state: GameState,
}

impl RollRecord {
    /// Record one throw.
    #[must_use]
    pub const fn new(dice: DiceRoll, state: GameState) -> Self {
        Self { dice, state }
    }
}

impl fmt::Display for RollRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.dice, self.state)
    }
}
