//! Cumulative win/loss bookkeeping.

use serde::{Deserialize, Serialize};

/// Snapshot of cumulative round outcomes.
///
/// Counters only ever grow: round resets never touch them, and exactly one
/// of the two increments per completed round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    /// Rounds resolved as a win.
    pub wins: u64,
    /// Rounds resolved as a loss.
    pub losses: u64,
}

impl Tally {
    /// Empty tally.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total completed rounds.
    #[must_use]
    pub const fn rounds(&self) -> u64 {
        self.wins + self.losses
    }

    /// Fraction of completed rounds won; 0.0 before any round completes.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.rounds() == 0 {
            0.0
        } else {
            self.wins as f64 / self.rounds() as f64
        }
    }

    pub(crate) fn record_win(&mut self) {
        self.wins += 1;
    }

    pub(crate) fn record_loss(&mut self) {
        self.losses += 1;
    }
}
