//! Dice values for a single throw.
//!
//! A [`DiceRoll`] is validated once, at construction, so everything
//! downstream can rely on both dice being in the 1..=6 face range and the
//! total being a real two-die total in 2..=12.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};

/// One throw of two six-sided dice.
///
/// `Copy`, so handing a roll to history or to a caller always hands out an
/// independent value; nobody can change a recorded throw underfoot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiceRoll {
    die1: u8,
    die2: u8,
}

impl DiceRoll {
    /// Create a roll from two die values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDie`] if either value is outside 1..=6.
    pub fn new(die1: u8, die2: u8) -> Result<Self> {
        if !(1..=6).contains(&die1) {
            return Err(Error::InvalidDie(die1));
        }
        if !(1..=6).contains(&die2) {
            return Err(Error::InvalidDie(die2));
        }
        Ok(Self { die1, die2 })
    }

    /// First die.
    #[must_use]
    pub const fn die1(&self) -> u8 {
        self.die1
    }

    /// Second die.
    #[must_use]
    pub const fn die2(&self) -> u8 {
        self.die2
    }

    /// Sum of both dice, always in 2..=12.
    #[must_use]
    pub const fn total(&self) -> u8 {
        self.die1 + self.die2
    }

    /// True for a natural (total of 7 or 11), an instant come-out win.
    #[must_use]
    pub const fn is_natural(&self) -> bool {
        matches!(self.total(), 7 | 11)
    }

    /// True for craps (total of 2, 3, or 12), an instant come-out loss.
    #[must_use]
    pub const fn is_craps(&self) -> bool {
        matches!(self.total(), 2 | 3 | 12)
    }
}

impl fmt::Display for DiceRoll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.die1, self.die2)
    }
}
