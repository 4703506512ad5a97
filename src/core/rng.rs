//! Deterministic dice generation.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the identical dice sequence
//! - **Injectable**: The engine rolls whatever [`DiceSource`] it is given,
//!   so tests substitute scripted throws
//! - **Serializable**: O(1) state capture and restore
//!
//! ## Usage
//!
//! ```
//! use rust_craps::core::{DiceRng, DiceSource};
//!
//! let mut dice = DiceRng::new(42);
//! let roll = dice.roll_pair();
//! assert!((2..=12).contains(&roll.total()));
//!
//! // Same seed, same dice
//! let mut replay = DiceRng::new(42);
//! assert_eq!(replay.roll_pair(), roll);
//! ```

use rand::rngs::OsRng;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::core::dice::DiceRoll;
use crate::error::Result;

/// Source of individual die values.
///
/// The contract is a uniform draw over 1..=6 per call. The engine treats a
/// value outside that range as a broken source, not as data.
pub trait DiceSource {
    /// Draw one die value in 1..=6.
    fn roll_die(&mut self) -> u8;

    /// Draw two dice as a single [`DiceRoll`].
    ///
    /// # Panics
    ///
    /// Panics if the source violates its contract and yields a die outside
    /// 1..=6.
    fn roll_pair(&mut self) -> DiceRoll {
        let first = self.roll_die();
        let second = self.roll_die();
        DiceRoll::new(first, second).expect("dice source yielded a die outside 1..=6")
    }
}

/// Deterministic dice source backed by ChaCha8.
///
/// ChaCha8 keeps draws fast while staying portable and reproducible: the
/// same seed produces the same dice on every platform, which is what makes
/// seeded replays and seeded simulations exact.
#[derive(Clone, Debug)]
pub struct DiceRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl DiceRng {
    /// Create a source with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a source seeded from operating-system entropy.
    ///
    /// # Errors
    ///
    /// Fails if the entropy read fails. An unusable randomness source is a
    /// startup failure, never a mid-round one.
    pub fn from_entropy() -> Result<Self> {
        let mut bytes = [0u8; 8];
        OsRng.try_fill_bytes(&mut bytes)?;
        Ok(Self::new(u64::from_le_bytes(bytes)))
    }

    /// Seed this source was created with.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Capture the current state for checkpointing.
    #[must_use]
    pub fn state(&self) -> DiceRngState {
        DiceRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore a source from a captured state.
    #[must_use]
    pub fn from_state(state: &DiceRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl DiceSource for DiceRng {
    fn roll_die(&mut self) -> u8 {
        self.inner.gen_range(1..=6)
    }
}

/// Serializable dice-source state for checkpointing.
///
/// Stores the seed plus the ChaCha8 word position, so capture is O(1) no
/// matter how many dice have been drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// Scripted dice source for tests and fixed replays.
///
/// Yields exactly the die values it was given, in order, and panics if the
/// script runs dry; a test that rolls more than it scripted is a broken
/// test.
#[derive(Clone, Debug, Default)]
pub struct ScriptedDice {
    script: VecDeque<u8>,
}

impl ScriptedDice {
    /// Script from individual die values.
    #[must_use]
    pub fn new<I: IntoIterator<Item = u8>>(dice: I) -> Self {
        Self {
            script: dice.into_iter().collect(),
        }
    }

    /// Script from (die1, die2) pairs, one pair per throw.
    #[must_use]
    pub fn from_pairs<I: IntoIterator<Item = (u8, u8)>>(pairs: I) -> Self {
        Self {
            script: pairs.into_iter().flat_map(|(a, b)| [a, b]).collect(),
        }
    }

    /// Die values left in the script.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl DiceSource for ScriptedDice {
    fn roll_die(&mut self) -> u8 {
        self.script.pop_front().expect("scripted dice exhausted")
    }
}
