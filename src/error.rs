//! Crate error type.
//!
//! The taxonomy is deliberately small: every variant is a configuration
//! failure detected at construction time. Normal play has nothing
//! recoverable in it. A dice throw either succeeds deterministically given
//! its random inputs, or the engine itself is broken (a panic, not an
//! error).

use thiserror::Error;

/// Errors surfaced by fallible constructors.
#[derive(Debug, Error)]
pub enum Error {
    /// A die value outside the 1..=6 face range.
    #[error("die value {0} is outside 1..=6")]
    InvalidDie(u8),

    /// The operating-system entropy source failed while seeding dice.
    #[error("failed to seed dice from OS entropy: {0}")]
    Entropy(#[from] rand::Error),

    /// A simulation was configured with zero rounds.
    #[error("simulation must play at least one round")]
    EmptySimulation,
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
