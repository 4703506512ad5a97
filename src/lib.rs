//! # rust-craps
//!
//! A craps game engine: round rules, roll history, and win/loss statistics.
//!
//! ## Design Principles
//!
//! 1. **Pure Rules**: The entire transition table is one pure function over
//!    a sum type. Win/loss logic is testable with no randomness behind it.
//!
//! 2. **Injected Dice**: The engine rolls whatever `DiceSource` it is
//!    given. Production uses a seeded ChaCha8 source; tests script exact
//!    throws.
//!
//! 3. **Narrow Locking**: Only the roll history is shared across threads,
//!    behind its own mutex. Round state, the point, and the counters stay
//!    single-writer.
//!
//! ## Architecture
//!
//! - **Persistent History**: The roll history is an `im` vector, so
//!   snapshot reads are O(1) structural clones, never a live view.
//!
//! - **Value Snapshots**: Everything handed to callers (`DiceRoll`,
//!   `RollRecord`, `Tally`) is `Copy` or a persistent clone; engine
//!   internals cannot be mutated through a returned value.
//!
//! ## Modules
//!
//! - `core`: Dice values and dice sources
//! - `rules`: The craps state machine
//! - `game`: Round engine, roll history, tally
//! - `sim`: Headless batch simulation
//! - `error`: Crate error type

pub mod core;
pub mod rules;
pub mod game;
pub mod sim;
pub mod error;

// Re-export commonly used types
pub use crate::core::{DiceRng, DiceRngState, DiceRoll, DiceSource, ScriptedDice};

pub use crate::rules::{next_state, GameState};

pub use crate::game::{Game, RollHistory, RollRecord, Tally};

pub use crate::sim::{SimConfig, SimReport, Simulation};

pub use crate::error::{Error, Result};
