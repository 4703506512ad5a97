//! Core domain types: dice values and dice sources.
//!
//! This module contains the building blocks the rest of the crate is built
//! on. Nothing here knows about rounds or rules; it is dice all the way
//! down.

pub mod dice;
pub mod rng;

pub use dice::DiceRoll;
pub use rng::{DiceRng, DiceRngState, DiceSource, ScriptedDice};
