//! Round rules: the craps state machine.
//!
//! The rules are a pure function over a sum type:
//! - Come-out rolls resolve outright (craps, natural) or lock a point
//! - Point rolls resolve on the point or a 7
//! - Terminal states never transition further
//!
//! The engine drives this function but never interprets rule outcomes
//! beyond checking for terminal states.

pub mod transition;

pub use transition::{next_state, GameState};
