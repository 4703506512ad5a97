//! Round engine and bookkeeping.
//!
//! ## Key Types
//!
//! - `Game`: Drives rounds end-to-end over an injected dice source
//! - `RollRecord`: Immutable per-throw snapshot
//! - `RollHistory`: Cloneable cross-thread handle to the round's throws
//! - `Tally`: Cumulative win/loss counters

pub mod engine;
pub mod history;
pub mod roll;
pub mod stats;

pub use engine::Game;
pub use history::RollHistory;
pub use roll::RollRecord;
pub use stats::Tally;
