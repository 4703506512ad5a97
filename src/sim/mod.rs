//! Batch simulation over the round engine.

pub mod runner;

pub use runner::{SimConfig, SimReport, Simulation};
