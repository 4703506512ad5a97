//! Headless batch simulation.
//!
//! Plays a configured number of rounds on one seeded game and aggregates
//! the outcomes, for hosts that want house-edge style numbers without
//! driving the engine themselves. Identical configurations produce
//! identical reports.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::game::{Game, Tally};

/// Batch configuration.
///
/// ```
/// use rust_craps::sim::SimConfig;
///
/// let config = SimConfig::default().with_rounds(10_000).with_seed(7);
/// assert_eq!(config.rounds, 10_000);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Number of complete rounds to play.
    pub rounds: u64,
    /// Seed for the dice source.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            rounds: 1000,
            seed: 0,
        }
    }
}

impl SimConfig {
    /// Set the number of rounds.
    #[must_use]
    pub fn with_rounds(mut self, rounds: u64) -> Self {
        self.rounds = rounds;
        self
    }

    /// Set the dice seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Batch runner over one seeded game.
#[derive(Debug)]
pub struct Simulation {
    config: SimConfig,
}

impl Simulation {
    /// Create a runner for the given configuration.
    ///
    /// # Errors
    ///
    /// Rejects a zero-round configuration; an empty batch is a
    /// configuration mistake, not a report full of zeros.
    pub fn new(config: SimConfig) -> Result<Self> {
        if config.rounds == 0 {
            return Err(Error::EmptySimulation);
        }
        Ok(Self { config })
    }

    /// Play every configured round and aggregate the outcomes.
    #[must_use]
    pub fn run(&self) -> SimReport {
        let mut game = Game::seeded(self.config.seed);
        let history = game.history();
        let mut total_rolls = 0u64;
        let mut longest_round = 0usize;

        for _ in 0..self.config.rounds {
            game.play();
            let throws = history.len();
            total_rolls += throws as u64;
            longest_round = longest_round.max(throws);
        }

        let report = SimReport {
            tally: game.tally(),
            total_rolls,
            longest_round,
        };
        tracing::debug!(
            rounds = report.tally.rounds(),
            wins = report.tally.wins,
            losses = report.tally.losses,
            total_rolls = report.total_rolls,
            "simulation complete"
        );
        game.close();
        report
    }
}

/// Aggregated outcome of a simulation batch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimReport {
    /// Win/loss totals across the batch.
    pub tally: Tally,
    /// Dice throws across all rounds.
    pub total_rolls: u64,
    /// Throw count of the longest round.
    pub longest_round: usize,
}

impl SimReport {
    /// Fraction of rounds won.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        self.tally.win_rate()
    }
}
