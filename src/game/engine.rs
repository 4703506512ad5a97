//! The round engine: drives dice through the rules and keeps the books.
//!
//! ## Overview
//!
//! [`Game`] owns an injected [`DiceSource`] and runs rounds with it:
//! [`play`](Game::play) resets, rolls until the round resolves, and bumps
//! the win/loss tally. A stepwise driver (one throw per user action) can
//! run the same round by hand with [`reset`](Game::reset) and
//! [`roll_once`](Game::roll_once).
//!
//! ## Usage
//!
//! ```
//! use rust_craps::game::Game;
//!
//! let mut game = Game::seeded(42);
//! let outcome = game.play();
//!
//! assert!(outcome.is_terminal());
//! assert_eq!(game.tally().rounds(), 1);
//! assert!(!game.rolls().is_empty());
//! ```

use im::Vector;

use crate::core::{DiceRng, DiceSource};
use crate::error::Result;
use crate::game::history::RollHistory;
use crate::game::roll::RollRecord;
use crate::game::stats::Tally;
use crate::rules::{next_state, GameState};

/// A craps game: one in-progress round plus cumulative statistics.
///
/// Mutating operations take `&mut self`, so exactly one owner drives the
/// round; the roll history is the one piece of shared state, reachable from
/// other threads through the handle [`history`](Game::history) returns.
#[derive(Debug)]
pub struct Game<S> {
    dice: S,
    state: GameState,
    point: Option<u8>,
    rolls: RollHistory,
    tally: Tally,
}

impl Game<DiceRng> {
    /// Game over the deterministic ChaCha dice source.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(DiceRng::new(seed))
    }

    /// Game over a dice source seeded from OS entropy.
    ///
    /// # Errors
    ///
    /// Fails if the entropy read fails. An unusable randomness source is
    /// rejected here, at construction, never mid-round.
    pub fn from_entropy() -> Result<Self> {
        Ok(Self::new(DiceRng::from_entropy()?))
    }
}

impl<S: DiceSource> Game<S> {
    /// Game over any dice source.
    ///
    /// A fresh game is equivalent to a reset one: come-out state, no point,
    /// empty history, zeroed tally.
    #[must_use]
    pub fn new(dice: S) -> Self {
        Self {
            dice,
            state: GameState::ComeOut,
            point: None,
            rolls: RollHistory::new(),
            tally: Tally::new(),
        }
    }

    /// Start a fresh round: come-out state, no point, empty history.
    ///
    /// The win/loss tally is untouched. Concurrent history readers observe
    /// the cleared history as soon as this returns.
    pub fn reset(&mut self) {
        self.state = GameState::ComeOut;
        self.point = None;
        self.rolls.clear();
        tracing::debug!("round reset");
    }

    /// Throw the dice once and advance the round.
    ///
    /// Draws two dice, runs the rule table, locks the point on the
    /// come-out to point transition (the only place the point is ever set),
    /// appends the throw to the history, and returns the new state.
    pub fn roll_once(&mut self) -> GameState {
        let roll = self.dice.roll_pair();
        let next = next_state(self.state, roll.total(), self.point);
        if self.state == GameState::ComeOut && next == GameState::Point {
            self.point = Some(roll.total());
        }
        self.state = next;
        self.rolls.push(RollRecord::new(roll, next));
        tracing::trace!(
            die1 = roll.die1(),
            die2 = roll.die2(),
            total = roll.total(),
            state = %next,
            "dice thrown"
        );
        next
    }

    /// Play one complete round and return its outcome.
    ///
    /// Resets, then rolls until the round resolves; exactly one of the
    /// win/loss counters increments. A round ends with probability 1, but
    /// in no bounded number of throws.
    pub fn play(&mut self) -> GameState {
        self.reset();
        let mut state = self.roll_once();
        while !state.is_terminal() {
            state = self.roll_once();
        }
        match state {
            GameState::Win => self.tally.record_win(),
            _ => self.tally.record_loss(),
        }
        tracing::debug!(
            outcome = %state,
            throws = self.rolls.len(),
            point = ?self.point,
            "round complete"
        );
        state
    }

    /// Current state of the in-progress or just-finished round.
    ///
    /// An instantaneous read for the thread that owns the game; it carries
    /// no round-level guarantee relative to a concurrently running
    /// [`play`](Game::play).
    #[must_use]
    pub fn state(&self) -> GameState {
        self.state
    }

    /// The locked point, if this round has established one.
    #[must_use]
    pub fn point(&self) -> Option<u8> {
        self.point
    }

    /// Defensive copy of this round's roll history.
    ///
    /// Safe to call from a thread other than the driver (via a cloned
    /// [`history`](Game::history) handle when the driver owns the game);
    /// the returned vector never changes after it is handed out.
    #[must_use]
    pub fn rolls(&self) -> Vector<RollRecord> {
        self.rolls.snapshot()
    }

    /// Handle observer threads can hold to snapshot the history while this
    /// game is being driven.
    #[must_use]
    pub fn history(&self) -> RollHistory {
        self.rolls.clone()
    }

    /// Rounds won since construction.
    #[must_use]
    pub fn wins(&self) -> u64 {
        self.tally.wins
    }

    /// Rounds lost since construction.
    #[must_use]
    pub fn losses(&self) -> u64 {
        self.tally.losses
    }

    /// Snapshot of both counters.
    #[must_use]
    pub fn tally(&self) -> Tally {
        self.tally
    }

    /// Shut the game down.
    ///
    /// Consumes the game and logs the final tally. The game holds nothing
    /// that outlives it; the hook exists for symmetry with the host's own
    /// startup/shutdown sequence.
    pub fn close(self) {
        tracing::info!(
            wins = self.tally.wins,
            losses = self.tally.losses,
            rounds = self.tally.rounds(),
            "game closed"
        );
    }
}
