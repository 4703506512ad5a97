//! Shared roll history for the current round.
//!
//! The history is the only engine state touched by more than one thread:
//! the driving thread appends during rolls, observer threads snapshot it
//! for display. One mutex scoped to this container guards both sides;
//! everything else in the engine stays single-writer and lock-free.

use im::Vector;
use parking_lot::Mutex;
use std::sync::Arc;

use crate::game::roll::RollRecord;

/// Cloneable handle to the current round's roll history.
///
/// Clones share the same underlying container, so an observer thread can
/// hold a handle while the driving thread owns the engine.
/// [`snapshot`](RollHistory::snapshot) returns an independent persistent
/// vector: the copy is O(1), and later appends or resets never show through
/// a snapshot already taken.
#[derive(Clone, Debug, Default)]
pub struct RollHistory {
    rolls: Arc<Mutex<Vector<RollRecord>>>,
}

impl RollHistory {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the history as of this instant, never a live view.
    #[must_use]
    pub fn snapshot(&self) -> Vector<RollRecord> {
        self.rolls.lock().clone()
    }

    /// Number of throws recorded this round.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rolls.lock().len()
    }

    /// True if no throw has been recorded this round.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rolls.lock().is_empty()
    }

    pub(crate) fn push(&self, record: RollRecord) {
        self.rolls.lock().push_back(record);
    }

    pub(crate) fn clear(&self) {
        self.rolls.lock().clear();
    }
}
