//! Single-slot direction mailbox.
//!
//! Holds at most one pending heading change between ticks. The step simulator
//! empties it at the start of every tick.

use crate::types::Direction;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputBuffer {
    pending: Option<Direction>,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Try to buffer `dir` for the next tick.
    ///
    /// Refused when a direction is already waiting or when `dir` would reverse
    /// `current` in place.
    pub fn offer(&mut self, dir: Direction, current: Direction) -> bool {
        if self.pending.is_some() || dir.is_opposite(current) {
            return false;
        }
        self.pending = Some(dir);
        true
    }

    /// Remove and return the pending direction.
    pub fn take(&mut self) -> Option<Direction> {
        self.pending.take()
    }

    pub fn pending(&self) -> Option<Direction> {
        self.pending
    }

    pub fn clear(&mut self) {
        self.pending = None;
    }
}
