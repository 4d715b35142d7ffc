use std::hash::{Hash, Hasher};

use serde::Serialize;

use crate::types::{Cell, Direction, EndReason, GRID_CELLS};

/// Read-only view of a game, queried by the presentation layer once per frame.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GameSnapshot {
    /// Occupied cells, head first
    pub snake: Vec<Cell>,
    pub food: Option<Cell>,
    pub score: u32,
    pub ended: bool,
    pub end_reason: Option<EndReason>,
    pub heading: Direction,
    pub pending: Option<Direction>,
    pub grid_cells: u16,
    pub episode_id: u32,
    pub tick: u64,
}

impl GameSnapshot {
    /// Stable 64-bit digest of the snapshot.
    ///
    /// Uses FNV-1a rather than `DefaultHasher` so values are comparable across
    /// runs and platforms.
    pub fn fingerprint(&self) -> u64 {
        let mut h = Fnv1aHasher::new();
        self.hash(&mut h);
        h.finish()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            snake: Vec::new(),
            food: None,
            score: 0,
            ended: false,
            end_reason: None,
            heading: Direction::East,
            pending: None,
            grid_cells: GRID_CELLS,
            episode_id: 0,
            tick: 0,
        }
    }
}

#[derive(Debug, Clone)]
struct Fnv1aHasher {
    state: u64,
}

impl Fnv1aHasher {
    const OFFSET_BASIS: u64 = 0xcbf29ce484222325;
    const PRIME: u64 = 0x100000001b3;

    fn new() -> Self {
        Self {
            state: Self::OFFSET_BASIS,
        }
    }
}

impl Hasher for Fnv1aHasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.state ^= b as u64;
            self.state = self.state.wrapping_mul(Self::PRIME);
        }
    }
}
