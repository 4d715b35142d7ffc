//! Simulation settings.

use crate::error::{GameError, Result};
use crate::types::{GRID_CELLS, MAX_GRID_CELLS, MIN_GRID_CELLS, STEP_INTERVAL_MS};

/// Tunables for one game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Cells per grid side; must be even so the grid stays centred on the origin
    pub grid_cells: u16,
    /// Simulation step length in milliseconds
    pub step_interval_ms: u32,
    /// Seed for food placement
    pub seed: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_cells: GRID_CELLS,
            step_interval_ms: STEP_INTERVAL_MS,
            seed: 1,
        }
    }
}

impl GameConfig {
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_grid_cells(mut self, grid_cells: u16) -> Self {
        self.grid_cells = grid_cells;
        self
    }

    /// Grid must be even and within `MIN_GRID_CELLS..=MAX_GRID_CELLS`
    pub fn validate(&self) -> Result<()> {
        let in_range = (MIN_GRID_CELLS..=MAX_GRID_CELLS).contains(&self.grid_cells);
        if !in_range || self.grid_cells % 2 != 0 {
            return Err(GameError::InvalidGridSize(self.grid_cells));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_odd_and_tiny_grids() {
        for cells in [0, 2, 3, 21] {
            assert_eq!(
                GameConfig::default().with_grid_cells(cells).validate(),
                Err(GameError::InvalidGridSize(cells))
            );
        }
        assert!(GameConfig::default().with_grid_cells(4).validate().is_ok());
    }

    #[test]
    fn rejects_grids_too_large_to_draw() {
        assert!(GameConfig::default()
            .with_grid_cells(MAX_GRID_CELLS)
            .validate()
            .is_ok());
        for cells in [MAX_GRID_CELLS + 2, 40_000, u16::MAX - 1] {
            assert_eq!(
                GameConfig::default().with_grid_cells(cells).validate(),
                Err(GameError::InvalidGridSize(cells))
            );
        }
    }
}
