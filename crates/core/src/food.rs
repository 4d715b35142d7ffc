//! Food placement.
//!
//! Random trials first, then a deterministic row-major scan. A full grid is an
//! error, never an occupied cell.

use std::collections::HashSet;

use crate::error::{GameError, Result};
use crate::grid::Grid;
use crate::rng::SimpleRng;
use crate::snake::Snake;
use crate::types::{Cell, FOOD_MAX_ATTEMPTS};

#[derive(Debug, Clone)]
pub struct FoodSpawner {
    max_attempts: u32,
}

impl Default for FoodSpawner {
    fn default() -> Self {
        Self::new(FOOD_MAX_ATTEMPTS)
    }
}

impl FoodSpawner {
    pub fn new(max_attempts: u32) -> Self {
        Self { max_attempts }
    }

    /// Pick a cell that the snake does not occupy
    pub fn respawn(&self, grid: &Grid, snake: &Snake, rng: &mut SimpleRng) -> Result<Cell> {
        let occupied: HashSet<Cell> = snake.cells().collect();
        let side = grid.cells() as u32;
        let half = grid.half();

        for _ in 0..self.max_attempts {
            let gx = rng.next_range(side) as i32 - half;
            let gz = rng.next_range(side) as i32 - half;
            let cell = Cell::new(gx, gz);
            if !occupied.contains(&cell) {
                return Ok(cell);
            }
        }

        tracing::debug!(
            attempts = self.max_attempts,
            snake_len = snake.len(),
            "random food placement exhausted, scanning grid"
        );

        grid.cells_row_major()
            .find(|cell| !occupied.contains(cell))
            .ok_or(GameError::EmptyGrid)
    }
}
