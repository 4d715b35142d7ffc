//! Error types for the simulation core.

use thiserror::Error;

use crate::types::{Cell, MAX_GRID_CELLS, MIN_GRID_CELLS};

/// Failures the core reports instead of silently breaking an invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Every grid cell is covered by the snake, so food has nowhere to go.
    #[error("no free cell left for food")]
    EmptyGrid,

    #[error(
        "grid size {0} must be even and between {min} and {max}",
        min = MIN_GRID_CELLS,
        max = MAX_GRID_CELLS
    )]
    InvalidGridSize(u16),

    #[error("invalid snake layout: {0}")]
    InvalidLayout(String),

    #[error("food cell ({}, {}) overlaps the snake or lies outside the grid", .0.gx, .0.gz)]
    InvalidFood(Cell),
}

pub type Result<T> = std::result::Result<T, GameError>;
