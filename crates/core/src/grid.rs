//! Grid module - playfield geometry
//!
//! The grid is `cells x cells`, centred on the origin. A cell `(gx, gz)` is
//! inside when both coordinates lie in `[-half, half)`.

use crate::types::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    cells: u16,
    half: i32,
}

impl Grid {
    /// Create a grid with `cells` cells per side
    pub fn new(cells: u16) -> Self {
        Self {
            cells,
            half: (cells / 2) as i32,
        }
    }

    /// Cells per side
    pub fn cells(&self) -> u16 {
        self.cells
    }

    pub fn half(&self) -> i32 {
        self.half
    }

    /// Total number of cells
    pub fn cell_count(&self) -> usize {
        (self.cells as usize) * (self.cells as usize)
    }

    pub fn is_inside_bounds(&self, cell: Cell) -> bool {
        cell.gx >= -self.half && cell.gx < self.half && cell.gz >= -self.half && cell.gz < self.half
    }

    /// All cells, `gz` ascending in the outer loop and `gx` ascending in the inner one
    pub fn cells_row_major(&self) -> impl Iterator<Item = Cell> {
        let half = self.half;
        (-half..half).flat_map(move |gz| (-half..half).map(move |gx| Cell::new(gx, gz)))
    }

    /// Map a grid cell to the centre of a world-space box of side `cell_size`
    ///
    /// The box rests on the ground plane, so `y` is half a cell.
    pub fn to_world(&self, cell: Cell, cell_size: f32) -> [f32; 3] {
        [
            cell.gx as f32 * cell_size,
            cell_size * 0.5,
            cell.gz as f32 * cell_size,
        ]
    }

    /// Map a grid cell to `(column, row)` for a top-down view with north on top
    ///
    /// Returns `None` for cells outside the grid.
    pub fn to_view(&self, cell: Cell) -> Option<(u16, u16)> {
        if !self.is_inside_bounds(cell) {
            return None;
        }
        let col = cell.gx + self.half;
        let row = self.half - 1 - cell.gz;
        Some((col as u16, row as u16))
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(crate::types::GRID_CELLS)
    }
}
