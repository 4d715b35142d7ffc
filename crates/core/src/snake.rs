//! Snake body: ordered occupied cells, head first.

use std::collections::VecDeque;

use crate::error::{GameError, Result};
use crate::types::{Cell, Direction};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Cell>,
}

impl Snake {
    /// Build a straight snake of `length` cells with its body trailing behind `head`
    pub fn straight(head: Cell, heading: Direction, length: usize) -> Self {
        let back = heading.opposite();
        let mut body = VecDeque::with_capacity(length.max(1));
        let mut cell = head;
        body.push_back(cell);
        for _ in 1..length {
            cell = cell.step(back);
            body.push_back(cell);
        }
        Self { body }
    }

    /// Build a snake from explicit cells (head first)
    ///
    /// Rejects an empty body, duplicate cells, and neighbours that are not
    /// orthogonally adjacent.
    pub fn from_cells(cells: &[Cell]) -> Result<Self> {
        if cells.is_empty() {
            return Err(GameError::InvalidLayout("snake needs at least one cell".into()));
        }
        if let Some(pair) = cells.windows(2).find(|w| !w[0].is_adjacent(w[1])) {
            return Err(GameError::InvalidLayout(format!(
                "cells ({}, {}) and ({}, {}) are not adjacent",
                pair[0].gx, pair[0].gz, pair[1].gx, pair[1].gz
            )));
        }
        let body: VecDeque<Cell> = cells.iter().copied().collect();
        for (i, cell) in body.iter().enumerate() {
            if body.iter().skip(i + 1).any(|other| other == cell) {
                return Err(GameError::InvalidLayout(format!(
                    "cell ({}, {}) appears twice",
                    cell.gx, cell.gz
                )));
            }
        }
        Ok(Self { body })
    }

    pub fn head(&self) -> Cell {
        // Length is never below one.
        self.body[0]
    }

    pub fn tail(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    pub fn cells(&self) -> impl ExactSizeIterator<Item = Cell> + '_ {
        self.body.iter().copied()
    }

    pub(crate) fn push_head(&mut self, cell: Cell) {
        self.body.push_front(cell);
    }

    pub(crate) fn pop_tail(&mut self) -> Option<Cell> {
        if self.body.len() <= 1 {
            return None;
        }
        self.body.pop_back()
    }
}
