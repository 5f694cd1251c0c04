//! Grid representation and utilities for the Game of Life engine

use crate::error::ConfigurationError;
use anyhow::Result;
use itertools::iproduct;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A rectangular Game of Life grid.
///
/// Cells are stored in row-major order: index `i` maps to
/// `row = i / columns`, `column = i % columns`. Coordinates outside the
/// grid are treated as permanently dead, so the boundary behaves as a
/// fixed dead border rather than a wrapping torus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub rows: usize,
    pub columns: usize,
    pub cells: Vec<bool>,
}

impl Grid {
    /// Create a new all-dead grid
    pub fn new(rows: usize, columns: usize) -> Result<Self, ConfigurationError> {
        if rows < 1 || columns < 1 {
            return Err(ConfigurationError::InvalidDimensions { rows, columns });
        }
        Ok(Self {
            rows,
            columns,
            cells: vec![false; rows * columns],
        })
    }

    /// Create a grid from a 2D boolean array
    pub fn from_cells(cells: Vec<Vec<bool>>) -> Result<Self> {
        if cells.is_empty() {
            anyhow::bail!("Grid cannot be empty");
        }

        let rows = cells.len();
        let columns = cells[0].len();

        if columns == 0 {
            anyhow::bail!("Grid rows cannot be empty");
        }

        // Verify all rows have the same length
        for (i, row) in cells.iter().enumerate() {
            if row.len() != columns {
                anyhow::bail!("Row {} has length {}, expected {}", i, row.len(), columns);
            }
        }

        let flat_cells: Vec<bool> = cells.into_iter().flatten().collect();

        Ok(Self {
            rows,
            columns,
            cells: flat_cells,
        })
    }

    /// An all-dead grid with the same dimensions as this one
    pub fn cleared(&self) -> Self {
        Self {
            rows: self.rows,
            columns: self.columns,
            cells: vec![false; self.rows * self.columns],
        }
    }

    /// Convert 2D coordinates to a 1D row-major index
    #[inline]
    pub fn index(&self, row: usize, column: usize) -> usize {
        row * self.columns + column
    }

    /// Get cell value at coordinates.
    ///
    /// Out-of-range coordinates resolve to dead rather than failing.
    pub fn get(&self, row: usize, column: usize) -> bool {
        if row < self.rows && column < self.columns {
            self.cells[self.index(row, column)]
        } else {
            false
        }
    }

    /// Signed-coordinate lookup used when probing neighbors, which may
    /// lie above or left of the grid.
    pub fn is_alive(&self, row: isize, column: isize) -> bool {
        if row < 0 || column < 0 {
            false
        } else {
            self.get(row as usize, column as usize)
        }
    }

    /// Set cell value at coordinates.
    ///
    /// Silently ignores out-of-range coordinates; editing outside the grid
    /// is defined as a no-op, not an error.
    pub fn set(&mut self, row: usize, column: usize, value: bool) {
        if row < self.rows && column < self.columns {
            let idx = self.index(row, column);
            self.cells[idx] = value;
        }
    }

    /// Flip a single cell, the editing-mode primitive.
    ///
    /// Silently ignores out-of-range coordinates.
    pub fn toggle(&mut self, row: usize, column: usize) {
        if row < self.rows && column < self.columns {
            let idx = self.index(row, column);
            self.cells[idx] = !self.cells[idx];
        }
    }

    /// Row-major view of the cells for rendering
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Get all living cell coordinates
    pub fn live_cells(&self) -> Vec<(usize, usize)> {
        iproduct!(0..self.rows, 0..self.columns)
            .filter(|&(row, column)| self.get(row, column))
            .collect()
    }

    /// Count total living cells
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Check if the grid has no living cells
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| !cell)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for column in 0..self.columns {
                let symbol = if self.get(row, column) { "⬛" } else { "⬜" };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
