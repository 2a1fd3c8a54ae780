//! The rectangular island grid.

use islesim_types::Coord;

use crate::cell::Cell;

/// A dense row-major grid of [`Cell`]s.
///
/// Coordinates are zero-based internally; the one-based convention of
/// the external interface is translated before it reaches this type.
#[derive(Debug, Clone)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Assemble a grid from row-major cells. The loader guarantees
    /// `cells.len() == rows * cols`.
    pub(crate) const fn from_cells(rows: usize, cols: usize, cells: Vec<Cell>) -> Self {
        Self { rows, cols, cells }
    }

    /// Number of rows.
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub const fn cols(&self) -> usize {
        self.cols
    }

    const fn index(&self, coord: Coord) -> Option<usize> {
        if coord.row < self.rows && coord.col < self.cols {
            Some(coord.row * self.cols + coord.col)
        } else {
            None
        }
    }

    /// The cell at `coord`, or `None` when out of bounds.
    pub fn get(&self, coord: Coord) -> Option<&Cell> {
        self.index(coord).and_then(|i| self.cells.get(i))
    }

    /// Mutable access to the cell at `coord`.
    pub fn get_mut(&mut self, coord: Coord) -> Option<&mut Cell> {
        self.index(coord).and_then(|i| self.cells.get_mut(i))
    }

    /// Whether `coord` is on the grid and its terrain admits animals.
    pub fn is_accessible(&self, coord: Coord) -> bool {
        self.get(coord).is_some_and(Cell::is_accessible)
    }

    /// Every coordinate in row-major order. Phase loops iterate this
    /// snapshot so they can take mutable cell borrows as they go.
    pub fn coords(&self) -> Vec<Coord> {
        let mut out = Vec::with_capacity(self.rows * self.cols);
        for row in 0..self.rows {
            for col in 0..self.cols {
                out.push(Coord::new(row, col));
            }
        }
        out
    }

    /// Iterate all cells in row-major order with their coordinates.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, &Cell)> {
        self.cells.iter().enumerate().map(|(i, cell)| {
            (Coord::new(i / self.cols, i % self.cols), cell)
        })
    }

    /// Iterate all cells mutably in row-major order with their
    /// coordinates.
    pub fn cells_mut(&mut self) -> impl Iterator<Item = (Coord, &mut Cell)> {
        let cols = self.cols;
        self.cells.iter_mut().enumerate().map(move |(i, cell)| {
            (Coord::new(i / cols, i % cols), cell)
        })
    }
}
