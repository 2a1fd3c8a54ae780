//! Grid coordinates and the four orthogonal movement directions.
//!
//! The simulation grid is row-major with `(0, 0)` in the upper-left
//! corner: rows grow southward, columns grow eastward. Movement is
//! four-connected; diagonals do not exist in this model.

use serde::{Deserialize, Serialize};

/// A zero-based `(row, col)` position on the simulation grid.
///
/// The external population-insertion interface speaks one-based
/// coordinates; the conversion happens at the simulation boundary and
/// everything below it is zero-based.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Coord {
    /// Zero-based row index, growing southward.
    pub row: usize,
    /// Zero-based column index, growing eastward.
    pub col: usize,
}

impl Coord {
    /// Create a coordinate from zero-based row and column indices.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The adjacent coordinate one step in `direction`.
    ///
    /// Returns `None` when the step would leave the coordinate domain
    /// (stepping north or west off row/column zero). Such a step names
    /// a position outside any grid, so callers treat it exactly like an
    /// out-of-bounds destination.
    pub const fn step(self, direction: Direction) -> Option<Self> {
        let (row, col) = match direction {
            Direction::North => match self.row.checked_sub(1) {
                Some(row) => (row, self.col),
                None => return None,
            },
            Direction::South => match self.row.checked_add(1) {
                Some(row) => (row, self.col),
                None => return None,
            },
            Direction::West => match self.col.checked_sub(1) {
                Some(col) => (self.row, col),
                None => return None,
            },
            Direction::East => match self.col.checked_add(1) {
                Some(col) => (self.row, col),
                None => return None,
            },
        };
        Some(Self { row, col })
    }
}

impl core::fmt::Display for Coord {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the four orthogonal movement directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// One row up.
    North,
    /// One row down.
    South,
    /// One column left.
    West,
    /// One column right.
    East,
}

impl Direction {
    /// All four directions, in the order uniform draws index them.
    pub const ALL: [Self; 4] = [Self::North, Self::South, Self::West, Self::East];
}
