//! Grid coordinates and relative offsets.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Absolute grid cell, 0-indexed from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
}

impl Cell {
    /// Creates a new cell.
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Returns the cell displaced by `offset`, or `None` when a coordinate
    /// would overflow.
    pub fn offset_by(self, offset: Offset) -> Option<Cell> {
        let x = self.x.checked_add(offset.dx)?;
        let y = self.y.checked_add(offset.dy)?;
        Some(Cell::new(x, y))
    }

    /// Returns the neighbouring cell in direction `(dx, dy)`, or `None` when it
    /// would leave the non-negative quadrant.
    pub fn step(self, dx: isize, dy: isize) -> Option<Cell> {
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        Some(Cell::new(x, y))
    }

    /// Manhattan distance between two cells.
    pub fn manhattan(self, other: Cell) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(usize, usize)> for Cell {
    fn from((x, y): (usize, usize)) -> Self {
        Self::new(x, y)
    }
}

/// Offset of one block relative to its task's anchor.
///
/// Offsets inside a normalized footprint are never negative, so they share the
/// unsigned representation of [`Cell`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Offset {
    pub dx: usize,
    pub dy: usize,
}

impl Offset {
    /// The origin offset.
    pub const ORIGIN: Offset = Offset { dx: 0, dy: 0 };

    /// Creates a new offset.
    pub const fn new(dx: usize, dy: usize) -> Self {
        Self { dx, dy }
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "+({}, {})", self.dx, self.dy)
    }
}

impl From<(usize, usize)> for Offset {
    fn from((dx, dy): (usize, usize)) -> Self {
        Self::new(dx, dy)
    }
}
