//! Footprint validation.
//!
//! The hard rule: every block of a footprint lands on the grid on a cell that
//! is empty or already owned by the same task. The soft rule (spacing) keeps
//! auto-placed blocks from clumping and is only ever consulted by the
//! auto-placement scan, which drops it when nothing fits.

use crate::footprint::Footprint;
use crate::grid::Grid;
use serde::{Deserialize, Serialize};
use tetrikan_core::{Cell, TaskId};

/// Spacing heuristic for auto-placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpacingRule {
    /// Whether the spaced scan runs at all.
    pub enabled: bool,
    /// Most occupied orthogonal neighbours a candidate cell may have.
    pub max_occupied_neighbors: usize,
}

impl Default for SpacingRule {
    fn default() -> Self {
        Self {
            enabled: true,
            max_occupied_neighbors: 1,
        }
    }
}

/// Whether `footprint` anchored at `anchor` fits on `grid`.
///
/// Cells held by `owner` count as free, so a task can be re-validated where
/// it already sits (rotation, short moves).
pub fn is_placeable(
    grid: &Grid,
    anchor: Cell,
    footprint: &Footprint,
    owner: Option<&TaskId>,
) -> bool {
    footprint.cells_at(anchor).all(|cell| match cell {
        Some(cell) if grid.contains(cell) => match grid.get(cell) {
            None => true,
            Some(id) => Some(id) == owner,
        },
        _ => false,
    })
}

/// Single-cell spacing check: `cell` is empty and has at most
/// `rule.max_occupied_neighbors` occupied orthogonal neighbours.
pub fn is_spaced(grid: &Grid, cell: Cell, rule: &SpacingRule) -> bool {
    grid.contains(cell)
        && !grid.is_occupied(cell)
        && grid.occupied_neighbors(cell) <= rule.max_occupied_neighbors
}

/// Footprint check with the spacing rule applied to every block.
pub fn fits_spaced(
    grid: &Grid,
    anchor: Cell,
    footprint: &Footprint,
    owner: Option<&TaskId>,
    rule: &SpacingRule,
) -> bool {
    is_placeable(grid, anchor, footprint, owner)
        && footprint
            .cells_at(anchor)
            .all(|cell| cell.is_some_and(|cell| is_spaced(grid, cell, rule)))
}
