//! Nearest-free-anchor search.
//!
//! Bounded breadth-first search over the cells of one band for an anchor at
//! which a whole footprint fits. Orthogonal neighbours are expanded before
//! diagonal ones; that order is the tie-break between equally near cells.

use crate::footprint::Footprint;
use crate::grid::Grid;
use crate::validator::is_placeable;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tetrikan_core::{Band, Cell, TaskId};

/// Expansion order: up, right, down, left, then the diagonals.
const DIRECTIONS: [(isize, isize); 8] = [
    (0, -1),
    (1, 0),
    (0, 1),
    (-1, 0),
    (1, -1),
    (1, 1),
    (-1, 1),
    (-1, -1),
];

/// Bounds on the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchLimits {
    /// Stop once this many candidates were collected.
    pub max_candidates: usize,
    /// Once a candidate exists, stop expanding past this distance.
    pub settle_distance: usize,
    /// Never expand past this distance.
    pub max_distance: usize,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            max_candidates: 5,
            settle_distance: 2,
            max_distance: 5,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Candidate {
    cell: Cell,
    distance: usize,
}

/// Finds the anchor nearest to `start` inside `band` where `footprint` fits.
///
/// `start` itself wins without searching when it already fits. Otherwise the
/// collected candidates are ranked by search distance, then by Manhattan
/// distance to `start`; discovery order breaks the remaining ties.
pub fn find_nearest_anchor(
    grid: &Grid,
    start: Cell,
    footprint: &Footprint,
    band: &Band,
    owner: Option<&TaskId>,
    limits: &SearchLimits,
) -> Option<Cell> {
    let in_band = |cell: Cell| grid.contains(cell) && band.contains_row(cell.y);
    let fits = |cell: Cell| in_band(cell) && is_placeable(grid, cell, footprint, owner);

    if !in_band(start) {
        tracing::debug!("Search start {} lies outside band {}", start, band.status);
        return None;
    }
    if fits(start) {
        return Some(start);
    }

    let mut visited = vec![false; grid.width() * grid.height()];
    let mark = |visited: &mut Vec<bool>, cell: Cell| -> bool {
        let idx = cell.y * grid.width() + cell.x;
        !std::mem::replace(&mut visited[idx], true)
    };

    let mut queue = VecDeque::new();
    let mut candidates: Vec<Candidate> = Vec::new();
    let mut expanded = 0usize;

    mark(&mut visited, start);
    queue.push_back(Candidate {
        cell: start,
        distance: 0,
    });

    while let Some(current) = queue.pop_front() {
        if current.distance > limits.max_distance {
            break;
        }
        if !candidates.is_empty() && current.distance > limits.settle_distance {
            break;
        }
        expanded += 1;

        if fits(current.cell) {
            candidates.push(current);
            if candidates.len() >= limits.max_candidates {
                break;
            }
        }

        for (dx, dy) in DIRECTIONS {
            let Some(next) = current.cell.step(dx, dy) else {
                continue;
            };
            if in_band(next) && mark(&mut visited, next) {
                queue.push_back(Candidate {
                    cell: next,
                    distance: current.distance + 1,
                });
            }
        }
    }

    candidates.sort_by_key(|c| (c.distance, c.cell.manhattan(start)));
    match candidates.first() {
        Some(best) => {
            tracing::debug!(
                "Nearest anchor {} at distance {} ({} candidates, {} cells expanded)",
                best.cell,
                best.distance,
                candidates.len(),
                expanded
            );
            Some(best.cell)
        }
        None => {
            tracing::debug!(
                "No anchor within distance {} of {} ({} cells expanded)",
                limits.max_distance,
                start,
                expanded
            );
            None
        }
    }
}
