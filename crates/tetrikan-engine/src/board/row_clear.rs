//! Line clears in the terminal band.
//!
//! A full row of the terminal band is snapshotted into the retro history,
//! its blocks are removed from the tasks covering it, and the rows above it
//! (within the band) drop down to close the gap. Rows outside the terminal
//! band never move.

use super::Board;
use crate::footprint::Footprint;
use crate::task::Task;
use serde::{Deserialize, Serialize};
use tetrikan_core::{Cell, TaskId};

/// Contents of a cleared row at the moment it was cleared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedRow {
    /// Position in the retro history; never reused.
    pub slot: usize,
    /// Grid row the contents were taken from.
    pub row: usize,
    /// `(x, owner)` for every cell, left to right.
    pub cells: Vec<(usize, TaskId)>,
}

/// A task removed because every one of its blocks was cleared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemovedBlock {
    /// The task as it was just before the clear.
    pub task: Task,
    pub anchor: Cell,
    /// Slot of the saved row holding the task's topmost cleared block.
    pub slot: usize,
}

/// Cleared content kept for a history display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Retro {
    pub saved_rows: Vec<SavedRow>,
    pub removed_blocks: Vec<RemovedBlock>,
}

impl Retro {
    pub fn is_empty(&self) -> bool {
        self.saved_rows.is_empty() && self.removed_blocks.is_empty()
    }

    /// Next free slot number.
    pub fn next_slot(&self) -> usize {
        self.saved_rows.iter().map(|r| r.slot + 1).max().unwrap_or(0)
    }
}

/// What a row clear did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowClearReport {
    /// Cleared rows, top to bottom.
    pub rows: Vec<usize>,
    /// Tasks removed entirely.
    pub removed: Vec<TaskId>,
    /// Tasks that lost some blocks.
    pub shrunk: Vec<TaskId>,
}

impl RowClearReport {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl Board {
    /// Full rows of the terminal band, top to bottom.
    pub fn completed_rows(&self) -> Vec<usize> {
        self.layout()
            .terminal()
            .rows()
            .filter(|y| self.grid.row_is_full(*y))
            .collect()
    }

    /// Clears every full row of the terminal band.
    ///
    /// Without full rows the board comes back unchanged, so a second call
    /// right after a clear does nothing.
    pub fn clear_completed_rows(&self) -> (Board, RowClearReport) {
        let rows = self.completed_rows();
        if rows.is_empty() {
            return (self.clone(), RowClearReport::default());
        }

        let band = self.layout().terminal().clone();
        let mut next = self.clone();
        let mut report = RowClearReport {
            rows: rows.clone(),
            ..Default::default()
        };

        let first_slot = next.retro.next_slot();
        let slot_of = |y: usize| rows.iter().position(|r| *r == y).map(|i| first_slot + i);
        for (i, y) in rows.iter().enumerate() {
            let cells = self
                .grid
                .row(*y)
                .iter()
                .enumerate()
                .filter_map(|(x, owner)| owner.clone().map(|id| (x, id)))
                .collect();
            next.retro.saved_rows.push(SavedRow {
                slot: first_slot + i,
                row: *y,
                cells,
            });
        }

        // Rows that drop into the gap sit above a cleared row inside the band.
        let shift = |cell: Cell| -> Cell {
            if !band.contains_row(cell.y) {
                return cell;
            }
            let below = rows.iter().filter(|r| **r > cell.y).count();
            Cell::new(cell.x, cell.y + below)
        };

        for tasks in next.columns.iter_mut() {
            let mut kept: Vec<Task> = Vec::with_capacity(tasks.len());
            for mut task in tasks.drain(..) {
                let Some(anchor) = task.anchor else {
                    kept.push(task);
                    continue;
                };
                let cells = task.absolute_cells();
                let (cleared, surviving): (Vec<Cell>, Vec<Cell>) =
                    cells.into_iter().partition(|c| rows.contains(&c.y));

                if surviving.is_empty() {
                    let slot = cleared
                        .iter()
                        .filter_map(|c| slot_of(c.y))
                        .min()
                        .unwrap_or(first_slot);
                    tracing::debug!("Task {} cleared completely", task.id);
                    report.removed.push(task.id.clone());
                    next.retro.removed_blocks.push(RemovedBlock {
                        task,
                        anchor,
                        slot,
                    });
                    continue;
                }

                if !cleared.is_empty() {
                    tracing::debug!(
                        "Task {} loses {} of {} blocks",
                        task.id,
                        cleared.len(),
                        cleared.len() + surviving.len()
                    );
                    report.shrunk.push(task.id.clone());
                }
                if let Some((anchor, footprint)) =
                    Footprint::from_cells(surviving.into_iter().map(shift))
                {
                    task.anchor = Some(anchor);
                    task.footprint = footprint;
                }
                kept.push(task);
            }
            *tasks = kept;
        }

        next.restamp();
        next.commit();

        tracing::info!(
            "Cleared rows {:?}: {} task(s) removed, {} shrunk (generation {})",
            report.rows,
            report.removed.len(),
            report.shrunk.len(),
            next.generation
        );
        tracing::trace!("Grid after row clear:\n{}", next.grid);
        (next, report)
    }
}
