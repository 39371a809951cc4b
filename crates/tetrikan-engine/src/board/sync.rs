//! Full grid rebuild.

use super::Board;
use crate::grid::Grid;
use crate::task::Task;
use crate::validator::{fits_spaced, is_placeable, SpacingRule};
use tetrikan_core::{Band, Cell, PlacementError, TaskId};

/// Anchor assigned by the auto-placement scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoPlacement {
    pub task: TaskId,
    pub anchor: Cell,
    /// Placed only after the spacing rule was dropped.
    pub relaxed: bool,
}

/// What a synchronization did to each task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Tasks whose existing anchor was kept.
    pub kept: usize,
    /// Tasks whose stale anchor was discarded.
    pub displaced: Vec<TaskId>,
    /// Tasks that received a new anchor.
    pub auto_placed: Vec<AutoPlacement>,
    /// Tasks left without an anchor.
    pub unplaced: Vec<TaskId>,
}

impl SyncReport {
    /// Whether every task ended up placed.
    pub fn is_complete(&self) -> bool {
        self.unplaced.is_empty()
    }

    /// The report as a diagnostic: `SynchronizationIncomplete` when some
    /// tasks could not be placed.
    pub fn into_result(self) -> Result<Self, PlacementError> {
        if self.is_complete() {
            Ok(self)
        } else {
            Err(PlacementError::SynchronizationIncomplete {
                unplaced: self.unplaced,
            })
        }
    }
}

impl Board {
    /// Rebuilds the grid from the task collection.
    ///
    /// Tasks whose anchor still fits keep it, in band and collection order.
    /// The rest are auto-placed band by band (ordered by shape family) at the
    /// first row-major anchor of their band, trying the spacing rule before
    /// accepting any non-colliding anchor. Tasks that fit nowhere stay
    /// unplaced and are listed in the report; the board is always usable.
    pub fn synchronize(&self) -> (Board, SyncReport) {
        let mut next = self.clone();
        let mut grid = Grid::new(self.grid.width(), self.grid.height());
        let mut report = SyncReport::default();

        for task in next.columns.iter_mut().flatten() {
            let Some(anchor) = task.anchor else {
                continue;
            };
            if is_placeable(&grid, anchor, &task.footprint, None) {
                grid.stamp(anchor, &task.footprint, &task.id);
                report.kept += 1;
            } else {
                tracing::warn!(
                    "Task {} has an invalid or overlapping anchor {}, re-placing",
                    task.id,
                    anchor
                );
                task.anchor = None;
                report.displaced.push(task.id.clone());
            }
        }

        let spacing = next.spec.spacing;
        for (band, tasks) in next.spec.layout.bands().iter().zip(next.columns.iter_mut()) {
            let mut pending: Vec<&mut Task> = tasks.iter_mut().filter(|t| !t.is_placed()).collect();
            pending.sort_by_key(|t| t.shape);

            for task in pending {
                match auto_place(&grid, band, task, &spacing) {
                    Some((anchor, relaxed)) => {
                        grid.stamp(anchor, &task.footprint, &task.id);
                        task.anchor = Some(anchor);
                        tracing::debug!(
                            "Assigned task {} to {}{}",
                            task.id,
                            anchor,
                            if relaxed { " after relaxing spacing" } else { "" }
                        );
                        report.auto_placed.push(AutoPlacement {
                            task: task.id.clone(),
                            anchor,
                            relaxed,
                        });
                    }
                    None => {
                        tracing::warn!(
                            "Could not find an empty anchor for task {} in band {}",
                            task.id,
                            band.status
                        );
                        report.unplaced.push(task.id.clone());
                    }
                }
            }
        }

        if !report.is_complete() {
            tracing::warn!(
                "Synchronization left {} task(s) unplaced: {:?}",
                report.unplaced.len(),
                report.unplaced
            );
        }

        next.grid = grid;
        next.commit();
        tracing::debug!(
            "Synchronized generation {}: {} kept, {} auto-placed, {} unplaced",
            next.generation,
            report.kept,
            report.auto_placed.len(),
            report.unplaced.len()
        );
        tracing::trace!("Grid after synchronization:\n{}", next.grid);
        (next, report)
    }
}

/// Row-major scan of `band` for an anchor; the flag tells whether spacing
/// had to be dropped.
fn auto_place(grid: &Grid, band: &Band, task: &Task, spacing: &SpacingRule) -> Option<(Cell, bool)> {
    let anchors = || {
        band.rows()
            .flat_map(move |y| (0..grid.width()).map(move |x| Cell::new(x, y)))
    };

    if spacing.enabled {
        if let Some(anchor) =
            anchors().find(|a| fits_spaced(grid, *a, &task.footprint, None, spacing))
        {
            return Some((anchor, false));
        }
    }
    anchors()
        .find(|a| is_placeable(grid, *a, &task.footprint, None))
        .map(|anchor| (anchor, spacing.enabled))
}
