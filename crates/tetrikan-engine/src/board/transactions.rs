//! Move, rotate and insert transactions.

use super::{Board, SyncReport, Transition};
use crate::search::find_nearest_anchor;
use crate::task::{Task, TaskDraft};
use crate::validator::is_placeable;
use tetrikan_core::{Cell, DraftError, PlacementError, ShapeFamily, Status, TaskId};

/// A committed move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveReport {
    pub task: TaskId,
    /// Anchor before the move, `None` if the task was unplaced.
    pub from: Option<Cell>,
    /// Anchor after the move.
    pub to: Cell,
    /// Cell the caller asked for.
    pub requested: Cell,
    /// Status after the move.
    pub status: Status,
}

impl MoveReport {
    /// Whether the task landed somewhere other than the requested cell.
    pub fn was_redirected(&self) -> bool {
        self.to != self.requested
    }
}

/// A task appended by [`Board::insert_task`].
#[derive(Debug, Clone)]
pub struct Inserted {
    pub board: Board,
    pub task: TaskId,
    pub sync: SyncReport,
}

impl Board {
    /// Moves a task so its anchor lands on `target`, or on the nearest free
    /// anchor in `target`'s band when the footprint does not fit there.
    ///
    /// The band, and with it the status, follows `target.y`. Within a band
    /// the task keeps its place in the collection; across bands it is
    /// appended to the new band. An unknown task re-synchronizes the board.
    pub fn move_task(&self, id: &TaskId, target: Cell) -> Transition<MoveReport> {
        let Some((from_band, index)) = self.locate(id) else {
            tracing::warn!("Task {} not found for move, re-synchronizing", id);
            let (board, _) = self.synchronize();
            return Transition::rejected(board, PlacementError::TaskNotFound { task: id.clone() });
        };

        let layout = self.layout();
        let Some(to_band) = layout.band_index_for_row(target.y).filter(|_| layout.contains(target))
        else {
            tracing::warn!("Drop target {} for task {} is outside the grid", target, id);
            return Transition::rejected(
                self.clone(),
                PlacementError::OutOfBounds {
                    cell: target,
                    width: layout.width(),
                    height: layout.height(),
                },
            );
        };
        let band = &layout.bands()[to_band];
        let task = &self.columns[from_band][index];

        if task.anchor == Some(target) {
            tracing::debug!("Task {} already anchored at {}", id, target);
            return Transition::ok(
                self.clone(),
                MoveReport {
                    task: id.clone(),
                    from: task.anchor,
                    to: target,
                    requested: target,
                    status: task.status,
                },
            );
        }

        let anchor = if is_placeable(&self.grid, target, &task.footprint, Some(id)) {
            target
        } else {
            match find_nearest_anchor(
                &self.grid,
                target,
                &task.footprint,
                band,
                Some(id),
                &self.spec.search,
            ) {
                Some(anchor) => anchor,
                None => {
                    tracing::warn!("No valid anchor for task {} near {}", id, target);
                    return Transition::rejected(
                        self.clone(),
                        PlacementError::NoValidAnchor {
                            task: id.clone(),
                            requested: target,
                            status: band.status,
                        },
                    );
                }
            }
        };

        let mut next = self.clone();
        let mut moved = next.columns[from_band].remove(index);
        let from = moved.anchor;
        if let Some(old) = from {
            next.grid.erase(old, &moved.footprint, &moved.id);
        }
        moved.anchor = Some(anchor);
        moved.status = band.status;
        next.grid.stamp(anchor, &moved.footprint, &moved.id);
        if to_band == from_band {
            next.columns[to_band].insert(index, moved);
        } else {
            next.columns[to_band].push(moved);
        }
        next.commit();

        tracing::info!(
            "Moved task {} to {} in band {} (generation {})",
            id,
            anchor,
            band.status,
            next.generation
        );
        Transition::ok(
            next,
            MoveReport {
                task: id.clone(),
                from,
                to: anchor,
                requested: target,
                status: band.status,
            },
        )
    }

    /// Rotates a placed task's footprint 90 degrees clockwise in place.
    ///
    /// The anchor never changes. When the rotated footprint does not fit
    /// there the board is returned unchanged with `InvalidRotation`.
    pub fn rotate_task(&self, id: &TaskId) -> Transition<()> {
        let Some((band, index)) = self.locate(id) else {
            tracing::warn!("Task {} not found for rotation, re-synchronizing", id);
            let (board, _) = self.synchronize();
            return Transition::rejected(board, PlacementError::TaskNotFound { task: id.clone() });
        };

        let task = &self.columns[band][index];
        let Some(anchor) = task.anchor else {
            tracing::warn!("Task {} cannot rotate before it is placed", id);
            return Transition::rejected(self.clone(), PlacementError::NotPlaced { task: id.clone() });
        };

        let rotated = task.footprint.rotated_cw();
        if !is_placeable(&self.grid, anchor, &rotated, Some(id)) {
            tracing::debug!("Rotation of task {} at {} rejected", id, anchor);
            return Transition::rejected(
                self.clone(),
                PlacementError::InvalidRotation { task: id.clone() },
            );
        }

        let mut next = self.clone();
        next.columns[band][index].footprint = rotated;
        next.restamp();
        next.commit();

        tracing::info!("Rotated task {} (generation {})", id, next.generation);
        Transition::ok(next, ())
    }

    /// Validates a draft, appends it as an unplaced task to the first band,
    /// and synchronizes so it receives an anchor.
    ///
    /// Without a shape hint the shape cycles through the families by the
    /// current task count.
    pub fn insert_task(&self, draft: TaskDraft) -> Result<Inserted, DraftError> {
        let draft = draft.validate(self.spec.max_skills)?;
        let shape = draft
            .shape
            .unwrap_or_else(|| ShapeFamily::round_robin(self.task_count()));
        let status = self.layout().first().status;

        let task = Task::new(TaskId::generate(), draft.name, shape, draft.skills)
            .with_details(draft.description, draft.company)
            .with_status(status);
        let id = task.id.clone();
        tracing::info!("Creating task {} ({}, {} blocks)", id, shape, task.block_count());

        let mut next = self.clone();
        next.columns[0].push(task);
        let (board, sync) = next.synchronize();
        Ok(Inserted {
            board,
            task: id,
            sync,
        })
    }
}
