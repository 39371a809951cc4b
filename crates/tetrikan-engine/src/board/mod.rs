//! Board snapshots and the transactions that replace them.
//!
//! A [`Board`] is an immutable value: every transaction reads `&self` and
//! returns a new board. This module is split into submodules:
//! - `sync`: full grid rebuild and auto-placement
//! - `transactions`: move, rotate, and task insertion
//! - `row_clear`: line clears in the terminal band and the retro history
//! - `demo`: the sample board

mod demo;
mod row_clear;
mod sync;
mod transactions;

pub use row_clear::{RemovedBlock, Retro, RowClearReport, SavedRow};
pub use sync::{AutoPlacement, SyncReport};
pub use transactions::{Inserted, MoveReport};

use crate::grid::Grid;
use crate::search::SearchLimits;
use crate::task::Task;
use crate::validator::SpacingRule;
use std::sync::Arc;
use tetrikan_core::{BandLayout, Cell, PlacementError, Status, TaskId};
use thiserror::Error;

/// Static board parameters shared by every snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSpec {
    pub layout: BandLayout,
    pub spacing: SpacingRule,
    pub search: SearchLimits,
    pub max_skills: usize,
}

impl Default for BoardSpec {
    fn default() -> Self {
        Self {
            layout: BandLayout::standard(),
            spacing: SpacingRule::default(),
            search: SearchLimits::default(),
            max_skills: 5,
        }
    }
}

/// Outcome of a transaction: the board to publish next and what happened.
///
/// On error the board is the unchanged prior snapshot, except for
/// [`PlacementError::TaskNotFound`], which hands back a re-synchronized board.
#[derive(Debug, Clone)]
#[must_use]
pub struct Transition<T> {
    pub board: Board,
    pub result: Result<T, PlacementError>,
}

impl<T> Transition<T> {
    pub(crate) fn ok(board: Board, value: T) -> Self {
        Self {
            board,
            result: Ok(value),
        }
    }

    pub(crate) fn rejected(board: Board, error: PlacementError) -> Self {
        Self {
            board,
            result: Err(error),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }

    pub fn into_parts(self) -> (Board, Result<T, PlacementError>) {
        (self.board, self.result)
    }
}

/// Violation found by [`Board::verify`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntegrityError {
    #[error("Task {task} appears more than once")]
    DuplicateTask { task: TaskId },

    #[error("Task {task} has status {status} but is stored in band {band}")]
    WrongBand {
        task: TaskId,
        status: Status,
        band: Status,
    },

    #[error("Task {task} covers {cell}, outside the grid")]
    OutOfBounds { task: TaskId, cell: Cell },

    #[error("Cell {cell} is claimed by both {first} and {second}")]
    Overlap {
        cell: Cell,
        first: TaskId,
        second: TaskId,
    },

    #[error("Cell {cell} holds {found:?}, expected {expected:?}")]
    CellMismatch {
        cell: Cell,
        expected: Option<TaskId>,
        found: Option<TaskId>,
    },
}

/// One snapshot of the board: tasks grouped by band plus the derived grid.
#[derive(Debug, Clone)]
pub struct Board {
    spec: Arc<BoardSpec>,
    /// One collection per band, in band order.
    columns: Vec<Vec<Task>>,
    grid: Grid,
    retro: Retro,
    generation: u64,
}

impl Board {
    /// Creates an empty board.
    pub fn new(spec: impl Into<Arc<BoardSpec>>) -> Self {
        let spec = spec.into();
        let grid = Grid::new(spec.layout.width(), spec.layout.height());
        let columns = vec![Vec::new(); spec.layout.len()];
        Self {
            spec,
            columns,
            grid,
            retro: Retro::default(),
            generation: 0,
        }
    }

    /// Builds a board from a task list and synchronizes it.
    ///
    /// Tasks go to the band of their status in list order. Repeated ids
    /// keep the first occurrence.
    pub fn from_tasks<I>(spec: impl Into<Arc<BoardSpec>>, tasks: I) -> (Self, SyncReport)
    where
        I: IntoIterator<Item = Task>,
    {
        let mut board = Self::new(spec);
        for task in tasks {
            if board.task(&task.id).is_some() {
                tracing::warn!("Dropping duplicate task {}", task.id);
                continue;
            }
            let idx = board.spec.layout.index_of(task.status);
            board.columns[idx].push(task);
        }
        board.synchronize()
    }

    pub(crate) fn with_retro(mut self, retro: Retro) -> Self {
        self.retro = retro;
        self
    }

    pub fn spec(&self) -> &BoardSpec {
        &self.spec
    }

    pub fn layout(&self) -> &BandLayout {
        &self.spec.layout
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn retro(&self) -> &Retro {
        &self.retro
    }

    /// Number of snapshots committed since the board was created.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Every task, in band order then collection order.
    pub fn tasks(&self) -> impl Iterator<Item = &Task> + '_ {
        self.columns.iter().flatten()
    }

    /// Tasks in the band of `status`, in collection order.
    pub fn tasks_in(&self, status: Status) -> &[Task] {
        &self.columns[self.spec.layout.index_of(status)]
    }

    pub fn task(&self, id: &TaskId) -> Option<&Task> {
        self.locate(id).map(|(band, idx)| &self.columns[band][idx])
    }

    /// Band index and collection index of a task.
    pub fn locate(&self, id: &TaskId) -> Option<(usize, usize)> {
        self.columns.iter().enumerate().find_map(|(band, tasks)| {
            tasks
                .iter()
                .position(|task| &task.id == id)
                .map(|idx| (band, idx))
        })
    }

    /// The task covering `cell`, if any.
    pub fn task_at(&self, cell: Cell) -> Option<&Task> {
        self.grid.get(cell).and_then(|id| self.task(id))
    }

    pub fn task_count(&self) -> usize {
        self.columns.iter().map(Vec::len).sum()
    }

    pub fn placed_count(&self) -> usize {
        self.tasks().filter(|task| task.is_placed()).count()
    }

    pub fn unplaced_count(&self) -> usize {
        self.task_count() - self.placed_count()
    }

    /// Checks that the grid is exactly the union of all placed footprints,
    /// that no cell is claimed twice, and that each task sits in the band
    /// collection of its status.
    pub fn verify(&self) -> Result<(), IntegrityError> {
        let width = self.grid.width();
        let mut expected: Vec<Option<&TaskId>> = vec![None; width * self.grid.height()];
        let mut seen: Vec<&TaskId> = Vec::with_capacity(self.task_count());

        for (band, tasks) in self.spec.layout.bands().iter().zip(&self.columns) {
            for task in tasks {
                if seen.contains(&&task.id) {
                    return Err(IntegrityError::DuplicateTask {
                        task: task.id.clone(),
                    });
                }
                seen.push(&task.id);

                if task.status != band.status {
                    return Err(IntegrityError::WrongBand {
                        task: task.id.clone(),
                        status: task.status,
                        band: band.status,
                    });
                }

                for cell in task.absolute_cells() {
                    if !self.grid.contains(cell) {
                        return Err(IntegrityError::OutOfBounds {
                            task: task.id.clone(),
                            cell,
                        });
                    }
                    let slot = &mut expected[cell.y * width + cell.x];
                    if let Some(first) = slot {
                        return Err(IntegrityError::Overlap {
                            cell,
                            first: (*first).clone(),
                            second: task.id.clone(),
                        });
                    }
                    *slot = Some(&task.id);
                }
            }
        }

        for (idx, want) in expected.into_iter().enumerate() {
            let cell = Cell::new(idx % width, idx / width);
            let found = self.grid.get(cell);
            if want != found {
                return Err(IntegrityError::CellMismatch {
                    cell,
                    expected: want.cloned(),
                    found: found.cloned(),
                });
            }
        }
        Ok(())
    }

    /// Re-derives the grid from the task collection.
    pub(crate) fn restamp(&mut self) {
        self.grid = Grid::from_tasks(self.grid.width(), self.grid.height(), self.tasks());
    }

    /// Marks `self` as a new snapshot.
    pub(crate) fn commit(&mut self) {
        self.generation += 1;
        debug_assert_eq!(self.verify(), Ok(()));
    }
}
