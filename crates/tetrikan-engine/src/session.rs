//! Board session
//!
//! Owns the current board snapshot and applies input events to it one at a
//! time. Each event runs a transaction to completion, the resulting snapshot
//! replaces the current one wholesale, and observers are told through the
//! event dispatcher.

use crate::board::{Board, BoardSpec, MoveReport, RowClearReport, SyncReport, Transition};
use crate::task::TaskDraft;
use std::sync::Arc;
use tetrikan_core::{BoardEvent, Cell, Error, EventDispatcher, PlacementError, Result, TaskId};
use tokio::sync::broadcast;

/// Input delivered by a frontend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A dragged task was released over `cell`.
    Drop { task: TaskId, cell: Cell },
    /// A task was clicked; with the modifier held this is a rotate request.
    Click { task: TaskId, rotate_modifier: bool },
    /// The creation form was submitted.
    Create(TaskDraft),
    /// Manual repair: rebuild the grid from the task collection.
    Repair,
    /// Clear completed rows without another transaction.
    ClearRows,
}

/// What an input event did to the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Moved {
        report: MoveReport,
        cleared: RowClearReport,
    },
    Rotated {
        task: TaskId,
        cleared: RowClearReport,
    },
    Created {
        task: TaskId,
        sync: SyncReport,
    },
    Synchronized(SyncReport),
    RowsCleared(RowClearReport),
    /// The event needs no board change.
    Ignored,
}

/// Single writer of board snapshots.
pub struct BoardSession {
    board: Board,
    dispatcher: EventDispatcher,
    clear_rows_after_transaction: bool,
}

impl BoardSession {
    /// Creates a session on an existing board.
    pub fn new(board: Board) -> Self {
        Self {
            board,
            dispatcher: EventDispatcher::default_with_buffer(),
            clear_rows_after_transaction: true,
        }
    }

    /// Creates a session on an empty board.
    pub fn with_spec(spec: impl Into<Arc<BoardSpec>>) -> Self {
        Self::new(Board::new(spec))
    }

    pub fn with_dispatcher(mut self, dispatcher: EventDispatcher) -> Self {
        self.dispatcher = dispatcher;
        self
    }

    /// Whether moves and rotations are followed by a row clear.
    pub fn set_clear_rows_after_transaction(&mut self, enabled: bool) {
        self.clear_rows_after_transaction = enabled;
    }

    /// The current snapshot.
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn subscribe(&self) -> broadcast::Receiver<BoardEvent> {
        self.dispatcher.subscribe()
    }

    /// Replaces the current snapshot, e.g. after loading a file.
    pub fn replace(&mut self, board: Board) {
        self.board = board;
        self.dispatcher.publish(BoardEvent::SnapshotPublished {
            generation: self.board.generation(),
        });
    }

    /// Applies one input event.
    ///
    /// Rejections come back as errors, but the session always holds a valid
    /// board afterwards: the prior snapshot, or a re-synchronized one when
    /// the event named an unknown task.
    pub fn handle(&mut self, event: InputEvent) -> Result<Outcome> {
        tracing::debug!("Handling {:?}", event);
        match event {
            InputEvent::Drop { task, cell } => {
                let before = self.board.generation();
                let transition = self.board.move_task(&task, cell);
                let report = self.settle(transition)?;
                if self.board.generation() == before {
                    tracing::trace!("{} dropped on its own anchor", report.task);
                    return Ok(Outcome::Moved {
                        report,
                        cleared: RowClearReport::default(),
                    });
                }
                self.dispatcher.publish(BoardEvent::TaskMoved {
                    task: report.task.clone(),
                    from: report.from,
                    to: report.to,
                    status: report.status,
                });
                let cleared = self.clear_after_transaction();
                self.publish_snapshot();
                Ok(Outcome::Moved { report, cleared })
            }
            InputEvent::Click {
                task,
                rotate_modifier: false,
            } => {
                tracing::trace!("Click on {} without modifier", task);
                Ok(Outcome::Ignored)
            }
            InputEvent::Click {
                task,
                rotate_modifier: true,
            } => {
                let transition = self.board.rotate_task(&task);
                self.settle(transition)?;
                self.dispatcher.publish(BoardEvent::TaskRotated(task.clone()));
                let cleared = self.clear_after_transaction();
                self.publish_snapshot();
                Ok(Outcome::Rotated { task, cleared })
            }
            InputEvent::Create(draft) => {
                let inserted = self.board.insert_task(draft)?;
                self.board = inserted.board;
                self.dispatcher
                    .publish(BoardEvent::TaskCreated(inserted.task.clone()));
                self.publish_sync(&inserted.sync);
                self.publish_snapshot();
                Ok(Outcome::Created {
                    task: inserted.task,
                    sync: inserted.sync,
                })
            }
            InputEvent::Repair => {
                let (board, sync) = self.board.synchronize();
                self.board = board;
                self.publish_sync(&sync);
                self.publish_snapshot();
                Ok(Outcome::Synchronized(sync))
            }
            InputEvent::ClearRows => {
                let cleared = self.clear_rows();
                if !cleared.is_empty() {
                    self.publish_snapshot();
                }
                Ok(Outcome::RowsCleared(cleared))
            }
        }
    }

    /// Installs the transition's board and unwraps its result.
    fn settle<T>(&mut self, transition: Transition<T>) -> Result<T> {
        let (board, result) = transition.into_parts();
        let resynced = board.generation() != self.board.generation();
        self.board = board;
        match result {
            Ok(value) => Ok(value),
            Err(err) => {
                if !err.is_expected() {
                    self.dispatcher.publish(BoardEvent::Warning(err.to_string()));
                }
                if resynced && matches!(err, PlacementError::TaskNotFound { .. }) {
                    self.publish_snapshot();
                }
                Err(Error::from(err))
            }
        }
    }

    fn clear_after_transaction(&mut self) -> RowClearReport {
        if self.clear_rows_after_transaction {
            self.clear_rows()
        } else {
            RowClearReport::default()
        }
    }

    fn clear_rows(&mut self) -> RowClearReport {
        let (board, cleared) = self.board.clear_completed_rows();
        self.board = board;
        if !cleared.is_empty() {
            self.dispatcher.publish(BoardEvent::RowsCleared {
                rows: cleared.rows.clone(),
                removed: cleared.removed.len(),
                shrunk: cleared.shrunk.len(),
            });
        }
        cleared
    }

    fn publish_sync(&self, sync: &SyncReport) {
        self.dispatcher.publish(BoardEvent::Synchronized {
            unplaced: sync.unplaced.len(),
        });
        if !sync.is_complete() {
            let err = PlacementError::SynchronizationIncomplete {
                unplaced: sync.unplaced.clone(),
            };
            self.dispatcher.publish(BoardEvent::Warning(err.to_string()));
        }
    }

    fn publish_snapshot(&self) {
        self.dispatcher.publish(BoardEvent::SnapshotPublished {
            generation: self.board.generation(),
        });
    }
}
