//! Event system for board observers
//!
//! Provides:
//! - Event types describing committed board snapshots and recovered failures
//! - Event dispatcher for publishing events to subscribers
//!
//! Publishing is a synchronous, non-blocking send; no async runtime is needed
//! on the publishing side.

use crate::types::{Cell, Status, TaskId};
use tokio::sync::broadcast;

/// Board event types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardEvent {
    /// A new board snapshot replaced the previous one
    SnapshotPublished {
        /// Generation number of the published snapshot.
        generation: u64,
    },
    /// A task was created and appended to the first band
    TaskCreated(TaskId),
    /// A task moved to a new anchor
    TaskMoved {
        /// The moved task.
        task: TaskId,
        /// Previous anchor, if the task was placed.
        from: Option<Cell>,
        /// New anchor.
        to: Cell,
        /// Status after the move.
        status: Status,
    },
    /// A task footprint was rotated
    TaskRotated(TaskId),
    /// Completed rows were cleared from the terminal band
    RowsCleared {
        /// Cleared row indices.
        rows: Vec<usize>,
        /// Tasks removed entirely.
        removed: usize,
        /// Tasks that lost some blocks.
        shrunk: usize,
    },
    /// The grid was rebuilt from the task collection
    Synchronized {
        /// Tasks left without an anchor.
        unplaced: usize,
    },
    /// A transaction was rejected or recovered
    Warning(String),
}

impl std::fmt::Display for BoardEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardEvent::SnapshotPublished { generation } => {
                write!(f, "Snapshot #{}", generation)
            }
            BoardEvent::TaskCreated(task) => write!(f, "Created {}", task),
            BoardEvent::TaskMoved {
                task,
                from,
                to,
                status,
            } => match from {
                Some(from) => write!(f, "Moved {} from {} to {} ({})", task, from, to, status),
                None => write!(f, "Placed {} at {} ({})", task, to, status),
            },
            BoardEvent::TaskRotated(task) => write!(f, "Rotated {}", task),
            BoardEvent::RowsCleared {
                rows,
                removed,
                shrunk,
            } => write!(
                f,
                "Cleared rows {:?} ({} removed, {} shrunk)",
                rows, removed, shrunk
            ),
            BoardEvent::Synchronized { unplaced } => {
                write!(f, "Synchronized ({} unplaced)", unplaced)
            }
            BoardEvent::Warning(msg) => write!(f, "Warning: {}", msg),
        }
    }
}

/// Event dispatcher for publishing events to subscribers
#[derive(Clone)]
pub struct EventDispatcher {
    /// Broadcast sender channel for board events.
    tx: broadcast::Sender<BoardEvent>,
}

impl EventDispatcher {
    /// Create a new event dispatcher
    ///
    /// # Arguments
    /// * `buffer_size` - Size of the broadcast buffer (default 100)
    pub fn new(buffer_size: usize) -> Self {
        let (tx, _) = broadcast::channel(buffer_size.max(1));
        Self { tx }
    }

    /// Create a new event dispatcher with default buffer size
    pub fn default_with_buffer() -> Self {
        Self::new(100)
    }

    /// Subscribe to events
    pub fn subscribe(&self) -> broadcast::Receiver<BoardEvent> {
        self.tx.subscribe()
    }

    /// Publish an event to all subscribers.
    ///
    /// Returns the number of subscribers that received it; zero when nobody
    /// is listening, which is not an error for the board.
    pub fn publish(&self, event: BoardEvent) -> usize {
        match self.tx.send(event) {
            Ok(count) => count,
            Err(broadcast::error::SendError(event)) => {
                tracing::trace!("No subscribers for {}", event);
                0
            }
        }
    }

    /// Get number of active subscribers
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::default_with_buffer()
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
