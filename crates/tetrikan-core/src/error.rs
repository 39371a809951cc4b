//! Error handling for Tetrikan
//!
//! Provides error types for every layer of the board:
//! - Layout errors (band/grid geometry that cannot describe a board)
//! - Placement errors (the recoverable outcomes of board transactions)
//! - Draft errors (task creation input that was rejected)
//!
//! All error types use `thiserror` for ergonomic error handling.

use crate::types::{Cell, Status, TaskId};
use thiserror::Error;

/// Band layout error type
///
/// Raised when a grid size or band list cannot be turned into a valid
/// partition of the grid rows.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// Grid has no cells
    #[error("Grid must be at least 1x1, got {width}x{height}")]
    EmptyGrid {
        /// Requested width in cells.
        width: usize,
        /// Requested height in cells.
        height: usize,
    },

    /// A band covers no rows
    #[error("Band {status} is empty ({start}..{end})")]
    EmptyBand {
        /// The band's status.
        status: Status,
        /// First row of the band.
        start: usize,
        /// One past the last row of the band.
        end: usize,
    },

    /// Bands leave a gap or overlap
    #[error("Band {status} starts at row {start}, expected row {expected}")]
    NotContiguous {
        /// The band's status.
        status: Status,
        /// First row of the band.
        start: usize,
        /// Row at which the band should have started.
        expected: usize,
    },

    /// Bands do not reach the bottom of the grid
    #[error("Bands cover {covered} rows but the grid has {height}")]
    IncompleteCoverage {
        /// Rows covered by the bands.
        covered: usize,
        /// Grid height.
        height: usize,
    },

    /// A status owns more than one band
    #[error("Status {status} has more than one band")]
    DuplicateStatus {
        /// The repeated status.
        status: Status,
    },

    /// A status owns no band
    #[error("Status {status} has no band")]
    MissingStatus {
        /// The status without rows.
        status: Status,
    },
}

/// Placement error type
///
/// The recoverable outcomes of board transactions. None of these abort the
/// caller: every transaction still hands back a valid board next to the error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// Transaction referenced an unknown task
    #[error("Task {task} not found")]
    TaskNotFound {
        /// The unknown task id.
        task: TaskId,
    },

    /// No anchor fits the task's footprint
    #[error("No valid anchor for task {task} near {requested} in band {status}")]
    NoValidAnchor {
        /// The task that could not be placed.
        task: TaskId,
        /// The requested anchor.
        requested: Cell,
        /// The band that was searched.
        status: Status,
    },

    /// Rotated footprint collides or leaves the grid
    #[error("Rotating task {task} would collide or leave the grid")]
    InvalidRotation {
        /// The task that was not rotated.
        task: TaskId,
    },

    /// Some tasks could not be placed anywhere in their band
    #[error("Synchronization left {} task(s) unplaced", unplaced.len())]
    SynchronizationIncomplete {
        /// Tasks left without an anchor.
        unplaced: Vec<TaskId>,
    },

    /// Target cell lies outside the grid
    #[error("Cell {cell} is outside the {width}x{height} grid")]
    OutOfBounds {
        /// The rejected cell.
        cell: Cell,
        /// Grid width.
        width: usize,
        /// Grid height.
        height: usize,
    },

    /// Task has no anchor yet
    #[error("Task {task} is not placed on the grid")]
    NotPlaced {
        /// The unplaced task.
        task: TaskId,
    },
}

impl PlacementError {
    /// Expected outcomes that callers usually do not surface to users.
    pub fn is_expected(&self) -> bool {
        matches!(self, PlacementError::InvalidRotation { .. })
    }
}

/// Task draft error type
///
/// Raised when task creation input cannot become a task.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    /// Task name is blank
    #[error("Task name is required")]
    EmptyName,

    /// No usable skill was given
    #[error("At least one skill is required")]
    NoSkills,

    /// Too many skills were given
    #[error("At most {max} skills are allowed, got {count}")]
    TooManySkills {
        /// Allowed maximum.
        max: usize,
        /// Skills supplied.
        count: usize,
    },
}

/// Main error type for Tetrikan
///
/// A unified error type that can represent any error from the core layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Layout error
    #[error(transparent)]
    Layout(#[from] LayoutError),

    /// Placement error
    #[error(transparent)]
    Placement(#[from] PlacementError),

    /// Draft error
    #[error(transparent)]
    Draft(#[from] DraftError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a layout error
    pub fn is_layout_error(&self) -> bool {
        matches!(self, Error::Layout(_))
    }

    /// Check if this is a placement error
    pub fn is_placement_error(&self) -> bool {
        matches!(self, Error::Placement(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
