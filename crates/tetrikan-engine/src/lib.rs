//! # Tetrikan Engine
//!
//! This crate provides the grid placement and packing engine behind the
//! Tetrikan board: tasks are polyomino blocks placed on a fixed grid whose
//! rows are split into status bands.
//!
//! ## Core Components
//!
//! ### Placement
//! - **Layout**: Canonical footprint for a shape family and block count
//! - **Validator**: Bounds and collision checks, plus the spacing heuristic
//! - **Search**: Bounded breadth-first search for the nearest free anchor
//!
//! ### Board Transactions
//! - **Synchronize**: Rebuild the grid from the task collection
//! - **Move**: Relocate a task, changing band and status with it
//! - **Rotate**: Turn a footprint clockwise about its bounding-box center
//! - **Row clear**: Remove full rows of the terminal band and keep them in
//!   the retro history
//!
//! ### Surroundings
//! - **Session**: Applies input events and publishes board events
//! - **Render**: Pixel rectangles and band headers
//! - **Serialization**: JSON board files
//!
//! ## Architecture
//!
//! ```text
//! BoardSession (input events, event dispatcher)
//!   └── Board (immutable snapshot, generation counter)
//!         ├── Tasks grouped by band
//!         └── Grid (derived occupancy cache)
//!
//! Transactions: &Board -> Board
//!   ├── Validator
//!   └── Search
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tetrikan_engine::{Board, BoardSpec};
//! use tetrikan_core::{Cell, TaskId};
//!
//! let (board, _) = Board::demo(BoardSpec::default());
//! let transition = board.move_task(&TaskId::new("1"), Cell::new(4, 10));
//! let (board, cleared) = transition.board.clear_completed_rows();
//! ```

pub mod board;
pub mod footprint;
pub mod grid;
pub mod layout;
pub mod render;
pub mod search;
pub mod serialization;
pub mod session;
pub mod task;
pub mod validator;

pub use board::{
    AutoPlacement, Board, BoardSpec, Inserted, IntegrityError, MoveReport, RemovedBlock, Retro,
    RowClearReport, SavedRow, SyncReport, Transition,
};
pub use footprint::Footprint;
pub use grid::Grid;
pub use layout::layout;
pub use render::{
    band_at_pixel, band_headers, block_geometry, cell_at_pixel, BandHeader, BlockGeometry,
    PixelRect, DEFAULT_CELL_SIZE,
};
pub use search::{find_nearest_anchor, SearchLimits};
pub use serialization::{BoardFile, BoardMetadata, TaskRecord};
pub use session::{BoardSession, InputEvent, Outcome};
pub use task::{Task, TaskDraft};
pub use validator::{fits_spaced, is_placeable, is_spaced, SpacingRule};
