//! # Tetrikan
//!
//! A kanban board that packs tasks as polyomino blocks into status bands on
//! a fixed grid:
//! - Seven shape families, one block per skill
//! - Bands of rows per status (To Do, In Progress, Testing, Done)
//! - Drag-and-drop moves with nearest-free-anchor fallback
//! - Rotation, automatic packing, and row clearing in the Done band
//!
//! ## Architecture
//!
//! Tetrikan is organized as a workspace with multiple crates:
//!
//! 1. **tetrikan-core** - Cells, ids, statuses, bands, errors, events
//! 2. **tetrikan-engine** - Placement engine, board snapshots, session, persistence
//! 3. **tetrikan-settings** - Board configuration and config files
//! 4. **tetrikan** - This crate: re-exports, logging, command-line binary

pub use tetrikan_core::{
    Band, BandLayout, BoardEvent, Cell, DraftError, Error, EventDispatcher, LayoutError, Offset,
    PlacementError, Result, ShapeFamily, Status, TaskId,
};

pub use tetrikan_engine::{
    band_headers, block_geometry, layout, Board, BoardFile, BoardSession, BoardSpec, Footprint,
    Grid, InputEvent, MoveReport, Outcome, RowClearReport, SyncReport, Task, TaskDraft,
    Transition,
};

pub use tetrikan_settings::{Config, SettingsManager};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Output on stderr, leaving stdout to the board printout
/// - RUST_LOG environment variable support, INFO by default
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
