//! # Tetrikan Core
//!
//! Core types, errors, and events for Tetrikan.
//! Provides the vocabulary shared by the placement engine, the settings
//! layer, and any frontend: grid cells and offsets, task identities, shape
//! families, statuses and the bands they own, the error taxonomy, and the
//! board event dispatcher.

pub mod core;
pub mod error;
pub mod types;

pub use core::{BoardEvent, EventDispatcher};

pub use error::{DraftError, Error, LayoutError, PlacementError, Result};

pub use types::{
    Band, BandLayout, Cell, Offset, ShapeFamily, Status, TaskId, DEFAULT_GRID_HEIGHT,
    DEFAULT_GRID_WIDTH,
};
