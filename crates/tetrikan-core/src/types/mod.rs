//! Shared board vocabulary.

mod band;
mod geometry;
mod ids;
mod shape;
mod status;

pub use band::{Band, BandLayout, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH};
pub use geometry::{Cell, Offset};
pub use ids::TaskId;
pub use shape::ShapeFamily;
pub use status::Status;
