//! Board event publishing.

pub mod event;

pub use event::{BoardEvent, EventDispatcher};
