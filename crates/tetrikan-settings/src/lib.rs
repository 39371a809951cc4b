//! Tetrikan Settings Crate
//!
//! Handles board configuration and settings persistence.

pub mod config;
pub mod error;
pub mod manager;

pub use config::{Config, GridSettings, PlacementSettings, SearchSettings, TaskSettings};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
pub use manager::SettingsManager;
