//! Configuration Management
//!
//! Handles the board configuration:
//! - Grid size and pixel cell size
//! - Status bands
//! - Auto-placement spacing
//! - Anchor search limits
//! - Task limits and row clearing

use crate::error::{ConfigError, ConfigResult, SettingsResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tetrikan_core::{Band, BandLayout, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH};
use tetrikan_engine::{BoardSpec, SearchLimits, SpacingRule, DEFAULT_CELL_SIZE};

/// Grid geometry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    /// Columns
    pub width: usize,
    /// Rows
    pub height: usize,
    /// Side of one cell in pixels
    pub cell_size: u32,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_WIDTH,
            height: DEFAULT_GRID_HEIGHT,
            cell_size: DEFAULT_CELL_SIZE,
        }
    }
}

/// Auto-placement spacing heuristic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementSettings {
    /// Prefer cells with few occupied neighbours when auto-placing
    pub spacing: bool,
    pub max_occupied_neighbors: usize,
}

impl Default for PlacementSettings {
    fn default() -> Self {
        let rule = SpacingRule::default();
        Self {
            spacing: rule.enabled,
            max_occupied_neighbors: rule.max_occupied_neighbors,
        }
    }
}

/// Nearest-anchor search limits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    pub max_candidates: usize,
    pub settle_distance: usize,
    pub max_distance: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        let limits = SearchLimits::default();
        Self {
            max_candidates: limits.max_candidates,
            settle_distance: limits.settle_distance,
            max_distance: limits.max_distance,
        }
    }
}

/// Task creation and post-transaction behaviour
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskSettings {
    /// Most skills (and so blocks) a new task may carry
    pub max_skills: usize,
    /// Run row clearing after every move and rotation
    pub clear_rows_after_transaction: bool,
}

impl Default for TaskSettings {
    fn default() -> Self {
        Self {
            max_skills: 5,
            clear_rows_after_transaction: true,
        }
    }
}

fn default_bands() -> Vec<Band> {
    BandLayout::standard().bands().to_vec()
}

/// Complete board configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub grid: GridSettings,
    pub placement: PlacementSettings,
    pub search: SearchSettings,
    pub tasks: TaskSettings,
    /// Bands from top to bottom, each owning rows `start..end`
    pub bands: Vec<Band>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid: GridSettings::default(),
            placement: PlacementSettings::default(),
            search: SearchSettings::default(),
            tasks: TaskSettings::default(),
            bands: default_bands(),
        }
    }
}

enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> ConfigResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(ConfigError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

fn positive(key: &str, value: usize) -> ConfigResult<()> {
    if value == 0 {
        return Err(ConfigError::ValueOutOfRange {
            key: key.to_string(),
            value: value.to_string(),
        });
    }
    Ok(())
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        std::fs::write(path, content)?;
        tracing::debug!("Saved config to {}", path.display());
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        positive("grid.cell_size", self.grid.cell_size as usize)?;
        positive("search.max_candidates", self.search.max_candidates)?;
        positive("search.max_distance", self.search.max_distance)?;
        if self.search.settle_distance > self.search.max_distance {
            return Err(ConfigError::ValueOutOfRange {
                key: "search.settle_distance".to_string(),
                value: self.search.settle_distance.to_string(),
            });
        }
        positive("tasks.max_skills", self.tasks.max_skills)?;

        // Grid size and band partition are checked together.
        self.band_layout()?;
        Ok(())
    }

    /// Band layout described by the grid and band sections
    pub fn band_layout(&self) -> ConfigResult<BandLayout> {
        Ok(BandLayout::new(
            self.grid.width,
            self.grid.height,
            self.bands.clone(),
        )?)
    }

    /// Engine parameters for a board built from this config
    pub fn board_spec(&self) -> ConfigResult<BoardSpec> {
        self.validate()?;
        Ok(BoardSpec {
            layout: self.band_layout()?,
            spacing: SpacingRule {
                enabled: self.placement.spacing,
                max_occupied_neighbors: self.placement.max_occupied_neighbors,
            },
            search: SearchLimits {
                max_candidates: self.search.max_candidates,
                settle_distance: self.search.settle_distance,
                max_distance: self.search.max_distance,
            },
            max_skills: self.tasks.max_skills,
        })
    }
}
