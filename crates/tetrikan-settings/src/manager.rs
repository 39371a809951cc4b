//! Settings manager
//!
//! Locates the configuration file in the platform config directory and
//! keeps the loaded [`Config`] in memory.

use crate::config::Config;
use crate::error::{SettingsError, SettingsResult};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "tetrikan";
const CONFIG_FILE: &str = "config.toml";

/// Loaded configuration plus the file it belongs to.
#[derive(Debug, Clone)]
pub struct SettingsManager {
    config: Config,
    path: PathBuf,
}

impl SettingsManager {
    /// Platform config directory for Tetrikan
    pub fn config_dir() -> SettingsResult<PathBuf> {
        let mut path = dirs::config_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no config or home directory".to_string())
            })?;
        path.push(APP_DIR);
        Ok(path)
    }

    /// Default config file path: `<config_dir>/tetrikan/config.toml`
    pub fn config_file_path() -> SettingsResult<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Load from the default location
    pub fn load() -> SettingsResult<Self> {
        Self::load_from(Self::config_file_path()?)
    }

    /// Load from `path`, falling back to defaults when the file is absent.
    pub fn load_from(path: impl Into<PathBuf>) -> SettingsResult<Self> {
        let path = path.into();
        let config = if path.exists() {
            let config = Config::load_from_file(&path)?;
            tracing::info!("Loaded settings from {}", path.display());
            config
        } else {
            tracing::info!("No settings at {}, using defaults", path.display());
            Config::default()
        };
        Ok(Self { config, path })
    }

    /// Write the current config back to its file, creating the directory
    /// if needed
    pub fn save(&self) -> SettingsResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        self.config.save_to_file(&self.path)?;
        tracing::info!("Saved settings to {}", self.path.display());
        Ok(())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
