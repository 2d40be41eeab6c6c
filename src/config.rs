//! Configuration management and validation.
//!
//! Provides configuration structures for import, export and storage settings,
//! loaded in layers: defaults, then an optional JSON file, then CLI overrides.

use crate::constants::{
    APP_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_SAMPLE_SIZE, DEFAULT_TWO_DIGIT_YEAR_PIVOT,
    STORE_FILE_NAME,
};
use crate::error::{CompostError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub import: ImportOptions,
    pub export: ExportOptions,
    pub storage: StorageConfig,
}

/// Settings for the CSV import pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportOptions {
    /// Number of leading rows used to deduce the date format
    pub sample_size: usize,

    /// Two-digit years below the pivot become 20xx, the rest 19xx
    pub two_digit_year_pivot: u32,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            sample_size: DEFAULT_SAMPLE_SIZE,
            two_digit_year_pivot: DEFAULT_TWO_DIGIT_YEAR_PIVOT,
        }
    }
}

impl ImportOptions {
    /// Create options with a custom sample size
    pub fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = sample_size;
        self
    }

    /// Create options with a custom two-digit year pivot
    pub fn with_two_digit_year_pivot(mut self, pivot: u32) -> Self {
        self.two_digit_year_pivot = pivot;
        self
    }
}

/// Settings for CSV export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    /// Emit the AmbientTemperature_C column
    pub include_ambient_temperature: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            include_ambient_temperature: true,
        }
    }
}

/// Location of the profile store
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub store_path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        let store_path = dirs::data_dir()
            .map(|dir| dir.join(APP_DIR_NAME).join(STORE_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(STORE_FILE_NAME));
        Self { store_path }
    }
}

impl Config {
    /// Default config file location (`<config_dir>/compost-log/config.json`)
    pub fn default_config_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
            .ok_or_else(|| CompostError::configuration("Could not determine config directory"))
    }

    /// Load configuration from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CompostError::io(format!("Failed to read config file {}", path.display()), e)
        })?;

        let config: Config = serde_json::from_str(&content).map_err(|e| {
            CompostError::json(format!("Failed to parse config file {}", path.display()), e)
        })?;

        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load defaults overlaid with the given file, or the default file if it exists
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        let config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_config_path() {
                Ok(path) if path.exists() => Self::from_file(&path)?,
                _ => Self::default(),
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Override the store location
    pub fn with_store_path(mut self, store_path: impl Into<PathBuf>) -> Self {
        self.storage.store_path = store_path.into();
        self
    }

    /// Check settings for consistency
    pub fn validate(&self) -> Result<()> {
        if self.import.sample_size == 0 {
            return Err(CompostError::configuration(
                "Import sample size must be greater than 0",
            ));
        }

        if self.import.two_digit_year_pivot > 99 {
            return Err(CompostError::configuration(format!(
                "Two-digit year pivot must be between 0 and 99, got {}",
                self.import.two_digit_year_pivot
            )));
        }

        Ok(())
    }
}
