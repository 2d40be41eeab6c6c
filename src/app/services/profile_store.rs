//! File-backed key-value store for compost profiles
//!
//! The whole profile collection lives under a single key in one JSON file.
//! Every mutation is applied in memory; [`ProfileStore::save`] persists it.

use crate::app::models::{CompostProfile, LogRecord};
use crate::constants::PROFILE_COLORS;
use crate::error::{CompostError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use uuid::Uuid;

/// On-disk layout: the collection key mapped to its profiles
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoreFile {
    #[serde(default)]
    compost_profiles: Vec<CompostProfile>,
}

#[derive(Debug)]
pub struct ProfileStore {
    path: PathBuf,
    profiles: Vec<CompostProfile>,
}

impl ProfileStore {
    /// Open the store at `path`; a missing file is an empty collection
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        if !path.exists() {
            debug!("No store at {}, starting empty", path.display());
            return Ok(Self {
                path,
                profiles: Vec::new(),
            });
        }

        let content = std::fs::read_to_string(&path)
            .map_err(|e| CompostError::io(format!("Failed to read store {}", path.display()), e))?;

        let file: StoreFile = if content.trim().is_empty() {
            StoreFile::default()
        } else {
            serde_json::from_str(&content).map_err(|e| CompostError::CorruptStore {
                path: path.clone(),
                reason: e.to_string(),
            })?
        };

        debug!(
            "Loaded {} profiles from {}",
            file.compost_profiles.len(),
            path.display()
        );

        Ok(Self {
            path,
            profiles: file.compost_profiles,
        })
    }

    /// Write the collection back to disk, creating parent directories
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                CompostError::io(format!("Failed to create {}", parent.display()), e)
            })?;
        }

        let file = StoreFile {
            compost_profiles: self.profiles.clone(),
        };
        let json = serde_json::to_string_pretty(&file)
            .map_err(|e| CompostError::json("Failed to serialize profiles", e))?;

        std::fs::write(&self.path, json).map_err(|e| {
            CompostError::io(format!("Failed to write store {}", self.path.display()), e)
        })?;

        debug!("Saved {} profiles to {}", self.profiles.len(), self.path.display());
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn profiles(&self) -> &[CompostProfile] {
        &self.profiles
    }

    /// Create a profile with the next palette colour
    pub fn create_profile(
        &mut self,
        name: impl Into<String>,
        initial_composition: impl Into<String>,
    ) -> &CompostProfile {
        let color = PROFILE_COLORS[self.profiles.len() % PROFILE_COLORS.len()];
        let profile = CompostProfile::new(name, initial_composition, color);
        info!("Created profile '{}' ({})", profile.name, profile.id);

        self.profiles.push(profile);
        &self.profiles[self.profiles.len() - 1]
    }

    /// Find a profile by id or case-insensitive name
    pub fn find(&self, key: &str) -> Option<&CompostProfile> {
        self.position(key).map(|index| &self.profiles[index])
    }

    pub fn find_mut(&mut self, key: &str) -> Option<&mut CompostProfile> {
        self.position(key).map(|index| &mut self.profiles[index])
    }

    fn position(&self, key: &str) -> Option<usize> {
        let key = key.trim();
        let by_id = Uuid::parse_str(key).ok();

        self.profiles
            .iter()
            .position(|p| Some(p.id) == by_id)
            .or_else(|| {
                self.profiles
                    .iter()
                    .position(|p| p.name.eq_ignore_ascii_case(key))
            })
    }

    fn get_mut(&mut self, key: &str) -> Result<&mut CompostProfile> {
        self.find_mut(key)
            .ok_or_else(|| CompostError::profile_not_found(key))
    }

    pub fn delete_profile(&mut self, key: &str) -> Result<CompostProfile> {
        let index = self
            .position(key)
            .ok_or_else(|| CompostError::profile_not_found(key))?;
        let profile = self.profiles.remove(index);
        info!("Deleted profile '{}'", profile.name);
        Ok(profile)
    }

    /// Merge imported records into a profile; returns the new log count
    pub fn append_logs(&mut self, key: &str, logs: Vec<LogRecord>) -> Result<usize> {
        let profile = self.get_mut(key)?;
        let added = logs.len();
        profile.merge_logs(logs);
        info!("Added {} records to profile '{}'", added, profile.name);
        Ok(profile.data_logs.len())
    }

    pub fn add_log(&mut self, key: &str, log: LogRecord) -> Result<()> {
        self.get_mut(key)?.merge_logs([log]);
        Ok(())
    }

    /// Replace the record with the same id
    pub fn update_log(&mut self, key: &str, log: LogRecord) -> Result<()> {
        let profile = self.get_mut(key)?;
        let existing = profile
            .data_logs
            .iter_mut()
            .find(|l| l.id == log.id)
            .ok_or_else(|| CompostError::log_not_found(log.id.to_string()))?;
        *existing = log;
        Ok(())
    }

    pub fn delete_log(&mut self, key: &str, log_id: Uuid) -> Result<LogRecord> {
        let profile = self.get_mut(key)?;
        let index = profile
            .data_logs
            .iter()
            .position(|l| l.id == log_id)
            .ok_or_else(|| CompostError::log_not_found(log_id.to_string()))?;
        Ok(profile.data_logs.remove(index))
    }
}
