//! Path management for trippicker
//!
//! Provides XDG-compliant path resolution for the staged-registration data.
//!
//! ## Path Resolution Order
//!
//! 1. `TRIPPICKER_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/trippicker` or `~/.config/trippicker`
//! 3. Windows: `%APPDATA%\trippicker`

use std::path::PathBuf;

use crate::error::TrippickerError;

/// Manages all paths used by trippicker
#[derive(Debug, Clone)]
pub struct TrippickerPaths {
    /// Base directory for all trippicker data
    base_dir: PathBuf,
}

impl TrippickerPaths {
    /// Create a new TrippickerPaths instance
    ///
    /// Path resolution:
    /// 1. `TRIPPICKER_DATA_DIR` env var (explicit override)
    /// 2. Unix: `$XDG_CONFIG_HOME/trippicker` or `~/.config/trippicker`
    /// 3. Windows: `%APPDATA%\trippicker`
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, TrippickerError> {
        let base_dir = if let Ok(custom) = std::env::var("TRIPPICKER_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create TrippickerPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/trippicker/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/trippicker/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the staged-registration file
    ///
    /// This file is the localStorage analogue: a single JSON object keyed by
    /// stage name ("driverData" for the company registration step).
    pub fn stage_file(&self) -> PathBuf {
        self.data_dir().join("stage.json")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), TrippickerError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| TrippickerError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| TrippickerError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, TrippickerError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
    Ok(config_base.join("trippicker"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, TrippickerError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| TrippickerError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("trippicker"))
}
