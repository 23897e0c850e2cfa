//! Path management for stashflow
//!
//! Provides XDG-compliant path resolution for the settings file and the
//! generated import template.
//!
//! ## Path Resolution Order
//!
//! 1. `STASHFLOW_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/stashflow` or `~/.config/stashflow`
//! 3. Windows: `%APPDATA%\stashflow`

use std::path::PathBuf;

use crate::error::StashError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "STASHFLOW_DATA_DIR";

/// Manages all paths used by stashflow
#[derive(Debug, Clone)]
pub struct StashPaths {
    base_dir: PathBuf,
}

impl StashPaths {
    /// Create a new StashPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, StashError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create StashPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/stashflow/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Default location for the generated import template
    pub fn template_file(&self) -> PathBuf {
        self.base_dir.join("budget-template.csv")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), StashError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| StashError::Io(format!("Failed to create base directory: {}", e)))?;

        Ok(())
    }

    /// Check if stashflow has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, StashError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME").map_err(|_| {
                StashError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("stashflow"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, StashError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| StashError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("stashflow"))
}
