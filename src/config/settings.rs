//! User settings for stashflow
//!
//! Manages the preferences the command-line front end passes to the engine:
//! the default plan tier, display currency, projection horizons and the
//! allocation configuration.

use serde::{Deserialize, Serialize};

use super::allocation::AllocationConfig;
use super::paths::StashPaths;
use crate::error::StashError;
use crate::models::PlanTier;

/// User settings for stashflow
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Tier used when a command does not pass `--tier`
    #[serde(default)]
    pub default_tier: PlanTier,

    /// Default currency symbol
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Horizons (in years) shown by `project` when none are given
    #[serde(default = "default_horizons")]
    pub projection_horizons: Vec<u32>,

    /// Engine defaults
    #[serde(default)]
    pub allocation: AllocationConfig,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_horizons() -> Vec<u32> {
    vec![1, 5, 10, 20, 30]
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_tier: PlanTier::default(),
            currency_symbol: default_currency(),
            projection_horizons: default_horizons(),
            allocation: AllocationConfig::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &StashPaths) -> Result<Self, StashError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| StashError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                StashError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            tracing::debug!(path = %settings_path.display(), "loaded settings");
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &StashPaths) -> Result<(), StashError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| StashError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| StashError::Io(format!("Failed to write settings file: {}", e)))?;

        tracing::debug!(path = %settings_path.display(), "saved settings");
        Ok(())
    }
}
