//! # Tracker Configuration
//!
//! A single YAML file `tracker_config.yaml` at the root of the data directory.
//!
//! ## YAML Format
//!
//! ```yaml
//! storage_key: savingsList
//! persist_empty_collection: true
//! risk_thresholds:
//!   at_risk_days: 7
//!   critical_days: 3
//!   progress_threshold: 70.0
//! data_format_version: "1.0"
//! created_at: "2025-01-21T19:30:00Z"
//! updated_at: "2025-01-21T19:35:00Z"
//! ```
//!
//! Missing fields take their default values, so older files keep loading.

use anyhow::{Context, Result};
use chrono::Utc;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::backend::domain::pacing::RiskThresholds;
use crate::backend::storage::DEFAULT_STORAGE_KEY;

pub const CONFIG_FILE_NAME: &str = "tracker_config.yaml";

/// Tracker configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Key-value storage key holding the goal collection
    pub storage_key: String,
    /// Write the collection even when it is empty. With `false`, deleting
    /// the last goal leaves the previous payload in storage.
    pub persist_empty_collection: bool,
    pub risk_thresholds: RiskThresholds,
    /// Data format version for future migrations
    pub data_format_version: String,
    pub created_at: String,
    pub updated_at: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        let now = Utc::now().to_rfc3339();
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            persist_empty_collection: true,
            risk_thresholds: RiskThresholds::default(),
            data_format_version: "1.0".to_string(),
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

/// Reads and writes `tracker_config.yaml`
#[derive(Debug, Clone)]
pub struct ConfigRepository {
    base_directory: PathBuf,
}

impl ConfigRepository {
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Self {
        Self {
            base_directory: base_directory.as_ref().to_path_buf(),
        }
    }

    pub fn config_path(&self) -> PathBuf {
        self.base_directory.join(CONFIG_FILE_NAME)
    }

    /// Load the config file, creating it with defaults if it doesn't exist
    pub fn load_or_create(&self) -> Result<TrackerConfig> {
        let config_path = self.config_path();

        if config_path.exists() {
            let yaml_content = fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read {}", config_path.display()))?;
            let config: TrackerConfig = serde_yaml::from_str(&yaml_content)
                .with_context(|| format!("Failed to parse {}", config_path.display()))?;
            debug!("Loaded tracker config from {:?}", config_path);
            Ok(config)
        } else {
            let config = TrackerConfig::default();
            self.save(&config)?;
            info!("Created default tracker config at {:?}", config_path);
            Ok(config)
        }
    }

    /// Save the config, stamping `updated_at`
    pub fn save(&self, config: &TrackerConfig) -> Result<()> {
        let config_path = self.config_path();

        if !self.base_directory.exists() {
            fs::create_dir_all(&self.base_directory)?;
            info!("Created base data directory: {:?}", self.base_directory);
        }

        let mut updated = config.clone();
        updated.updated_at = Utc::now().to_rfc3339();
        let yaml_content = serde_yaml::to_string(&updated)?;

        // Use atomic write pattern: write to temp file, then rename
        let temp_path = config_path.with_extension("tmp");
        fs::write(&temp_path, yaml_content)?;
        fs::rename(&temp_path, &config_path)?;

        debug!("Saved tracker config to {:?}", config_path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_creates_default_config() {
        let temp_dir = TempDir::new().unwrap();
        let repo = ConfigRepository::new(temp_dir.path());

        let config = repo.load_or_create().unwrap();

        assert!(repo.config_path().exists());
        assert_eq!(config.storage_key, "savingsList");
        assert!(config.persist_empty_collection);
        assert_eq!(config.risk_thresholds, RiskThresholds::default());
    }

    #[test]
    fn test_round_trips_custom_values() {
        let temp_dir = TempDir::new().unwrap();
        let repo = ConfigRepository::new(temp_dir.path());

        let mut config = TrackerConfig::default();
        config.storage_key = "goals".to_string();
        config.persist_empty_collection = false;
        config.risk_thresholds.at_risk_days = 10;
        repo.save(&config).unwrap();

        let loaded = repo.load_or_create().unwrap();
        assert_eq!(loaded.storage_key, "goals");
        assert!(!loaded.persist_empty_collection);
        assert_eq!(loaded.risk_thresholds.at_risk_days, 10);
        assert_eq!(loaded.risk_thresholds.critical_days, 3);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let repo = ConfigRepository::new(temp_dir.path());
        fs::write(repo.config_path(), "persist_empty_collection: false\n").unwrap();

        let loaded = repo.load_or_create().unwrap();
        assert!(!loaded.persist_empty_collection);
        assert_eq!(loaded.storage_key, "savingsList");
        assert_eq!(loaded.risk_thresholds, RiskThresholds::default());
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let repo = ConfigRepository::new(temp_dir.path());
        fs::write(repo.config_path(), "risk_thresholds: [not, a, map]\n").unwrap();

        assert!(repo.load_or_create().is_err());
    }
}
