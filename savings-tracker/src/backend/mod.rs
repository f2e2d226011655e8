//! # Backend Module
//!
//! Contains all non-UI logic for the savings tracker.
//!
//! This module brings together:
//! - **Domain**: Goal store rules, pacing and exclusions
//! - **Storage**: Key-value persistence of the goal collection
//! - **IO**: The command surface the presentation layer calls
//!
//! ## Architecture
//!
//! ```text
//! Presentation layer
//!     ↓
//! IO Layer (SavingsCommands, mappers)
//!     ↓
//! Domain Layer (GoalService, PacingService, ExclusionSet)
//!     ↓
//! Storage Layer (GoalRepository over a KeyValueStorage)
//! ```

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use anyhow::Result;
use log::{info, warn};
use std::path::Path;
use std::sync::Arc;

use crate::backend::config::{ConfigRepository, TrackerConfig};
use crate::backend::storage::{FileKeyValueStore, GoalRepository, KeyValueStorage, MemoryKeyValueStore};

pub use domain::{DomainGoal, ExclusionSet, GoalError, GoalService, PacingService};
pub use io::SavingsCommands;

/// Fully wired backend: configuration, storage and the command surface
pub struct Backend {
    pub config: TrackerConfig,
    pub commands: SavingsCommands,
}

impl Backend {
    /// Backend over the platform's local data directory
    pub fn new() -> Self {
        let data_directory = FileKeyValueStore::default_directory();
        Self::with_data_directory(&data_directory)
    }

    /// Backend over `data_directory`. An unreadable config falls back to
    /// defaults; an unusable directory falls back to memory-only storage.
    pub fn with_data_directory<P: AsRef<Path>>(data_directory: P) -> Self {
        let data_directory = data_directory.as_ref();
        info!("Setting up savings tracker in {:?}", data_directory);

        let config = match ConfigRepository::new(data_directory).load_or_create() {
            Ok(config) => config,
            Err(e) => {
                warn!("Using default configuration: {:#}", e);
                TrackerConfig::default()
            }
        };

        let storage: Arc<dyn KeyValueStorage> = match FileKeyValueStore::new(data_directory) {
            Ok(store) => Arc::new(store),
            Err(e) => {
                warn!("Data directory unavailable, goals will not be saved: {:#}", e);
                Arc::new(MemoryKeyValueStore::new())
            }
        };

        Self::from_parts(config, storage)
    }

    /// Backend over an in-process store
    pub fn in_memory(config: TrackerConfig) -> Self {
        Self::from_parts(config, Arc::new(MemoryKeyValueStore::new()))
    }

    /// Wire the services over an existing key-value store
    pub fn from_parts(config: TrackerConfig, storage: Arc<dyn KeyValueStorage>) -> Self {
        let repository = GoalRepository::new(storage, config.storage_key.clone());
        let goal_service = GoalService::load(Box::new(repository), config.persist_empty_collection);
        let pacing_service = PacingService::new(config.risk_thresholds);

        Self {
            config,
            commands: SavingsCommands::new(goal_service, pacing_service),
        }
    }

    /// Like [`Backend::with_data_directory`], but surfaces storage setup
    /// errors instead of degrading
    pub fn try_with_data_directory<P: AsRef<Path>>(data_directory: P) -> Result<Self> {
        let data_directory = data_directory.as_ref();
        let config = ConfigRepository::new(data_directory).load_or_create()?;
        let store = FileKeyValueStore::new(data_directory)?;
        Ok(Self::from_parts(config, Arc::new(store)))
    }
}

impl Default for Backend {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::config::CONFIG_FILE_NAME;
    use crate::backend::storage::kv::test_utils::{init_test_logging, TestEnvironment};
    use shared::{CreateGoalRequest, RiskLevel};
    use std::fs;

    fn request(name: &str) -> CreateGoalRequest {
        CreateGoalRequest {
            name: name.to_string(),
            goal_amount: "1000".to_string(),
            due_date: "2030-01-01".to_string(),
            saved_amount: "100".to_string(),
        }
    }

    #[test]
    fn test_goals_survive_restart() {
        init_test_logging();
        let env = TestEnvironment::new().unwrap();

        let mut backend = Backend::try_with_data_directory(env.base_directory()).unwrap();
        backend.commands.submit_new_goal(request("Trip"));
        backend.commands.select_goal("Trip");
        backend.commands.record_deposit("50");
        drop(backend);

        let backend = Backend::with_data_directory(env.base_directory());
        let goals = backend.commands.goal_service().goals();
        assert_eq!(goals.len(), 1);
        assert_eq!(goals[0].saved_amount, 150.0);
        assert!(backend.commands.goal_service().active_goal().is_none());
        assert!(env.base_directory().join(CONFIG_FILE_NAME).exists());
    }

    #[test]
    fn test_config_controls_storage_key_and_thresholds() {
        init_test_logging();
        let env = TestEnvironment::new().unwrap();
        fs::write(
            env.base_directory().join(CONFIG_FILE_NAME),
            "storage_key: myGoals\nrisk_thresholds:\n  at_risk_days: 20000\n",
        )
        .unwrap();

        let mut backend = Backend::with_data_directory(env.base_directory());
        backend.commands.submit_new_goal(request("Trip"));

        assert!(env.base_directory().join("myGoals.json").exists());
        let list = backend.commands.list_goals();
        assert_eq!(list.goals[0].risk_level, RiskLevel::AtRisk);
    }

    #[test]
    fn test_unreadable_config_uses_defaults() {
        init_test_logging();
        let env = TestEnvironment::new().unwrap();
        fs::write(env.base_directory().join(CONFIG_FILE_NAME), "risk_thresholds: [1, 2]\n").unwrap();

        let backend = Backend::with_data_directory(env.base_directory());
        assert_eq!(backend.config.storage_key, "savingsList");
    }

    #[test]
    fn test_unusable_directory_falls_back_to_memory() {
        init_test_logging();
        let env = TestEnvironment::new().unwrap();
        let blocker = env.base_directory().join("not_a_directory");
        fs::write(&blocker, "file").unwrap();

        let mut backend = Backend::with_data_directory(&blocker);
        let response = backend.commands.submit_new_goal(request("Trip"));

        assert!(response.goal.is_some());
        assert_eq!(backend.commands.goal_service().goals().len(), 1);
        assert!(Backend::try_with_data_directory(&blocker).is_err());
    }

    #[test]
    fn test_in_memory_backend() {
        let mut backend = Backend::in_memory(TrackerConfig::default());
        backend.commands.submit_new_goal(request("Trip"));
        assert_eq!(backend.commands.list_goals().goals.len(), 1);
    }
}
