/// Test utilities module for automatic cleanup and consistent test infrastructure
///
/// This module provides RAII-based cleanup that guarantees test data is removed
/// even if tests panic or fail.
use anyhow::Result;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

use super::file_store::FileKeyValueStore;
use super::goal_repository::{GoalRepository, DEFAULT_STORAGE_KEY};

/// RAII Test Environment that automatically cleans up on drop
pub struct TestEnvironment {
    /// The temporary directory - kept alive to prevent auto-cleanup until drop
    _temp_dir: TempDir,
    /// File store rooted in the temporary directory
    pub store: FileKeyValueStore,
    /// Base directory path for manual inspection if needed
    pub base_path: PathBuf,
}

impl TestEnvironment {
    /// Create a new test environment with automatic cleanup
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let base_path = temp_dir.path().to_path_buf();
        let store = FileKeyValueStore::new(&base_path)?;

        Ok(TestEnvironment {
            _temp_dir: temp_dir,
            store,
            base_path,
        })
    }

    /// Get the base directory path for this test environment
    pub fn base_directory(&self) -> &Path {
        &self.base_path
    }

    /// Goal repository over this environment's file store
    pub fn goal_repository(&self) -> GoalRepository {
        GoalRepository::new(Arc::new(self.store.clone()), DEFAULT_STORAGE_KEY)
    }
}

impl Drop for TestEnvironment {
    fn drop(&mut self) {
        // TempDir automatically cleans up when dropped
        if std::env::var("SAVINGS_TRACKER_DEBUG_TESTS").is_ok() {
            println!("Cleaning up test environment: {:?}", self.base_path);
        }
    }
}

/// Route `log` output through the test harness. Safe to call repeatedly.
pub fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
