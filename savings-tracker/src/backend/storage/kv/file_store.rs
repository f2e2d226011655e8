use anyhow::{bail, Context, Result};
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

use crate::backend::storage::traits::KeyValueStorage;

const DEFAULT_DIRECTORY_NAME: &str = "Savings Tracker";

/// File-backed key-value store. Each key lives in `{base_directory}/{key}.json`.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    base_directory: PathBuf,
}

impl FileKeyValueStore {
    /// Create a store rooted at `base_directory`, creating it if needed
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path)
                .with_context(|| format!("Failed to create data directory {}", base_path.display()))?;
            info!("Created data directory: {}", base_path.display());
        } else if !base_path.is_dir() {
            bail!("Data path {} is not a directory", base_path.display());
        }

        Ok(Self {
            base_directory: base_path,
        })
    }

    /// Default data directory: the platform's local data dir, or the temp
    /// dir when the platform has none
    pub fn default_directory() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join(DEFAULT_DIRECTORY_NAME)
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    /// Path of the file holding `key`. Characters that are unsafe in file
    /// names are replaced with `_`.
    pub fn item_path(&self, key: &str) -> PathBuf {
        let safe_key: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.base_directory.join(format!("{}.json", safe_key))
    }
}

impl KeyValueStorage for FileKeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let path = self.item_path(key);
        if !path.exists() {
            debug!("No stored value for key '{}'", key);
            return Ok(None);
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Ok(Some(content))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let path = self.item_path(key);

        // Use atomic write pattern: write to temp file, then rename
        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, value)
            .with_context(|| format!("Failed to write {}", temp_path.display()))?;
        fs::rename(&temp_path, &path)
            .with_context(|| format!("Failed to replace {}", path.display()))?;

        debug!("Stored {} bytes under key '{}'", value.len(), key);
        Ok(())
    }
}
