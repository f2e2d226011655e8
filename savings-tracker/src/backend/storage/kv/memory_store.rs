use anyhow::{anyhow, Result};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::backend::storage::traits::KeyValueStorage;

/// In-memory key-value store. Used by tests and as the fallback when the
/// data directory is unavailable. Clones share the same contents.
#[derive(Debug, Clone, Default)]
pub struct MemoryKeyValueStore {
    items: Arc<Mutex<HashMap<String, String>>>,
    write_count: Arc<AtomicUsize>,
    fail_writes: Arc<AtomicBool>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with one key
    pub fn with_item(key: &str, value: &str) -> Self {
        let store = Self::new();
        if let Ok(mut items) = store.items.lock() {
            items.insert(key.to_string(), value.to_string());
        }
        store
    }

    /// Number of successful `set_item` calls so far
    pub fn write_count(&self) -> usize {
        self.write_count.load(Ordering::SeqCst)
    }

    /// Make subsequent writes fail, simulating unavailable storage
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

impl KeyValueStorage for MemoryKeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let items = self.items.lock().map_err(|_| anyhow!("Memory store lock poisoned"))?;
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(anyhow!("Storage is unavailable"));
        }
        let mut items = self.items.lock().map_err(|_| anyhow!("Memory store lock poisoned"))?;
        items.insert(key.to_string(), value.to_string());
        self.write_count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
