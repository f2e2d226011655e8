//! # Key-Value Storage Module
//!
//! Local key-value storage for the savings tracker, modelled on browser local
//! storage: string keys mapping to string values, each value replaced as a
//! whole on write.
//!
//! ## Backends
//!
//! - `FileKeyValueStore`: one `{key}.json` file per key under the data
//!   directory, written atomically through a temp file
//! - `MemoryKeyValueStore`: process memory only; used in tests and when the
//!   data directory cannot be created
//!
//! ## File Structure
//!
//! ```text
//! data/
//! ├── tracker_config.yaml
//! └── savingsList.json    ← goal collection, see `goal_repository`
//! ```

pub mod file_store;
pub mod goal_repository;
pub mod memory_store;

#[cfg(test)]
pub mod test_utils;

pub use file_store::FileKeyValueStore;
pub use goal_repository::{GoalRepository, DEFAULT_STORAGE_KEY};
pub use memory_store::MemoryKeyValueStore;
