//! # Storage Module
//!
//! Handles all data persistence for the savings tracker.
//!
//! The domain layer only sees the `GoalStorage` trait; the key-value backend
//! behind it can be swapped (files on disk, process memory) without touching
//! domain logic.
//!
//! ## Key Responsibilities
//!
//! - **Data Persistence**: Writing the full goal collection on every change
//! - **Data Retrieval**: Loading the collection once at startup
//! - **Format Tolerance**: Accepting numeric or string amounts, skipping
//!   malformed records

pub mod kv;
pub mod traits;

pub use kv::{FileKeyValueStore, GoalRepository, MemoryKeyValueStore, DEFAULT_STORAGE_KEY};
pub use traits::{GoalStorage, KeyValueStorage};
