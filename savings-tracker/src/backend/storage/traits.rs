//! # Storage Traits
//!
//! This module defines the storage abstraction traits that allow different
//! storage backends to be used interchangeably in the domain layer.
//!
//! Note: All operations are synchronous. The store is only ever touched from
//! one thread in response to discrete user actions.

use anyhow::Result;

use crate::backend::domain::models::goal::DomainGoal;

/// Durable string key-value storage, the equivalent of browser local storage
pub trait KeyValueStorage: Send + Sync {
    /// Read the value stored under `key`, `None` if the key was never written
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, overwriting any previous value
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
}

/// Trait defining the interface for goal collection storage
///
/// The whole collection is read and written as one unit.
pub trait GoalStorage: Send + Sync {
    /// Load all stored goals in insertion order. Returns an error when the
    /// stored payload cannot be decoded at all.
    fn load_goals(&self) -> Result<Vec<DomainGoal>>;

    /// Overwrite the stored collection with `goals`
    fn save_goals(&self, goals: &[DomainGoal]) -> Result<()>;
}
