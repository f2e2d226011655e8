//! Savings goal tracking: a persistent goal store and a pacing engine.
//!
//! Start from [`backend::Backend`], which wires configuration, storage and
//! the [`backend::io::SavingsCommands`] surface together.

pub mod backend;

pub use backend::config::{ConfigRepository, TrackerConfig};
pub use backend::{Backend, SavingsCommands};
