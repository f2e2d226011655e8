//! # Domain Module
//!
//! Business logic for the savings tracker. The domain layer sits between
//! the `io` command surface and `storage`.
//!
//! ## Services
//!
//! - **GoalService**: The goal collection, the active selection, and
//!   persistence after each change
//! - **PacingService**: Progress, day counts, daily rate and risk level
//!
//! Exclusions are session state and live in `ExclusionSet`; they are never
//! persisted.

pub mod commands;
pub mod date_utils;
pub mod exclusions;
pub mod goal_service;
pub mod models;
pub mod money_management;
pub mod pacing;

pub use exclusions::ExclusionSet;
pub use goal_service::GoalService;
pub use models::{DomainGoal, GoalCollection, GoalError};
pub use pacing::{PacingResult, PacingService, RiskThresholds};
