//! Goal service domain logic for the savings tracker.
//!
//! This module owns the goal collection and the active selection, applies
//! create/deposit/withdraw/delete commands, and persists the full collection
//! after every successful change.
//!
//! ## Business Rules
//!
//! - Goal names are unique (exact, case-sensitive match) and never change
//! - Goal amounts must be positive, saved amounts non-negative
//! - Deposits and withdrawals must be positive; withdrawals clamp at zero
//! - Over-saving is allowed
//! - Deleting the active goal clears the selection
//! - Storage failures are logged and never undo the in-memory change

use log::{debug, error, info, warn};

use crate::backend::domain::commands::goal::{CreateGoalCommand, DeleteGoalResult, PersistOutcome, TransferCommand};
use crate::backend::domain::models::collection::GoalCollection;
use crate::backend::domain::models::goal::{validate_amount, DomainGoal, GoalError};
use crate::backend::storage::GoalStorage;

/// Service for managing savings goals
pub struct GoalService {
    goal_storage: Box<dyn GoalStorage>,
    collection: GoalCollection,
    active_goal: Option<String>,
    persist_empty_collection: bool,
    last_persist: Option<PersistOutcome>,
}

impl GoalService {
    /// Load the stored collection. Undecodable storage yields an empty
    /// collection; the error is logged, not returned.
    pub fn load(goal_storage: Box<dyn GoalStorage>, persist_empty_collection: bool) -> Self {
        let collection = match goal_storage.load_goals() {
            Ok(goals) => GoalCollection::from_goals(goals),
            Err(e) => {
                error!("Failed to load stored goals, starting with an empty list: {:#}", e);
                GoalCollection::new()
            }
        };
        info!("Loaded {} savings goals", collection.len());

        Self {
            goal_storage,
            collection,
            active_goal: None,
            persist_empty_collection,
            last_persist: None,
        }
    }

    /// Create a new goal and append it to the collection
    pub fn create_goal(&mut self, command: CreateGoalCommand) -> Result<DomainGoal, GoalError> {
        info!("Creating goal: {:?}", command);

        let goal = DomainGoal::new(&command.name, command.goal_amount, command.due_date, command.saved_amount)?;
        let created = self.collection.insert(goal)?.clone();
        self.persist();

        info!("Successfully created goal: {}", created.name);
        Ok(created)
    }

    /// Add money to the named goal
    pub fn deposit(&mut self, command: TransferCommand) -> Result<DomainGoal, GoalError> {
        debug!("Depositing {} into '{}'", command.amount, command.name);
        validate_amount(command.amount)?;

        let updated = self.collection.deposit(&command.name, command.amount)?;
        self.persist();
        Ok(updated)
    }

    /// Take money out of the named goal, never below zero
    pub fn withdraw(&mut self, command: TransferCommand) -> Result<DomainGoal, GoalError> {
        debug!("Withdrawing {} from '{}'", command.amount, command.name);
        validate_amount(command.amount)?;

        let updated = self.collection.withdraw(&command.name, command.amount)?;
        self.persist();
        Ok(updated)
    }

    /// Delete the named goal. Deleting a missing goal changes nothing.
    pub fn delete_goal(&mut self, name: &str) -> DeleteGoalResult {
        let removed = self.collection.remove(name);
        let mut selection_cleared = false;

        match removed {
            Some(_) => {
                info!("Deleted goal: {}", name);
                if self.active_goal.as_deref() == Some(name) {
                    self.active_goal = None;
                    selection_cleared = true;
                }
                self.persist();
            }
            None => debug!("Delete ignored, no goal named '{}'", name),
        }

        DeleteGoalResult {
            removed,
            selection_cleared,
        }
    }

    /// Make the named goal the active selection
    pub fn select_goal(&mut self, name: &str) -> Result<DomainGoal, GoalError> {
        let goal = self
            .collection
            .get(name)
            .cloned()
            .ok_or_else(|| GoalError::NotFound(name.to_string()))?;
        self.active_goal = Some(goal.name.clone());
        Ok(goal)
    }

    /// Clear the active selection. Returns true if a goal was selected.
    pub fn clear_selection(&mut self) -> bool {
        self.active_goal.take().is_some()
    }

    pub fn active_goal(&self) -> Option<&DomainGoal> {
        self.active_goal.as_deref().and_then(|name| self.collection.get(name))
    }

    pub fn active_goal_name(&self) -> Option<&str> {
        self.active_goal.as_deref()
    }

    pub fn get_goal(&self, name: &str) -> Option<&DomainGoal> {
        self.collection.get(name)
    }

    pub fn goals(&self) -> &[DomainGoal] {
        self.collection.goals()
    }

    pub fn collection(&self) -> &GoalCollection {
        &self.collection
    }

    /// Outcome of the most recent persistence attempt, if any
    pub fn last_persist_outcome(&self) -> Option<PersistOutcome> {
        self.last_persist
    }

    /// Write the full collection to storage
    pub fn persist(&mut self) -> PersistOutcome {
        let outcome = if self.collection.is_empty() && !self.persist_empty_collection {
            warn!("Collection is empty, leaving stored goals untouched");
            PersistOutcome::SkippedEmpty
        } else {
            match self.goal_storage.save_goals(self.collection.goals()) {
                Ok(()) => PersistOutcome::Written,
                Err(e) => {
                    error!("Failed to persist goals, keeping in-memory state: {:#}", e);
                    PersistOutcome::Failed
                }
            }
        };

        self.last_persist = Some(outcome);
        outcome
    }
}
