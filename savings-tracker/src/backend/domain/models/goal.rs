use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DomainGoal {
    pub name: String,
    pub goal_amount: f64,
    pub due_date: NaiveDate,
    pub saved_amount: f64,
}

impl DomainGoal {
    /// Build a validated goal. The name is kept exactly as given, surrounding
    /// whitespace included, since names are matched by exact string.
    pub fn new(
        name: &str,
        goal_amount: f64,
        due_date: NaiveDate,
        saved_amount: f64,
    ) -> Result<Self, GoalError> {
        if name.trim().is_empty() {
            return Err(GoalError::EmptyName);
        }
        if !goal_amount.is_finite() || goal_amount <= 0.0 {
            return Err(GoalError::NonPositiveGoalAmount);
        }
        if !saved_amount.is_finite() || saved_amount < 0.0 {
            return Err(GoalError::NegativeSavedAmount);
        }

        Ok(Self {
            name: name.to_string(),
            goal_amount,
            due_date,
            saved_amount,
        })
    }

    /// Copy of this goal with `amount` added to the saved amount
    pub fn with_deposit(&self, amount: f64) -> Result<Self, GoalError> {
        let amount = validate_amount(amount)?;
        let saved_amount = self.saved_amount + amount;
        // An overflowing sum cannot be stored as JSON
        if !saved_amount.is_finite() {
            return Err(GoalError::InvalidAmount);
        }
        Ok(Self {
            saved_amount,
            ..self.clone()
        })
    }

    /// Copy of this goal with `amount` taken out, never going below zero
    pub fn with_withdrawal(&self, amount: f64) -> Result<Self, GoalError> {
        let amount = validate_amount(amount)?;
        Ok(Self {
            saved_amount: (self.saved_amount - amount).max(0.0),
            ..self.clone()
        })
    }

    pub fn is_fully_funded(&self) -> bool {
        self.saved_amount >= self.goal_amount
    }
}

/// Deposit and withdrawal amounts must be finite and strictly positive
pub fn validate_amount(amount: f64) -> Result<f64, GoalError> {
    if amount.is_finite() && amount > 0.0 {
        Ok(amount)
    } else {
        Err(GoalError::InvalidAmount)
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GoalError {
    #[error("A saving with the name \"{0}\" already exists!")]
    DuplicateName(String),
    #[error("No saving named \"{0}\" was found")]
    NotFound(String),
    #[error("Amount must be a positive number")]
    InvalidAmount,
    #[error("No saving is currently selected")]
    NoActiveGoal,
    #[error("Name cannot be empty")]
    EmptyName,
    #[error("Goal amount must be positive")]
    NonPositiveGoalAmount,
    #[error("Saved amount cannot be negative")]
    NegativeSavedAmount,
    #[error("\"{0}\" is not a valid amount")]
    InvalidAmountText(String),
    #[error("Invalid due date: {0}")]
    InvalidDueDate(String),
}
