//! Domain-level command and result types
//! These structs are used by services inside the domain layer and are **not**
//! exposed to the presentation layer. `io::SavingsCommands` maps the public
//! DTOs defined in the `shared` crate to these internal types.

pub mod goal {
    use chrono::NaiveDate;

    use crate::backend::domain::models::goal::DomainGoal;

    /// Input for creating a new goal, already parsed from form text.
    #[derive(Debug, Clone)]
    pub struct CreateGoalCommand {
        pub name: String,
        pub goal_amount: f64,
        pub due_date: NaiveDate,
        pub saved_amount: f64,
    }

    /// Deposit or withdrawal against a named goal.
    #[derive(Debug, Clone)]
    pub struct TransferCommand {
        pub name: String,
        pub amount: f64,
    }

    /// Result of deleting a goal.
    #[derive(Debug, Clone, PartialEq)]
    pub struct DeleteGoalResult {
        pub removed: Option<DomainGoal>,
        pub selection_cleared: bool,
    }

    /// Result of a persistence attempt.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum PersistOutcome {
        Written,
        /// Empty collection left unwritten by configuration
        SkippedEmpty,
        /// The write failed; in-memory state is still authoritative
        Failed,
    }
}

pub use goal::*;
