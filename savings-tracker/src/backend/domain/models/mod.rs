pub mod collection;
pub mod goal;

pub use collection::GoalCollection;
pub use goal::{DomainGoal, GoalError};
