//! Insertion-ordered collection of savings goals with unique names.
//!
//! All mutations happen in memory; persisting the result is the caller's job
//! (see `GoalService`).

use log::warn;

use super::goal::{DomainGoal, GoalError};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GoalCollection {
    goals: Vec<DomainGoal>,
}

impl GoalCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a collection from stored goals. Later goals repeating an
    /// earlier name are dropped so the uniqueness invariant holds.
    pub fn from_goals(goals: Vec<DomainGoal>) -> Self {
        let mut collection = Self::new();
        for goal in goals {
            if collection.contains(&goal.name) {
                warn!("Skipping duplicate stored goal '{}'", goal.name);
                continue;
            }
            collection.goals.push(goal);
        }
        collection
    }

    pub fn goals(&self) -> &[DomainGoal] {
        &self.goals
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DomainGoal> {
        self.goals.iter()
    }

    pub fn len(&self) -> usize {
        self.goals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.goals.iter().any(|g| g.name == name)
    }

    pub fn get(&self, name: &str) -> Option<&DomainGoal> {
        self.goals.iter().find(|g| g.name == name)
    }

    /// Append a goal, rejecting an exact name match
    pub fn insert(&mut self, goal: DomainGoal) -> Result<&DomainGoal, GoalError> {
        if self.contains(&goal.name) {
            return Err(GoalError::DuplicateName(goal.name));
        }
        self.goals.push(goal);
        Ok(&self.goals[self.goals.len() - 1])
    }

    pub fn deposit(&mut self, name: &str, amount: f64) -> Result<DomainGoal, GoalError> {
        self.replace_with(name, |goal| goal.with_deposit(amount))
    }

    pub fn withdraw(&mut self, name: &str, amount: f64) -> Result<DomainGoal, GoalError> {
        self.replace_with(name, |goal| goal.with_withdrawal(amount))
    }

    /// Remove the goal with `name`, returning it if it existed
    pub fn remove(&mut self, name: &str) -> Option<DomainGoal> {
        let index = self.goals.iter().position(|g| g.name == name)?;
        Some(self.goals.remove(index))
    }

    // Replaces the goal in place so its position in the list is kept.
    fn replace_with<F>(&mut self, name: &str, update: F) -> Result<DomainGoal, GoalError>
    where
        F: FnOnce(&DomainGoal) -> Result<DomainGoal, GoalError>,
    {
        let slot = self
            .goals
            .iter_mut()
            .find(|g| g.name == name)
            .ok_or_else(|| GoalError::NotFound(name.to_string()))?;
        let updated = update(slot)?;
        *slot = updated.clone();
        Ok(updated)
    }
}

impl<'a> IntoIterator for &'a GoalCollection {
    type Item = &'a DomainGoal;
    type IntoIter = std::slice::Iter<'a, DomainGoal>;

    fn into_iter(self) -> Self::IntoIter {
        self.goals.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn goal(name: &str, saved: f64) -> DomainGoal {
        DomainGoal::new(name, 100.0, NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(), saved).unwrap()
    }

    fn names(collection: &GoalCollection) -> Vec<&str> {
        collection.iter().map(|g| g.name.as_str()).collect()
    }

    #[test]
    fn test_insert_rejects_exact_duplicate() {
        let mut collection = GoalCollection::new();
        collection.insert(goal("Trip", 0.0)).unwrap();

        let result = collection.insert(goal("Trip", 50.0));
        assert_eq!(result, Err(GoalError::DuplicateName("Trip".to_string())));
        assert_eq!(collection.len(), 1);
        assert_eq!(collection.get("Trip").unwrap().saved_amount, 0.0);

        // Matching is case-sensitive
        collection.insert(goal("trip", 0.0)).unwrap();
        assert_eq!(names(&collection), vec!["Trip", "trip"]);
    }

    #[test]
    fn test_deposit_preserves_position() {
        let mut collection = GoalCollection::new();
        collection.insert(goal("A", 0.0)).unwrap();
        collection.insert(goal("B", 10.0)).unwrap();
        collection.insert(goal("C", 0.0)).unwrap();

        let updated = collection.deposit("B", 15.0).unwrap();
        assert_eq!(updated.saved_amount, 25.0);
        assert_eq!(names(&collection), vec!["A", "B", "C"]);
        assert_eq!(collection.goals()[1].saved_amount, 25.0);
    }

    #[test]
    fn test_failed_mutation_leaves_collection_unchanged() {
        let mut collection = GoalCollection::new();
        collection.insert(goal("Trip", 10.0)).unwrap();
        let before = collection.clone();

        assert_eq!(collection.deposit("Trip", -5.0), Err(GoalError::InvalidAmount));
        assert_eq!(collection.withdraw("Trip", 0.0), Err(GoalError::InvalidAmount));
        assert_eq!(
            collection.deposit("Car", 5.0),
            Err(GoalError::NotFound("Car".to_string()))
        );
        assert_eq!(collection, before);
    }

    #[test]
    fn test_withdraw_clamps_at_zero() {
        let mut collection = GoalCollection::new();
        collection.insert(goal("Trip", 10.0)).unwrap();
        assert_eq!(collection.withdraw("Trip", 25.0).unwrap().saved_amount, 0.0);
    }

    #[test]
    fn test_remove() {
        let mut collection = GoalCollection::new();
        collection.insert(goal("A", 0.0)).unwrap();
        collection.insert(goal("B", 0.0)).unwrap();

        assert!(collection.remove("Missing").is_none());
        assert_eq!(collection.remove("A").unwrap().name, "A");
        assert_eq!(names(&collection), vec!["B"]);
    }

    #[test]
    fn test_from_goals_drops_later_duplicates() {
        let collection = GoalCollection::from_goals(vec![goal("A", 1.0), goal("B", 2.0), goal("A", 3.0)]);
        assert_eq!(names(&collection), vec!["A", "B"]);
        assert_eq!(collection.get("A").unwrap().saved_amount, 1.0);
    }
}
