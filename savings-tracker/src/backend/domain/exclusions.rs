//! Session-scoped set of non-working dates.
//!
//! The set is never persisted. `SavingsCommands` resets it whenever a
//! different goal becomes active.

use chrono::NaiveDate;
use log::debug;
use std::collections::BTreeSet;

use super::date_utils::parse_calendar_date;

/// Calendar dates skipped when counting the days left for a goal.
/// Iterates in ascending date order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    dates: BTreeSet<NaiveDate>,
}

impl ExclusionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `date`. Returns false if it was already excluded.
    pub fn add_exclusion(&mut self, date: NaiveDate) -> bool {
        let inserted = self.dates.insert(date);
        if inserted {
            debug!("Excluded {} from pacing", date);
        }
        inserted
    }

    /// Insert a `YYYY-MM-DD` date typed by the user. Empty or invalid input
    /// is ignored.
    pub fn add_exclusion_text(&mut self, input: &str) -> bool {
        match parse_calendar_date(input) {
            Some(date) => self.add_exclusion(date),
            None => {
                debug!("Ignoring invalid exclusion date '{}'", input);
                false
            }
        }
    }

    pub fn remove_exclusion(&mut self, date: NaiveDate) -> bool {
        self.dates.remove(&date)
    }

    pub fn remove_exclusion_text(&mut self, input: &str) -> bool {
        parse_calendar_date(input).map_or(false, |date| self.remove_exclusion(date))
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    /// Number of excluded dates in the inclusive range `[start, end]`
    pub fn count_between(&self, start: NaiveDate, end: NaiveDate) -> usize {
        if end < start {
            return 0;
        }
        self.dates.range(start..=end).count()
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.dates.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn clear(&mut self) {
        self.dates.clear();
    }
}

impl FromIterator<NaiveDate> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = NaiveDate>>(iter: I) -> Self {
        Self {
            dates: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, day).unwrap()
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut set = ExclusionSet::new();
        assert!(set.add_exclusion(date(3)));
        assert!(!set.add_exclusion(date(3)));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_add_text_ignores_invalid_input() {
        let mut set = ExclusionSet::new();
        assert!(!set.add_exclusion_text(""));
        assert!(!set.add_exclusion_text("not a date"));
        assert!(set.add_exclusion_text("2025-05-10"));
        assert!(!set.add_exclusion_text("2025-05-10"));
        assert!(set.contains(date(10)));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut set: ExclusionSet = [date(1), date(2)].into_iter().collect();
        assert!(!set.remove_exclusion(date(9)));
        assert!(!set.remove_exclusion_text("garbage"));
        assert!(set.remove_exclusion_text("2025-05-01"));
        assert_eq!(set.dates().collect::<Vec<_>>(), vec![date(2)]);
    }

    #[test]
    fn test_dates_iterate_in_order() {
        let mut set = ExclusionSet::new();
        set.add_exclusion(date(20));
        set.add_exclusion(date(2));
        set.add_exclusion(date(11));
        assert_eq!(set.dates().collect::<Vec<_>>(), vec![date(2), date(11), date(20)]);
    }

    #[test]
    fn test_count_between_is_inclusive() {
        let set: ExclusionSet = [date(1), date(5), date(10)].into_iter().collect();
        assert_eq!(set.count_between(date(1), date(10)), 3);
        assert_eq!(set.count_between(date(2), date(9)), 1);
        assert_eq!(set.count_between(date(5), date(5)), 1);
        assert_eq!(set.count_between(date(10), date(1)), 0);
    }
}
