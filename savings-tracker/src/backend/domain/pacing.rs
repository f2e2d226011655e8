//! Pacing domain logic for savings goals.
//!
//! Everything here is a pure function of its inputs: the amounts, the due
//! date, the excluded dates and "today". Callers recompute on every render;
//! nothing is cached.
//!
//! ## Day counts
//!
//! - `total_days_left` is the plain calendar difference `due_date - today`
//!   and goes negative once the goal is overdue.
//! - `effective_days_left` counts the days of the inclusive range
//!   `[today, due_date]` that are not excluded. A goal due in 10 days with
//!   no exclusions therefore has 10 total days and 11 effective days.
//!
//! Risk classification uses `total_days_left` while the daily rate uses
//! `effective_days_left`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::RiskLevel;

use super::exclusions::ExclusionSet;
use super::models::goal::DomainGoal;

/// Deadline and progress limits for the risk classification
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskThresholds {
    /// Days left at or below which an underfunded goal is at risk
    pub at_risk_days: i64,
    /// Days left at or below which an underfunded goal is critical
    pub critical_days: i64,
    /// Progress percentage below which a goal counts as underfunded
    pub progress_threshold: f64,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            at_risk_days: 7,
            critical_days: 3,
            progress_threshold: 70.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PacingResult {
    pub progress_percent: f64,
    pub total_days_left: i64,
    pub effective_days_left: i64,
    pub remaining_amount: f64,
    pub daily_savings_needed: f64,
    pub risk_level: RiskLevel,
}

/// Progress and risk for one row of the goal list. Exclusions only apply to
/// the active goal, so list rows are computed without them.
#[derive(Debug, Clone, PartialEq)]
pub struct GoalOverview {
    pub name: String,
    pub progress_percent: f64,
    pub risk_level: RiskLevel,
}

/// Compute pacing with the default thresholds
pub fn compute_pacing(
    goal_amount: f64,
    saved_amount: f64,
    due_date: NaiveDate,
    exclusions: &ExclusionSet,
    today: NaiveDate,
) -> PacingResult {
    compute_pacing_with(
        goal_amount,
        saved_amount,
        due_date,
        exclusions,
        today,
        &RiskThresholds::default(),
    )
}

pub fn compute_pacing_with(
    goal_amount: f64,
    saved_amount: f64,
    due_date: NaiveDate,
    exclusions: &ExclusionSet,
    today: NaiveDate,
    thresholds: &RiskThresholds,
) -> PacingResult {
    let progress_percent = progress_percent(goal_amount, saved_amount);
    let total_days_left = total_days_left(due_date, today);
    let effective_days_left = count_effective_days(today, due_date, exclusions);
    let remaining_amount = remaining_amount(goal_amount, saved_amount);

    let daily_savings_needed = if effective_days_left > 0 {
        remaining_amount / effective_days_left as f64
    } else {
        0.0
    };

    PacingResult {
        progress_percent,
        total_days_left,
        effective_days_left,
        remaining_amount,
        daily_savings_needed,
        risk_level: classify_risk(total_days_left, progress_percent, thresholds),
    }
}

/// `saved / goal * 100` clamped to `[0, 100]`. A goal amount that is not a
/// positive finite number yields 0.
pub fn progress_percent(goal_amount: f64, saved_amount: f64) -> f64 {
    if !goal_amount.is_finite() || goal_amount <= 0.0 {
        return 0.0;
    }
    let progress = saved_amount / goal_amount * 100.0;
    if progress.is_nan() {
        return 0.0;
    }
    progress.clamp(0.0, 100.0)
}

pub fn total_days_left(due_date: NaiveDate, today: NaiveDate) -> i64 {
    (due_date - today).num_days()
}

/// Days in `[today, due_date]` that are not excluded; 0 once overdue
pub fn count_effective_days(today: NaiveDate, due_date: NaiveDate, exclusions: &ExclusionSet) -> i64 {
    if due_date < today {
        return 0;
    }
    let span = total_days_left(due_date, today) + 1;
    span - exclusions.count_between(today, due_date) as i64
}

pub fn is_excluded(date: NaiveDate, exclusions: &ExclusionSet) -> bool {
    exclusions.contains(date)
}

pub fn remaining_amount(goal_amount: f64, saved_amount: f64) -> f64 {
    if !goal_amount.is_finite() || goal_amount <= 0.0 {
        return 0.0;
    }
    // f64::max ignores a NaN operand
    (goal_amount - saved_amount).max(0.0)
}

/// Ordered rules, the most severe matching rule wins
pub fn classify_risk(total_days_left: i64, progress_percent: f64, thresholds: &RiskThresholds) -> RiskLevel {
    let underfunded = progress_percent < thresholds.progress_threshold;

    let mut level = RiskLevel::OnTrack;
    if total_days_left <= thresholds.at_risk_days && underfunded {
        level = RiskLevel::AtRisk;
    }
    if total_days_left <= thresholds.critical_days && underfunded {
        level = RiskLevel::Critical;
    }
    level
}

/// Pacing service bound to a set of risk thresholds
#[derive(Debug, Clone, Default)]
pub struct PacingService {
    thresholds: RiskThresholds,
}

impl PacingService {
    pub fn new(thresholds: RiskThresholds) -> Self {
        Self { thresholds }
    }

    pub fn pacing_for(&self, goal: &DomainGoal, exclusions: &ExclusionSet, today: NaiveDate) -> PacingResult {
        compute_pacing_with(
            goal.goal_amount,
            goal.saved_amount,
            goal.due_date,
            exclusions,
            today,
            &self.thresholds,
        )
    }

    pub fn summarize(&self, goal: &DomainGoal, today: NaiveDate) -> GoalOverview {
        let progress_percent = progress_percent(goal.goal_amount, goal.saved_amount);
        let risk_level = classify_risk(total_days_left(goal.due_date, today), progress_percent, &self.thresholds);
        GoalOverview {
            name: goal.name.clone(),
            progress_percent,
            risk_level,
        }
    }
}
