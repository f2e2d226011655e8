use serde::{Deserialize, Serialize};
use std::fmt;

/// A savings goal as seen by the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    /// Unique, case-sensitive name of the goal
    pub name: String,
    /// Target amount to save
    pub goal_amount: f64,
    /// Deadline as an ISO calendar date (YYYY-MM-DD)
    pub due_date: String,
    /// Amount saved so far
    pub saved_amount: f64,
}

/// Deadline pressure classification for a goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    /// Enough time or enough progress
    OnTrack,
    /// Due within a week with less than 70% saved
    AtRisk,
    /// Due within three days with less than 70% saved
    Critical,
}

impl RiskLevel {
    /// Stable lowercase identifier, e.g. for styling hooks
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::OnTrack => "on-track",
            RiskLevel::AtRisk => "at-risk",
            RiskLevel::Critical => "critical",
        }
    }

    /// Parse the identifier produced by [`RiskLevel::as_str`]
    pub fn parse(s: &str) -> Result<Self, RiskLevelParseError> {
        match s {
            "on-track" => Ok(RiskLevel::OnTrack),
            "at-risk" => Ok(RiskLevel::AtRisk),
            "critical" => Ok(RiskLevel::Critical),
            _ => Err(RiskLevelParseError(s.to_string())),
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RiskLevelParseError(pub String);

impl fmt::Display for RiskLevelParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid risk level: {}", self.0)
    }
}

impl std::error::Error for RiskLevelParseError {}

/// Derived pacing metrics for the active goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PacingInfo {
    pub goal_name: String,
    /// Completion percentage, clamped to 0..=100
    pub progress_percent: f64,
    /// Calendar days until the due date (negative when overdue)
    pub total_days_left: i64,
    /// Days in [today, due date] that are not excluded
    pub effective_days_left: i64,
    pub remaining_amount: f64,
    pub daily_savings_needed: f64,
    pub risk_level: RiskLevel,
}

/// One row of the goal list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalSummary {
    pub name: String,
    pub progress_percent: f64,
    pub risk_level: RiskLevel,
    /// Whether this goal is the active selection
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalListResponse {
    pub goals: Vec<GoalSummary>,
    pub active_goal: Option<Goal>,
}

/// Severity of a user-facing notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationSeverity {
    Success,
    Info,
    Error,
}

/// Short message the presentation layer shows after a command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub message: String,
    pub severity: NotificationSeverity,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self { message: message.into(), severity: NotificationSeverity::Success }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self { message: message.into(), severity: NotificationSeverity::Info }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { message: message.into(), severity: NotificationSeverity::Error }
    }
}

/// Raw form input for a new goal. All fields arrive as text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateGoalRequest {
    pub name: String,
    pub goal_amount: String,
    /// ISO calendar date (YYYY-MM-DD)
    pub due_date: String,
    pub saved_amount: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateGoalResponse {
    /// The created goal, `None` when the request was rejected
    pub goal: Option<Goal>,
    pub notification: Notification,
}

/// Result of a deposit or withdrawal against the active goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoneyResponse {
    /// Updated goal, `None` when the command was a no-op
    pub goal: Option<Goal>,
    /// Notification to show; invalid input produces none
    pub notification: Option<Notification>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectGoalResponse {
    pub goal: Option<Goal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoveGoalResponse {
    pub removed: bool,
    /// True when the removed goal was the active selection
    pub selection_cleared: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExclusionListResponse {
    /// Excluded dates in ascending order (YYYY-MM-DD)
    pub dates: Vec<String>,
    /// Whether the last command changed the set
    pub changed: bool,
}
