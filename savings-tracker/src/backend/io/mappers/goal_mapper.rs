use shared::{Goal, GoalSummary, PacingInfo};

use crate::backend::domain::date_utils::format_calendar_date;
use crate::backend::domain::models::goal::DomainGoal;
use crate::backend::domain::pacing::{GoalOverview, PacingResult};

pub struct GoalMapper;

impl GoalMapper {
    /// Convert domain DomainGoal to shared Goal DTO
    pub fn to_dto(domain: &DomainGoal) -> Goal {
        Goal {
            name: domain.name.clone(),
            goal_amount: domain.goal_amount,
            due_date: format_calendar_date(domain.due_date),
            saved_amount: domain.saved_amount,
        }
    }

    /// Convert a pacing result for `goal_name` to the shared PacingInfo DTO
    pub fn to_pacing_info(goal_name: &str, pacing: PacingResult) -> PacingInfo {
        PacingInfo {
            goal_name: goal_name.to_string(),
            progress_percent: pacing.progress_percent,
            total_days_left: pacing.total_days_left,
            effective_days_left: pacing.effective_days_left,
            remaining_amount: pacing.remaining_amount,
            daily_savings_needed: pacing.daily_savings_needed,
            risk_level: pacing.risk_level,
        }
    }

    pub fn to_goal_summary(overview: GoalOverview, is_active: bool) -> GoalSummary {
        GoalSummary {
            name: overview.name,
            progress_percent: overview.progress_percent,
            risk_level: overview.risk_level,
            is_active,
        }
    }
}
