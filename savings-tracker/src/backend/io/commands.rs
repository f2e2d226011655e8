//! # Savings Commands
//!
//! The command surface the presentation layer calls. Requests arrive as raw
//! form text and shared DTOs; responses carry the updated state and an
//! optional notification to show.

use chrono::NaiveDate;
use log::{debug, info, warn};
use shared::{
    CreateGoalRequest, CreateGoalResponse, ExclusionListResponse, GoalListResponse, MoneyResponse,
    Notification, PacingInfo, RemoveGoalResponse, SelectGoalResponse,
};

use crate::backend::domain::commands::goal::{CreateGoalCommand, TransferCommand};
use crate::backend::domain::date_utils::{self, format_calendar_date, parse_calendar_date};
use crate::backend::domain::exclusions::ExclusionSet;
use crate::backend::domain::goal_service::GoalService;
use crate::backend::domain::models::goal::GoalError;
use crate::backend::domain::money_management::{parse_goal_amount, parse_saved_amount, parse_transfer_amount};
use crate::backend::domain::pacing::PacingService;
use crate::backend::io::mappers::GoalMapper;

pub const DEPOSIT_MESSAGE: &str = "Great Job! Keep it up!";
pub const WITHDRAWAL_MESSAGE: &str = "Hope to See you Again!";

/// UI-facing commands over the goal store, the pacing engine and the
/// session's exclusion set
pub struct SavingsCommands {
    goal_service: GoalService,
    pacing_service: PacingService,
    exclusions: ExclusionSet,
}

impl SavingsCommands {
    pub fn new(goal_service: GoalService, pacing_service: PacingService) -> Self {
        Self {
            goal_service,
            pacing_service,
            exclusions: ExclusionSet::new(),
        }
    }

    pub fn goal_service(&self) -> &GoalService {
        &self.goal_service
    }

    /// Parse the new-goal form and create the goal
    pub fn submit_new_goal(&mut self, request: CreateGoalRequest) -> CreateGoalResponse {
        info!("Submitting new goal: {:?}", request);

        match Self::parse_create_request(&request).and_then(|command| self.goal_service.create_goal(command)) {
            Ok(goal) => CreateGoalResponse {
                notification: Notification::success(format!("{} successfully created!", goal.name)),
                goal: Some(GoalMapper::to_dto(&goal)),
            },
            Err(e) => {
                warn!("Rejected new goal '{}': {}", request.name, e);
                CreateGoalResponse {
                    goal: None,
                    notification: Notification::error(e.to_string()),
                }
            }
        }
    }

    fn parse_create_request(request: &CreateGoalRequest) -> Result<CreateGoalCommand, GoalError> {
        let goal_amount = parse_goal_amount(&request.goal_amount)?;
        let due_date = parse_calendar_date(&request.due_date)
            .ok_or_else(|| GoalError::InvalidDueDate(request.due_date.clone()))?;
        let saved_amount = parse_saved_amount(&request.saved_amount)?;

        Ok(CreateGoalCommand {
            name: request.name.clone(),
            goal_amount,
            due_date,
            saved_amount,
        })
    }

    /// Deposit into the active goal. Invalid input is a silent no-op.
    pub fn record_deposit(&mut self, amount_text: &str) -> MoneyResponse {
        match self.transfer_command(amount_text).and_then(|command| self.goal_service.deposit(command)) {
            Ok(goal) => MoneyResponse {
                goal: Some(GoalMapper::to_dto(&goal)),
                notification: Some(Notification::success(DEPOSIT_MESSAGE)),
            },
            Err(e) => {
                debug!("Deposit ignored: {}", e);
                noop_money_response()
            }
        }
    }

    /// Withdraw from the active goal. Invalid input is a silent no-op.
    pub fn record_withdrawal(&mut self, amount_text: &str) -> MoneyResponse {
        match self.transfer_command(amount_text).and_then(|command| self.goal_service.withdraw(command)) {
            Ok(goal) => MoneyResponse {
                goal: Some(GoalMapper::to_dto(&goal)),
                notification: Some(Notification::info(WITHDRAWAL_MESSAGE)),
            },
            Err(e) => {
                debug!("Withdrawal ignored: {}", e);
                noop_money_response()
            }
        }
    }

    fn transfer_command(&self, amount_text: &str) -> Result<TransferCommand, GoalError> {
        let name = self.goal_service.active_goal_name().ok_or(GoalError::NoActiveGoal)?;
        let amount = parse_transfer_amount(amount_text)?;
        Ok(TransferCommand {
            name: name.to_string(),
            amount,
        })
    }

    pub fn remove_goal(&mut self, name: &str) -> RemoveGoalResponse {
        let result = self.goal_service.delete_goal(name);
        if result.selection_cleared {
            self.exclusions.clear();
        }
        RemoveGoalResponse {
            removed: result.removed.is_some(),
            selection_cleared: result.selection_cleared,
        }
    }

    /// Select a goal. Switching to a different goal resets the exclusions;
    /// reselecting the active goal keeps them.
    pub fn select_goal(&mut self, name: &str) -> SelectGoalResponse {
        let previous = self.goal_service.active_goal_name().map(str::to_string);

        match self.goal_service.select_goal(name) {
            Ok(goal) => {
                if previous.as_deref() != Some(goal.name.as_str()) {
                    self.exclusions.clear();
                }
                SelectGoalResponse {
                    goal: Some(GoalMapper::to_dto(&goal)),
                }
            }
            Err(e) => {
                warn!("Cannot select goal: {}", e);
                SelectGoalResponse { goal: None }
            }
        }
    }

    /// Clear the selection and the exclusions. Returns true if a goal was
    /// selected.
    pub fn clear_selection(&mut self) -> bool {
        self.exclusions.clear();
        self.goal_service.clear_selection()
    }

    pub fn add_exclusion(&mut self, date_text: &str) -> ExclusionListResponse {
        let changed = self.exclusions.add_exclusion_text(date_text);
        self.exclusion_response(changed)
    }

    pub fn remove_exclusion(&mut self, date_text: &str) -> ExclusionListResponse {
        let changed = self.exclusions.remove_exclusion_text(date_text);
        self.exclusion_response(changed)
    }

    /// Excluded dates in ascending order
    pub fn exclusion_dates(&self) -> Vec<String> {
        self.exclusions.dates().map(format_calendar_date).collect()
    }

    fn exclusion_response(&self, changed: bool) -> ExclusionListResponse {
        ExclusionListResponse {
            dates: self.exclusion_dates(),
            changed,
        }
    }

    /// Pacing for the active goal as of the local date
    pub fn get_pacing(&self) -> Option<PacingInfo> {
        self.get_pacing_on(date_utils::today())
    }

    pub fn get_pacing_on(&self, today: NaiveDate) -> Option<PacingInfo> {
        let goal = self.goal_service.active_goal()?;
        let pacing = self.pacing_service.pacing_for(goal, &self.exclusions, today);
        Some(GoalMapper::to_pacing_info(&goal.name, pacing))
    }

    pub fn list_goals(&self) -> GoalListResponse {
        self.list_goals_on(date_utils::today())
    }

    /// Goal list summaries in insertion order, plus the active goal
    pub fn list_goals_on(&self, today: NaiveDate) -> GoalListResponse {
        let active_name = self.goal_service.active_goal_name();
        let goals = self
            .goal_service
            .goals()
            .iter()
            .map(|goal| {
                let is_active = active_name == Some(goal.name.as_str());
                GoalMapper::to_goal_summary(self.pacing_service.summarize(goal, today), is_active)
            })
            .collect();

        GoalListResponse {
            goals,
            active_goal: self.goal_service.active_goal().map(GoalMapper::to_dto),
        }
    }
}

fn noop_money_response() -> MoneyResponse {
    MoneyResponse {
        goal: None,
        notification: None,
    }
}
