//! # JSON Goal Repository
//!
//! Stores the whole goal collection as one JSON array under a single
//! key-value storage key (`savingsList` by default).
//!
//! ## JSON Format
//!
//! ```json
//! [
//!   { "name": "Trip", "goal": 1000, "dueDate": "2025-07-01", "savedAmount": 250 },
//!   { "name": "Bike", "goal": "300", "dueDate": "2025-05-15", "savedAmount": "40.5" }
//! ]
//! ```
//!
//! Amounts are written as numbers but accepted as numbers or numeric
//! strings. There is no schema version field.
//!
//! ## Decoding rules
//!
//! - Missing key: empty collection
//! - Payload that is not JSON, or not an array: error (the caller falls back
//!   to an empty collection)
//! - Array element that is not a valid goal: skipped with a warning

use anyhow::{anyhow, Context, Result};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

use crate::backend::domain::date_utils::{format_calendar_date, parse_calendar_date};
use crate::backend::domain::models::goal::DomainGoal;
use crate::backend::domain::money_management::clean_and_parse_amount;
use crate::backend::storage::traits::{GoalStorage, KeyValueStorage};

pub const DEFAULT_STORAGE_KEY: &str = "savingsList";

/// Amount as found in storage: older payloads hold the raw form text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
enum StoredAmount {
    Number(f64),
    Text(String),
}

impl StoredAmount {
    fn to_f64(&self) -> Result<f64> {
        match self {
            StoredAmount::Number(n) => Ok(*n),
            StoredAmount::Text(text) => clean_and_parse_amount(text).map_err(|e| anyhow!(e)),
        }
    }
}

/// JSON record structure for goals
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GoalRecord {
    name: String,
    goal: StoredAmount,
    due_date: String,
    saved_amount: StoredAmount,
}

impl From<&DomainGoal> for GoalRecord {
    fn from(goal: &DomainGoal) -> Self {
        GoalRecord {
            name: goal.name.clone(),
            goal: StoredAmount::Number(goal.goal_amount),
            due_date: format_calendar_date(goal.due_date),
            saved_amount: StoredAmount::Number(goal.saved_amount),
        }
    }
}

impl TryFrom<GoalRecord> for DomainGoal {
    type Error = anyhow::Error;

    fn try_from(record: GoalRecord) -> Result<Self> {
        let goal_amount = record.goal.to_f64().context("Invalid goal amount")?;
        let saved_amount = record.saved_amount.to_f64().context("Invalid saved amount")?;
        let due_date = parse_calendar_date(&record.due_date)
            .ok_or_else(|| anyhow!("Invalid due date '{}'", record.due_date))?;

        DomainGoal::new(&record.name, goal_amount, due_date, saved_amount)
            .map_err(|e| anyhow!("Invalid goal '{}': {}", record.name, e))
    }
}

/// Goal repository over any key-value storage backend
#[derive(Clone)]
pub struct GoalRepository {
    storage: Arc<dyn KeyValueStorage>,
    storage_key: String,
}

impl GoalRepository {
    pub fn new(storage: Arc<dyn KeyValueStorage>, storage_key: impl Into<String>) -> Self {
        Self {
            storage,
            storage_key: storage_key.into(),
        }
    }

    /// Serialize the full collection
    pub fn encode_goals(goals: &[DomainGoal]) -> Result<String> {
        let records: Vec<GoalRecord> = goals.iter().map(GoalRecord::from).collect();
        serde_json::to_string(&records).context("Failed to encode goals")
    }

    /// Parse a stored payload, skipping elements that are not valid goals
    pub fn decode_goals(payload: &str) -> Result<Vec<DomainGoal>> {
        let value: Value = serde_json::from_str(payload).context("Stored goals are not valid JSON")?;

        let items = match value {
            Value::Array(items) => items,
            other => {
                return Err(anyhow!(
                    "Stored goals are not a JSON array (found {})",
                    json_type_name(&other)
                ))
            }
        };

        let mut goals = Vec::with_capacity(items.len());
        for (index, item) in items.into_iter().enumerate() {
            let parsed = serde_json::from_value::<GoalRecord>(item)
                .map_err(anyhow::Error::from)
                .and_then(DomainGoal::try_from);

            match parsed {
                Ok(goal) => goals.push(goal),
                Err(e) => {
                    warn!("Failed to parse stored goal #{}: {:#}. Skipping.", index, e);
                    continue;
                }
            }
        }

        Ok(goals)
    }
}

impl GoalStorage for GoalRepository {
    fn load_goals(&self) -> Result<Vec<DomainGoal>> {
        let payload = match self.storage.get_item(&self.storage_key)? {
            Some(payload) => payload,
            None => {
                debug!("No goals stored under '{}'", self.storage_key);
                return Ok(Vec::new());
            }
        };

        let goals = Self::decode_goals(&payload)?;
        debug!("Loaded {} goals from '{}'", goals.len(), self.storage_key);
        Ok(goals)
    }

    fn save_goals(&self, goals: &[DomainGoal]) -> Result<()> {
        let payload = Self::encode_goals(goals)?;
        self.storage
            .set_item(&self.storage_key, &payload)
            .with_context(|| format!("Failed to store goals under '{}'", self.storage_key))?;
        debug!("Saved {} goals to '{}'", goals.len(), self.storage_key);
        Ok(())
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
