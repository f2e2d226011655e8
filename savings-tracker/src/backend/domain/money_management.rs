//! Amount parsing for money typed into forms.
//!
//! The UI hands amounts over as raw text. Anything that does not parse to a
//! finite number is treated as a non-positive amount, which turns deposits
//! and withdrawals into no-ops instead of errors the user has to dismiss.

use log::debug;

use super::models::goal::{validate_amount, GoalError};

const CURRENCY_SYMBOL: &str = "$";

/// Clean and parse amount input. Strips whitespace, the currency symbol and
/// thousands separators.
pub fn clean_and_parse_amount(amount_input: &str) -> Result<f64, String> {
    let cleaned = amount_input
        .trim()
        .replace(CURRENCY_SYMBOL, "")
        .replace(',', "")
        .replace(' ', "");

    if cleaned.is_empty() {
        return Err("Empty amount after cleaning".to_string());
    }

    let amount = cleaned
        .parse::<f64>()
        .map_err(|e| format!("Invalid number format: {}", e))?;

    if !amount.is_finite() {
        return Err(format!("Amount is not a finite number: {}", cleaned));
    }
    Ok(amount)
}

/// Parse a deposit or withdrawal amount. Unparsable input maps to
/// `GoalError::InvalidAmount`, the same as zero or a negative amount.
pub fn parse_transfer_amount(amount_input: &str) -> Result<f64, GoalError> {
    match clean_and_parse_amount(amount_input) {
        Ok(amount) => validate_amount(amount),
        Err(reason) => {
            debug!("Rejecting amount '{}': {}", amount_input, reason);
            Err(GoalError::InvalidAmount)
        }
    }
}

/// Parse the initial saved amount of a new goal. An empty field means
/// nothing has been saved yet.
pub fn parse_saved_amount(amount_input: &str) -> Result<f64, GoalError> {
    if amount_input.trim().is_empty() {
        return Ok(0.0);
    }
    match clean_and_parse_amount(amount_input) {
        Ok(amount) if amount >= 0.0 => Ok(amount),
        Ok(_) => Err(GoalError::NegativeSavedAmount),
        Err(reason) => {
            debug!("Rejecting saved amount '{}': {}", amount_input, reason);
            Err(GoalError::InvalidAmountText(amount_input.to_string()))
        }
    }
}

pub fn parse_goal_amount(amount_input: &str) -> Result<f64, GoalError> {
    match clean_and_parse_amount(amount_input) {
        Ok(amount) if amount > 0.0 => Ok(amount),
        Ok(_) | Err(_) => Err(GoalError::NonPositiveGoalAmount),
    }
}
