//! Caller-side validation run *before* a command is dispatched.
//!
//! The transition function itself accepts anything; these helpers are what a
//! presentation layer uses to reject user input with a message. Amounts come
//! in denominated in the active display currency and come back converted to
//! the reference currency, rounded to whole units, ready to dispatch.

use thiserror::Error;

use crate::{
    currency::{format_amount, from_reference, symbol_for, to_reference},
    state::BudgetState,
};

/// Policy cap on the total budget, in reference currency.
pub const TOTAL_BUDGET_CAP: f64 = 20_000.0;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CheckError {
    #[error("Please enter a department name.")]
    EmptyDepartment,
    #[error("The department \"{0}\" already exists.")]
    DuplicateDepartment(String),
    #[error("The field must be a positive number!")]
    NotPositive,
    #[error("The value cannot exceed remaining funds {symbol}{remaining}!")]
    ExceedsRemaining { symbol: String, remaining: String },
    #[error("The value can not be more than 20,000")]
    AboveCap,
    #[error("The Budget value cannot be less than the spent value: {0} EUR")]
    BelowAllocated(String),
}

/// Validates a new department allocation. On success returns the amount in
/// reference currency, ready for `Command::AddAllocation`.
pub fn check_new_allocation(
    state: &BudgetState,
    department: &str,
    amount_display: f64,
) -> Result<f64, CheckError> {
    if department.trim().is_empty() {
        return Err(CheckError::EmptyDepartment);
    }
    if state.allocation(department).is_some() {
        return Err(CheckError::DuplicateDepartment(department.to_string()));
    }
    if !(amount_display > 0.0) {
        return Err(CheckError::NotPositive);
    }
    let remaining_display = from_reference(
        &state.rate_table,
        state.remaining(),
        &state.display_currency,
    );
    if amount_display > remaining_display {
        return Err(CheckError::ExceedsRemaining {
            symbol: symbol_for(&state.rate_table, &state.display_currency),
            remaining: format_amount(remaining_display),
        });
    }
    Ok(to_reference(&state.rate_table, amount_display, &state.display_currency).round())
}

/// Validates a new total budget. On success returns the amount in reference
/// currency, ready for `Command::SetTotalBudget`.
pub fn check_total_budget(state: &BudgetState, amount_display: f64) -> Result<f64, CheckError> {
    let amount =
        to_reference(&state.rate_table, amount_display, &state.display_currency).round();
    if amount > TOTAL_BUDGET_CAP {
        return Err(CheckError::AboveCap);
    }
    let allocated = state.total_allocated();
    if amount <= allocated {
        return Err(CheckError::BelowAllocated(format_amount(allocated)));
    }
    Ok(amount)
}
