//! The budget state aggregate and its command-driven transition function.

use serde::{Deserialize, Serialize};

use crate::currency::{rate_for, ExchangeRate, REFERENCE_CURRENCY};

/// A named department's portion of the total budget, in reference currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    pub department: String,
    pub amount: f64,
}

impl Allocation {
    pub fn new(department: impl Into<String>, amount: f64) -> Self {
        Self {
            department: department.into(),
            amount,
        }
    }
}

/// The sole aggregate: budget total, department allocations, active display
/// currency, and the known exchange rates. All amounts are stored in the
/// reference currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetState {
    pub total_budget: f64,
    #[serde(default)]
    pub allocations: Vec<Allocation>,
    pub display_currency: String,
    #[serde(default)]
    pub rate_table: Vec<ExchangeRate>,
}

/// Closed command protocol for the state store. Every variant is a pure,
/// total transform; invalid input is clamped or ignored, never rejected.
/// Rejection-worthy validation happens in the caller via [`crate::checks`].
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    AddAllocation { department: String, amount: f64 },
    IncreaseAllocation { department: String, delta: f64 },
    DecreaseAllocation { department: String, delta: f64 },
    RemoveAllocation { department: String },
    SetTotalBudget { amount: f64 },
    SetDisplayCurrency { code: String },
    ReplaceRateTable { rates: Vec<ExchangeRate> },
}

impl BudgetState {
    /// Built-in defaults used before anything is loaded from storage or the
    /// remote rate source.
    pub fn seed() -> Self {
        Self {
            total_budget: 2000.0,
            allocations: vec![
                Allocation::new("Marketing", 50.0),
                Allocation::new("Finance", 300.0),
                Allocation::new("Sales", 70.0),
                Allocation::new("HR", 40.0),
                Allocation::new("IT", 500.0),
            ],
            display_currency: REFERENCE_CURRENCY.to_string(),
            rate_table: vec![
                ExchangeRate::new("Dollar", "USD", "USD", 1.1),
                ExchangeRate::new("Pound", "GBP", "GBP", 0.86),
                ExchangeRate::new("Lei", "RON", "RON", 4.97),
            ],
        }
    }

    /// Applies a command and returns the next state. Total and deterministic:
    /// no command can fail, and the current state is never mutated in place.
    pub fn apply(&self, command: Command) -> BudgetState {
        let mut next = self.clone();
        match command {
            Command::AddAllocation { department, amount } => {
                // Newest allocations go to the front of the list.
                next.allocations.insert(0, Allocation::new(department, amount));
            }
            Command::IncreaseAllocation { department, delta } => {
                if let Some(entry) = next.allocation_mut(&department) {
                    entry.amount += delta;
                }
            }
            Command::DecreaseAllocation { department, delta } => {
                if let Some(entry) = next.allocation_mut(&department) {
                    entry.amount = (entry.amount - delta).max(0.0);
                }
            }
            Command::RemoveAllocation { department } => {
                next.allocations.retain(|entry| entry.department != department);
            }
            Command::SetTotalBudget { amount } => {
                next.total_budget = amount.max(0.0);
            }
            Command::SetDisplayCurrency { code } => {
                // Unconditional; resolution is the read-side helpers' job.
                next.display_currency = code;
            }
            Command::ReplaceRateTable { rates } => {
                let keeps_currency = next.display_currency == REFERENCE_CURRENCY
                    || rate_for(&rates, &next.display_currency).is_some();
                next.rate_table = rates;
                if !keeps_currency {
                    next.display_currency = REFERENCE_CURRENCY.to_string();
                }
            }
        }
        next
    }

    pub fn allocation(&self, department: &str) -> Option<&Allocation> {
        self.allocations
            .iter()
            .find(|entry| entry.department == department)
    }

    fn allocation_mut(&mut self, department: &str) -> Option<&mut Allocation> {
        self.allocations
            .iter_mut()
            .find(|entry| entry.department == department)
    }

    /// Sum of all department allocations, in reference currency.
    pub fn total_allocated(&self) -> f64 {
        self.allocations.iter().map(|entry| entry.amount).sum()
    }

    /// Unallocated remainder of the total budget, in reference currency.
    pub fn remaining(&self) -> f64 {
        self.total_budget - self.total_allocated()
    }

    /// Currency codes a user may select: the reference currency plus every
    /// rate-table entry with a resolvable code.
    pub fn selectable_codes(&self) -> Vec<&str> {
        let mut codes = vec![REFERENCE_CURRENCY];
        codes.extend(
            self.rate_table
                .iter()
                .filter_map(|entry| entry.resolved_code()),
        );
        codes
    }
}

impl Default for BudgetState {
    fn default() -> Self {
        Self::seed()
    }
}
