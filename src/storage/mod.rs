//! Snapshot persistence for the budget state.

pub mod json_backend;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    errors::Result,
    state::{Allocation, BudgetState},
};

/// The three persisted fields. Each is optional on read so an absent or
/// malformed field falls back to the seeded default instead of erroring.
/// The rate table is deliberately not persisted; it is refreshed from the
/// remote rate source on every session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_budget: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocations: Option<Vec<Allocation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_currency: Option<String>,
}

impl Snapshot {
    pub fn of(state: &BudgetState) -> Self {
        Self {
            total_budget: Some(state.total_budget),
            allocations: Some(state.allocations.clone()),
            display_currency: Some(state.display_currency.clone()),
        }
    }

    /// Extracts a snapshot from raw JSON, keeping whichever fields parse and
    /// dropping the rest. There is no schema version and no migration path.
    pub fn from_value(value: Value) -> Self {
        let total_budget = value.get("total_budget").and_then(Value::as_f64);
        let allocations = value
            .get("allocations")
            .cloned()
            .and_then(|raw| serde_json::from_value(raw).ok());
        let display_currency = value
            .get("display_currency")
            .and_then(Value::as_str)
            .map(str::to_string);
        Self {
            total_budget,
            allocations,
            display_currency,
        }
    }

    /// Overlays the stored fields onto a base state; absent fields keep the
    /// base values.
    pub fn merge_into(self, mut base: BudgetState) -> BudgetState {
        if let Some(total_budget) = self.total_budget {
            base.total_budget = total_budget;
        }
        if let Some(allocations) = self.allocations {
            base.allocations = allocations;
        }
        if let Some(display_currency) = self.display_currency {
            base.display_currency = display_currency;
        }
        base
    }
}

/// Abstraction over persistence backends capable of storing state snapshots.
pub trait SnapshotBackend: Send + Sync {
    /// Reads the stored snapshot, or `None` when nothing usable is stored.
    fn load(&self) -> Result<Option<Snapshot>>;
    /// Replaces the stored snapshot.
    fn save(&self, snapshot: &Snapshot) -> Result<()>;
}

pub use json_backend::JsonStorage;
