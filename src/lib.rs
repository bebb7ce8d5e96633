#![doc(test(attr(deny(warnings))))]

//! Planner Core offers the budget-allocation state store, currency conversion,
//! and snapshot persistence primitives that power department-budgeting UIs.

pub mod checks;
pub mod currency;
pub mod errors;
pub mod rates;
pub mod state;
pub mod storage;
pub mod store;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Planner Core tracing initialized.");
    });
}
