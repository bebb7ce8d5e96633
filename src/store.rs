//! Owned state container: single mutator entry point plus post-commit hooks.

use std::sync::Arc;

use tracing::warn;

use crate::{
    errors::Result,
    rates::RateSource,
    state::{BudgetState, Command},
    storage::{Snapshot, SnapshotBackend},
};

/// Observer notified after every committed transition. Hook failures are
/// logged and never propagate; the in-memory state is already committed.
pub trait CommitHook: Send + Sync {
    fn on_commit(&self, state: &BudgetState) -> Result<()>;
}

/// Writes a snapshot of the three persisted fields after every commit.
pub struct SnapshotWriter<B: SnapshotBackend> {
    backend: B,
}

impl<B: SnapshotBackend> SnapshotWriter<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }
}

impl<B: SnapshotBackend> CommitHook for SnapshotWriter<B> {
    fn on_commit(&self, state: &BudgetState) -> Result<()> {
        self.backend.save(&Snapshot::of(state))
    }
}

/// Owns the [`BudgetState`] and applies commands one at a time. The state is
/// replaced, never mutated in place, so reads always see a consistent
/// snapshot and last write wins.
pub struct StateStore {
    state: BudgetState,
    hooks: Vec<Arc<dyn CommitHook>>,
}

impl StateStore {
    pub fn new(state: BudgetState) -> Self {
        Self {
            state,
            hooks: Vec::new(),
        }
    }

    /// Seeds the store from the built-in defaults merged with whatever the
    /// backend has stored. A backend failure is non-fatal and leaves the
    /// defaults in place.
    pub fn open(backend: &dyn SnapshotBackend) -> Self {
        let seed = BudgetState::seed();
        let state = match backend.load() {
            Ok(Some(snapshot)) => snapshot.merge_into(seed),
            Ok(None) => seed,
            Err(err) => {
                warn!(%err, "failed to read stored snapshot; starting from defaults");
                seed
            }
        };
        Self::new(state)
    }

    pub fn state(&self) -> &BudgetState {
        &self.state
    }

    pub fn add_hook(&mut self, hook: Arc<dyn CommitHook>) {
        self.hooks.push(hook);
    }

    /// Applies one command and notifies the post-commit hooks.
    pub fn dispatch(&mut self, command: Command) -> &BudgetState {
        self.state = self.state.apply(command);
        for hook in &self.hooks {
            if let Err(err) = hook.on_commit(&self.state) {
                warn!(%err, "post-commit hook failed");
            }
        }
        &self.state
    }

    /// Pulls the full table from a rate source and submits it as an ordinary
    /// `ReplaceRateTable` command. Empty responses are skipped and fetch
    /// failures leave the current table untouched.
    pub fn ingest_rates(&mut self, source: &dyn RateSource) {
        match source.fetch() {
            Ok(rates) if !rates.is_empty() => {
                self.dispatch(Command::ReplaceRateTable { rates });
            }
            Ok(_) => {}
            Err(err) => warn!(%err, "rate source fetch failed; keeping current table"),
        }
    }
}
