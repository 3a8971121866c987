//! In-memory implementation of `ActivitySink`.
//!
//! `InMemoryActivityLog` keeps all events in a `Vec` behind an
//! `Arc<Mutex<_>>`, so one log can be shared by every page executor.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use tracing::debug;

use healthhub_contracts::{
    dashboard::NewActivity,
    error::{HealthHubError, HealthHubResult},
};
use healthhub_core::traits::ActivitySink;

use crate::event::{ActivityEvent, ActivityFeed};

// ── Internal mutable state ────────────────────────────────────────────────────

pub(crate) struct InMemoryState {
    /// Append order. Index `i` holds sequence `i`.
    pub(crate) events: Vec<ActivityEvent>,
}

// ── Public log ────────────────────────────────────────────────────────────────

/// Append-only activity feed.
///
/// Cloning is cheap and yields a handle to the same feed.
#[derive(Clone)]
pub struct InMemoryActivityLog {
    pub(crate) state: Arc<Mutex<InMemoryState>>,
}

impl InMemoryActivityLog {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(InMemoryState { events: Vec::new() })),
        }
    }

    /// A log pre-populated with `entries`, appended in the order given.
    pub fn seeded(entries: impl IntoIterator<Item = NewActivity>) -> HealthHubResult<Self> {
        let log = Self::new();
        for entry in entries {
            log.record(entry)?;
        }
        Ok(log)
    }

    pub fn len(&self) -> usize {
        self.read().events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Up to `limit` events, most recently appended first.
    pub fn recent(&self, limit: usize) -> Vec<ActivityEvent> {
        self.read().events.iter().rev().take(limit).cloned().collect()
    }

    /// Every event, most recently appended first.
    pub fn export(&self, now: DateTime<Utc>) -> ActivityFeed {
        let state = self.read();
        ActivityFeed {
            events: state.events.iter().rev().cloned().collect(),
            exported_at: now,
        }
    }

    // Readers never leave the state half-written, so a poisoned lock is still
    // safe to read through.
    fn read(&self) -> MutexGuard<'_, InMemoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for InMemoryActivityLog {
    fn default() -> Self {
        Self::new()
    }
}

// ── ActivitySink impl ─────────────────────────────────────────────────────────

impl ActivitySink for InMemoryActivityLog {
    /// Append one activity with the next sequence number.
    ///
    /// Fails only if the internal mutex is poisoned.
    fn record(&self, activity: NewActivity) -> HealthHubResult<()> {
        let mut state = self.state.lock().map_err(|e| HealthHubError::ActivityWriteFailed {
            reason: format!("activity state lock poisoned: {}", e),
        })?;

        let sequence = state.events.len() as u64;
        debug!(sequence, kind = ?activity.kind, title = %activity.title, "activity recorded");
        state.events.push(ActivityEvent::from_new(sequence, activity));
        Ok(())
    }
}
