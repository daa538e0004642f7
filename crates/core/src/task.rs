//! Single-slot task ledger with staleness-based abandonment.
//!
//! At most one summarize task is in flight system-wide. The store is a
//! passive ledger — the engine owns every transition — with thread-safe
//! interior mutability.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use std::{
    sync::Mutex,
    time::{SystemTime, UNIX_EPOCH},
};

/// A task older than this (in seconds) is treated as abandoned when the
/// active slot is queried.
pub const STALE_AFTER_SECS: u64 = 300;

/// Lifecycle state of a summarize task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum TaskStatus {
    /// Accepted, pipeline not yet dispatched.
    Pending,
    /// Dispatched to a provider.
    Running,
    /// Terminal success.
    Succeeded,
    /// Terminal failure.
    Failed,
}

/// One summarize request's lifecycle record.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Task {
    /// Opaque task identifier (UUID v4).
    pub id: CompactString,
    /// Unix timestamp when the task was accepted.
    pub created_at: u64,
    /// Page title.
    pub title: String,
    /// Page URL.
    pub url: String,
    /// Current lifecycle state.
    pub status: TaskStatus,
}

/// Durable record of the single active task.
#[derive(Debug, Default)]
pub struct TaskStore {
    active: Mutex<Option<Task>>,
}

impl TaskStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new pending task, replacing any previous record.
    ///
    /// Returns the created task (cloned). The replace is a single atomic
    /// slot write — no partial state is ever observable.
    pub fn begin(&self, title: impl Into<String>, url: impl Into<String>) -> Task {
        let task = Task {
            id: CompactString::new(uuid::Uuid::new_v4().to_string()),
            created_at: unix_now(),
            title: title.into(),
            url: url.into(),
            status: TaskStatus::Pending,
        };
        *self.active.lock().unwrap() = Some(task.clone());
        task
    }

    /// Mark the active task as running.
    pub fn mark_running(&self, id: &str) {
        let mut slot = self.active.lock().unwrap();
        if let Some(task) = slot.as_mut().filter(|t| t.id == id) {
            task.status = TaskStatus::Running;
        }
    }

    /// The active task, if one exists and is not stale.
    ///
    /// A record older than [`STALE_AFTER_SECS`] is treated as abandoned:
    /// it is cleared and `None` is returned.
    pub fn active(&self) -> Option<Task> {
        let mut slot = self.active.lock().unwrap();
        match slot.as_ref() {
            Some(task) if unix_now().saturating_sub(task.created_at) < STALE_AFTER_SECS => {
                Some(task.clone())
            }
            Some(_) => {
                *slot = None;
                None
            }
            None => None,
        }
    }

    /// Clear the active task record.
    ///
    /// Both terminal paths call this — an orphaned task must never
    /// persist past a terminal state.
    pub fn clear(&self) {
        *self.active.lock().unwrap() = None;
    }

    /// Manual recovery: force-clear the slot. Idempotent and safe to
    /// call when no task is active.
    pub fn reset(&self) {
        self.clear();
    }
}

/// Current unix time in seconds.
pub fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
