//! Bounded, append-only log of completed summaries.

use crate::unix_now;
use serde::{Deserialize, Serialize};
use std::{collections::VecDeque, sync::Mutex};

/// Maximum number of retained history entries.
pub const HISTORY_CAP: usize = 100;

/// One completed summary.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HistoryEntry {
    /// Page URL.
    pub url: String,
    /// Page title.
    pub title: String,
    /// The produced summary.
    pub summary: String,
    /// Wire name of the provider that produced it.
    pub provider: String,
    /// Unix timestamp of completion.
    pub timestamp: u64,
}

/// Append-only log capped at [`HISTORY_CAP`] entries, oldest evicted
/// first. Eviction is strictly FIFO, never relevance-based.
#[derive(Debug, Default)]
pub struct HistoryLog {
    entries: Mutex<VecDeque<HistoryEntry>>,
}

impl HistoryLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, evicting the oldest once the cap is reached.
    pub fn push(
        &self,
        url: impl Into<String>,
        title: impl Into<String>,
        summary: impl Into<String>,
        provider: impl Into<String>,
    ) {
        let entry = HistoryEntry {
            url: url.into(),
            title: title.into(),
            summary: summary.into(),
            provider: provider.into(),
            timestamp: unix_now(),
        };
        let mut entries = self.entries.lock().unwrap();
        entries.push_back(entry);
        while entries.len() > HISTORY_CAP {
            entries.pop_front();
        }
    }

    /// All retained entries, oldest first (cloned).
    pub fn entries(&self) -> Vec<HistoryEntry> {
        self.entries.lock().unwrap().iter().cloned().collect()
    }

    /// Number of retained entries.
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().unwrap().is_empty()
    }
}
