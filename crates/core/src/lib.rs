//! Shared types for the skimmer summarization core.
//!
//! This crate carries everything the other members agree on: chat
//! messages, the provider taxonomy and settings snapshot, the
//! [`Complete`] trait implemented by every backend adapter, the
//! [`ProviderError`] taxonomy, the single-slot task ledger, the bounded
//! history log, and the notification events broadcast to the UI.

pub use error::ProviderError;
pub use event::{ChatReply, Event, SummaryOutcome};
pub use history::{HISTORY_CAP, HistoryEntry, HistoryLog};
pub use message::{Message, Role, estimate_tokens};
pub use provider::{
    Complete, CustomSettings, ProviderKind, Settings, Validation, VendorSettings,
};
pub use task::{STALE_AFTER_SECS, Task, TaskStatus, TaskStore, unix_now};

mod error;
mod event;
mod history;
mod message;
mod provider;
mod task;
