//! Notification events broadcast to the UI.
//!
//! Delivery is fire-and-forget: the core never awaits acknowledgment and
//! tolerates zero listeners (the popup may be closed mid-task and
//! reopened later).

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// Terminal result of a summarize task, as reported to the UI.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SummaryOutcome {
    /// Whether the task succeeded.
    pub success: bool,
    /// The summary text, when successful.
    pub summary: Option<String>,
    /// Wire name of the provider that produced the summary.
    pub provider: String,
    /// Whether the local fallback produced the result.
    pub used_fallback: bool,
    /// Whether the content was truncated to fit the token budget.
    pub content_truncated: bool,
    /// Terminal error message, when failed. When both the primary and
    /// the fallback failed, both messages are concatenated here.
    pub error: Option<String>,
}

/// Result of one chat question, as reported to the UI.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChatReply {
    /// The question that was asked.
    pub question: String,
    /// The assistant answer, when successful.
    pub answer: Option<String>,
    /// Wire name of the provider that answered.
    pub provider: String,
    /// Whether the question was answered.
    pub success: bool,
    /// Error message, when failed.
    pub error: Option<String>,
}

/// A notification broadcast to the UI sink.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    /// Advisory progress telemetry — never used for control decisions.
    Progress {
        /// The task this progress belongs to.
        task_id: CompactString,
        /// Checkpoint percentage (0–100; 0 signals failure reset).
        percent: u8,
        /// Human-readable status line.
        status: String,
    },
    /// Exactly one terminal notification per summarize task.
    Complete {
        /// The task that finished.
        task_id: CompactString,
        /// The terminal outcome.
        outcome: SummaryOutcome,
    },
    /// Response to a chat question.
    ChatResponse {
        /// The chat reply payload.
        reply: ChatReply,
    },
}
