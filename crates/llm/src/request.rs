//! The chat-completion request body and prompt templates.

use serde::Serialize;
use skimmer_core::Message;

/// Completion budget for summaries and chat answers.
pub const MAX_COMPLETION_TOKENS: u32 = 500;

/// Sampling temperature for every request.
const TEMPERATURE: f32 = 0.7;

/// System message framing the summarization task.
pub const SUMMARY_SYSTEM: &str =
    "You are a helpful assistant that provides concise summaries of web content.";

/// The request body for an OpenAI-style chat-completions call.
#[derive(Debug, Clone, Serialize)]
pub struct Request {
    /// The model to use.
    pub model: String,

    /// The messages to send.
    pub messages: Vec<Message>,

    /// The maximum number of tokens to generate.
    pub max_tokens: u32,

    /// The sampling temperature.
    pub temperature: f32,

    /// Whether to stream the response. Always false — the UI consumes
    /// whole summaries.
    pub stream: bool,
}

impl Request {
    /// Create a request with the standard completion budget.
    pub fn new(model: impl Into<String>, messages: Vec<Message>) -> Self {
        Self {
            model: model.into(),
            messages,
            max_tokens: MAX_COMPLETION_TOKENS,
            temperature: TEMPERATURE,
            stream: false,
        }
    }

    /// A minimal probe request: short fixed prompt, tiny token budget.
    /// Used as the authoritative liveness signal for the local server.
    pub fn probe(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            messages: vec![Message::user("Hello")],
            max_tokens: 5,
            temperature: TEMPERATURE,
            stream: false,
        }
    }
}

/// The fixed user prompt embedding title and content for a summary.
pub fn summary_prompt(title: &str, content: &str) -> String {
    format!(
        "Summarize the following content with title \"{title}\":\n\n{content}\n\n\
         Provide a concise summary highlighting the key points."
    )
}

/// The two-message exchange sent for every summarize call.
pub fn summary_messages(title: &str, content: &str) -> Vec<Message> {
    vec![
        Message::system(SUMMARY_SYSTEM),
        Message::user(summary_prompt(title, content)),
    ]
}
