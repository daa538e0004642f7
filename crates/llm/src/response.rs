//! Response envelopes for the chat-completions contract.

use serde::Deserialize;

/// A chat-completion response.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ChatCompletion {
    /// The completion choices.
    #[serde(default)]
    pub choices: Vec<Choice>,
}

impl ChatCompletion {
    /// The first choice's message content, if any.
    ///
    /// A choice whose message carries no `content` field yields `None`,
    /// so callers treat it as a malformed envelope rather than an empty
    /// completion.
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
    }
}

/// One completion choice.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Choice {
    /// The completion message.
    #[serde(default)]
    pub message: ChoiceMessage,
}

/// The message inside a completion choice.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ChoiceMessage {
    /// The generated text. Absent when the vendor sent a degenerate
    /// envelope.
    #[serde(default)]
    pub content: Option<String>,
}

/// The vendor error envelope: `{"error": {"message": "..."}}`.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Extract the vendor error message from a response body, if the body
/// follows the standard error envelope.
pub fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .map(|envelope| envelope.error.message)
}

/// A model listing response: `{"data": [{"id": "..."}]}`.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ModelList {
    /// The available models.
    #[serde(default)]
    pub data: Vec<ModelInfo>,
}

/// One entry of a model listing.
#[derive(Debug, Clone, Deserialize, serde::Serialize)]
pub struct ModelInfo {
    /// The model identifier.
    pub id: String,
}
