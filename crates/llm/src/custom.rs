//! User-configured custom endpoint adapter.
//!
//! Custom endpoints do not guarantee the OpenAI response schema, so
//! extraction tries an explicit ordered list of accepted shapes before
//! falling back to the raw payload. This is a compatibility affordance,
//! not a correctness guarantee.

use crate::{HttpTransport, Request, summary_messages};
use reqwest::Client;
use serde_json::Value;
use skimmer_core::{Complete, CustomSettings, Message, ProviderError, Validation};
use std::time::Duration;

/// Completion timeout for custom endpoints.
const COMPLETION_TIMEOUT: Duration = Duration::from_secs(30);

/// Timeout for credential validation.
const VALIDATE_TIMEOUT: Duration = Duration::from_secs(15);

/// A user-configured OpenAI-compatible endpoint.
#[derive(Debug, Clone)]
pub struct Custom {
    transport: HttpTransport,
    endpoint: String,
    model: String,
}

impl Custom {
    /// Build the adapter. Missing endpoint or credential fails before
    /// any network call.
    pub fn new(client: Client, settings: &CustomSettings) -> Result<Self, ProviderError> {
        if settings.endpoint.is_empty() {
            return Err(ProviderError::NotConfigured("Custom API endpoint".into()));
        }
        if settings.api_key.is_empty() {
            return Err(ProviderError::NotConfigured("Custom API key".into()));
        }
        let transport = HttpTransport::bearer(client, &settings.api_key, &settings.endpoint)?
            .with_extra_headers(&settings.headers);
        Ok(Self {
            transport,
            endpoint: settings.endpoint.trim_end_matches('/').to_owned(),
            model: settings.model.clone(),
        })
    }

    /// Validate the credential against the endpoint's model listing.
    pub async fn validate(&self) -> Validation {
        let url = models_url(&self.endpoint);
        match self.transport.get(&url, VALIDATE_TIMEOUT).await {
            Ok(_) => Validation::valid(),
            Err(ProviderError::Timeout(_)) => Validation::invalid("Connection timed out"),
            Err(err) => Validation::invalid(err.to_string()),
        }
    }

    async fn send(&self, messages: Vec<Message>) -> Result<String, ProviderError> {
        let request = Request::new(&self.model, messages);
        let text = self
            .transport
            .post_json(&self.endpoint, &request, COMPLETION_TIMEOUT)
            .await?;
        let value: Value = serde_json::from_str(&text)
            .map_err(|e| ProviderError::Format(format!("response is not JSON: {e}")))?;
        Ok(extract_content(&value))
    }
}

impl Complete for Custom {
    async fn summarize(&self, title: &str, content: &str) -> Result<String, ProviderError> {
        self.send(summary_messages(title, content)).await
    }

    async fn chat(&self, messages: &[Message]) -> Result<String, ProviderError> {
        self.send(messages.to_vec()).await
    }
}

/// Extract completion text from a response of unknown shape.
///
/// Tries, in order: the standard `choices[0].message.content`, then the
/// top-level `output` / `response` / `text` / `content` string fields,
/// then the raw serialized payload.
pub fn extract_content(value: &Value) -> String {
    if let Some(content) = value
        .pointer("/choices/0/message/content")
        .and_then(Value::as_str)
    {
        return content.to_owned();
    }
    for key in ["output", "response", "text", "content"] {
        if let Some(content) = value.get(key).and_then(Value::as_str) {
            return content.to_owned();
        }
    }
    value.to_string()
}

/// Derive a model-listing URL from a completions endpoint.
pub fn models_url(endpoint: &str) -> String {
    if endpoint.ends_with("/models") {
        endpoint.to_owned()
    } else if endpoint.ends_with('/') {
        format!("{endpoint}models")
    } else {
        format!("{endpoint}/models")
    }
}
