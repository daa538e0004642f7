//! Hosted vendor adapters: Groq, OpenAI, DeepSeek.
//!
//! All three speak the same OpenAI-style contract and differ only in
//! endpoint, default model, and label, so one adapter covers them with
//! per-vendor constructors.

use crate::{HttpTransport, Request, summary_messages};
use reqwest::Client;
use skimmer_core::{
    Complete, Message, ProviderError, ProviderKind, Validation, VendorSettings,
};
use std::time::Duration;

/// Completion timeout for hosted vendors.
const COMPLETION_TIMEOUT: Duration = Duration::from_secs(30);

/// Timeout for credential validation via model listing.
const VALIDATE_TIMEOUT: Duration = Duration::from_secs(15);

/// A hosted OpenAI-compatible vendor.
#[derive(Debug, Clone)]
pub struct Hosted {
    transport: HttpTransport,
    kind: ProviderKind,
    label: &'static str,
    model: String,
}

impl Hosted {
    /// Groq adapter.
    pub fn groq(client: Client, settings: &VendorSettings) -> Result<Self, ProviderError> {
        Self::build(
            client,
            settings,
            ProviderKind::Groq,
            "Groq",
            "https://api.groq.com/openai/v1",
            "llama3-8b-8192",
        )
    }

    /// OpenAI adapter.
    pub fn openai(client: Client, settings: &VendorSettings) -> Result<Self, ProviderError> {
        Self::build(
            client,
            settings,
            ProviderKind::OpenAi,
            "OpenAI",
            "https://api.openai.com/v1",
            "gpt-3.5-turbo",
        )
    }

    /// DeepSeek adapter.
    pub fn deepseek(client: Client, settings: &VendorSettings) -> Result<Self, ProviderError> {
        Self::build(
            client,
            settings,
            ProviderKind::DeepSeek,
            "DeepSeek",
            "https://api.deepseek.com/v1",
            "deepseek-chat",
        )
    }

    fn build(
        client: Client,
        settings: &VendorSettings,
        kind: ProviderKind,
        label: &'static str,
        base: &str,
        default_model: &str,
    ) -> Result<Self, ProviderError> {
        if settings.api_key.is_empty() {
            return Err(ProviderError::NotConfigured(format!("{label} API key")));
        }
        let model = if settings.model.is_empty() {
            default_model.to_owned()
        } else {
            settings.model.clone()
        };
        Ok(Self {
            transport: HttpTransport::bearer(client, &settings.api_key, base)?,
            kind,
            label,
            model,
        })
    }

    /// The provider kind this adapter serves.
    pub fn kind(&self) -> ProviderKind {
        self.kind
    }

    /// The model sent in request bodies.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Validate the credential with a lightweight model listing.
    pub async fn validate(&self) -> Validation {
        let url = format!("{}/models", self.transport.base());
        match self.transport.get(&url, VALIDATE_TIMEOUT).await {
            Ok(_) => Validation::valid(),
            Err(ProviderError::Timeout(_)) => Validation::invalid("Connection timed out"),
            Err(err) => Validation::invalid(err.to_string()),
        }
    }

    async fn send(&self, messages: Vec<Message>) -> Result<String, ProviderError> {
        let url = format!("{}/chat/completions", self.transport.base());
        let request = Request::new(&self.model, messages);
        let completion = self
            .transport
            .chat_completions(&url, &request, COMPLETION_TIMEOUT)
            .await?;
        completion
            .first_content()
            .map(str::to_owned)
            .ok_or_else(|| {
                ProviderError::Format(format!("no completion choices from the {} API", self.label))
            })
    }
}

impl Complete for Hosted {
    async fn summarize(&self, title: &str, content: &str) -> Result<String, ProviderError> {
        tracing::debug!("summarizing with {} model {}", self.label, self.model);
        self.send(summary_messages(title, content)).await
    }

    async fn chat(&self, messages: &[Message]) -> Result<String, ProviderError> {
        self.send(messages.to_vec()).await
    }
}
