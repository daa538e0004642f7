//! Unified provider enum with enum dispatch over the adapters.
//!
//! [`Provider::build`] is the single dispatch point: configuration
//! errors (missing credential or endpoint) surface here, before any
//! network call.

use crate::{Custom, Hosted, Local, probe};
use reqwest::Client;
use skimmer_core::{
    Complete, Message, ProviderError, ProviderKind, Settings, Validation,
};

/// A backend selected from configuration.
#[derive(Debug, Clone)]
pub enum Provider {
    /// Hosted vendor (Groq, OpenAI, DeepSeek).
    Hosted(Hosted),
    /// User-configured custom endpoint.
    Custom(Custom),
    /// Local inference server.
    Local(Local),
}

impl Provider {
    /// Construct the adapter for `kind` from a settings snapshot.
    pub fn build(
        settings: &Settings,
        kind: ProviderKind,
        client: Client,
    ) -> Result<Self, ProviderError> {
        Ok(match kind {
            ProviderKind::Local => Self::Local(Local::new(client, &settings.local_url)),
            ProviderKind::Groq => Self::Hosted(Hosted::groq(client, &settings.groq)?),
            ProviderKind::OpenAi => Self::Hosted(Hosted::openai(client, &settings.openai)?),
            ProviderKind::DeepSeek => Self::Hosted(Hosted::deepseek(client, &settings.deepseek)?),
            ProviderKind::Custom => Self::Custom(Custom::new(client, &settings.custom)?),
        })
    }

    /// The kind this adapter serves.
    pub fn kind(&self) -> ProviderKind {
        match self {
            Self::Hosted(hosted) => hosted.kind(),
            Self::Custom(_) => ProviderKind::Custom,
            Self::Local(_) => ProviderKind::Local,
        }
    }

    /// Validate the adapter's credential or liveness.
    ///
    /// Hosted and custom adapters check the credential against the
    /// model listing; the local adapter runs the full liveness probe.
    pub async fn validate(&self, client: &Client) -> Validation {
        match self {
            Self::Hosted(hosted) => hosted.validate().await,
            Self::Custom(custom) => custom.validate().await,
            Self::Local(local) => {
                let status = probe(client, local.base()).await;
                if status.connected && status.model_loaded {
                    Validation::valid()
                } else {
                    Validation::invalid(
                        status
                            .error
                            .unwrap_or_else(|| "the local server is not usable".into()),
                    )
                }
            }
        }
    }
}

impl Complete for Provider {
    async fn summarize(&self, title: &str, content: &str) -> Result<String, ProviderError> {
        match self {
            Self::Hosted(provider) => provider.summarize(title, content).await,
            Self::Custom(provider) => provider.summarize(title, content).await,
            Self::Local(provider) => provider.summarize(title, content).await,
        }
    }

    async fn chat(&self, messages: &[Message]) -> Result<String, ProviderError> {
        match self {
            Self::Hosted(provider) => provider.chat(messages).await,
            Self::Custom(provider) => provider.chat(messages).await,
            Self::Local(provider) => provider.chat(messages).await,
        }
    }
}
