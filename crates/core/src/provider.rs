//! Provider taxonomy, settings snapshot, and the backend trait.

use crate::{Message, ProviderError};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, future::Future, str::FromStr};

/// The backends capable of producing chat completions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Locally hosted inference server (LM Studio style).
    #[default]
    Local,
    /// Groq hosted API.
    Groq,
    /// OpenAI hosted API.
    #[serde(rename = "openai")]
    OpenAi,
    /// DeepSeek hosted API.
    #[serde(rename = "deepseek")]
    DeepSeek,
    /// User-configured OpenAI-compatible endpoint.
    Custom,
}

impl ProviderKind {
    /// Stable wire name, as reported in history entries and events.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Groq => "groq",
            Self::OpenAi => "openai",
            Self::DeepSeek => "deepseek",
            Self::Custom => "custom",
        }
    }
}

impl FromStr for ProviderKind {
    type Err = std::convert::Infallible;

    /// Unknown values degrade to `Local` rather than erroring, so a
    /// corrupt settings value still yields a usable pipeline.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "groq" => Self::Groq,
            "openai" => Self::OpenAi,
            "deepseek" => Self::DeepSeek,
            "custom" => Self::Custom,
            _ => Self::Local,
        })
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Credential + model selection for one hosted vendor.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct VendorSettings {
    /// Plaintext API key. Empty means "not configured" — decryption
    /// failures upstream degrade to an empty string, never a crash.
    pub api_key: String,
    /// Selected model id. Empty falls back to the vendor default.
    pub model: String,
}

/// Settings for the user-configured custom endpoint.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CustomSettings {
    /// Display name shown in progress messages.
    pub name: String,
    /// Chat-completions endpoint URL.
    pub endpoint: String,
    /// Plaintext API key.
    pub api_key: String,
    /// Model id sent in the request body.
    pub model: String,
    /// Extra headers merged into every request.
    pub headers: BTreeMap<String, String>,
}

/// A read-only snapshot of the configuration collaborator, taken once
/// per request and immutable for its duration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    /// The selected provider.
    pub provider: ProviderKind,
    /// Base URL of the local inference server.
    pub local_url: String,
    /// Groq credentials.
    pub groq: VendorSettings,
    /// OpenAI credentials.
    pub openai: VendorSettings,
    /// DeepSeek credentials.
    pub deepseek: VendorSettings,
    /// Custom endpoint configuration.
    pub custom: CustomSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            provider: ProviderKind::Local,
            local_url: "http://localhost:1234/v1".into(),
            groq: VendorSettings::default(),
            openai: VendorSettings::default(),
            deepseek: VendorSettings::default(),
            custom: CustomSettings::default(),
        }
    }
}

impl Settings {
    /// Human-readable label for a provider, used in progress messages.
    pub fn label(&self, kind: ProviderKind) -> String {
        match kind {
            ProviderKind::Local => "Local LLM".into(),
            ProviderKind::Groq => "Groq API".into(),
            ProviderKind::OpenAi => "OpenAI API".into(),
            ProviderKind::DeepSeek => "DeepSeek API".into(),
            ProviderKind::Custom if !self.custom.name.is_empty() => self.custom.name.clone(),
            ProviderKind::Custom => "Custom API".into(),
        }
    }

    /// Model selected for a provider, or the empty string when the
    /// provider has no model selection (local).
    pub fn model(&self, kind: ProviderKind) -> &str {
        match kind {
            ProviderKind::Local => "",
            ProviderKind::Groq => &self.groq.model,
            ProviderKind::OpenAi => &self.openai.model,
            ProviderKind::DeepSeek => &self.deepseek.model,
            ProviderKind::Custom => &self.custom.model,
        }
    }
}

/// Outcome of a credential validation check.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Validation {
    /// Whether the credential was accepted.
    pub is_valid: bool,
    /// Human-readable diagnostic.
    pub message: String,
}

impl Validation {
    /// A passing validation.
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            message: "API key is valid".into(),
        }
    }

    /// A failing validation with a diagnostic message.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            message: message.into(),
        }
    }
}

/// A backend capable of producing chat completions.
///
/// One implementation per provider kind; the engine selects an adapter
/// once per request through a single dispatch point. Uses RPITIT for
/// async without boxing.
pub trait Complete: Send + Sync {
    /// Summarize page content, returning the summary text.
    fn summarize(
        &self,
        title: &str,
        content: &str,
    ) -> impl Future<Output = Result<String, ProviderError>> + Send;

    /// Answer a chat exchange, returning the assistant reply.
    fn chat(
        &self,
        messages: &[Message],
    ) -> impl Future<Output = Result<String, ProviderError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_kind_degrades_to_local() {
        assert_eq!("groq".parse::<ProviderKind>().unwrap(), ProviderKind::Groq);
        assert_eq!(
            "no-such-provider".parse::<ProviderKind>().unwrap(),
            ProviderKind::Local
        );
    }

    #[test]
    fn custom_label_prefers_configured_name() {
        let mut settings = Settings::default();
        assert_eq!(settings.label(ProviderKind::Custom), "Custom API");
        settings.custom.name = "My Gateway".into();
        assert_eq!(settings.label(ProviderKind::Custom), "My Gateway");
        assert_eq!(settings.label(ProviderKind::Local), "Local LLM");
    }
}
