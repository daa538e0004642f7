//! Local inference server adapter (LM Studio style).
//!
//! Local inference is slow, so completion calls carry a long timeout and
//! must not be prematurely aborted. The most common failure mode is
//! "server not running", so summarize preflights a cheap model listing
//! before committing to the long call.

use crate::{HttpTransport, Request, summary_messages};
use reqwest::Client;
use skimmer_core::{Complete, Message, ProviderError};
use std::time::Duration;

/// Default base URL for the local server.
pub const DEFAULT_LOCAL_URL: &str = "http://localhost:1234/v1";

/// Model field sent to the local server. Ignored server-side when only
/// one model is loaded.
const PLACEHOLDER_MODEL: &str = "any-model";

/// Quick preflight timeout for the model listing.
const PREFLIGHT_TIMEOUT: Duration = Duration::from_secs(5);

/// Long completion timeout — local models may take minutes.
const COMPLETION_TIMEOUT: Duration = Duration::from_secs(180);

/// Adapter for a locally hosted inference server.
#[derive(Debug, Clone)]
pub struct Local {
    transport: HttpTransport,
    base: String,
}

impl Local {
    /// Create an adapter for the given base URL (normalized).
    pub fn new(client: Client, base_url: &str) -> Self {
        let base = normalize_base_url(base_url);
        Self {
            transport: HttpTransport::no_auth(client, &base),
            base,
        }
    }

    /// The normalized base URL.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Cheap server check before the long completion call.
    async fn preflight(&self) -> Result<(), ProviderError> {
        let url = format!("{}/models", self.base);
        match self.transport.get(&url, PREFLIGHT_TIMEOUT).await {
            Ok(_) => Ok(()),
            Err(err @ ProviderError::Timeout(_)) => Err(err),
            Err(_) => Err(ProviderError::Unreachable {
                url: self.base.clone(),
            }),
        }
    }

    async fn send(&self, messages: Vec<Message>) -> Result<String, ProviderError> {
        let url = format!("{}/chat/completions", self.base);
        let request = Request::new(PLACEHOLDER_MODEL, messages);
        let completion = self
            .transport
            .chat_completions(&url, &request, COMPLETION_TIMEOUT)
            .await?;
        completion
            .first_content()
            .map(|content| content.trim().to_owned())
            .ok_or_else(|| {
                ProviderError::Format("no completion choices from the local server".into())
            })
    }
}

impl Complete for Local {
    async fn summarize(&self, title: &str, content: &str) -> Result<String, ProviderError> {
        tracing::debug!("summarizing with local server at {}", self.base);
        self.preflight().await?;
        self.send(summary_messages(title, content)).await
    }

    async fn chat(&self, messages: &[Message]) -> Result<String, ProviderError> {
        self.send(messages.to_vec()).await
    }
}

/// Normalize a local base URL: guarantee a scheme and a single trailing
/// `/v1` API version segment.
pub fn normalize_base_url(url: &str) -> String {
    let url = url.trim();
    if url.is_empty() {
        return DEFAULT_LOCAL_URL.to_owned();
    }

    let with_scheme = if url.starts_with("http://") || url.starts_with("https://") {
        url.to_owned()
    } else {
        format!("http://{url}")
    };

    let trimmed = with_scheme.trim_end_matches('/');
    if trimmed.ends_with("/v1") {
        trimmed.to_owned()
    } else {
        format!("{trimmed}/v1")
    }
}
