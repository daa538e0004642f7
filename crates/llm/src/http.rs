//! Shared HTTP transport for OpenAI-compatible providers.
//!
//! `HttpTransport` wraps a `reqwest::Client` with pre-built headers and a
//! base URL. Every request carries an explicit timeout which reqwest
//! releases on success and failure alike — no timer outlives its call.

use crate::response::{ChatCompletion, error_message};
use reqwest::{
    Client, Method,
    header::{self, HeaderMap, HeaderName, HeaderValue},
};
use serde::Serialize;
use skimmer_core::ProviderError;
use std::{collections::BTreeMap, time::Duration};

/// Shared HTTP transport: client, pre-built headers, base URL.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    headers: HeaderMap,
    base: String,
}

impl HttpTransport {
    /// Create a transport with Bearer token authentication.
    pub fn bearer(client: Client, key: &str, base: &str) -> Result<Self, ProviderError> {
        let mut headers = json_headers();
        headers.insert(
            header::AUTHORIZATION,
            format!("Bearer {key}")
                .parse()
                .map_err(|_| ProviderError::Network("API key contains invalid characters".into()))?,
        );
        Ok(Self {
            client,
            headers,
            base: base.trim_end_matches('/').to_owned(),
        })
    }

    /// Create a transport without authentication (local server).
    pub fn no_auth(client: Client, base: &str) -> Self {
        Self {
            client,
            headers: json_headers(),
            base: base.trim_end_matches('/').to_owned(),
        }
    }

    /// Merge user-supplied headers into every request.
    ///
    /// Entries that do not parse as valid header names/values are
    /// skipped with a warning rather than failing the request.
    pub fn with_extra_headers(mut self, extra: &BTreeMap<String, String>) -> Self {
        for (name, value) in extra {
            match (name.parse::<HeaderName>(), value.parse::<HeaderValue>()) {
                (Ok(name), Ok(value)) => {
                    self.headers.insert(name, value);
                }
                _ => tracing::warn!("skipping invalid custom header: {name}"),
            }
        }
        self
    }

    /// The base URL.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// A reference to the prepared headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// POST a JSON body to `url` and return the raw response text.
    ///
    /// Non-2xx statuses become [`ProviderError::Http`] carrying the
    /// vendor error message when the body has one, or a truncated body
    /// excerpt otherwise.
    pub async fn post_json(
        &self,
        url: &str,
        body: &impl Serialize,
        timeout: Duration,
    ) -> Result<String, ProviderError> {
        if let Ok(body) = serde_json::to_string(body) {
            tracing::trace!("request to {url}: {body}");
        }
        let response = self
            .client
            .request(Method::POST, url)
            .headers(self.headers.clone())
            .timeout(timeout)
            .json(body)
            .send()
            .await
            .map_err(|e| map_transport_error(e, timeout, url))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| map_transport_error(e, timeout, url))?;

        if !status.is_success() {
            tracing::warn!("{url} returned {status}");
            return Err(ProviderError::Http {
                status: status.as_u16(),
                excerpt: error_message(&text).unwrap_or_else(|| ProviderError::excerpt(&text)),
            });
        }
        Ok(text)
    }

    /// POST a chat-completion request and parse the response envelope.
    pub async fn chat_completions(
        &self,
        url: &str,
        body: &impl Serialize,
        timeout: Duration,
    ) -> Result<ChatCompletion, ProviderError> {
        let text = self.post_json(url, body, timeout).await?;
        serde_json::from_str(&text)
            .map_err(|e| ProviderError::Format(format!("invalid completion envelope: {e}")))
    }

    /// GET `url` and return the raw response text (model listing,
    /// health checks).
    pub async fn get(&self, url: &str, timeout: Duration) -> Result<String, ProviderError> {
        let response = self
            .client
            .request(Method::GET, url)
            .headers(self.headers.clone())
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| map_transport_error(e, timeout, url))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| map_transport_error(e, timeout, url))?;

        if !status.is_success() {
            return Err(ProviderError::Http {
                status: status.as_u16(),
                excerpt: ProviderError::excerpt(&text),
            });
        }
        Ok(text)
    }
}

/// Content-type and accept headers shared by every transport.
fn json_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
    headers
}

/// Map a reqwest failure into the taxonomy: timeouts are distinguished
/// from refused connections because they imply different remediation.
fn map_transport_error(err: reqwest::Error, timeout: Duration, url: &str) -> ProviderError {
    if err.is_timeout() {
        ProviderError::Timeout(timeout.as_secs())
    } else if err.is_connect() {
        ProviderError::Unreachable {
            url: url.to_owned(),
        }
    } else {
        ProviderError::Network(err.to_string())
    }
}
