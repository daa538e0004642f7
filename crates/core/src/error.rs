//! Error taxonomy for provider calls.
//!
//! Every adapter failure maps to one of these variants so the engine can
//! decide between fallback and terminal failure without string matching.

use thiserror::Error;

/// A failure while talking to (or configuring) a provider backend.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Non-2xx HTTP status. Carries the status and a truncated body
    /// excerpt so large payloads never end up in logs or UI messages.
    #[error("API returned status {status}: {excerpt}")]
    Http {
        /// The HTTP status code.
        status: u16,
        /// First ~100 characters of the response body.
        excerpt: String,
    },

    /// The request hit its timeout. Distinct from other network errors:
    /// the remediation is "the model is taking too long", not "the
    /// server is down".
    #[error("request timed out after {0}s; the model may be taking too long to respond")]
    Timeout(u64),

    /// 2xx response without the expected completion fields. Treated as a
    /// provider failure rather than silently returning empty text.
    #[error("unexpected response format: {0}")]
    Format(String),

    /// The selected provider is missing a credential or endpoint.
    /// Short-circuits before any network call.
    #[error("{0} is not configured")]
    NotConfigured(String),

    /// Transport-level failure that is neither a timeout nor a refused
    /// connection.
    #[error("network error: {0}")]
    Network(String),

    /// The local server could not be reached at all.
    #[error("cannot connect to the local server at {url}; is it running?")]
    Unreachable {
        /// The normalized base URL that was probed.
        url: String,
    },

    /// The local server answered but cannot run inference.
    #[error("the local server is running but no model is loaded")]
    NoModel,
}

impl ProviderError {
    /// Cap a response body at ~100 characters for error excerpts.
    pub fn excerpt(body: &str) -> String {
        let mut end = body.len().min(100);
        // Stay on a char boundary when the cut lands mid-codepoint.
        while end > 0 && !body.is_char_boundary(end) {
            end -= 1;
        }
        body[..end].to_string()
    }

    /// Whether this error occurred before any network I/O.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::NotConfigured(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn excerpt_caps_at_100() {
        let body = "x".repeat(500);
        assert_eq!(ProviderError::excerpt(&body).len(), 100);
        assert_eq!(ProviderError::excerpt("short"), "short");
    }

    #[test]
    fn excerpt_respects_char_boundaries() {
        let body = "é".repeat(60);
        let excerpt = ProviderError::excerpt(&body);
        assert!(excerpt.len() <= 100);
        assert!(excerpt.chars().all(|c| c == 'é'));
    }

    #[test]
    fn messages_carry_remediation() {
        let err = ProviderError::Timeout(30);
        assert!(err.to_string().contains("taking too long"));
        let err = ProviderError::Unreachable {
            url: "http://localhost:1234/v1".into(),
        };
        assert!(err.to_string().contains("is it running"));
    }
}
