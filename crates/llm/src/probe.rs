//! Local-server liveness probe.
//!
//! A running server that answers a models query but cannot complete
//! inference is not usable, so a minimal real inference call is the
//! authoritative signal. The three outcomes — unreachable,
//! reachable-without-a-working-model, fully usable — each carry a
//! distinct diagnostic, and a timeout is reported distinctly from a
//! refused connection ("server is slow" vs "server is not running").

use crate::{
    HttpTransport, Request, local::normalize_base_url, response::ModelList, ModelInfo,
};
use reqwest::Client;
use serde::Serialize;
use skimmer_core::ProviderError;
use std::time::Duration;

/// Timeout for the lightweight health check.
const HEALTH_TIMEOUT: Duration = Duration::from_secs(5);

/// Timeout for the model listing.
const MODELS_TIMEOUT: Duration = Duration::from_secs(10);

/// Timeout for the minimal inference call — long enough for a cold
/// local model to emit a handful of tokens.
const INFERENCE_TIMEOUT: Duration = Duration::from_secs(20);

/// Probe outcome for the local server.
#[derive(Debug, Clone, Serialize, Default)]
pub struct LocalStatus {
    /// Whether the server answered anything at all.
    pub connected: bool,
    /// Whether the server completed a real inference call.
    pub model_loaded: bool,
    /// Models reported by the listing endpoint, when reachable.
    pub models: Vec<ModelInfo>,
    /// The model that served the inference probe, when known.
    pub active_model: Option<String>,
    /// User-facing diagnostic when the server is not fully usable.
    pub error: Option<String>,
}

/// Probe the local server at `base_url`.
///
/// Never hangs past its timeout windows and never returns an `Err` —
/// every failure mode is folded into the status.
pub async fn probe(client: &Client, base_url: &str) -> LocalStatus {
    let base = normalize_base_url(base_url);
    let transport = HttpTransport::no_auth(client.clone(), &base);

    // Lightweight health check first; absence or failure is tolerated.
    let health_ok = transport
        .get(&format!("{base}/health"), HEALTH_TIMEOUT)
        .await
        .is_ok();

    // Fall back to the model listing for reachability and inventory.
    let (models, listing_ok) = match transport
        .get(&format!("{base}/models"), MODELS_TIMEOUT)
        .await
    {
        Ok(text) => (
            serde_json::from_str::<ModelList>(&text)
                .map(|list| list.data)
                .unwrap_or_default(),
            true,
        ),
        Err(err) => {
            tracing::debug!("model listing failed during probe: {err}");
            (Vec::new(), false)
        }
    };

    // Regardless of the listing, a minimal real inference call decides.
    let request = Request::probe("any-model");
    let reachable = health_ok || listing_ok;
    match transport
        .chat_completions(&format!("{base}/chat/completions"), &request, INFERENCE_TIMEOUT)
        .await
    {
        Ok(completion) if completion.first_content().is_some() => LocalStatus {
            connected: true,
            model_loaded: true,
            active_model: models.first().map(|m| m.id.clone()),
            models,
            error: None,
        },
        Ok(_) => LocalStatus {
            connected: true,
            model_loaded: false,
            models,
            active_model: None,
            error: Some("the server answered but returned no completion; is a model loaded?".into()),
        },
        Err(ProviderError::Timeout(secs)) => LocalStatus {
            connected: reachable,
            model_loaded: false,
            models,
            active_model: None,
            error: Some(format!(
                "inference timed out after {secs}s; the server may be slow or still loading a model"
            )),
        },
        Err(ProviderError::Unreachable { url }) if !reachable => LocalStatus {
            connected: false,
            model_loaded: false,
            models,
            active_model: None,
            error: Some(format!("cannot connect to the local server at {url}; is it running?")),
        },
        Err(err) => LocalStatus {
            connected: reachable,
            model_loaded: false,
            models,
            active_model: None,
            error: Some(err.to_string()),
        },
    }
}
