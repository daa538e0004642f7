//! HTTP provider adapters for the skimmer summarization core.
//!
//! Every backend speaks the OpenAI-style chat-completion contract:
//! `POST {endpoint}/chat/completions` with a JSON body of
//! `{model, messages, max_tokens, temperature}`, bearer-token auth for
//! hosted vendors. One adapter per backend — hosted vendors, the
//! user-configured custom endpoint, and the local inference server —
//! unified behind the [`Provider`] enum's single dispatch point.

pub use custom::{Custom, extract_content, models_url};
pub use hosted::Hosted;
pub use http::HttpTransport;
pub use local::{DEFAULT_LOCAL_URL, Local, normalize_base_url};
pub use probe::{LocalStatus, probe};
pub use provider::Provider;
pub use request::{
    MAX_COMPLETION_TOKENS, Request, SUMMARY_SYSTEM, summary_messages, summary_prompt,
};
pub use response::{ChatCompletion, ModelInfo, ModelList, error_message};
pub use reqwest::Client;

mod custom;
mod hosted;
mod http;
mod local;
mod probe;
mod provider;
mod request;
mod response;
