//! Orchestration engine for skimmer.
//!
//! Coordinates the full summarize pipeline — content fitting, provider
//! dispatch, single-hop local fallback, progress telemetry, task
//! lifecycle, history — and the grounded chat pipeline. Collaborators
//! (adapter factory, settings source, embedder) are injected through
//! traits, so the pipelines are testable without a network.

mod backends;
mod chat;
mod engine;
mod fitter;

pub use backends::{Backends, HttpBackends, SettingsSource};
pub use chat::{ChatContext, build_exchange, grounding_message};
pub use engine::{Engine, PageContent};
pub use fitter::{Fitted, TRUNCATION_MARKER, fit, token_budget};
