//! Seams between the engine and its collaborators.
//!
//! The engine never constructs adapters or reads configuration directly;
//! both arrive through these traits so tests can script outcomes without
//! a network.

use reqwest::Client;
use skimmer_core::{Complete, ProviderError, ProviderKind, Settings, Validation};
use skimmer_llm::Provider;
use std::future::Future;

/// Builds provider adapters from a settings snapshot.
pub trait Backends: Send + Sync + 'static {
    /// The adapter type this factory produces.
    type Adapter: Complete;

    /// Construct the adapter for `kind`. Configuration errors (missing
    /// credential or endpoint) surface here, before any network call.
    fn build(
        &self,
        settings: &Settings,
        kind: ProviderKind,
    ) -> Result<Self::Adapter, ProviderError>;

    /// Validate the credential or liveness for `kind`.
    fn validate(
        &self,
        settings: &Settings,
        kind: ProviderKind,
    ) -> impl Future<Output = Validation> + Send;
}

/// Supplies the settings snapshot taken once per request.
pub trait SettingsSource: Send + Sync + 'static {
    /// A snapshot of the current configuration, immutable for the
    /// duration of the request it serves.
    fn load(&self) -> Settings;
}

/// A fixed settings value is its own source.
impl SettingsSource for Settings {
    fn load(&self) -> Settings {
        self.clone()
    }
}

/// Snapshots a shared, mutable configuration.
impl SettingsSource for std::sync::Mutex<Settings> {
    fn load(&self) -> Settings {
        self.lock().unwrap().clone()
    }
}

/// The real adapter factory, backed by one shared HTTP client.
#[derive(Clone, Default)]
pub struct HttpBackends {
    client: Client,
}

impl HttpBackends {
    /// Create a factory with a fresh HTTP client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a factory around an existing client, sharing its
    /// connection pool.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Backends for HttpBackends {
    type Adapter = Provider;

    fn build(&self, settings: &Settings, kind: ProviderKind) -> Result<Provider, ProviderError> {
        Provider::build(settings, kind, self.client.clone())
    }

    async fn validate(&self, settings: &Settings, kind: ProviderKind) -> Validation {
        match Provider::build(settings, kind, self.client.clone()) {
            Ok(provider) => provider.validate(&self.client).await,
            Err(err) if err.is_configuration() => Validation::invalid("API key is not configured"),
            Err(err) => Validation::invalid(err.to_string()),
        }
    }
}
