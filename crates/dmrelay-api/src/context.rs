/// API Context - read-only state shared by every invocation
use dmrelay_core::{DirectMailConfig, DirectMailFactory, DmError, MailProvider, ProviderFactory};
use std::sync::Arc;

#[derive(Clone)]
pub struct ApiContext {
    /// Provider credentials and fixed endpoint
    pub config: DirectMailConfig,

    /// Builds a provider client for each request
    pub provider_factory: Arc<dyn ProviderFactory>,
}

impl ApiContext {
    /// Context backed by environment credentials and the DirectMail HTTP client
    pub fn new() -> Arc<Self> {
        Self::with_factory(DirectMailConfig::from_env(), Arc::new(DirectMailFactory))
    }

    pub fn with_factory(
        config: DirectMailConfig,
        provider_factory: Arc<dyn ProviderFactory>,
    ) -> Arc<Self> {
        Arc::new(Self {
            config,
            provider_factory,
        })
    }

    /// Fresh provider handle, owned by the calling request only
    pub fn provider(&self) -> Result<Box<dyn MailProvider>, DmError> {
        self.provider_factory.connect(&self.config)
    }
}
