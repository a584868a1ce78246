/// Provider abstraction - the two DirectMail operations behind a trait
use crate::config::DirectMailConfig;
use crate::error::DmError;
use crate::models::{
    DescAccountSummaryRequest, ProviderRequest, ProviderResponse, SingleSendMailRequest,
};
use crate::services::directmail::DirectMailClient;
use async_trait::async_trait;

#[async_trait]
pub trait MailProvider: Send + Sync {
    async fn invoke(&self, request: ProviderRequest) -> Result<ProviderResponse, DmError>;

    async fn desc_account_summary(
        &self,
        request: DescAccountSummaryRequest,
    ) -> Result<ProviderResponse, DmError> {
        self.invoke(request.into()).await
    }

    async fn single_send_mail(
        &self,
        request: SingleSendMailRequest,
    ) -> Result<ProviderResponse, DmError> {
        self.invoke(request.into()).await
    }
}

/// Builds a fresh provider handle for every request; handles are never pooled.
pub trait ProviderFactory: Send + Sync {
    fn connect(&self, config: &DirectMailConfig) -> Result<Box<dyn MailProvider>, DmError>;
}

/// Factory producing [`DirectMailClient`]s
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectMailFactory;

impl ProviderFactory for DirectMailFactory {
    fn connect(&self, config: &DirectMailConfig) -> Result<Box<dyn MailProvider>, DmError> {
        Ok(Box::new(DirectMailClient::new(config)?))
    }
}
