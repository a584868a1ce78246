/// dmrelay Core - DirectMail provider client for the dmrelay Lambda
///
/// This crate contains the configuration, request shapes, signing and HTTP
/// client used to talk to the DirectMail API.
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use config::DirectMailConfig;
pub use error::DmError;
pub use models::{DescAccountSummaryRequest, ProviderRequest, ProviderResponse, SingleSendMailRequest};
pub use services::{DirectMailClient, DirectMailFactory, MailProvider, ProviderFactory};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
