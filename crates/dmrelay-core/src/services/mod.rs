/// Provider services
pub mod directmail;
pub mod provider;
pub mod signing;

pub use directmail::DirectMailClient;
pub use provider::{DirectMailFactory, MailProvider, ProviderFactory};
