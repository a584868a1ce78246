/// Utility modules
pub mod logging;

pub use logging::{redact_email, redact_subject};
