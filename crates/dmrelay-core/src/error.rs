/// Error types for the DirectMail client
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DmError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Signing error: {0}")]
    Signing(String),

    #[error("HTTP error: {context}")]
    Http {
        context: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{code}: {message} (status: {status}, request id: {})", .request_id.as_deref().unwrap_or("none"))]
    Provider {
        status: u16,
        code: String,
        message: String,
        request_id: Option<String>,
    },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl DmError {
    /// Transport failure, keeping the underlying error as the source
    pub fn http(context: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Http {
            context: context.into(),
            source,
        }
    }

    /// Human readable category, reported as `name` in failure responses
    pub fn name(&self) -> &'static str {
        match self {
            Self::Config(_) => "ConfigError",
            Self::Signing(_) => "SigningError",
            Self::Http { .. } => "HttpError",
            Self::Provider { .. } => "ProviderError",
            Self::Serialization(_) => "SerializationError",
        }
    }
}

impl From<serde_json::Error> for DmError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
