/// Provider configuration - credentials plus the fixed endpoint
use crate::constants::{
    ACCESS_KEY_ID_ENV, ACCESS_KEY_SECRET_ENV, DM_ENDPOINT, DM_REGION_ID, DM_SCHEME,
};
use crate::error::DmError;
use secrecy::{ExposeSecret, SecretString};

/// Access key pair used to sign provider calls
#[derive(Clone, Debug)]
pub struct Credentials {
    pub access_key_id: SecretString,
    pub access_key_secret: SecretString,
}

/// DirectMail configuration
///
/// Credentials are optional here: a cold start without them still serves
/// requests, and each action that needs a provider client fails with
/// [`DmError::Config`] instead.
#[derive(Clone, Debug)]
pub struct DirectMailConfig {
    access_key_id: Option<SecretString>,
    access_key_secret: Option<SecretString>,
    pub endpoint: String,
    pub region_id: String,
    pub scheme: String,
}

impl DirectMailConfig {
    pub fn new(access_key_id: impl Into<String>, access_key_secret: impl Into<String>) -> Self {
        let access_key_id = access_key_id.into();
        let access_key_secret = access_key_secret.into();

        Self::from_vars(|name| match name {
            ACCESS_KEY_ID_ENV => Some(access_key_id.clone()),
            ACCESS_KEY_SECRET_ENV => Some(access_key_secret.clone()),
            _ => None,
        })
    }

    /// Load credentials from `ALICLOUD_ACCESS_KEY_ID` / `ALICLOUD_ACCESS_KEY_SECRET`
    pub fn from_env() -> Self {
        let config = Self::from_vars(|name| std::env::var(name).ok());

        if config.has_credentials() {
            tracing::info!("DirectMail credentials loaded from environment");
        } else {
            tracing::warn!("DirectMail credentials missing, provider calls will fail");
        }

        config
    }

    /// Build a config from an arbitrary variable lookup. Empty values count as unset.
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .map(SecretString::new)
        };

        Self {
            access_key_id: read(ACCESS_KEY_ID_ENV),
            access_key_secret: read(ACCESS_KEY_SECRET_ENV),
            endpoint: DM_ENDPOINT.to_string(),
            region_id: DM_REGION_ID.to_string(),
            scheme: DM_SCHEME.to_string(),
        }
    }

    /// Point the client at another host, e.g. a local test double
    pub fn with_endpoint(mut self, scheme: impl Into<String>, endpoint: impl Into<String>) -> Self {
        self.scheme = scheme.into();
        self.endpoint = endpoint.into();
        self
    }

    pub fn has_credentials(&self) -> bool {
        self.access_key_id.is_some() && self.access_key_secret.is_some()
    }

    /// Returns the credential pair, failing if either half is missing
    pub fn credentials(&self) -> Result<Credentials, DmError> {
        let access_key_id = self
            .access_key_id
            .clone()
            .ok_or_else(|| DmError::Config(format!("Missing {} env var", ACCESS_KEY_ID_ENV)))?;
        let access_key_secret = self
            .access_key_secret
            .clone()
            .ok_or_else(|| DmError::Config(format!("Missing {} env var", ACCESS_KEY_SECRET_ENV)))?;

        Ok(Credentials {
            access_key_id,
            access_key_secret,
        })
    }

    /// Base URL every RPC call is posted to
    pub fn endpoint_url(&self) -> String {
        format!("{}://{}/", self.scheme, self.endpoint)
    }
}

impl Credentials {
    pub fn access_key_id(&self) -> &str {
        self.access_key_id.expose_secret()
    }

    pub fn access_key_secret(&self) -> &str {
        self.access_key_secret.expose_secret()
    }
}
