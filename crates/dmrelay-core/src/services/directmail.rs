/// DirectMail RPC client
use crate::config::{Credentials, DirectMailConfig};
use crate::constants::{DM_API_VERSION, REQUEST_ID_HEADER};
use crate::error::DmError;
use crate::models::{ProviderErrorBody, ProviderRequest, ProviderResponse};
use crate::services::provider::MailProvider;
use crate::services::signing::{SigningInput, canonical_query_string, sign};
use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Signs and posts RPC calls to the configured DirectMail endpoint.
/// No retries and no timeout override: the HTTP client defaults apply.
pub struct DirectMailClient {
    http: reqwest::Client,
    credentials: Credentials,
    endpoint_url: String,
    host: String,
    region_id: String,
}

impl DirectMailClient {
    pub fn new(config: &DirectMailConfig) -> Result<Self, DmError> {
        let credentials = config.credentials()?;
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| DmError::http("Failed to build HTTP client", e))?;

        Ok(Self {
            http,
            credentials,
            endpoint_url: config.endpoint_url(),
            host: config.endpoint.clone(),
            region_id: config.region_id.clone(),
        })
    }
}

#[async_trait]
impl MailProvider for DirectMailClient {
    async fn invoke(&self, request: ProviderRequest) -> Result<ProviderResponse, DmError> {
        let action = request.action();
        let query = canonical_query_string(&request.params());
        let timestamp = Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();
        let nonce = Uuid::new_v4().simple().to_string();

        let headers = sign(
            &SigningInput {
                method: "POST",
                host: &self.host,
                action,
                version: DM_API_VERSION,
                canonical_query: &query,
                payload: b"",
                timestamp: &timestamp,
                nonce: &nonce,
            },
            &self.credentials,
        )?;

        let url = if query.is_empty() {
            self.endpoint_url.clone()
        } else {
            format!("{}?{}", self.endpoint_url, query)
        };

        let mut builder = self.http.post(url);
        for (name, value) in headers {
            builder = builder.header(name, value);
        }

        debug!(action = action, region = %self.region_id, "Calling DirectMail");

        let response = builder
            .send()
            .await
            .map_err(|e| DmError::http(format!("DirectMail {} request failed", action), e))?;

        let status = response.status().as_u16();
        let request_id = response
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());
        let text = response.text().await.map_err(|e| {
            DmError::http(format!("Failed to read DirectMail {} response", action), e)
        })?;

        if !(200..300).contains(&status) {
            let err = provider_error(status, &text, request_id);
            warn!(action = action, status = status, error = %err, "DirectMail call rejected");
            return Err(err);
        }

        let body = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text)?
        };

        let mut response_headers = BTreeMap::new();
        if let Some(id) = request_id {
            response_headers.insert(REQUEST_ID_HEADER.to_string(), id);
        }

        info!(action = action, status = status, "DirectMail call succeeded");

        Ok(ProviderResponse {
            status_code: status,
            headers: response_headers,
            body,
        })
    }
}

/// Decodes the provider's error envelope, falling back to the raw body
fn provider_error(status: u16, text: &str, header_request_id: Option<String>) -> DmError {
    let parsed: ProviderErrorBody = serde_json::from_str(text).unwrap_or_default();

    DmError::Provider {
        status,
        code: parsed.code.unwrap_or_else(|| format!("HTTP{}", status)),
        message: parsed.message.unwrap_or_else(|| text.trim().to_string()),
        request_id: parsed.request_id.or(header_request_id),
    }
}
