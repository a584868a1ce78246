/// Request router - dispatches on the `action` query parameter
pub mod info;
pub mod send;

use axum::{
    extract::{RawQuery, State},
    http::header,
    response::{IntoResponse, Response},
};
use dmrelay_core::{DmError, ProviderResponse};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

use crate::{context::ApiContext, error::ApiError};

/// Actions advertised when an unknown one is requested
pub const AVAILABLE_ACTIONS: [&str; 2] = ["info", "send"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Info,
    Send,
}

impl Action {
    /// Absent or empty `action` means `info`
    pub fn from_param(value: Option<&str>) -> Result<Self, ApiError> {
        match value.unwrap_or("info") {
            "info" => Ok(Self::Info),
            "send" => Ok(Self::Send),
            other => Err(ApiError::UnknownAction(other.to_string())),
        }
    }
}

/// Parsed query string. The first occurrence of a key wins and empty
/// values read as absent.
#[derive(Debug, Clone, Default)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    pub fn parse(query: Option<&str>) -> Self {
        let pairs = query
            .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
            .unwrap_or_default();
        Self(pairs)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
            .filter(|value| !value.is_empty())
    }
}

/// Entry point for every request
pub async fn dispatch(
    State(ctx): State<Arc<ApiContext>>,
    RawQuery(query): RawQuery,
) -> Result<Response, ApiError> {
    let params = QueryParams::parse(query.as_deref());
    let action = Action::from_param(params.get("action"))?;

    info!(action = ?action, "Dispatching request");

    match action {
        Action::Info => info::handle(&ctx).await,
        Action::Send => send::handle(&ctx, &params).await,
    }
}

/// Success envelope; `success` is always serialized first
#[derive(Debug, Serialize)]
pub struct SuccessBody {
    pub success: bool,
    pub data: ProviderResponse,
}

/// Wraps a provider result as a pretty-printed `{success, data}` body
pub(crate) fn success(data: ProviderResponse) -> Result<Response, ApiError> {
    let body = serde_json::to_string_pretty(&SuccessBody {
        success: true,
        data,
    })
    .map_err(DmError::from)?;

    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_defaults_to_info() {
        assert_eq!(Action::from_param(None).unwrap(), Action::Info);
        assert_eq!(Action::from_param(Some("send")).unwrap(), Action::Send);
    }

    #[test]
    fn test_unknown_action() {
        let err = Action::from_param(Some("INFO")).unwrap_err();
        assert!(matches!(err, ApiError::UnknownAction(action) if action == "INFO"));
    }

    #[test]
    fn test_query_params_first_wins_and_empty_is_absent() {
        let params = QueryParams::parse(Some("action=&to=a%40x.com&to=c@x.com&subject=Hello+there"));

        assert_eq!(params.get("action"), None);
        assert_eq!(params.get("to"), Some("a@x.com"));
        assert_eq!(params.get("subject"), Some("Hello there"));
        assert_eq!(params.get("from"), None);
    }

    #[test]
    fn test_query_params_without_query() {
        assert_eq!(QueryParams::parse(None).get("action"), None);
    }

    #[tokio::test]
    async fn test_success_is_pretty_printed() {
        let response = success(ProviderResponse {
            status_code: 200,
            headers: Default::default(),
            body: serde_json::json!({ "RequestId": "R1" }),
        })
        .unwrap();

        assert_eq!(response.status(), 200);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let text = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(text.starts_with("{\n  \"success\": true"));
        assert!(text.contains("\"RequestId\": \"R1\""));
    }
}
