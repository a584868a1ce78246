/// API Error types
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dmrelay_core::DmError;
use serde_json::json;
use tracing::{error, warn};

use crate::api::AVAILABLE_ACTIONS;

/// API Error
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Unknown action")]
    UnknownAction(String),

    #[error("Missing required parameters: to, from")]
    MissingParameters,

    #[error(transparent)]
    Provider(#[from] DmError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::UnknownAction(action) => {
                warn!(action = %action, "Unknown action requested");
                let body = Json(json!({
                    "error": "Unknown action",
                    "availableActions": AVAILABLE_ACTIONS,
                }));
                (StatusCode::BAD_REQUEST, body).into_response()
            }
            ApiError::MissingParameters => {
                let body = Json(json!({
                    "error": ApiError::MissingParameters.to_string(),
                }));
                (StatusCode::BAD_REQUEST, body).into_response()
            }
            ApiError::Provider(err) => {
                let name = err.name();
                let message = err.to_string();
                let stack = format!("{}: {:?}", name, anyhow::Error::new(err));

                error!(name = name, error = %message, "Provider call failed");

                let body = Json(json!({
                    "error": message,
                    "stack": stack,
                    "name": name,
                }));
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    async fn into_parts(err: ApiError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_unknown_action_response() {
        let (status, body) = into_parts(ApiError::UnknownAction("delete".to_string())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Unknown action");
        assert_eq!(body["availableActions"], json!(["info", "send"]));
    }

    #[tokio::test]
    async fn test_missing_parameters_response() {
        let (status, body) = into_parts(ApiError::MissingParameters).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Missing required parameters: to, from" }));
    }

    #[tokio::test]
    async fn test_provider_error_response() {
        let err = ApiError::from(DmError::Config(
            "Missing ALICLOUD_ACCESS_KEY_ID env var".to_string(),
        ));
        let (status, body) = into_parts(err).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body["error"],
            "Configuration error: Missing ALICLOUD_ACCESS_KEY_ID env var"
        );
        assert_eq!(body["name"], "ConfigError");
        assert!(body["stack"].as_str().unwrap().starts_with("ConfigError: "));
    }

    #[tokio::test]
    async fn test_error_responses_are_json() {
        let response = ApiError::MissingParameters.into_response();
        assert_eq!(
            response.headers().get(axum::http::header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }
}
