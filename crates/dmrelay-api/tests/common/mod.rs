//! Common test utilities: an in-memory provider that records every call
#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::Body;
use dmrelay_api::ApiContext;
use dmrelay_core::{
    DirectMailConfig, DmError, MailProvider, ProviderFactory, ProviderRequest, ProviderResponse,
};
use serde_json::{Value, json};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

/// How the mock provider answers
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Behavior {
    Succeed,
    Reject,
}

/// Factory handing out [`RecordingProvider`]s that share one call log
#[derive(Clone)]
pub struct RecordingFactory {
    pub calls: Arc<Mutex<Vec<ProviderRequest>>>,
    pub connects: Arc<AtomicUsize>,
    pub behavior: Arc<Mutex<Behavior>>,
}

impl RecordingFactory {
    pub fn new(behavior: Behavior) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            connects: Arc::new(AtomicUsize::new(0)),
            behavior: Arc::new(Mutex::new(behavior)),
        }
    }

    pub fn set_behavior(&self, behavior: Behavior) {
        *self.behavior.lock().unwrap() = behavior;
    }

    pub fn calls(&self) -> Vec<ProviderRequest> {
        self.calls.lock().unwrap().clone()
    }

    pub fn connect_count(&self) -> usize {
        self.connects.load(Ordering::SeqCst)
    }
}

impl ProviderFactory for RecordingFactory {
    fn connect(&self, config: &DirectMailConfig) -> Result<Box<dyn MailProvider>, DmError> {
        config.credentials()?;
        self.connects.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(RecordingProvider {
            calls: Arc::clone(&self.calls),
            behavior: *self.behavior.lock().unwrap(),
        }))
    }
}

pub struct RecordingProvider {
    calls: Arc<Mutex<Vec<ProviderRequest>>>,
    behavior: Behavior,
}

#[async_trait]
impl MailProvider for RecordingProvider {
    async fn invoke(&self, request: ProviderRequest) -> Result<ProviderResponse, DmError> {
        let action = request.action();
        self.calls.lock().unwrap().push(request);

        match self.behavior {
            Behavior::Succeed => Ok(ProviderResponse {
                status_code: 200,
                headers: Default::default(),
                body: json!({ "RequestId": "mock-request", "Action": action }),
            }),
            Behavior::Reject => Err(DmError::Provider {
                status: 403,
                code: "Forbidden.AccessKeyDisabled".to_string(),
                message: "The Access Key is disabled.".to_string(),
                request_id: Some("mock-request".to_string()),
            }),
        }
    }
}

pub fn test_config() -> DirectMailConfig {
    DirectMailConfig::new("LTAI-test", "test-secret")
}

pub fn context_with(factory: &RecordingFactory) -> Arc<ApiContext> {
    ApiContext::with_factory(test_config(), Arc::new(factory.clone()))
}

/// Sends one request through the router and returns status, content type and raw body
pub async fn call_raw(
    ctx: Arc<ApiContext>,
    method: &str,
    uri: &str,
) -> (u16, Option<String>, String) {
    let request = axum::http::Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = dmrelay_api::router(ctx).oneshot(request).await.unwrap();
    let status = response.status().as_u16();
    let content_type = response
        .headers()
        .get(axum::http::header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
}

/// Same as [`call_raw`] with the body parsed as JSON
pub async fn call(
    ctx: Arc<ApiContext>,
    method: &str,
    uri: &str,
) -> (u16, Option<String>, Value) {
    let (status, content_type, text) = call_raw(ctx, method, uri).await;
    (status, content_type, serde_json::from_str(&text).unwrap())
}
