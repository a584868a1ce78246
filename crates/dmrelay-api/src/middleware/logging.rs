/// Request logging middleware
use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{info, warn};
use uuid::Uuid;

use crate::api::QueryParams;

/// Request logging middleware
///
/// Logs every request with:
/// - Request ID (generated)
/// - HTTP method and path
/// - Requested action
/// - Response status code
/// - Request duration
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let start = Instant::now();

    let request_id = Uuid::new_v4().to_string();
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let action = QueryParams::parse(request.uri().query())
        .get("action")
        .unwrap_or("info")
        .to_string();

    info!(
        request_id = %request_id,
        method = %method,
        path = %path,
        action = %action,
        "Incoming request"
    );

    let response = next.run(request).await;

    let duration = start.elapsed();
    let status = response.status();

    if status.is_success() {
        info!(
            request_id = %request_id,
            action = %action,
            status = %status.as_u16(),
            duration_ms = %duration.as_millis(),
            "Request completed"
        );
    } else {
        warn!(
            request_id = %request_id,
            action = %action,
            status = %status.as_u16(),
            duration_ms = %duration.as_millis(),
            "Request failed"
        );
    }

    response
}
