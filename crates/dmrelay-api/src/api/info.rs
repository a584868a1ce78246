/// Account summary action
use axum::response::Response;
use dmrelay_core::DescAccountSummaryRequest;
use tracing::info;

use crate::{api::success, context::ApiContext, error::ApiError};

/// Queries the account summary. Read-only on the provider side.
pub async fn handle(ctx: &ApiContext) -> Result<Response, ApiError> {
    let client = ctx.provider()?;
    let result = client
        .desc_account_summary(DescAccountSummaryRequest::default())
        .await?;

    info!(status = result.status_code, "Account summary retrieved");

    success(result)
}
