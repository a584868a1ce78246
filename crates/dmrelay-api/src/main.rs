use dmrelay_api::ApiContext;
use lambda_http::{Error, Request, run, service_fn};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Initialize tracing subscriber for structured logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .json()
        .init();

    info!("Starting dmrelay Lambda function");

    // Credentials are read once; the provider client is built per request
    let ctx = ApiContext::new();

    run(service_fn(|event: Request| {
        let ctx = ctx.clone();
        async move { dmrelay_api::handler(ctx, event).await }
    }))
    .await
}
