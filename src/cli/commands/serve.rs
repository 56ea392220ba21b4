//! Serve command implementation: the Lambda runtime loop.

use crate::aws::create_handler;
use crate::config::Settings;
use crate::handler::StatusRecord;
use anyhow::Result;
use lambda_runtime::{service_fn, LambdaEvent};
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info, info_span, Instrument};

/// Run the Lambda runtime with a handler built once at cold start.
pub async fn run_serve(settings: Settings) -> Result<()> {
    let handler = Arc::new(create_handler(settings).await);
    info!("Starting Lambda runtime");

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| {
        let handler = Arc::clone(&handler);
        let span = info_span!("invocation", request_id = %event.context.request_id);

        async move {
            let status = handler.handle_value(event.payload).await.map_err(|e| {
                error!(error = %e, "Invocation failed");
                e
            })?;
            Ok::<StatusRecord, lambda_runtime::Error>(status)
        }
        .instrument(span)
    }))
    .await
    .map_err(|e| anyhow::anyhow!("Lambda runtime failed: {}", e))
}
