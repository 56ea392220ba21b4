//! AWS client construction.
//!
//! Clients are created once per process (at cold start in Lambda) and shared
//! by every invocation through the handler.

use crate::config::Settings;
use crate::handler::Handler;
use crate::model::BedrockInvoker;
use crate::storage::S3ObjectStore;
use aws_config::BehaviorVersion;
use std::sync::Arc;
use tracing::info;

/// Load shared AWS configuration from the environment.
pub async fn load_sdk_config() -> aws_config::SdkConfig {
    aws_config::load_defaults(BehaviorVersion::latest()).await
}

/// Build a handler backed by S3 and Bedrock.
///
/// The Bedrock client uses `settings.region`; S3 uses the ambient region.
pub async fn create_handler(settings: Settings) -> Handler {
    let sdk_config = load_sdk_config().await;
    info!(
        "Using model {} in {}",
        settings.model_id, settings.region
    );

    let store = Arc::new(S3ObjectStore::new(&sdk_config));
    let model = Arc::new(BedrockInvoker::new(&sdk_config, &settings.region));
    Handler::new(settings, store, model)
}
