//! Amazon Bedrock runtime client.

use super::{ModelInvoker, JSON_MIME};
use crate::error::{Result, SummarizerError};
use async_trait::async_trait;
use aws_sdk_bedrockruntime::config::Region;
use aws_sdk_bedrockruntime::error::DisplayErrorContext;
use aws_sdk_bedrockruntime::primitives::Blob;
use tracing::{debug, instrument};

/// Bedrock-based model invoker.
#[derive(Clone)]
pub struct BedrockInvoker {
    client: aws_sdk_bedrockruntime::Client,
}

impl BedrockInvoker {
    /// Create an invoker from shared AWS configuration, pinned to `region`.
    pub fn new(config: &aws_config::SdkConfig, region: &str) -> Self {
        let conf = aws_sdk_bedrockruntime::config::Builder::from(config)
            .region(Region::new(region.to_string()))
            .build();
        Self::with_client(aws_sdk_bedrockruntime::Client::from_conf(conf))
    }

    /// Create an invoker around an existing client.
    pub fn with_client(client: aws_sdk_bedrockruntime::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ModelInvoker for BedrockInvoker {
    #[instrument(skip(self, body), fields(model_id = %model_id, request_bytes = body.len()))]
    async fn invoke(&self, model_id: &str, body: Vec<u8>) -> Result<Vec<u8>> {
        let response = self
            .client
            .invoke_model()
            .model_id(model_id)
            .content_type(JSON_MIME)
            .accept(JSON_MIME)
            .body(Blob::new(body))
            .send()
            .await
            .map_err(|e| {
                SummarizerError::Model(format!(
                    "InvokeModel {} failed: {}",
                    model_id,
                    DisplayErrorContext(&e)
                ))
            })?;

        let bytes = response.body().as_ref().to_vec();
        debug!("Model returned {} bytes", bytes.len());
        Ok(bytes)
    }
}
