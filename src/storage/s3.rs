//! Amazon S3 object store implementation.

use super::ObjectStore;
use crate::error::{Result, SummarizerError};
use crate::location::ObjectLocation;
use async_trait::async_trait;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use tracing::{debug, instrument};

/// S3-backed object store.
#[derive(Clone)]
pub struct S3ObjectStore {
    client: aws_sdk_s3::Client,
}

impl S3ObjectStore {
    /// Create a store from shared AWS configuration.
    pub fn new(config: &aws_config::SdkConfig) -> Self {
        Self::with_client(aws_sdk_s3::Client::new(config))
    }

    /// Create a store around an existing client.
    pub fn with_client(client: aws_sdk_s3::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    #[instrument(skip(self), fields(location = %location))]
    async fn get_object(&self, location: &ObjectLocation) -> Result<Vec<u8>> {
        let output = self
            .client
            .get_object()
            .bucket(&location.bucket)
            .key(&location.key)
            .send()
            .await
            .map_err(|e| {
                let not_found = e
                    .as_service_error()
                    .is_some_and(|se| se.is_no_such_key());
                if not_found {
                    SummarizerError::ObjectNotFound(location.to_string())
                } else {
                    SummarizerError::Storage(format!(
                        "GetObject {} failed: {}",
                        location,
                        DisplayErrorContext(&e)
                    ))
                }
            })?;

        let body = output.body.collect().await.map_err(|e| {
            SummarizerError::Storage(format!("Reading body of {} failed: {}", location, e))
        })?;
        let bytes = body.into_bytes().to_vec();

        debug!("Read {} bytes", bytes.len());
        Ok(bytes)
    }

    #[instrument(skip(self, body), fields(location = %location, bytes = body.len()))]
    async fn put_object(
        &self,
        location: &ObjectLocation,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<()> {
        self.client
            .put_object()
            .bucket(&location.bucket)
            .key(&location.key)
            .content_type(content_type)
            .body(ByteStream::from(body))
            .send()
            .await
            .map_err(|e| {
                SummarizerError::Storage(format!(
                    "PutObject {} failed: {}",
                    location,
                    DisplayErrorContext(&e)
                ))
            })?;

        debug!("Wrote object");
        Ok(())
    }
}
