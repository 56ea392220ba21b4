//! Object storage abstraction.
//!
//! Provides a trait-based interface over the object store holding
//! transcripts and summaries.

mod memory;
mod s3;

pub use memory::{MemoryObjectStore, StoredObject};
pub use s3::S3ObjectStore;

use crate::error::Result;
use crate::location::ObjectLocation;
use async_trait::async_trait;

/// Content type of written summary documents.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Trait for object store implementations.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Read the full body of an object.
    async fn get_object(&self, location: &ObjectLocation) -> Result<Vec<u8>>;

    /// Create or replace an object.
    async fn put_object(
        &self,
        location: &ObjectLocation,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<()>;
}
