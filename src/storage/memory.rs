//! In-memory object store implementation.
//!
//! Useful for testing and local dry runs.

use super::ObjectStore;
use crate::error::{Result, SummarizerError};
use crate::location::ObjectLocation;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

/// A stored object with its content type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub body: Vec<u8>,
    pub content_type: Option<String>,
}

/// In-memory object store.
pub struct MemoryObjectStore {
    objects: RwLock<HashMap<ObjectLocation, StoredObject>>,
}

impl MemoryObjectStore {
    /// Create a new, empty in-memory store.
    pub fn new() -> Self {
        Self {
            objects: RwLock::new(HashMap::new()),
        }
    }

    /// Seed an object without going through the trait.
    pub fn insert(&self, location: ObjectLocation, body: impl Into<Vec<u8>>) {
        let mut objects = self.objects.write().unwrap();
        objects.insert(
            location,
            StoredObject {
                body: body.into(),
                content_type: None,
            },
        );
    }

    /// Fetch a stored object, if present.
    pub fn get(&self, location: &ObjectLocation) -> Option<StoredObject> {
        let objects = self.objects.read().unwrap();
        objects.get(location).cloned()
    }

    /// Number of stored objects.
    pub fn len(&self) -> usize {
        self.objects.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MemoryObjectStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ObjectStore for MemoryObjectStore {
    async fn get_object(&self, location: &ObjectLocation) -> Result<Vec<u8>> {
        let objects = self.objects.read().unwrap();
        objects
            .get(location)
            .map(|o| o.body.clone())
            .ok_or_else(|| SummarizerError::ObjectNotFound(location.to_string()))
    }

    async fn put_object(
        &self,
        location: &ObjectLocation,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<()> {
        let mut objects = self.objects.write().unwrap();
        objects.insert(
            location.clone(),
            StoredObject {
                body,
                content_type: Some(content_type.to_string()),
            },
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::JSON_CONTENT_TYPE;

    #[tokio::test]
    async fn test_memory_object_store() {
        let store = MemoryObjectStore::new();
        let loc = ObjectLocation::new("bucket", "a/b.json");

        store
            .put_object(&loc, b"{}".to_vec(), JSON_CONTENT_TYPE)
            .await
            .unwrap();

        assert_eq!(store.get_object(&loc).await.unwrap(), b"{}".to_vec());
        assert_eq!(
            store.get(&loc).unwrap().content_type.as_deref(),
            Some(JSON_CONTENT_TYPE)
        );
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_missing_object() {
        let store = MemoryObjectStore::new();
        let loc = ObjectLocation::new("bucket", "missing.json");

        let err = store.get_object(&loc).await.unwrap_err();
        assert!(matches!(err, SummarizerError::ObjectNotFound(ref m) if m == "s3://bucket/missing.json"));
    }
}
