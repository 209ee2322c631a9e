//! Store implementations for exercising failure and timing paths.

use buddy_api::storage::{DocumentId, InMemoryStorage, StorageError, StorageProvider};
use serde_json::{Map, Value};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// A store whose data operations all fail with an internal error.
///
/// Identifier handling is delegated, so requests get past id parsing.
#[derive(Debug, Clone, Default)]
pub struct FailingStorage {
    ids: InMemoryStorage,
}

pub const FAILURE_CAUSE: &str = "connection to mongodb://buddy:secret@db lost";

impl StorageProvider for FailingStorage {
    fn generate_id(&self) -> DocumentId {
        self.ids.generate_id()
    }

    fn parse_id(&self, raw: &str) -> Result<DocumentId, StorageError> {
        self.ids.parse_id(raw)
    }

    async fn find(&self, _collection: &str) -> Result<Vec<Value>, StorageError> {
        Err(StorageError::internal(FAILURE_CAUSE))
    }

    async fn find_one(
        &self,
        _collection: &str,
        _id: &DocumentId,
    ) -> Result<Option<Value>, StorageError> {
        Err(StorageError::internal(FAILURE_CAUSE))
    }

    async fn insert(&self, _collection: &str, _document: Value) -> Result<Value, StorageError> {
        Err(StorageError::internal(FAILURE_CAUSE))
    }

    async fn update(
        &self,
        _collection: &str,
        _id: &DocumentId,
        _fields: Map<String, Value>,
    ) -> Result<usize, StorageError> {
        Err(StorageError::unavailable(FAILURE_CAUSE))
    }

    async fn remove(&self, _collection: &str, _id: &DocumentId) -> Result<usize, StorageError> {
        Err(StorageError::unavailable(FAILURE_CAUSE))
    }

    async fn count(&self, _collection: &str) -> Result<usize, StorageError> {
        Err(StorageError::internal(FAILURE_CAUSE))
    }

    async fn clear(&self) -> Result<(), StorageError> {
        Ok(())
    }
}

/// An in-memory store that delays writes and counts how many were issued.
#[derive(Debug, Clone)]
pub struct SlowStorage {
    inner: InMemoryStorage,
    delay: Duration,
    writes: Arc<AtomicUsize>,
}

impl SlowStorage {
    pub fn new(delay: Duration) -> Self {
        Self {
            inner: InMemoryStorage::new(),
            delay,
            writes: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of write calls issued so far
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn inner(&self) -> &InMemoryStorage {
        &self.inner
    }
}

impl StorageProvider for SlowStorage {
    fn generate_id(&self) -> DocumentId {
        self.inner.generate_id()
    }

    fn parse_id(&self, raw: &str) -> Result<DocumentId, StorageError> {
        self.inner.parse_id(raw)
    }

    async fn find(&self, collection: &str) -> Result<Vec<Value>, StorageError> {
        self.inner.find(collection).await
    }

    async fn find_one(
        &self,
        collection: &str,
        id: &DocumentId,
    ) -> Result<Option<Value>, StorageError> {
        self.inner.find_one(collection, id).await
    }

    async fn insert(&self, collection: &str, document: Value) -> Result<Value, StorageError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        self.inner.insert(collection, document).await
    }

    async fn update(
        &self,
        collection: &str,
        id: &DocumentId,
        fields: Map<String, Value>,
    ) -> Result<usize, StorageError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        self.inner.update(collection, id, fields).await
    }

    async fn remove(&self, collection: &str, id: &DocumentId) -> Result<usize, StorageError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        self.inner.remove(collection, id).await
    }

    async fn count(&self, collection: &str) -> Result<usize, StorageError> {
        self.inner.count(collection).await
    }

    async fn clear(&self) -> Result<(), StorageError> {
        self.inner.clear().await
    }
}
