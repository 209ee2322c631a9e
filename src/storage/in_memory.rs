//! In-memory storage implementation for Buddy documents.
//!
//! Thread-safe implementation of [`StorageProvider`] on top of a `HashMap` behind
//! a tokio `RwLock`. Identifiers are random UUIDs. Intended for tests,
//! development and embedding; nothing is persisted.
//!
//! # Performance Characteristics
//!
//! * FIND_ONE/INSERT/UPDATE/REMOVE: O(1) average case
//! * FIND: O(n log n), documents are returned in insertion order
//!
//! # Example Usage
//!
//! ```rust
//! use buddy_api::storage::{InMemoryStorage, StorageProvider};
//! use serde_json::{Map, json};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let storage = InMemoryStorage::new();
//! let id = storage.generate_id();
//! storage.insert("groups", json!({"id": id.as_str(), "name": "Skjoldungar"})).await?;
//!
//! let mut fields = Map::new();
//! fields.insert("name".to_string(), json!("Landnemar"));
//! assert_eq!(storage.update("groups", &id, fields).await?, 1);
//! # Ok(())
//! # }
//! ```

use crate::storage::{DocumentId, ID_FIELD, StorageError, StorageProvider};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Clone)]
struct StoredDocument {
    // Insertion sequence, gives find() a stable order
    seq: u64,
    data: Value,
}

#[derive(Debug, Default)]
struct Collections {
    next_seq: u64,
    // Structure: collection -> document id -> document
    data: HashMap<String, HashMap<String, StoredDocument>>,
}

/// Thread-safe in-memory document store.
///
/// Cloning is cheap and every clone shares the same underlying data, which is
/// how one long-lived store handle is shared between resources.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStorage {
    inner: Arc<RwLock<Collections>>,
}

impl InMemoryStorage {
    /// Create a new empty in-memory storage instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get storage statistics for debugging and monitoring.
    pub async fn stats(&self) -> InMemoryStorageStats {
        let guard = self.inner.read().await;
        InMemoryStorageStats {
            collection_count: guard.data.values().filter(|c| !c.is_empty()).count(),
            total_documents: guard.data.values().map(HashMap::len).sum(),
        }
    }

    /// Get the names of all collections that hold at least one document.
    pub async fn list_collections(&self) -> Vec<String> {
        let guard = self.inner.read().await;
        let mut names: Vec<String> = guard
            .data
            .iter()
            .filter(|(_, docs)| !docs.is_empty())
            .map(|(name, _)| name.clone())
            .collect();
        names.sort();
        names
    }

    fn document_id(collection: &str, document: &Value) -> Result<String, StorageError> {
        let obj = document.as_object().ok_or_else(|| {
            StorageError::invalid_document(collection, "document must be a JSON object")
        })?;

        obj.get(ID_FIELD)
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| {
                StorageError::invalid_document(collection, "document is missing its 'id' field")
            })
    }
}

impl StorageProvider for InMemoryStorage {
    fn generate_id(&self) -> DocumentId {
        DocumentId::from_canonical(Uuid::new_v4().to_string())
    }

    fn parse_id(&self, raw: &str) -> Result<DocumentId, StorageError> {
        Uuid::parse_str(raw)
            .map(|uuid| DocumentId::from_canonical(uuid.to_string()))
            .map_err(|_| StorageError::invalid_id(raw))
    }

    async fn find(&self, collection: &str) -> Result<Vec<Value>, StorageError> {
        let guard = self.inner.read().await;

        let Some(docs) = guard.data.get(collection) else {
            return Ok(Vec::new());
        };

        let mut stored: Vec<&StoredDocument> = docs.values().collect();
        stored.sort_by_key(|doc| doc.seq);

        Ok(stored.into_iter().map(|doc| doc.data.clone()).collect())
    }

    async fn find_one(
        &self,
        collection: &str,
        id: &DocumentId,
    ) -> Result<Option<Value>, StorageError> {
        let guard = self.inner.read().await;

        let result = guard
            .data
            .get(collection)
            .and_then(|docs| docs.get(id.as_str()))
            .map(|doc| doc.data.clone());

        Ok(result)
    }

    async fn insert(&self, collection: &str, document: Value) -> Result<Value, StorageError> {
        let id = Self::document_id(collection, &document)?;

        let mut guard = self.inner.write().await;
        let seq = guard.next_seq;

        let docs = guard.data.entry(collection.to_string()).or_default();
        if docs.contains_key(&id) {
            return Err(StorageError::duplicate_id(collection, id));
        }
        docs.insert(
            id,
            StoredDocument {
                seq,
                data: document.clone(),
            },
        );
        guard.next_seq += 1;

        Ok(document)
    }

    async fn update(
        &self,
        collection: &str,
        id: &DocumentId,
        fields: Map<String, Value>,
    ) -> Result<usize, StorageError> {
        let mut guard = self.inner.write().await;

        let Some(stored) = guard
            .data
            .get_mut(collection)
            .and_then(|docs| docs.get_mut(id.as_str()))
        else {
            return Ok(0);
        };

        let Some(obj) = stored.data.as_object_mut() else {
            return Err(StorageError::internal(format!(
                "stored document {}/{} is not an object",
                collection, id
            )));
        };

        for (name, value) in fields {
            // The identifier is fixed at insert time
            if name == ID_FIELD {
                continue;
            }
            obj.insert(name, value);
        }

        Ok(1)
    }

    async fn remove(&self, collection: &str, id: &DocumentId) -> Result<usize, StorageError> {
        let mut guard = self.inner.write().await;

        let removed = guard
            .data
            .get_mut(collection)
            .and_then(|docs| docs.remove(id.as_str()))
            .map_or(0, |_| 1);

        Ok(removed)
    }

    async fn count(&self, collection: &str) -> Result<usize, StorageError> {
        let guard = self.inner.read().await;
        Ok(guard.data.get(collection).map_or(0, HashMap::len))
    }

    async fn clear(&self) -> Result<(), StorageError> {
        let mut guard = self.inner.write().await;
        guard.data.clear();
        Ok(())
    }
}

/// Statistics about the current state of in-memory storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InMemoryStorageStats {
    /// Number of non-empty collections
    pub collection_count: usize,
    /// Total number of documents across collections
    pub total_documents: usize,
}
