//! Storage abstraction layer for Buddy documents.
//!
//! The `StorageProvider` trait is the store collaborator: a document store that
//! keeps JSON objects in named collections and knows how to mint and parse its
//! own identifiers. It knows nothing about schemas or the resource error
//! taxonomy; the resource layer validates payloads before calling it and
//! reclassifies its errors afterwards.
//!
//! # Example Usage
//!
//! ```rust
//! use buddy_api::storage::{InMemoryStorage, StorageProvider};
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let storage = InMemoryStorage::new();
//!
//! let id = storage.generate_id();
//! let doc = json!({"id": id.as_str(), "name": "Jon Jonsson"});
//! storage.insert("users", doc).await?;
//!
//! let found = storage.find_one("users", &id).await?;
//! assert!(found.is_some());
//!
//! let removed = storage.remove("users", &id).await?;
//! assert_eq!(removed, 1);
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod in_memory;


pub use errors::StorageError;
pub use in_memory::{InMemoryStorage, InMemoryStorageStats};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::future::Future;

/// Name of the identifier field carried by every stored document.
pub const ID_FIELD: &str = "id";

/// A store identifier in its canonical string form.
///
/// Only a [`StorageProvider`] creates these, either by generating a fresh one or
/// by parsing caller input, so holding a `DocumentId` means the store accepts it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    /// Wrap an identifier the store has already produced or accepted.
    pub(crate) fn from_canonical(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the canonical string form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Core trait for the document store collaborator.
///
/// All operations are scoped to a collection name. Implementations must be safe
/// for concurrent use through a shared handle; the resource layer never locks.
///
/// # Design Principles
///
/// - **One call per operation**: every resource operation issues exactly one of
///   these calls, so each must be atomic for a single document.
/// - **Matched counts**: `update` and `remove` report how many documents matched
///   instead of failing, leaving the not-found decision to the caller.
/// - **Store-owned identifiers**: only the store knows what a well-formed
///   identifier looks like.
pub trait StorageProvider: Send + Sync {
    /// Generate a fresh, unique identifier.
    fn generate_id(&self) -> DocumentId;

    /// Parse caller input into an identifier.
    ///
    /// Fails with [`StorageError::InvalidId`] when the string is malformed.
    fn parse_id(&self, raw: &str) -> Result<DocumentId, StorageError>;

    /// Return every document in the collection.
    ///
    /// Order is store-native and stable while the collection is unmodified.
    /// A collection that was never written to is empty, not an error.
    fn find(&self, collection: &str)
    -> impl Future<Output = Result<Vec<Value>, StorageError>> + Send;

    /// Return the document with the given identifier, if any.
    fn find_one(
        &self,
        collection: &str,
        id: &DocumentId,
    ) -> impl Future<Output = Result<Option<Value>, StorageError>> + Send;

    /// Insert a new document and return it as stored.
    ///
    /// The document must be a JSON object carrying its identifier under
    /// [`ID_FIELD`]. Inserting an identifier that already exists fails with
    /// [`StorageError::DuplicateId`].
    fn insert(
        &self,
        collection: &str,
        document: Value,
    ) -> impl Future<Output = Result<Value, StorageError>> + Send;

    /// Set the given top-level fields on the matching document.
    ///
    /// Fields not named in `fields` are left untouched. A field whose value is an
    /// object replaces the stored value wholesale. Returns the number of matched
    /// documents (0 or 1).
    fn update(
        &self,
        collection: &str,
        id: &DocumentId,
        fields: Map<String, Value>,
    ) -> impl Future<Output = Result<usize, StorageError>> + Send;

    /// Remove the matching document. Returns the number of removed documents.
    fn remove(
        &self,
        collection: &str,
        id: &DocumentId,
    ) -> impl Future<Output = Result<usize, StorageError>> + Send;

    /// Count the documents in a collection.
    fn count(&self, collection: &str) -> impl Future<Output = Result<usize, StorageError>> + Send;

    /// Remove every document from every collection.
    ///
    /// Intended for tests.
    fn clear(&self) -> impl Future<Output = Result<(), StorageError>> + Send;
}
