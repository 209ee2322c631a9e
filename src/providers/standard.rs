//! Standard resource provider: the five CRUD operations over a pluggable store.
//!
//! The provider is generic over a [`ResourceDefinition`] (name, collection and
//! schema pair) and a [`StorageProvider`]. Every operation follows the same
//! shape: validate the payload, parse the identifier, issue exactly one store
//! call, then classify the outcome into a [`BuddyError`].
//!
//! # Example Usage
//!
//! ```rust
//! use buddy_api::providers::StandardResourceProvider;
//! use buddy_api::resource::{RequestContext, ResourceDefinition};
//! use buddy_api::schema::SchemaRegistry;
//! use buddy_api::storage::InMemoryStorage;
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = SchemaRegistry::new();
//! let users = ResourceDefinition::from_registry(&registry, "users").unwrap();
//! let provider = StandardResourceProvider::new(users, InMemoryStorage::new());
//! let context = RequestContext::with_generated_id();
//!
//! let user = provider
//!     .create(json!({"name": "Jon Jonsson", "personalId": "0101302989"}), &context)
//!     .await?;
//! let id = user["id"].as_str().unwrap();
//!
//! provider.update(id, json!({"name": "Jon Jonsson Jr."}), &context).await?;
//! provider.delete(id, &context).await?;
//! # Ok(())
//! # }
//! ```

use crate::error::{BuddyError, BuddyResult};
use crate::resource::{Document, RequestContext, ResourceDefinition};
use crate::schema::validate;
use crate::storage::{DocumentId, ID_FIELD, StorageError, StorageProvider};
use log::{debug, info, trace, warn};
use serde_json::Value;
use std::future::Future;

/// Resource operations for one resource, backed by a shared store handle.
///
/// # Runtime
///
/// Store calls are spawned with `tokio::spawn`, so the operation futures must
/// be polled inside a Tokio runtime; polling one elsewhere panics once it
/// reaches the store. Validation failures return before that point.
#[derive(Debug, Clone)]
pub struct StandardResourceProvider<S: StorageProvider> {
    definition: ResourceDefinition,
    // Cloned into each spawned store call
    storage: S,
}

impl<S> StandardResourceProvider<S>
where
    S: StorageProvider + Clone + 'static,
{
    /// Create a provider for a resource with the given store handle.
    pub fn new(definition: ResourceDefinition, storage: S) -> Self {
        Self {
            definition,
            storage,
        }
    }

    /// The resource this provider serves.
    pub fn definition(&self) -> &ResourceDefinition {
        &self.definition
    }

    /// The resource name, e.g. `users`.
    pub fn resource_name(&self) -> &str {
        &self.definition.name
    }

    /// The underlying store handle.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Return every document of the resource, in store order.
    pub async fn list(&self, context: &RequestContext) -> BuddyResult<Vec<Document>> {
        debug!(
            "Listing {} documents (request: '{}')",
            self.definition.name, context.request_id
        );

        let documents = self
            .run_store("find", |storage, collection| async move {
                storage.find(&collection).await
            })
            .await?;

        debug!(
            "Found {} {} documents (request: '{}')",
            documents.len(),
            self.definition.name,
            context.request_id
        );
        Ok(documents)
    }

    /// Return one document by identifier.
    pub async fn get(&self, id: &str, context: &RequestContext) -> BuddyResult<Document> {
        debug!(
            "Getting {} document '{}' (request: '{}')",
            self.definition.name, id, context.request_id
        );

        let document_id = self.parse_id(id, context)?;
        let found = self
            .run_store("find_one", move |storage, collection| async move {
                storage.find_one(&collection, &document_id).await
            })
            .await?;

        match found {
            Some(document) => {
                trace!("Found document: {}", document);
                Ok(document)
            }
            None => {
                debug!(
                    "{} document '{}' not found (request: '{}')",
                    self.definition.name, id, context.request_id
                );
                Err(BuddyError::not_found(&self.definition.name, id))
            }
        }
    }

    /// Validate a full payload, assign a fresh identifier and insert it.
    ///
    /// Returns the document as persisted, including its `id`.
    pub async fn create(&self, payload: Value, context: &RequestContext) -> BuddyResult<Document> {
        info!(
            "Creating {} document (request: '{}')",
            self.definition.name, context.request_id
        );
        trace!("Create payload: {}", payload);

        let mut document = validate(&self.definition.schemas.full, &payload).map_err(|e| {
            warn!(
                "Rejected {} create (request: '{}'): {}",
                self.definition.name, context.request_id, e
            );
            e
        })?;

        let id = self.storage.generate_id();
        match document.as_object_mut() {
            Some(fields) => {
                fields.insert(ID_FIELD.to_string(), Value::String(id.to_string()));
            }
            None => {
                return Err(BuddyError::Store(StorageError::invalid_document(
                    &self.definition.collection,
                    "validated payload is not an object",
                )));
            }
        }

        let stored = self
            .run_store("insert", |storage, collection| async move {
                storage.insert(&collection, document).await
            })
            .await?;

        info!(
            "Created {} document '{}' (request: '{}')",
            self.definition.name, id, context.request_id
        );
        Ok(stored)
    }

    /// Validate a partial payload and merge it into an existing document.
    ///
    /// Fields are set at the top level only; a nested object replaces the stored
    /// one wholesale.
    pub async fn update(&self, id: &str, payload: Value, context: &RequestContext) -> BuddyResult<()> {
        info!(
            "Updating {} document '{}' (request: '{}')",
            self.definition.name, id, context.request_id
        );
        trace!("Update payload: {}", payload);

        let validated = validate(&self.definition.schemas.partial, &payload).map_err(|e| {
            warn!(
                "Rejected {} update of '{}' (request: '{}'): {}",
                self.definition.name, id, context.request_id, e
            );
            e
        })?;

        let document_id = self.parse_id(id, context)?;

        let Value::Object(fields) = validated else {
            return Err(BuddyError::Store(StorageError::invalid_document(
                &self.definition.collection,
                "validated payload is not an object",
            )));
        };

        let matched = self
            .run_store("update", move |storage, collection| async move {
                storage.update(&collection, &document_id, fields).await
            })
            .await?;

        self.require_match(matched, id, context)
    }

    /// Remove a document.
    pub async fn delete(&self, id: &str, context: &RequestContext) -> BuddyResult<()> {
        info!(
            "Deleting {} document '{}' (request: '{}')",
            self.definition.name, id, context.request_id
        );

        let document_id = self.parse_id(id, context)?;
        let removed = self
            .run_store("remove", move |storage, collection| async move {
                storage.remove(&collection, &document_id).await
            })
            .await?;

        self.require_match(removed, id, context)
    }

    fn parse_id(&self, id: &str, context: &RequestContext) -> BuddyResult<DocumentId> {
        self.storage.parse_id(id).map_err(|e| {
            warn!(
                "Rejected {} id '{}' (request: '{}'): {}",
                self.definition.name, id, context.request_id, e
            );
            BuddyError::from(e)
        })
    }

    fn require_match(&self, matched: usize, id: &str, context: &RequestContext) -> BuddyResult<()> {
        if matched == 0 {
            debug!(
                "{} document '{}' not found (request: '{}')",
                self.definition.name, id, context.request_id
            );
            return Err(BuddyError::not_found(&self.definition.name, id));
        }
        Ok(())
    }

    /// Run one store call on its own task.
    ///
    /// The call is detached from the caller: dropping the returned future does
    /// not abort the store call, and it is never retried.
    async fn run_store<T, F, Fut>(&self, operation: &'static str, call: F) -> BuddyResult<T>
    where
        F: FnOnce(S, String) -> Fut,
        Fut: Future<Output = Result<T, StorageError>> + Send + 'static,
        T: Send + 'static,
    {
        let task = tokio::spawn(call(
            self.storage.clone(),
            self.definition.collection.clone(),
        ));

        match task.await {
            Ok(result) => result.map_err(BuddyError::from),
            Err(e) => Err(BuddyError::Store(StorageError::interrupted(
                operation,
                e.to_string(),
            ))),
        }
    }
}
