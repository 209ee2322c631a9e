//! Resource definitions: what a resource is called, where it is stored and
//! which schemas guard it.

use crate::schema::{ResourceSchemas, SchemaRegistry};

/// Binds a resource name to a store collection and its schema pair.
///
/// The resource operations are generic over this definition; `users` and
/// `groups` differ only in the definition they are given.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceDefinition {
    /// Resource name as it appears in routes and errors (`users`, `groups`).
    pub name: String,
    /// Store collection holding the documents.
    pub collection: String,
    /// Full and partial schemas.
    pub schemas: ResourceSchemas,
}

impl ResourceDefinition {
    /// Create a definition whose collection has the same name as the resource.
    pub fn new(name: impl Into<String>, schemas: ResourceSchemas) -> Self {
        let name = name.into();
        Self {
            collection: name.clone(),
            name,
            schemas,
        }
    }

    /// Store documents in a different collection.
    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = collection.into();
        self
    }

    /// Build the definition of a registered resource.
    pub fn from_registry(registry: &SchemaRegistry, name: &str) -> Option<Self> {
        registry
            .get(name)
            .map(|schemas| Self::new(name, schemas.clone()))
    }
}
