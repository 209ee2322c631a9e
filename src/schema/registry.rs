//! Resource schemas and the registry that hands them out.
//!
//! This is the only place field constraints for `users` and `groups` are
//! declared. Each resource gets a full schema (create, and describing stored
//! documents) and a partial schema derived from it (update).

use super::rules;
use super::types::{Field, ObjectSchema, Schema, UnknownFields};
use crate::storage::ID_FIELD;
use std::collections::HashMap;

/// Resource name of the users collection.
pub const USERS: &str = "users";
/// Resource name of the groups collection.
pub const GROUPS: &str = "groups";

/// Allowed values for a group's `type`.
pub const GROUP_TYPES: [&str; 4] = ["association", "union", "group", "troop"];

/// Longest accepted `name`.
pub const MAX_NAME_LENGTH: usize = 255;

/// The schema pair of one resource.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceSchemas {
    /// Validates create payloads.
    pub full: Schema,
    /// Validates update payloads.
    pub partial: Schema,
}

impl ResourceSchemas {
    /// Build the pair from a full schema, deriving the partial one.
    pub fn from_full(full: Schema) -> Self {
        let partial = full.partial();
        Self { full, partial }
    }

    /// Apply an unknown-field policy to both schemas.
    pub fn with_unknown_fields(self, policy: UnknownFields) -> Self {
        Self {
            full: self.full.with_unknown_fields(policy),
            partial: self.partial.with_unknown_fields(policy),
        }
    }
}

/// The nested postal address of a user.
pub fn address_schema() -> ObjectSchema {
    Schema::object()
        .class_name("Address")
        .optional("street", Schema::string())
        .optional("number", Schema::string())
        .optional("postal", Schema::Number)
        .optional("city", Schema::string())
        .optional("country", Schema::string().min(2).max(3))
}

/// Full schema of a user document.
pub fn user_schema() -> Schema {
    Schema::object()
        .class_name("User")
        .forbidden(ID_FIELD)
        .required("name", Schema::string().max(MAX_NAME_LENGTH))
        .optional("email", Schema::string().email())
        .field(Field::required("personalId", rules::personal_id()).immutable())
        .optional("address", address_schema())
        .into()
}

/// Full schema of a group document.
pub fn group_schema() -> Schema {
    Schema::object()
        .class_name("Group")
        .forbidden(ID_FIELD)
        .required("name", Schema::string().max(MAX_NAME_LENGTH))
        .required("email", Schema::string().email())
        .required("type", Schema::one_of(GROUP_TYPES))
        .required("personalId", rules::personal_id())
        .into()
}

/// Registry of resource schemas by resource name.
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    schemas: HashMap<String, ResourceSchemas>,
}

impl SchemaRegistry {
    /// Create a registry holding the `users` and `groups` schemas.
    pub fn new() -> Self {
        Self::with_unknown_fields(UnknownFields::default())
    }

    /// Create the default registry with a given unknown-field policy.
    pub fn with_unknown_fields(policy: UnknownFields) -> Self {
        let mut registry = Self::empty();
        registry.register(
            USERS,
            ResourceSchemas::from_full(user_schema()).with_unknown_fields(policy),
        );
        registry.register(
            GROUPS,
            ResourceSchemas::from_full(group_schema()).with_unknown_fields(policy),
        );
        registry
    }

    /// Create a registry without any resources.
    pub fn empty() -> Self {
        Self {
            schemas: HashMap::new(),
        }
    }

    /// Add or replace the schemas of a resource.
    pub fn register(&mut self, resource: impl Into<String>, schemas: ResourceSchemas) {
        self.schemas.insert(resource.into(), schemas);
    }

    /// Get the schema pair of a resource.
    pub fn get(&self, resource: &str) -> Option<&ResourceSchemas> {
        self.schemas.get(resource)
    }

    /// Registered resource names, sorted.
    pub fn resource_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.schemas.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}
