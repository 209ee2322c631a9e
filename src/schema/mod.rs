//! Schema definitions and validation for Buddy resources.
//!
//! # Key Types
//!
//! - [`Schema`] - declarative rule tree (string, number, object, enum, array, custom)
//! - [`validate`] - validates a JSON payload against a schema
//! - [`SchemaRegistry`] - the `users` and `groups` schema pairs
//!
//! # Examples
//!
//! ```rust
//! use buddy_api::schema::{SchemaRegistry, validate};
//! use serde_json::json;
//!
//! let registry = SchemaRegistry::new();
//! let users = registry.get("users").unwrap();
//!
//! let payload = json!({"name": "Jon Jonsson", "personalId": "0101302989"});
//! assert!(validate(&users.full, &payload).is_ok());
//!
//! // Updates need at least one field
//! assert!(validate(&users.partial, &json!({})).is_err());
//! ```

pub mod registry;
pub mod rules;
pub mod types;
pub mod validation;


pub use registry::{
    GROUP_TYPES, GROUPS, MAX_NAME_LENGTH, ResourceSchemas, SchemaRegistry, USERS,
    address_schema, group_schema, user_schema,
};
pub use types::{CustomRule, Field, ObjectSchema, Presence, Schema, StringRule, UnknownFields};
pub use validation::validate;
