//! Buddy API: user and group records for the Icelandic Scout Association.
//!
//! Provides validated CRUD operations over two document resources, `users` and
//! `groups`, backed by a pluggable document store. Every payload is checked
//! against a declarative schema before the store is touched, including a
//! checksum rule for Icelandic personal identity numbers (kennitala).
//!
//! # Core Components
//!
//! - [`BuddyServer`] - wires the resources to one shared store handle
//! - [`StandardResourceProvider`](providers::StandardResourceProvider) - the five CRUD operations
//! - [`StorageProvider`](storage::StorageProvider) - trait for document store backends
//! - [`OperationHandler`](operation_handler::OperationHandler) - maps requests and routes to responses
//! - [`SchemaDiscovery`] - machine-readable API description
//!
//! # Quick Start
//!
//! ```rust
//! use buddy_api::{BuddyServer, RequestContext};
//! use buddy_api::storage::InMemoryStorage;
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let server = BuddyServer::new(InMemoryStorage::new());
//! let users = server.users().expect("users are always served");
//! let context = RequestContext::with_generated_id();
//!
//! let user = users
//!     .create(
//!         json!({
//!             "name": "Jon Jonsson",
//!             "personalId": "010130-2989",
//!             "address": {"city": "Reykjavik"}
//!         }),
//!         &context,
//!     )
//!     .await?;
//! assert!(user["id"].is_string());
//! # Ok(())
//! # }
//! ```

pub mod buddy_server;
pub mod error;
pub mod operation_handler;
pub mod providers;
pub mod resource;
pub mod schema;
pub mod schema_discovery;
pub mod storage;

// Re-export commonly used types for convenience
pub use buddy_server::{ApiInfo, BuddyServer, BuddyServerBuilder, BuddyServerConfig, ConfigError};
pub use error::{BuddyError, BuddyResult, ErrorKind, ValidationError, ValidationErrorKind};
pub use resource::{RequestContext, ResourceDefinition};
pub use schema::{Schema, SchemaRegistry, validate};
pub use schema_discovery::SchemaDiscovery;

pub use operation_handler::{OperationHandler, OperationRequest, OperationResponse};
pub use resource::value_objects::{PersonalId, is_valid_personal_id};
