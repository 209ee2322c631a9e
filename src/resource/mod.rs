//! Resource model for the Buddy API.
//!
//! Documents are plain JSON objects (`serde_json::Value`); the schemas decide
//! their shape. This module holds the pieces the resource operations are
//! generic over, plus the validated domain primitives.
//!
//! # Key Components
//!
//! * [`ResourceDefinition`] - name, collection and schema pair of a resource
//! * [`RequestContext`] - request tracking for logs
//! * [`value_objects`] - validated domain primitives (PersonalId) and the email predicate

pub mod context;
pub mod definition;
pub mod value_objects;

pub use context::RequestContext;
pub use definition::ResourceDefinition;
pub use value_objects::{PersonalId, PersonalIdKind};

/// A stored or validated document.
pub type Document = serde_json::Value;
