//! Error types for Buddy API operations.
//!
//! Every resource operation fails with exactly one [`BuddyError`] variant. The
//! variants form a closed taxonomy that the operation handler maps onto
//! externally visible status codes:
//!
//! - [`BuddyError::Validation`] - payload rejected before reaching the store
//! - [`BuddyError::NotFound`] - the targeted document does not exist
//! - [`BuddyError::InvalidId`] - the identifier could not be parsed by the store
//! - [`BuddyError::Store`] - any other store failure, kept opaque to callers

use crate::storage::StorageError;
use serde::Serialize;
use std::fmt;

/// Main error type for resource operations.
#[derive(Debug, thiserror::Error)]
pub enum BuddyError {
    /// The payload does not conform to the resource schema.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// No document with the given identifier exists in the resource collection.
    #[error("Resource not found: {resource} with id '{id}'")]
    NotFound { resource: String, id: String },

    /// The identifier is not syntactically valid for the store.
    #[error("Invalid id '{id}'")]
    InvalidId { id: String },

    /// The store failed for a reason that is not a missing document or bad id.
    #[error("Store error: {0}")]
    Store(#[source] StorageError),
}

/// The four externally observable error classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorKind {
    Validation,
    NotFound,
    InvalidId,
    Store,
}

impl ErrorKind {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "VALIDATION_ERROR",
            ErrorKind::NotFound => "NOT_FOUND",
            ErrorKind::InvalidId => "INVALID_ID",
            ErrorKind::Store => "STORE_ERROR",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl BuddyError {
    /// Create a NotFound error.
    pub fn not_found(resource: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
            id: id.into(),
        }
    }

    /// Create an InvalidId error.
    pub fn invalid_id(id: impl Into<String>) -> Self {
        Self::InvalidId { id: id.into() }
    }

    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            BuddyError::Validation(_) => ErrorKind::Validation,
            BuddyError::NotFound { .. } => ErrorKind::NotFound,
            BuddyError::InvalidId { .. } => ErrorKind::InvalidId,
            BuddyError::Store(_) => ErrorKind::Store,
        }
    }

    /// The validation failure, if this is a validation error.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            BuddyError::Validation(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StorageError> for BuddyError {
    /// Classifies store faults. A malformed identifier reported by the store
    /// becomes `InvalidId`; everything else stays an opaque store error.
    fn from(error: StorageError) -> Self {
        match error {
            StorageError::InvalidId { id } => BuddyError::InvalidId { id },
            other => BuddyError::Store(other),
        }
    }
}

/// A schema violation: the failing field path and the violated constraint.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}: {kind}", display_path(.path))]
pub struct ValidationError {
    /// Dotted path of the failing field. Empty for the payload root.
    pub path: String,
    /// The constraint that was violated.
    pub kind: ValidationErrorKind,
}

/// The individual constraints the schema engine can report.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationErrorKind {
    #[error("is required")]
    Required,

    #[error("is not allowed")]
    NotAllowed,

    #[error("is not allowed to be empty")]
    Empty,

    #[error("must be of type {expected}, got {actual}")]
    InvalidType {
        expected: &'static str,
        actual: &'static str,
    },

    #[error("must be at least {min} characters long")]
    TooShort { min: usize },

    #[error("exceeds max length {max}")]
    TooLong { max: usize },

    #[error("must be a valid email")]
    InvalidEmail,

    #[error("must be one of [{}]", .allowed.join(", "))]
    NotInSet { allowed: Vec<String> },

    #[error("must have at least {min} field(s)")]
    TooFewFields { min: usize },

    /// A custom rule predicate rejected the value.
    #[error("{message}")]
    Custom { rule: String, message: String },
}

impl ValidationError {
    /// Create a validation error for the given field path.
    pub fn new(path: impl Into<String>, kind: ValidationErrorKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }

    /// Create a missing-required-field error.
    pub fn required(path: impl Into<String>) -> Self {
        Self::new(path, ValidationErrorKind::Required)
    }

    /// The top-level field name, e.g. `address` for `address.country`.
    pub fn field(&self) -> &str {
        self.path
            .split(['.', '['])
            .next()
            .unwrap_or(self.path.as_str())
    }
}

/// The path as shown in messages; `payload` for the root.
fn display_path(path: &str) -> &str {
    if path.is_empty() { "payload" } else { path }
}

/// Result type for resource operations.
pub type BuddyResult<T> = Result<T, BuddyError>;
/// Result type for schema validation.
pub type ValidationResult<T> = Result<T, ValidationError>;
