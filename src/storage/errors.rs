//! Storage-specific error types for pure data operations.
//!
//! These errors describe failures of the document store itself, separate from
//! schema validation or the resource-level error taxonomy. The resource layer
//! reclassifies them: [`StorageError::InvalidId`] becomes an invalid-id error,
//! everything else is reported as an opaque store failure.

use std::fmt;

/// Errors that can occur during storage operations.
#[derive(Debug)]
pub enum StorageError {
    /// The identifier string cannot be interpreted by the store.
    InvalidId { id: String },

    /// A document with this identifier already exists in the collection.
    DuplicateId { collection: String, id: String },

    /// The document is not a JSON object and cannot be stored.
    InvalidDocument { collection: String, message: String },

    /// Storage backend is temporarily unavailable.
    Unavailable { message: String },

    /// The store call did not run to completion (task panicked or was aborted).
    Interrupted { operation: String, message: String },

    /// Generic internal storage error.
    Internal { message: String },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::InvalidId { id } => write!(f, "Invalid document id: '{}'", id),
            StorageError::DuplicateId { collection, id } => {
                write!(f, "Document already exists: {}/{}", collection, id)
            }
            StorageError::InvalidDocument {
                collection,
                message,
            } => {
                write!(f, "Invalid document for {}: {}", collection, message)
            }
            StorageError::Unavailable { message } => {
                write!(f, "Storage unavailable: {}", message)
            }
            StorageError::Interrupted { operation, message } => {
                write!(f, "Storage operation '{}' interrupted: {}", operation, message)
            }
            StorageError::Internal { message } => {
                write!(f, "Internal storage error: {}", message)
            }
        }
    }
}

impl std::error::Error for StorageError {}

impl StorageError {
    /// Create a new InvalidId error.
    pub fn invalid_id(id: impl Into<String>) -> Self {
        Self::InvalidId { id: id.into() }
    }

    /// Create a new DuplicateId error.
    pub fn duplicate_id(collection: impl Into<String>, id: impl Into<String>) -> Self {
        Self::DuplicateId {
            collection: collection.into(),
            id: id.into(),
        }
    }

    /// Create a new InvalidDocument error.
    pub fn invalid_document(collection: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidDocument {
            collection: collection.into(),
            message: message.into(),
        }
    }

    /// Create a new Unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Create a new Interrupted error.
    pub fn interrupted(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Interrupted {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// Create a new Internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Check if this error indicates a malformed identifier.
    pub fn is_invalid_id(&self) -> bool {
        matches!(self, StorageError::InvalidId { .. })
    }
}
