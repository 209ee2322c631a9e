//! Core operation handler infrastructure
//!
//! The request, response and operation types, plus the dispatcher that turns a
//! request into exactly one resource operation.

use crate::buddy_server::BuddyServer;
use crate::resource::RequestContext;
use crate::storage::StorageProvider;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Framework-agnostic operation handler for Buddy resources.
///
/// Transport layers (HTTP, CLI, tests) build an [`OperationRequest`], hand it
/// to the handler and translate the [`OperationResponse`] back.
#[derive(Debug, Clone)]
pub struct OperationHandler<S: StorageProvider> {
    pub(super) server: BuddyServer<S>,
}

/// Structured request for a resource operation.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationRequest {
    /// The operation to perform
    pub operation: OperationType,
    /// Resource name (`users`, `groups`)
    pub resource: String,
    /// Identifier for operations that target one document
    pub resource_id: Option<String>,
    /// Payload for create and update
    pub data: Option<Value>,
    /// Request ID for tracing and correlation
    pub request_id: Option<String>,
}

/// Operations supported by the handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OperationType {
    /// List all documents of a resource
    List,
    /// Get one document by id
    Get,
    /// Create a document
    Create,
    /// Merge fields into a document
    Update,
    /// Delete a document
    Delete,
    /// Describe the API
    Describe,
}

impl OperationType {
    /// The HTTP method this operation is exposed under.
    pub fn method(&self) -> &'static str {
        match self {
            OperationType::List | OperationType::Get | OperationType::Describe => "GET",
            OperationType::Create => "POST",
            OperationType::Update => "PATCH",
            OperationType::Delete => "DELETE",
        }
    }

    /// Whether the operation targets a single document.
    pub fn requires_id(&self) -> bool {
        matches!(
            self,
            OperationType::Get | OperationType::Update | OperationType::Delete
        )
    }

    /// Whether the operation carries a payload.
    pub fn requires_body(&self) -> bool {
        matches!(self, OperationType::Create | OperationType::Update)
    }

    /// Status code reported on success.
    pub fn success_status(&self) -> u16 {
        match self {
            OperationType::List | OperationType::Get | OperationType::Describe => 200,
            OperationType::Create => 201,
            OperationType::Update | OperationType::Delete => 204,
        }
    }
}

/// Structured response from an operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OperationResponse {
    /// HTTP-like status code
    pub status: u16,
    /// Returned document(s); `None` for 204 responses and errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
    /// Error details when the operation failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
    /// Request ID for tracing
    pub request_id: String,
}

/// Structured error returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    /// Machine-readable error code (`VALIDATION_ERROR`, `NOT_FOUND`, ...)
    pub kind: String,
    /// Human-readable message, safe to show to callers
    pub message: String,
    /// Failing field path for validation errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Violated constraint for validation errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl OperationResponse {
    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// The error code, if the operation failed.
    pub fn error_kind(&self) -> Option<&str> {
        self.error.as_ref().map(|e| e.kind.as_str())
    }
}

impl<S> OperationHandler<S>
where
    S: StorageProvider + Clone + 'static,
{
    /// Create a new operation handler around a server.
    pub fn new(server: BuddyServer<S>) -> Self {
        Self { server }
    }

    /// Handle a structured operation request.
    ///
    /// Every outcome, including unknown resources and malformed requests, is
    /// returned as a response; this never fails.
    pub async fn handle_operation(&self, request: OperationRequest) -> OperationResponse {
        let request_id = request
            .request_id
            .clone()
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

        info!(
            "Operation handler processing {:?} for {} (request: '{}')",
            request.operation, request.resource, request_id
        );

        let context = RequestContext::new(request_id.as_str());

        let response = match request.operation {
            OperationType::Describe => super::handlers::discovery::handle_describe(self, &context),
            _ => super::handlers::crud::handle_resource_operation(self, request, &context).await,
        };

        if response.is_success() {
            debug!(
                "Operation handler completed with {} (request: '{}')",
                response.status, request_id
            );
        } else {
            warn!(
                "Operation handler failed with {} (request: '{}')",
                response.status, request_id
            );
        }

        response
    }

    /// Resolve a method and path against the configured prefix and handle it.
    ///
    /// Paths that match no route produce a 404 response.
    pub async fn handle_route(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
    ) -> OperationResponse {
        match OperationRequest::from_route(method, path, body, &self.server.config().api_prefix) {
            Ok(request) => self.handle_operation(request).await,
            Err(e) => {
                let request_id = uuid::Uuid::new_v4().to_string();
                warn!("Unresolved route: {} (request: '{}')", e, request_id);
                super::errors::create_route_error_response(e, request_id)
            }
        }
    }

    /// Get access to the underlying server.
    pub fn server(&self) -> &BuddyServer<S> {
        &self.server
    }
}
