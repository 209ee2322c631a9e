//! Route resolution: maps `METHOD /{prefix}/{resource}[/{id}]` onto requests.
//!
//! | Method | Path | Operation |
//! |---|---|---|
//! | GET | `{prefix}/{resource}` | list |
//! | GET | `{prefix}/{resource}/{id}` | get |
//! | POST | `{prefix}/{resource}` | create |
//! | PATCH | `{prefix}/{resource}/{id}` | update |
//! | DELETE | `{prefix}/{resource}/{id}` | delete |
//! | GET | `/docs` | describe |
//! | GET | `/` | describe |
//!
//! Resource names are not checked here; the handler answers unknown resources
//! with a 404 of its own.

use crate::operation_handler::core::{OperationRequest, OperationType};
use serde_json::Value;

/// Path of the API description.
pub const DOCS_PATH: &str = "/docs";

/// A method and path that match no route.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("No route for {method} {path}")]
pub struct RouteError {
    pub method: String,
    pub path: String,
}

impl OperationRequest {
    /// Resolve an HTTP-style method and path into a request.
    ///
    /// The query string, if any, is ignored. `body` becomes the payload of
    /// create and update requests and is dropped otherwise.
    ///
    /// ```rust
    /// use buddy_api::operation_handler::{OperationRequest, OperationType};
    ///
    /// let request = OperationRequest::from_route("DELETE", "/api/groups/42", None, "/api").unwrap();
    /// assert_eq!(request.operation, OperationType::Delete);
    /// assert_eq!(request.resource, "groups");
    /// assert_eq!(request.resource_id.as_deref(), Some("42"));
    ///
    /// assert!(OperationRequest::from_route("PUT", "/api/groups/42", None, "/api").is_err());
    /// ```
    pub fn from_route(
        method: &str,
        path: &str,
        body: Option<Value>,
        api_prefix: &str,
    ) -> Result<Self, RouteError> {
        let no_route = || RouteError {
            method: method.to_string(),
            path: path.to_string(),
        };

        let path_only = path.split('?').next().unwrap_or_default();
        let method = method.to_ascii_uppercase();

        let trimmed = path_only.trim_end_matches('/');
        if method == "GET" && (trimmed == DOCS_PATH || trimmed.is_empty()) {
            return Ok(Self::describe());
        }

        let rest = path_only.strip_prefix(api_prefix).ok_or_else(no_route)?;
        if !rest.starts_with('/') {
            return Err(no_route());
        }

        let segments: Vec<&str> = rest.split('/').filter(|s| !s.is_empty()).collect();

        let operation = match (method.as_str(), segments.len()) {
            ("GET", 1) => OperationType::List,
            ("POST", 1) => OperationType::Create,
            ("GET", 2) => OperationType::Get,
            ("PATCH", 2) => OperationType::Update,
            ("DELETE", 2) => OperationType::Delete,
            _ => return Err(no_route()),
        };

        Ok(Self {
            operation,
            resource: segments[0].to_string(),
            resource_id: segments.get(1).map(|id| id.to_string()),
            data: if operation.requires_body() { body } else { None },
            request_id: None,
        })
    }
}
