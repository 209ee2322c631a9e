//! Framework-agnostic operation handler.
//!
//! Turns structured requests (or raw method + path pairs) into resource
//! operations and maps every outcome onto a status code and response body.
//!
//! # Key Types
//!
//! - [`OperationHandler`] - main handler for processing operations
//! - [`OperationRequest`] - structured request, built directly or from a route
//! - [`OperationResponse`] - status, body and structured error
//!
//! # Examples
//!
//! ```rust
//! use buddy_api::BuddyServer;
//! use buddy_api::operation_handler::OperationHandler;
//! use buddy_api::storage::InMemoryStorage;
//! use serde_json::json;
//!
//! # async fn example() {
//! let handler = OperationHandler::new(BuddyServer::new(InMemoryStorage::new()));
//!
//! let body = json!({"name": "Jon Jonsson", "personalId": "0101302989"});
//! let response = handler.handle_route("POST", "/api/users", Some(body)).await;
//! assert_eq!(response.status, 201);
//!
//! let response = handler.handle_route("GET", "/api/users/not-an-object-id", None).await;
//! assert_eq!(response.status, 400);
//! # }
//! ```

mod builders;
mod core;
mod errors;
mod handlers;

pub use self::core::{
    ErrorBody, OperationHandler, OperationRequest, OperationResponse, OperationType,
};

pub use builders::{DOCS_PATH, RouteError};

pub use errors::{
    INTERNAL_ERROR_MESSAGE, create_bad_request_response, create_error_response,
    create_route_error_response, create_unknown_resource_response,
};
