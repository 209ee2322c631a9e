//! Error response creation for the operation handler.
//!
//! Maps the four error kinds onto status codes. Store faults are logged with
//! their cause here and reported to callers with a fixed message only.

use crate::error::BuddyError;
use crate::operation_handler::builders::RouteError;
use crate::operation_handler::core::{ErrorBody, OperationResponse};
use log::error;

/// Message returned for every store fault.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Create an error response from a `BuddyError`.
pub fn create_error_response(error: BuddyError, request_id: String) -> OperationResponse {
    let kind = error.kind().code().to_string();

    let (status, body) = match &error {
        BuddyError::Validation(e) => (
            400,
            ErrorBody {
                kind,
                message: e.to_string(),
                field: Some(e.path.clone()),
                reason: Some(e.kind.to_string()),
            },
        ),
        BuddyError::InvalidId { .. } => (400, plain_error(kind, error.to_string())),
        BuddyError::NotFound { .. } => (404, plain_error(kind, error.to_string())),
        BuddyError::Store(cause) => {
            error!("Store failure: {} (request: '{}')", cause, request_id);
            (500, plain_error(kind, INTERNAL_ERROR_MESSAGE.to_string()))
        }
    };

    OperationResponse {
        status,
        body: None,
        error: Some(body),
        request_id,
    }
}

/// Create a response for a request that names an unknown resource.
pub fn create_unknown_resource_response(resource: &str, request_id: String) -> OperationResponse {
    OperationResponse {
        status: 404,
        body: None,
        error: Some(plain_error(
            "NOT_FOUND".to_string(),
            format!("Unknown resource: {}", resource),
        )),
        request_id,
    }
}

/// Create a response for a structurally incomplete request.
pub fn create_bad_request_response(message: impl Into<String>, request_id: String) -> OperationResponse {
    OperationResponse {
        status: 400,
        body: None,
        error: Some(plain_error("BAD_REQUEST".to_string(), message.into())),
        request_id,
    }
}

/// Create a response for a method and path that match no route.
pub fn create_route_error_response(error: RouteError, request_id: String) -> OperationResponse {
    OperationResponse {
        status: 404,
        body: None,
        error: Some(plain_error("NOT_FOUND".to_string(), error.to_string())),
        request_id,
    }
}

fn plain_error(kind: String, message: String) -> ErrorBody {
    ErrorBody {
        kind,
        message,
        field: None,
        reason: None,
    }
}
