//! Common test utilities for the Buddy API test suite.
//!
//! Assertion macros, payload builders, fixtures and helpers that build a
//! server or handler on a fresh in-memory store.

use buddy_api::storage::InMemoryStorage;
use buddy_api::{BuddyServer, OperationHandler, RequestContext};

pub mod builders;
pub mod fixtures;

/// Assert that an operation failed with the given `ErrorKind`
#[macro_export]
macro_rules! assert_error_kind {
    ($result:expr, $kind:expr) => {
        match $result {
            Err(err) => assert_eq!(err.kind(), $kind, "unexpected error: {}", err),
            Ok(_) => panic!("Expected {:?} error, but the operation succeeded", $kind),
        }
    };
}

/// Assert that an operation failed validation on the given field path
#[macro_export]
macro_rules! assert_validation_field {
    ($result:expr, $field:expr) => {
        match $result {
            Err(buddy_api::BuddyError::Validation(e)) => {
                assert_eq!(e.path, $field, "unexpected violation: {}", e)
            }
            Err(other) => panic!("Expected validation error on '{}', got {:?}", $field, other),
            Ok(_) => panic!(
                "Expected validation error on '{}', but the operation succeeded",
                $field
            ),
        }
    };
}

/// Assert that schema validation failed on the given field path
#[macro_export]
macro_rules! assert_violation {
    ($result:expr, $field:expr) => {
        match $result {
            Err(e) => assert_eq!(e.path, $field, "unexpected violation: {}", e),
            Ok(_) => panic!("Expected violation on '{}', but validation passed", $field),
        }
    };
}

/// Assert that schema validation passed
#[macro_export]
macro_rules! assert_valid {
    ($result:expr) => {
        match $result {
            Ok(_) => {}
            Err(err) => panic!("Expected validation to succeed, but got error: {}", err),
        }
    };
}

/// A server on a fresh in-memory store.
pub fn test_server() -> BuddyServer<InMemoryStorage> {
    BuddyServer::new(InMemoryStorage::new())
}

/// A server and a handle to its store.
pub fn test_server_with_storage() -> (BuddyServer<InMemoryStorage>, InMemoryStorage) {
    let storage = InMemoryStorage::new();
    (BuddyServer::new(storage.clone()), storage)
}

/// An operation handler on a fresh in-memory store.
pub fn test_handler() -> OperationHandler<InMemoryStorage> {
    OperationHandler::new(test_server())
}

/// A request context named after the test.
pub fn context(test_name: &str) -> RequestContext {
    RequestContext::new(format!("test-{}", test_name))
}

/// Install a logger once; repeated calls are ignored.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
