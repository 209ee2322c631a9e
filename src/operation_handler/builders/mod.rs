//! Builder utilities for operation handler types
//!
//! Constructors for `OperationRequest`, either directly or by resolving a
//! method and path.

pub mod request;
pub mod route;

pub use route::{DOCS_PATH, RouteError};
