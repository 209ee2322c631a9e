//! Integration tests for the Buddy API.
//!
//! ## Test Organization
//!
//! - `lifecycle` - create/get/list/update/delete through the providers
//! - `error_mapping` - error kinds and status codes, including store faults
//! - `routes` - method + path resolution through the operation handler
//! - `scenarios` - end-to-end request scenarios
//! - `concurrency` - concurrent requests and dropped callers
//! - `stores` - test store implementations used above

pub mod concurrency;
pub mod lifecycle;
pub mod stores;
