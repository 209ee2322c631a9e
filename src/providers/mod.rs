//! Resource provider implementations.
//!
//! # Available Providers
//!
//! * [`StandardResourceProvider`] - CRUD operations for one resource over any
//!   [`StorageProvider`](crate::storage::StorageProvider)
//!
//! Providers hold a clone of one shared store handle; creating a provider per
//! resource is cheap.

pub mod standard;

pub use standard::StandardResourceProvider;
