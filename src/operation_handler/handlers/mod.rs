//! Operation handler modules
//!
//! - CRUD operations (list, get, create, update, delete)
//! - Discovery (API description)

pub mod crud;
pub mod discovery;

// Handler functions are called via super::handlers::module::function
