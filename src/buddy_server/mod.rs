//! Buddy server facade and configuration.
//!
//! # Module Organization
//!
//! * [`core`] - the `BuddyServer` type wiring resources to the store
//! * [`builder`] - configuration and the builder that validates it

pub mod builder;
pub mod core;

pub use builder::{ApiInfo, BuddyServerBuilder, BuddyServerConfig, ConfigError};
pub use self::core::BuddyServer;
