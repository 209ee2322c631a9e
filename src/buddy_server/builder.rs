//! Builder pattern for configuring Buddy server instances.
//!
//! The configuration decides where the API is mounted, which store collections
//! back each resource, how undeclared payload fields are treated and what the
//! API reports about itself in discovery.

use crate::buddy_server::BuddyServer;
use crate::schema::UnknownFields;
use crate::storage::StorageProvider;
use serde::Serialize;

/// Descriptive information reported by schema discovery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiInfo {
    pub title: String,
    pub description: String,
    pub version: String,
}

impl Default for ApiInfo {
    fn default() -> Self {
        Self {
            title: "Buddy API".to_string(),
            description: "A new users system for the Icelandic Scout Association.".to_string(),
            version: "1.0".to_string(),
        }
    }
}

/// Configuration for a Buddy server.
#[derive(Debug, Clone, PartialEq)]
pub struct BuddyServerConfig {
    /// Path prefix all routes are mounted under. Defaults to `/api`.
    pub api_prefix: String,

    /// Store collection backing the `users` resource.
    pub users_collection: String,

    /// Store collection backing the `groups` resource.
    pub groups_collection: String,

    /// Policy for payload fields the schemas do not declare.
    pub unknown_fields: UnknownFields,

    /// Information reported by discovery.
    pub api_info: ApiInfo,
}

impl Default for BuddyServerConfig {
    fn default() -> Self {
        Self {
            api_prefix: "/api".to_string(),
            users_collection: "users".to_string(),
            groups_collection: "groups".to_string(),
            unknown_fields: UnknownFields::Strip,
            api_info: ApiInfo::default(),
        }
    }
}

impl BuddyServerConfig {
    pub fn with_api_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.api_prefix = prefix.into();
        self
    }

    pub fn with_users_collection(mut self, collection: impl Into<String>) -> Self {
        self.users_collection = collection.into();
        self
    }

    pub fn with_groups_collection(mut self, collection: impl Into<String>) -> Self {
        self.groups_collection = collection.into();
        self
    }

    pub fn with_unknown_fields(mut self, policy: UnknownFields) -> Self {
        self.unknown_fields = policy;
        self
    }

    pub fn with_api_info(mut self, api_info: ApiInfo) -> Self {
        self.api_info = api_info;
        self
    }

    /// Validate the configuration.
    ///
    /// The prefix must be empty or an absolute path without a trailing slash,
    /// and the two resources must not share a collection.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.api_prefix.is_empty()
            && (!self.api_prefix.starts_with('/') || self.api_prefix.ends_with('/'))
        {
            return Err(ConfigError::InvalidPrefix {
                prefix: self.api_prefix.clone(),
            });
        }

        for collection in [&self.users_collection, &self.groups_collection] {
            if collection.trim().is_empty() {
                return Err(ConfigError::EmptyCollection);
            }
        }

        if self.users_collection == self.groups_collection {
            return Err(ConfigError::SharedCollection {
                collection: self.users_collection.clone(),
            });
        }

        Ok(())
    }
}

/// Configuration problems detected when building a server.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("API prefix '{prefix}' must start with '/' and not end with '/'")]
    InvalidPrefix { prefix: String },

    #[error("collection names cannot be empty")]
    EmptyCollection,

    #[error("users and groups cannot share collection '{collection}'")]
    SharedCollection { collection: String },
}

/// Builder for configuring and creating Buddy server instances.
///
/// # Examples
///
/// ```rust
/// use buddy_api::BuddyServerBuilder;
/// use buddy_api::schema::UnknownFields;
/// use buddy_api::storage::InMemoryStorage;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// // Defaults: mounted at /api, collections named after the resources
/// let server = BuddyServerBuilder::new(InMemoryStorage::new()).build()?;
/// assert_eq!(server.config().api_prefix, "/api");
///
/// // Strict payloads under a different prefix
/// let server = BuddyServerBuilder::new(InMemoryStorage::new())
///     .with_api_prefix("/buddy/v1")
///     .with_unknown_fields(UnknownFields::Reject)
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct BuddyServerBuilder<S> {
    storage: S,
    config: BuddyServerConfig,
}

impl<S> BuddyServerBuilder<S>
where
    S: StorageProvider + Clone + 'static,
{
    /// Create a builder around a store handle, with the default configuration.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            config: BuddyServerConfig::default(),
        }
    }

    /// Replace the whole configuration.
    pub fn with_config(mut self, config: BuddyServerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_api_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config = self.config.with_api_prefix(prefix);
        self
    }

    pub fn with_users_collection(mut self, collection: impl Into<String>) -> Self {
        self.config = self.config.with_users_collection(collection);
        self
    }

    pub fn with_groups_collection(mut self, collection: impl Into<String>) -> Self {
        self.config = self.config.with_groups_collection(collection);
        self
    }

    pub fn with_unknown_fields(mut self, policy: UnknownFields) -> Self {
        self.config = self.config.with_unknown_fields(policy);
        self
    }

    pub fn with_api_info(mut self, api_info: ApiInfo) -> Self {
        self.config = self.config.with_api_info(api_info);
        self
    }

    /// Validate the configuration and build the server.
    pub fn build(self) -> Result<BuddyServer<S>, ConfigError> {
        self.config.validate()?;
        Ok(BuddyServer::with_config(self.storage, self.config))
    }
}
