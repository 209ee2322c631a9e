//! Core server type: the resources wired to one shared store handle.

use crate::buddy_server::builder::BuddyServerConfig;
use crate::providers::StandardResourceProvider;
use crate::resource::ResourceDefinition;
use crate::schema::{GROUPS, SchemaRegistry, USERS};
use crate::storage::StorageProvider;
use log::debug;
use std::collections::HashMap;

/// The Buddy API server.
///
/// Owns one provider per resource. All providers share the same store handle,
/// each scoped to its own collection.
///
/// Resource operations must run inside a Tokio runtime; see
/// [`StandardResourceProvider`].
#[derive(Debug, Clone)]
pub struct BuddyServer<S: StorageProvider> {
    config: BuddyServerConfig,
    registry: SchemaRegistry,
    providers: HashMap<String, StandardResourceProvider<S>>,
    storage: S,
}

impl<S> BuddyServer<S>
where
    S: StorageProvider + Clone + 'static,
{
    /// Create a server with the default configuration.
    pub fn new(storage: S) -> Self {
        Self::with_config(storage, BuddyServerConfig::default())
    }

    /// Create a server with the given configuration.
    ///
    /// The configuration is not validated here; use
    /// [`BuddyServerBuilder`](crate::BuddyServerBuilder) for that.
    pub fn with_config(storage: S, config: BuddyServerConfig) -> Self {
        let registry = SchemaRegistry::with_unknown_fields(config.unknown_fields);

        let mut providers = HashMap::new();
        for (name, collection) in [
            (USERS, &config.users_collection),
            (GROUPS, &config.groups_collection),
        ] {
            if let Some(definition) = ResourceDefinition::from_registry(&registry, name) {
                let definition = definition.with_collection(collection.as_str());
                debug!(
                    "Registered resource '{}' on collection '{}'",
                    name, definition.collection
                );
                providers.insert(
                    name.to_string(),
                    StandardResourceProvider::new(definition, storage.clone()),
                );
            }
        }

        Self {
            config,
            registry,
            providers,
            storage,
        }
    }

    /// The provider serving a resource, if the resource exists.
    pub fn provider(&self, resource: &str) -> Option<&StandardResourceProvider<S>> {
        self.providers.get(resource)
    }

    /// The `users` provider.
    pub fn users(&self) -> Option<&StandardResourceProvider<S>> {
        self.provider(USERS)
    }

    /// The `groups` provider.
    pub fn groups(&self) -> Option<&StandardResourceProvider<S>> {
        self.provider(GROUPS)
    }

    /// Names of the served resources, sorted.
    pub fn resource_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.providers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn config(&self) -> &BuddyServerConfig {
        &self.config
    }

    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    /// The shared store handle.
    pub fn storage(&self) -> &S {
        &self.storage
    }
}
