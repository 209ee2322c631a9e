//! Schema discovery: a machine-readable description of the API.
//!
//! Reports the API information, every route with a human description, and the
//! full and partial schema of each resource. The description is derived from
//! the same registry and configuration the server runs with.

use crate::buddy_server::{ApiInfo, BuddyServer, BuddyServerConfig};
use crate::operation_handler::OperationType;
use crate::schema::{GROUPS, Schema, SchemaRegistry, USERS};
use crate::storage::StorageProvider;
use serde::Serialize;
use serde_json::Value;

/// The complete API description.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiDescription {
    pub info: ApiInfo,
    pub routes: Vec<RouteDescription>,
    pub resources: Vec<ResourceDescription>,
}

/// One route of the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteDescription {
    pub method: &'static str,
    pub path: String,
    pub resource: String,
    pub operation: OperationType,
    pub description: String,
    /// Which schema validates the payload, if the route takes one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload_schema: Option<&'static str>,
}

/// The schemas of one resource.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceDescription {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    pub schema: Schema,
    pub partial_schema: Schema,
}

/// Builds API descriptions.
///
/// # Example
///
/// ```rust
/// use buddy_api::SchemaDiscovery;
///
/// let description = SchemaDiscovery::new().describe();
/// assert_eq!(description.info.title, "Buddy API");
/// assert_eq!(description.routes.len(), 10);
///
/// let route = &description.routes[0];
/// assert_eq!((route.method, route.path.as_str()), ("GET", "/api/users"));
/// assert_eq!(route.description, "Lists all users");
/// ```
#[derive(Debug, Clone)]
pub struct SchemaDiscovery {
    info: ApiInfo,
    api_prefix: String,
    registry: SchemaRegistry,
}

impl SchemaDiscovery {
    /// Describe an API running with the default configuration.
    pub fn new() -> Self {
        let config = BuddyServerConfig::default();
        Self::from_parts(&config, SchemaRegistry::with_unknown_fields(config.unknown_fields))
    }

    /// Describe the API a server exposes.
    pub fn from_server<S>(server: &BuddyServer<S>) -> Self
    where
        S: StorageProvider + Clone + 'static,
    {
        Self::from_parts(server.config(), server.registry().clone())
    }

    fn from_parts(config: &BuddyServerConfig, registry: SchemaRegistry) -> Self {
        Self {
            info: config.api_info.clone(),
            api_prefix: config.api_prefix.clone(),
            registry,
        }
    }

    /// Build the description.
    pub fn describe(&self) -> ApiDescription {
        let resources = self
            .registry
            .resource_names()
            .into_iter()
            .filter_map(|name| {
                self.registry.get(name).map(|schemas| ResourceDescription {
                    name: name.to_string(),
                    class_name: schemas
                        .full
                        .as_object()
                        .and_then(|object| object.class_name.clone()),
                    schema: schemas.full.clone(),
                    partial_schema: schemas.partial.clone(),
                })
            })
            .collect();

        ApiDescription {
            info: self.info.clone(),
            routes: self.routes(),
            resources,
        }
    }

    /// Build the description as JSON.
    pub fn describe_json(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self.describe())
    }

    fn routes(&self) -> Vec<RouteDescription> {
        let mut routes = Vec::new();

        for resource in [USERS, GROUPS] {
            if self.registry.get(resource).is_none() {
                continue;
            }
            for operation in [
                OperationType::List,
                OperationType::Get,
                OperationType::Create,
                OperationType::Update,
                OperationType::Delete,
            ] {
                let path = if operation.requires_id() {
                    format!("{}/{}/{{id}}", self.api_prefix, resource)
                } else {
                    format!("{}/{}", self.api_prefix, resource)
                };
                let payload_schema = match operation {
                    OperationType::Create => Some("full"),
                    OperationType::Update => Some("partial"),
                    _ => None,
                };

                routes.push(RouteDescription {
                    method: operation.method(),
                    path,
                    resource: resource.to_string(),
                    operation,
                    description: route_description(resource, operation).to_string(),
                    payload_schema,
                });
            }
        }

        routes
    }
}

impl Default for SchemaDiscovery {
    fn default() -> Self {
        Self::new()
    }
}

fn route_description(resource: &str, operation: OperationType) -> &'static str {
    match (resource, operation) {
        (USERS, OperationType::List) => "Lists all users",
        (USERS, OperationType::Get) => "Fetch a user",
        (USERS, OperationType::Create) => "Create new users",
        (USERS, OperationType::Update) => "Update a user",
        (USERS, OperationType::Delete) => "Deletes a user",
        (GROUPS, OperationType::List) => "Lists all groups",
        (GROUPS, OperationType::Get) => "Fetch a group",
        (GROUPS, OperationType::Create) => "Creates a new group",
        (GROUPS, OperationType::Update) => "Update a group",
        (GROUPS, OperationType::Delete) => "Delete a group",
        _ => "",
    }
}
