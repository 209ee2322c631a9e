//! Request builder utilities for OperationRequest

use crate::operation_handler::core::{OperationRequest, OperationType};
use serde_json::Value;

impl OperationRequest {
    fn new(operation: OperationType, resource: impl Into<String>) -> Self {
        Self {
            operation,
            resource: resource.into(),
            resource_id: None,
            data: None,
            request_id: None,
        }
    }

    /// Create a new list operation request.
    pub fn list(resource: impl Into<String>) -> Self {
        Self::new(OperationType::List, resource)
    }

    /// Create a new get operation request.
    pub fn get(resource: impl Into<String>, resource_id: impl Into<String>) -> Self {
        Self::new(OperationType::Get, resource).with_resource_id(resource_id)
    }

    /// Create a new create operation request.
    pub fn create(resource: impl Into<String>, data: Value) -> Self {
        Self::new(OperationType::Create, resource).with_data(data)
    }

    /// Create a new update operation request.
    pub fn update(
        resource: impl Into<String>,
        resource_id: impl Into<String>,
        data: Value,
    ) -> Self {
        Self::new(OperationType::Update, resource)
            .with_resource_id(resource_id)
            .with_data(data)
    }

    /// Create a new delete operation request.
    pub fn delete(resource: impl Into<String>, resource_id: impl Into<String>) -> Self {
        Self::new(OperationType::Delete, resource).with_resource_id(resource_id)
    }

    /// Create a request for the API description.
    pub fn describe() -> Self {
        Self::new(OperationType::Describe, "")
    }

    pub fn with_resource_id(mut self, resource_id: impl Into<String>) -> Self {
        self.resource_id = Some(resource_id.into());
        self
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    /// Set the request ID used for log correlation.
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }
}
