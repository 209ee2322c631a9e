//! CRUD operation handlers
//!
//! Checks the request shape, picks the resource provider and runs one
//! operation. Errors from the provider go through the shared error mapping.

use crate::operation_handler::core::{
    OperationHandler, OperationRequest, OperationResponse, OperationType,
};
use crate::operation_handler::errors::{
    create_bad_request_response, create_error_response, create_unknown_resource_response,
};
use crate::resource::RequestContext;
use crate::storage::StorageProvider;
use serde_json::Value;

/// Dispatch a list/get/create/update/delete request.
pub async fn handle_resource_operation<S>(
    handler: &OperationHandler<S>,
    request: OperationRequest,
    context: &RequestContext,
) -> OperationResponse
where
    S: StorageProvider + Clone + 'static,
{
    let request_id = context.request_id.clone();

    let Some(provider) = handler.server().provider(&request.resource) else {
        return create_unknown_resource_response(&request.resource, request_id);
    };

    let operation = request.operation;
    let id = match (operation.requires_id(), request.resource_id) {
        (true, None) => {
            return create_bad_request_response(
                format!("Missing id for {:?} operation", operation),
                request_id,
            );
        }
        (_, id) => id.unwrap_or_default(),
    };
    let data = match (operation.requires_body(), request.data) {
        (true, None) => {
            return create_bad_request_response(
                format!("Missing body for {:?} operation", operation),
                request_id,
            );
        }
        (_, data) => data.unwrap_or(Value::Null),
    };

    let result = match operation {
        OperationType::List => provider.list(context).await.map(|docs| Some(Value::Array(docs))),
        OperationType::Get => provider.get(&id, context).await.map(Some),
        OperationType::Create => provider.create(data, context).await.map(Some),
        OperationType::Update => provider.update(&id, data, context).await.map(|()| None),
        OperationType::Delete => provider.delete(&id, context).await.map(|()| None),
        OperationType::Describe => {
            return create_bad_request_response("Describe is not a resource operation", request_id);
        }
    };

    match result {
        Ok(body) => OperationResponse {
            status: operation.success_status(),
            body,
            error: None,
            request_id,
        },
        Err(e) => create_error_response(e, request_id),
    }
}
