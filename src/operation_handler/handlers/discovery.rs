//! Discovery handler: serves the API description.

use crate::operation_handler::core::{ErrorBody, OperationHandler, OperationResponse, OperationType};
use crate::operation_handler::errors::INTERNAL_ERROR_MESSAGE;
use crate::resource::RequestContext;
use crate::schema_discovery::SchemaDiscovery;
use crate::storage::StorageProvider;
use log::error;

/// Handle a describe request.
pub fn handle_describe<S>(handler: &OperationHandler<S>, context: &RequestContext) -> OperationResponse
where
    S: StorageProvider + Clone + 'static,
{
    let discovery = SchemaDiscovery::from_server(handler.server());
    let request_id = context.request_id.clone();

    match discovery.describe_json() {
        Ok(body) => OperationResponse {
            status: OperationType::Describe.success_status(),
            body: Some(body),
            error: None,
            request_id,
        },
        Err(e) => {
            error!("Failed to serialize API description: {} (request: '{}')", e, request_id);
            OperationResponse {
                status: 500,
                body: None,
                error: Some(ErrorBody {
                    kind: "INTERNAL_ERROR".to_string(),
                    message: INTERNAL_ERROR_MESSAGE.to_string(),
                    field: None,
                    reason: None,
                }),
                request_id,
            }
        }
    }
}
