//! List document subcollections tool implementation.

use firegate_store::DocumentStore;
use log::{debug, error};
use rmcp::model::CallToolResult;
use rmcp::schemars;
use serde_json::json;

use super::{UNINITIALIZED_MESSAGE, error_json, list_error, success_json};

/// Parameters for the list_document_subcollections tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ListSubcollectionsParams {
    /// Name of the parent collection.
    pub collection_name: String,
    /// Id of the document whose subcollections are to be listed.
    pub document_id: String,
}

/// Execute the list_document_subcollections tool.
pub async fn execute(
    store: Option<&dyn DocumentStore>,
    params: &ListSubcollectionsParams,
) -> CallToolResult {
    let Some(store) = store else {
        error!("Cannot list subcollections: store not initialized");
        return error_json(&list_error(UNINITIALIZED_MESSAGE.to_string()));
    };

    debug!(
        "Listing subcollections of document '{}' in collection '{}'",
        params.document_id, params.collection_name
    );
    match store
        .list_subcollections(&params.collection_name, &params.document_id)
        .await
    {
        Ok(ids) => {
            debug!(
                "Found {} subcollections under '{}'",
                ids.len(),
                params.document_id
            );
            let entries: Vec<_> = ids.into_iter().map(|id| json!({ "id": id })).collect();
            success_json(&json!(entries))
        }
        Err(e) if e.is_not_found() => {
            debug!(
                "Document '{}' not found in '{}'",
                params.document_id, params.collection_name
            );
            error_json(&list_error(format!(
                "Document '{}' not found in '{}'.",
                params.document_id, params.collection_name
            )))
        }
        Err(e) => {
            error!(
                "Failed to list subcollections for '{}': {}",
                params.document_id, e
            );
            error_json(&list_error(format!(
                "Failed to list subcollections for '{}': {}",
                params.document_id, e
            )))
        }
    }
}
