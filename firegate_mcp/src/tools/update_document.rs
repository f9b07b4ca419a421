//! Update document tool implementation.

use firegate_store::{DocumentStore, Fields};
use log::{debug, error};
use rmcp::model::CallToolResult;
use rmcp::schemars;
use serde_json::json;

use super::{UNINITIALIZED_MESSAGE, error_json, success_json, write_error};

/// Parameters for the update_firestore_document tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct UpdateDocumentParams {
    /// Name of the collection containing the document.
    pub collection_name: String,
    /// Id of the document to update.
    pub document_id: String,
    /// Fields to merge into the document. Existing fields not named here are
    /// left untouched.
    pub update_data: Fields,
}

/// Execute the update_firestore_document tool.
///
/// Merges the given fields into an existing document. A missing target is a
/// failure; the document is never created implicitly.
pub async fn execute(
    store: Option<&dyn DocumentStore>,
    params: &UpdateDocumentParams,
) -> CallToolResult {
    let Some(store) = store else {
        error!("Cannot update document: store not initialized");
        return error_json(&write_error(UNINITIALIZED_MESSAGE.to_string()));
    };

    debug!(
        "Updating document '{}' in collection '{}'",
        params.document_id, params.collection_name
    );
    match store
        .update_document(
            &params.collection_name,
            &params.document_id,
            params.update_data.clone(),
        )
        .await
    {
        Ok(()) => success_json(&json!({
            "success": true,
            "message": format!(
                "Document '{}' updated in '{}'",
                params.document_id, params.collection_name
            ),
        })),
        Err(e) => {
            error!(
                "Failed to update document '{}' in '{}': {}",
                params.document_id, params.collection_name, e
            );
            error_json(&write_error(format!(
                "Failed to update document '{}' in '{}': {}",
                params.document_id, params.collection_name, e
            )))
        }
    }
}
