//! Get document tool implementation.

use firegate_store::DocumentStore;
use log::{debug, error};
use rmcp::model::CallToolResult;
use rmcp::schemars;
use serde_json::json;

use super::{UNINITIALIZED_MESSAGE, error_json, success_json};

/// Parameters for the get_firestore_document tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetDocumentParams {
    /// Name of the collection containing the document.
    pub collection_name: String,
    /// Id of the document to retrieve.
    pub document_id: String,
}

/// Execute the get_firestore_document tool.
///
/// Returns the document mapping with its id merged in. An absent document is
/// reported with an explicit `not_found` marker so callers can branch on
/// not-found versus store failure.
pub async fn execute(
    store: Option<&dyn DocumentStore>,
    params: &GetDocumentParams,
) -> CallToolResult {
    let Some(store) = store else {
        error!("Cannot get document: store not initialized");
        return error_json(&json!({ "error": UNINITIALIZED_MESSAGE }));
    };

    debug!(
        "Getting document '{}' from collection '{}'",
        params.document_id, params.collection_name
    );
    match store
        .get_document(&params.collection_name, &params.document_id)
        .await
    {
        Ok(Some(document)) => success_json(&document.into_json()),
        Ok(None) => {
            debug!(
                "Document '{}' not found in '{}'",
                params.document_id, params.collection_name
            );
            error_json(&json!({
                "error": format!(
                    "Document '{}' not found in '{}'.",
                    params.document_id, params.collection_name
                ),
                "not_found": true,
            }))
        }
        Err(e) => {
            error!(
                "Failed to get document '{}' from '{}': {}",
                params.document_id, params.collection_name, e
            );
            error_json(&json!({
                "error": format!(
                    "Failed to get document '{}' from '{}': {}",
                    params.document_id, params.collection_name, e
                ),
            }))
        }
    }
}
