//! Add document tool implementation.

use firegate_store::{DocumentStore, Fields};
use log::{debug, error};
use rmcp::model::CallToolResult;
use rmcp::schemars;
use serde_json::json;

use super::{UNINITIALIZED_MESSAGE, error_json, success_json, write_error};

/// Parameters for the add_document_to_firestore tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct AddDocumentParams {
    /// Name of the collection the document will be added to.
    pub collection_name: String,
    /// The document body. Passed through unmodified; no field validation.
    pub document_data: Fields,
}

/// Execute the add_document_to_firestore tool.
///
/// Inserts a new document with a store-generated id.
pub async fn execute(
    store: Option<&dyn DocumentStore>,
    params: &AddDocumentParams,
) -> CallToolResult {
    let Some(store) = store else {
        error!("Cannot add document: store not initialized");
        return error_json(&write_error(UNINITIALIZED_MESSAGE.to_string()));
    };

    debug!("Adding document to collection '{}'", params.collection_name);
    match store
        .add_document(&params.collection_name, params.document_data.clone())
        .await
    {
        Ok(id) => {
            debug!(
                "Document added with id '{}' to collection '{}'",
                id, params.collection_name
            );
            success_json(&json!({
                "success": true,
                "id": id,
                "message": format!("Document added to '{}'", params.collection_name),
            }))
        }
        Err(e) => {
            error!(
                "Failed to add document to '{}': {}",
                params.collection_name, e
            );
            error_json(&write_error(format!(
                "Failed to add document to '{}': {}",
                params.collection_name, e
            )))
        }
    }
}
