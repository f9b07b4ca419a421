//! List collections tool implementation.

use firegate_store::DocumentStore;
use log::{debug, error};
use rmcp::model::CallToolResult;
use rmcp::schemars;
use serde_json::json;

use super::{UNINITIALIZED_MESSAGE, error_json, list_error, success_json};

/// Parameters for the list_firestore_collections tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ListCollectionsParams {
    /// Unused placeholder kept for client compatibility; the transport schema
    /// requires at least one declared parameter. Any value is accepted.
    pub random_string: String,
}

/// Execute the list_firestore_collections tool.
///
/// Returns `[{"id": ...}, ...]` in store-defined order, or `[{"error": ...}]`.
pub async fn execute(
    store: Option<&dyn DocumentStore>,
    _params: &ListCollectionsParams,
) -> CallToolResult {
    let Some(store) = store else {
        error!("Cannot list collections: store not initialized");
        return error_json(&list_error(UNINITIALIZED_MESSAGE.to_string()));
    };

    debug!("Listing all collections");
    match store.list_collections().await {
        Ok(ids) => {
            debug!("Found {} collections", ids.len());
            let entries: Vec<_> = ids.into_iter().map(|id| json!({ "id": id })).collect();
            success_json(&json!(entries))
        }
        Err(e) => {
            error!("Failed to list collections: {}", e);
            error_json(&list_error(format!("Failed to list collections: {}", e)))
        }
    }
}
