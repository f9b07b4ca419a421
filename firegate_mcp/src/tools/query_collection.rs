//! Query collection tool implementation.

use firegate_store::{Document, DocumentStore, Filter};
use log::{debug, error};
use rmcp::model::CallToolResult;
use rmcp::schemars;
use serde_json::json;

use super::{UNINITIALIZED_MESSAGE, default_limit, error_json, list_error, success_json};

/// Parameters for the query_firestore_collection tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct QueryCollectionParams {
    /// Name of the collection to query.
    pub collection_name: String,
    /// Maximum number of documents to return.
    #[serde(default = "default_limit")]
    pub limit: u32,
}

/// Execute the query_firestore_collection tool.
pub async fn execute(
    store: Option<&dyn DocumentStore>,
    params: &QueryCollectionParams,
) -> CallToolResult {
    let Some(store) = store else {
        error!("Cannot query collection: store not initialized");
        return error_json(&list_error(UNINITIALIZED_MESSAGE.to_string()));
    };

    debug!(
        "Querying collection '{}' with limit {}",
        params.collection_name, params.limit
    );
    run_query(store, &params.collection_name, &Filter::new(), params.limit).await
}

/// Shared by the filtered and unfiltered query tools: fetch up to `limit`
/// documents and shape them as a list of mappings with the id merged in.
pub(crate) async fn run_query(
    store: &dyn DocumentStore,
    collection: &str,
    filter: &Filter,
    limit: u32,
) -> CallToolResult {
    match store.query_documents(collection, filter, limit).await {
        Ok(documents) => {
            debug!("Found {} documents in '{}'", documents.len(), collection);
            let docs: Vec<_> = documents.into_iter().map(Document::into_json).collect();
            success_json(&json!(docs))
        }
        Err(e) => {
            error!("Failed to query collection '{}': {}", collection, e);
            error_json(&list_error(format!(
                "Failed to query collection '{}': {}",
                collection, e
            )))
        }
    }
}
