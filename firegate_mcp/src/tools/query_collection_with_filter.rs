//! Filtered query tool implementation.

use firegate_store::{DocumentStore, Filter};
use log::{debug, error};
use rmcp::model::CallToolResult;
use rmcp::schemars;

use super::query_collection::run_query;
use super::{UNINITIALIZED_MESSAGE, default_limit, error_json, list_error};

/// Parameters for the query_firestore_collection_with_filter tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct QueryCollectionWithFilterParams {
    /// Name of the collection to query.
    pub collection_name: String,
    /// Equality predicates combined with logical AND: each entry restricts
    /// results to documents whose field exactly equals the given value.
    /// An empty mapping returns unfiltered results.
    pub filters: Filter,
    /// Maximum number of documents to return.
    #[serde(default = "default_limit")]
    pub limit: u32,
}

/// Execute the query_firestore_collection_with_filter tool.
pub async fn execute(
    store: Option<&dyn DocumentStore>,
    params: &QueryCollectionWithFilterParams,
) -> CallToolResult {
    let Some(store) = store else {
        error!("Cannot query collection: store not initialized");
        return error_json(&list_error(UNINITIALIZED_MESSAGE.to_string()));
    };

    debug!(
        "Querying collection '{}' with {} filter(s) and limit {}",
        params.collection_name,
        params.filters.len(),
        params.limit
    );
    run_query(store, &params.collection_name, &params.filters, params.limit).await
}
