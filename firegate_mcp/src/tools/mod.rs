//! MCP tool implementations for Firegate.
//!
//! Each tool module declares its parameter struct and an `execute` function
//! taking the store dependency explicitly, so tests can invoke handlers
//! without an MCP session. Handlers never propagate errors across the tool
//! boundary: every failure is folded into the tool's declared payload shape.

pub mod add_document;
pub mod get_document;
pub mod list_collections;
pub mod list_subcollections;
pub mod query_collection;
pub mod query_collection_with_filter;
pub mod update_document;

pub use add_document::AddDocumentParams;
pub use get_document::GetDocumentParams;
pub use list_collections::ListCollectionsParams;
pub use list_subcollections::ListSubcollectionsParams;
pub use query_collection::QueryCollectionParams;
pub use query_collection_with_filter::QueryCollectionWithFilterParams;
pub use update_document::UpdateDocumentParams;

use rmcp::model::{CallToolResult, Content};
use serde_json::{Value, json};

/// Message every tool reports when the store handle was never initialized.
pub const UNINITIALIZED_MESSAGE: &str =
    "Firestore not initialized. Check server logs and serviceAccountKey.json.";

/// Default document cap for the query tools.
pub(crate) fn default_limit() -> u32 {
    50
}

/// Serialize a JSON payload into a successful tool result.
pub(crate) fn success_json(payload: &Value) -> CallToolResult {
    CallToolResult::success(vec![Content::text(payload.to_string())])
}

/// Serialize a JSON payload into an error tool result. The payload itself is
/// the tool's declared error shape; the MCP error flag is an extra signal on
/// top, never a replacement for it.
pub(crate) fn error_json(payload: &Value) -> CallToolResult {
    CallToolResult::error(vec![Content::text(payload.to_string())])
}

/// Error shape of the read-oriented listing tools.
pub(crate) fn list_error(message: String) -> Value {
    json!([{ "error": message }])
}

/// Error shape of the write-oriented tools.
pub(crate) fn write_error(message: String) -> Value {
    json!({ "success": false, "error": message })
}
