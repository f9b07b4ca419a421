//! Shared test helpers for firegate_mcp tests.

#![allow(dead_code)]

use firegate_store::{Fields, MemoryStore};
use rmcp::model::{CallToolResult, RawContent};
use serde_json::Value;

/// Extract the text content from a CallToolResult.
pub fn get_text(result: &CallToolResult) -> String {
    assert_eq!(result.content.len(), 1, "Expected exactly one content item");
    match &result.content[0].raw {
        RawContent::Text(text_content) => text_content.text.clone(),
        _ => panic!("Expected text content"),
    }
}

/// Parse the single text content item as a JSON payload.
pub fn get_json(result: &CallToolResult) -> Value {
    serde_json::from_str(&get_text(result)).expect("Expected JSON content")
}

/// Check if the result is a success.
pub fn is_success(result: &CallToolResult) -> bool {
    result.is_error == Some(false)
}

/// Check if the result is an error.
pub fn is_error(result: &CallToolResult) -> bool {
    result.is_error == Some(true)
}

/// Build a Fields map from a JSON object literal.
pub fn fields(value: Value) -> Fields {
    match value {
        Value::Object(map) => map,
        _ => panic!("Expected a JSON object"),
    }
}

/// Create a memory store seeded with the given collection paths.
///
/// Returns the store and the ids assigned per path, in seeding order.
pub async fn seeded_store(collections: &[(&str, Vec<Value>)]) -> (MemoryStore, Vec<Vec<String>>) {
    let store = MemoryStore::new();
    let mut ids = Vec::with_capacity(collections.len());
    for (path, docs) in collections {
        let assigned = store
            .seed(path, docs.iter().cloned().map(fields).collect())
            .await;
        ids.push(assigned);
    }
    (store, ids)
}
