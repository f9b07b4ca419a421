mod helpers;

use firegate_mcp::tools::get_document;
use firegate_mcp::tools::update_document::{UpdateDocumentParams, execute};
use helpers::{fields, get_json, is_error, is_success, seeded_store};
use serde_json::json;

#[cfg(test)]
mod tests {
    use super::*;

    fn params(collection: &str, id: &str, data: serde_json::Value) -> UpdateDocumentParams {
        UpdateDocumentParams {
            collection_name: collection.to_string(),
            document_id: id.to_string(),
            update_data: fields(data),
        }
    }

    async fn get(store: &firegate_store::MemoryStore, id: &str) -> rmcp::model::CallToolResult {
        get_document::execute(
            Some(store),
            &get_document::GetDocumentParams {
                collection_name: "items".to_string(),
                document_id: id.to_string(),
            },
        )
        .await
    }

    #[tokio::test]
    async fn test_update_merges_without_clobbering() {
        let (store, ids) = seeded_store(&[(
            "items",
            vec![json!({"name": "widget", "price": 10})],
        )])
        .await;

        let result = execute(Some(&store), &params("items", &ids[0][0], json!({"x": 1}))).await;

        assert!(is_success(&result));
        assert_eq!(get_json(&result)["success"], json!(true));

        let fetched = get_json(&get(&store, &ids[0][0]).await);
        assert_eq!(fetched["name"], json!("widget"));
        assert_eq!(fetched["price"], json!(10));
        assert_eq!(fetched["x"], json!(1));
    }

    #[tokio::test]
    async fn test_update_overwrites_named_fields() {
        let (store, ids) = seeded_store(&[(
            "items",
            vec![json!({"name": "widget", "price": 10})],
        )])
        .await;

        execute(Some(&store), &params("items", &ids[0][0], json!({"price": 12}))).await;

        let fetched = get_json(&get(&store, &ids[0][0]).await);
        assert_eq!(fetched["price"], json!(12));
        assert_eq!(fetched["name"], json!("widget"));
    }

    #[tokio::test]
    async fn test_update_missing_document_fails_without_creating() {
        let (store, _) = seeded_store(&[("items", vec![json!({"a": 1})])]).await;

        let result = execute(Some(&store), &params("items", "absent", json!({"x": 1}))).await;

        assert!(is_error(&result));
        let payload = get_json(&result);
        assert_eq!(payload["success"], json!(false));
        assert!(payload["error"].as_str().unwrap().contains("absent"));

        // The target must not have been created as a side effect.
        let fetched = get(&store, "absent").await;
        assert!(is_error(&fetched));
        assert_eq!(get_json(&fetched)["not_found"], json!(true));
    }
}
