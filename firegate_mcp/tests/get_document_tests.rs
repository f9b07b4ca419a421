mod helpers;

use firegate_mcp::tools::get_document::{GetDocumentParams, execute};
use helpers::{get_json, is_error, is_success, seeded_store};
use serde_json::json;

#[cfg(test)]
mod tests {
    use super::*;

    fn params(collection: &str, id: &str) -> GetDocumentParams {
        GetDocumentParams {
            collection_name: collection.to_string(),
            document_id: id.to_string(),
        }
    }

    #[tokio::test]
    async fn test_get_document_success() {
        let (store, ids) = seeded_store(&[(
            "items",
            vec![json!({"name": "widget", "price": 10})],
        )])
        .await;

        let result = execute(Some(&store), &params("items", &ids[0][0])).await;

        assert!(is_success(&result));
        let payload = get_json(&result);
        assert_eq!(payload["name"], json!("widget"));
        assert_eq!(payload["price"], json!(10));
        assert_eq!(payload["id"], json!(ids[0][0]));
    }

    #[tokio::test]
    async fn test_get_document_not_found_is_marked() {
        let (store, _) = seeded_store(&[("items", vec![json!({"a": 1})])]).await;

        let result = execute(Some(&store), &params("items", "absent")).await;

        assert!(is_error(&result));
        let payload = get_json(&result);
        // Explicit marker distinguishes not-found from a store failure.
        assert_eq!(payload["not_found"], json!(true));
        assert!(payload["error"].as_str().unwrap().contains("absent"));
    }

    #[tokio::test]
    async fn test_get_document_id_overwrites_stored_id_field() {
        let (store, ids) = seeded_store(&[("items", vec![json!({"id": "stale"})])]).await;

        let result = execute(Some(&store), &params("items", &ids[0][0])).await;

        let payload = get_json(&result);
        assert_eq!(payload["id"], json!(ids[0][0]));
    }
}
