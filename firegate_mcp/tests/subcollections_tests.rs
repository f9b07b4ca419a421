mod helpers;

use firegate_mcp::tools::list_subcollections::{ListSubcollectionsParams, execute};
use helpers::{fields, get_json, is_error, is_success, seeded_store};
use serde_json::json;
use std::collections::BTreeSet;

#[cfg(test)]
mod tests {
    use super::*;

    fn params(collection: &str, id: &str) -> ListSubcollectionsParams {
        ListSubcollectionsParams {
            collection_name: collection.to_string(),
            document_id: id.to_string(),
        }
    }

    #[tokio::test]
    async fn test_list_subcollections_success() {
        let (store, ids) = seeded_store(&[("items", vec![json!({"a": 1})])]).await;
        let parent = &ids[0][0];
        store
            .seed(
                &format!("items/{}/reviews", parent),
                vec![fields(json!({"stars": 5}))],
            )
            .await;
        store
            .seed(
                &format!("items/{}/ratings", parent),
                vec![fields(json!({"avg": 4.5}))],
            )
            .await;

        let result = execute(Some(&store), &params("items", parent)).await;

        assert!(is_success(&result));
        let payload = get_json(&result);
        let found: BTreeSet<String> = payload
            .as_array()
            .unwrap()
            .iter()
            .map(|entry| entry["id"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(
            found,
            BTreeSet::from(["ratings".to_string(), "reviews".to_string()])
        );
    }

    #[tokio::test]
    async fn test_document_without_subcollections_is_empty_success() {
        let (store, ids) = seeded_store(&[("items", vec![json!({"a": 1})])]).await;

        let result = execute(Some(&store), &params("items", &ids[0][0])).await;

        assert!(is_success(&result));
        assert_eq!(get_json(&result), json!([]));
    }

    #[tokio::test]
    async fn test_missing_parent_document_is_an_error() {
        let (store, _) = seeded_store(&[("items", vec![json!({"a": 1})])]).await;

        let result = execute(Some(&store), &params("items", "absent")).await;

        assert!(is_error(&result));
        let payload = get_json(&result);
        let entries = payload.as_array().unwrap();
        assert_eq!(entries.len(), 1);
        assert!(entries[0]["error"].as_str().unwrap().contains("absent"));
    }
}
