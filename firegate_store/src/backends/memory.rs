//! In-memory implementation of [`DocumentStore`].
//!
//! Backs the MCP crate's integration tests and local dry runs. Observable
//! semantics mirror the Firestore backend: merge updates, not-found on
//! missing targets, equality-only filters, `limit` as a cap.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::document::{Document, Fields, Filter};
use crate::errors::StoreError;
use crate::store::DocumentStore;

/// Collections keyed by slash-joined path: "items" for a top-level
/// collection, "items/<doc id>/reviews" for a subcollection.
type CollectionMap = BTreeMap<String, BTreeMap<String, Fields>>;

#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<CollectionMap>,
    next_id: AtomicU64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a collection path with documents, returning the assigned ids.
    pub async fn seed(&self, path: &str, docs: Vec<Fields>) -> Vec<String> {
        let mut ids = Vec::with_capacity(docs.len());
        let mut collections = self.collections.write().await;
        let collection = collections.entry(path.to_string()).or_default();
        for fields in docs {
            let id = self.generate_id();
            collection.insert(id.clone(), fields);
            ids.push(id);
        }
        ids
    }

    /// Counter-based ids sort in insertion order, which keeps `limit`
    /// behavior deterministic in tests.
    fn generate_id(&self) -> String {
        let n = self.next_id.fetch_add(1, Ordering::Relaxed);
        format!("doc-{:06}", n)
    }
}

fn matches_filter(fields: &Fields, filter: &Filter) -> bool {
    filter
        .iter()
        .all(|(field, value)| fields.get(field) == Some(value))
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn list_collections(&self) -> Result<Vec<String>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections
            .keys()
            .filter(|path| !path.contains('/'))
            .cloned()
            .collect())
    }

    async fn query_documents(
        &self,
        collection: &str,
        filter: &Filter,
        limit: u32,
    ) -> Result<Vec<Document>, StoreError> {
        let collections = self.collections.read().await;
        let Some(docs) = collections.get(collection) else {
            return Ok(Vec::new());
        };
        Ok(docs
            .iter()
            .filter(|(_, fields)| matches_filter(fields, filter))
            .take(limit as usize)
            .map(|(id, fields)| Document::new(id.clone(), fields.clone()))
            .collect())
    }

    async fn get_document(
        &self,
        collection: &str,
        document_id: &str,
    ) -> Result<Option<Document>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|docs| docs.get(document_id))
            .map(|fields| Document::new(document_id, fields.clone())))
    }

    async fn list_subcollections(
        &self,
        collection: &str,
        document_id: &str,
    ) -> Result<Vec<String>, StoreError> {
        let collections = self.collections.read().await;
        let exists = collections
            .get(collection)
            .is_some_and(|docs| docs.contains_key(document_id));
        if !exists {
            return Err(StoreError::NotFound {
                collection: collection.to_string(),
                document_id: document_id.to_string(),
            });
        }

        let prefix = format!("{}/{}/", collection, document_id);
        Ok(collections
            .keys()
            .filter_map(|path| path.strip_prefix(&prefix))
            .filter(|rest| !rest.contains('/'))
            .map(str::to_string)
            .collect())
    }

    async fn add_document(&self, collection: &str, fields: Fields) -> Result<String, StoreError> {
        let id = self.generate_id();
        let mut collections = self.collections.write().await;
        collections
            .entry(collection.to_string())
            .or_default()
            .insert(id.clone(), fields);
        Ok(id)
    }

    async fn update_document(
        &self,
        collection: &str,
        document_id: &str,
        fields: Fields,
    ) -> Result<(), StoreError> {
        let mut collections = self.collections.write().await;
        let existing = collections
            .get_mut(collection)
            .and_then(|docs| docs.get_mut(document_id))
            .ok_or_else(|| StoreError::NotFound {
                collection: collection.to_string(),
                document_id: document_id.to_string(),
            })?;
        for (field, value) in fields {
            existing.insert(field, value);
        }
        Ok(())
    }
}
