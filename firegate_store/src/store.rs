use async_trait::async_trait;

use crate::document::{Document, Fields, Filter};
use crate::errors::StoreError;

/// Narrow interface every tool handler depends on.
///
/// Implemented by [`crate::FirestoreStore`] for production and by
/// [`crate::MemoryStore`] for tests. Object-safe so the server can hold a
/// shared `Arc<dyn DocumentStore>` handle; implementations must tolerate
/// concurrent calls.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Enumerate top-level collection ids. Order is store-defined.
    async fn list_collections(&self) -> Result<Vec<String>, StoreError>;

    /// Fetch up to `limit` documents matching every equality predicate in
    /// `filter`. An empty filter returns unfiltered results; fewer than
    /// `limit` matches is not an error.
    async fn query_documents(
        &self,
        collection: &str,
        filter: &Filter,
        limit: u32,
    ) -> Result<Vec<Document>, StoreError>;

    /// Fetch one document by id. `Ok(None)` when the document is absent, so
    /// callers can branch on not-found versus store failure.
    async fn get_document(
        &self,
        collection: &str,
        document_id: &str,
    ) -> Result<Option<Document>, StoreError>;

    /// Enumerate subcollection ids nested under the given document.
    /// Fails with [`StoreError::NotFound`] when the document itself is absent.
    async fn list_subcollections(
        &self,
        collection: &str,
        document_id: &str,
    ) -> Result<Vec<String>, StoreError>;

    /// Insert a new document with a store-generated id and return that id.
    /// Fields pass through unmodified.
    async fn add_document(&self, collection: &str, fields: Fields) -> Result<String, StoreError>;

    /// Merge the given fields into an existing document (partial update).
    /// Fails with [`StoreError::NotFound`] when the target does not exist;
    /// never creates it.
    async fn update_document(
        &self,
        collection: &str,
        document_id: &str,
        fields: Fields,
    ) -> Result<(), StoreError>;
}
