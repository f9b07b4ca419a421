//! Firestore-backed implementation of [`DocumentStore`].

use std::path::Path;

use async_trait::async_trait;
use firestore::errors::FirestoreError;
use firestore::{FirestoreDb, FirestoreDbOptions, FirestoreWritePrecondition};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::credentials;
use crate::document::{Document, Fields, Filter};
use crate::errors::StoreError;
use crate::store::DocumentStore;

/// Wire shape for round-tripping schemaless documents through firestore-rs.
///
/// `_firestore_id` is the crate's reserved field name: populated from the
/// document name on reads, never written as a stored field.
#[derive(Debug, Serialize, Deserialize)]
struct StoredDocument {
    #[serde(
        rename = "_firestore_id",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    id: Option<String>,
    #[serde(flatten)]
    fields: Fields,
}

impl StoredDocument {
    fn from_fields(fields: Fields) -> Self {
        Self { id: None, fields }
    }

    fn into_document(self) -> Document {
        Document {
            id: self.id.unwrap_or_default(),
            fields: self.fields,
        }
    }
}

/// Production store handle wrapping an authenticated Firestore client.
///
/// Cheap to clone; `FirestoreDb` is internally reference-counted and safe
/// for concurrent use, so no locking is layered on top.
#[derive(Clone)]
pub struct FirestoreStore {
    db: FirestoreDb,
}

impl FirestoreStore {
    /// Connect using the given service account key file. The GCP project id
    /// is read from the key file itself.
    pub async fn connect(key_path: &Path) -> Result<Self, StoreError> {
        let project_id = credentials::project_id_from_key_file(key_path)?;
        debug!("Connecting to Firestore project '{}'", project_id);

        let db = FirestoreDb::with_options_service_account_key_file(
            FirestoreDbOptions::new(project_id),
            key_path.to_path_buf(),
        )
        .await
        .map_err(|e| StoreError::Credentials(format!("Firestore client init failed: {}", e)))?;

        Ok(Self { db })
    }

    fn backend_error(err: FirestoreError) -> StoreError {
        StoreError::Backend(err.to_string())
    }
}

#[async_trait]
impl DocumentStore for FirestoreStore {
    async fn list_collections(&self) -> Result<Vec<String>, StoreError> {
        let page = self
            .db
            .fluent()
            .list()
            .collections()
            .get_page()
            .await
            .map_err(Self::backend_error)?;
        Ok(page.collection_ids)
    }

    async fn query_documents(
        &self,
        collection: &str,
        filter: &Filter,
        limit: u32,
    ) -> Result<Vec<Document>, StoreError> {
        let found: Vec<StoredDocument> = self
            .db
            .fluent()
            .select()
            .from(collection)
            .filter(|q| {
                q.for_all(
                    filter
                        .iter()
                        .map(|(field, value)| q.field(field.as_str()).eq(value.clone())),
                )
            })
            .limit(limit)
            .obj()
            .query()
            .await
            .map_err(Self::backend_error)?;
        Ok(found
            .into_iter()
            .map(StoredDocument::into_document)
            .collect())
    }

    async fn get_document(
        &self,
        collection: &str,
        document_id: &str,
    ) -> Result<Option<Document>, StoreError> {
        let found: Option<StoredDocument> = self
            .db
            .fluent()
            .select()
            .by_id_in(collection)
            .obj()
            .one(document_id)
            .await
            .map_err(Self::backend_error)?;
        Ok(found.map(StoredDocument::into_document))
    }

    async fn list_subcollections(
        &self,
        collection: &str,
        document_id: &str,
    ) -> Result<Vec<String>, StoreError> {
        // Listing under a missing document quietly returns nothing, so check
        // existence first to keep the not-found contract.
        if self.get_document(collection, document_id).await?.is_none() {
            return Err(StoreError::NotFound {
                collection: collection.to_string(),
                document_id: document_id.to_string(),
            });
        }

        let parent = self
            .db
            .parent_path(collection, document_id)
            .map_err(Self::backend_error)?;
        let page = self
            .db
            .fluent()
            .list()
            .collections()
            .parent(parent)
            .get_page()
            .await
            .map_err(Self::backend_error)?;
        Ok(page.collection_ids)
    }

    async fn add_document(&self, collection: &str, fields: Fields) -> Result<String, StoreError> {
        let created: StoredDocument = self
            .db
            .fluent()
            .insert()
            .into(collection)
            .generate_document_id()
            .object(&StoredDocument::from_fields(fields))
            .execute()
            .await
            .map_err(Self::backend_error)?;
        created
            .id
            .ok_or_else(|| StoreError::Backend("store did not return a document id".to_string()))
    }

    async fn update_document(
        &self,
        collection: &str,
        document_id: &str,
        fields: Fields,
    ) -> Result<(), StoreError> {
        if self.get_document(collection, document_id).await?.is_none() {
            return Err(StoreError::NotFound {
                collection: collection.to_string(),
                document_id: document_id.to_string(),
            });
        }

        // The update mask is exactly the provided field names, giving merge
        // semantics. The precondition guards the gap between the existence
        // check and the write.
        let field_names: Vec<String> = fields.keys().cloned().collect();
        self.db
            .fluent()
            .update()
            .fields(field_names)
            .in_col(collection)
            .precondition(FirestoreWritePrecondition::Exists(true))
            .document_id(document_id)
            .object(&StoredDocument::from_fields(fields))
            .execute::<StoredDocument>()
            .await
            .map_err(|e| match e {
                FirestoreError::DataNotFoundError(_) => StoreError::NotFound {
                    collection: collection.to_string(),
                    document_id: document_id.to_string(),
                },
                other => Self::backend_error(other),
            })?;
        Ok(())
    }
}
