use std::fmt;

/// Defines the errors you might encounter at the document store boundary.
#[derive(Debug)]
pub enum StoreError {
    /// Credential resolution or client construction failed.
    Credentials(String),
    /// The addressed document does not exist.
    NotFound {
        collection: String,
        document_id: String,
    },
    /// The store rejected or failed the operation.
    Backend(String),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Credentials(msg) => {
                write!(f, "There was a problem with the store credentials: {}", msg)
            }
            StoreError::NotFound {
                collection,
                document_id,
            } => write!(
                f,
                "Document '{}' not found in '{}'",
                document_id, collection
            ),
            StoreError::Backend(msg) => write!(f, "Store operation failed: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}
