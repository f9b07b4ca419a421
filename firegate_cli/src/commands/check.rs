//! Credential preflight command implementation.

use std::path::PathBuf;

use log::info;

use firegate_store::{DocumentStore, FirestoreStore, credentials};

use crate::errors::CliError;

/// Resolve credentials, connect to the store, and run one listing
/// round-trip, reporting what an MCP client would see.
pub fn check(key_override: Option<PathBuf>) -> Result<(), CliError> {
    let rt = tokio::runtime::Runtime::new().map_err(|e| CliError::Runtime(e.to_string()))?;

    rt.block_on(async {
        credentials::storage_bucket();

        let key_path = credentials::resolve_key_path(key_override)
            .map_err(|e| CliError::Credentials(e.to_string()))?;
        info!("Using service account key at {}", key_path.display());

        let store = FirestoreStore::connect(&key_path)
            .await
            .map_err(|e| CliError::Credentials(e.to_string()))?;
        let collections = store
            .list_collections()
            .await
            .map_err(|e| CliError::Credentials(e.to_string()))?;

        info!(
            "Connection OK. {} top-level collections visible.",
            collections.len()
        );
        Ok(())
    })
}
