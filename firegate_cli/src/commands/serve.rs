//! MCP server command implementation.

use std::path::PathBuf;
use std::sync::Arc;

use log::{error, info};

use firegate_mcp::FiregateMcpServer;
use firegate_store::{DocumentStore, FirestoreStore, credentials};

use crate::errors::CliError;

/// Start the MCP server on stdio.
///
/// Store initialization is attempted exactly once, before the serve loop.
/// On failure the server still runs and every tool reports the uninitialized
/// state; the attempt is not retried for the process lifetime, since
/// credentials do not change mid-process.
pub fn serve(key_override: Option<PathBuf>) -> Result<(), CliError> {
    // Create a tokio runtime for the async MCP server
    let rt = tokio::runtime::Runtime::new().map_err(|e| CliError::Runtime(e.to_string()))?;

    rt.block_on(async {
        let store = initialize_store(key_override).await;
        let server = FiregateMcpServer::new(store);

        // Serve over stdio (blocks until connection closes)
        server
            .serve_stdio()
            .await
            .map_err(|e| CliError::Server(e.to_string()))
    })
}

/// Attempt one-time store initialization, logging the outcome.
///
/// Operators can tell a missing key file from a rejected one in the logs;
/// tool callers only ever see the uniform uninitialized state.
async fn initialize_store(key_override: Option<PathBuf>) -> Option<Arc<dyn DocumentStore>> {
    credentials::storage_bucket();

    let key_path = match credentials::resolve_key_path(key_override) {
        Ok(path) => path,
        Err(e) => {
            error!("{}", e);
            error!("Firestore tools will not be available. Provide a valid service account key.");
            return None;
        }
    };

    match FirestoreStore::connect(&key_path).await {
        Ok(store) => {
            info!("Firestore client initialized from {}", key_path.display());
            Some(Arc::new(store) as Arc<dyn DocumentStore>)
        }
        Err(e) => {
            error!("{}", e);
            error!("Firestore tools will not be available. Provide a valid service account key.");
            None
        }
    }
}
