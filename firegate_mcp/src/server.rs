//! Core MCP server implementation for Firegate.

use std::sync::Arc;

use log::{debug, info};
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt, handler::server::wrapper::Parameters,
    model::*, tool, tool_handler, tool_router, transport::stdio,
};

use firegate_store::DocumentStore;

use crate::tools;
use crate::tools::{
    AddDocumentParams, GetDocumentParams, ListCollectionsParams, ListSubcollectionsParams,
    QueryCollectionParams, QueryCollectionWithFilterParams, UpdateDocumentParams,
};

/// Error type for MCP server operations.
#[derive(Debug)]
pub enum ServerError {
    /// MCP protocol error
    Mcp(String),
}

impl std::fmt::Display for ServerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServerError::Mcp(msg) => write!(f, "MCP error: {}", msg),
        }
    }
}

impl std::error::Error for ServerError {}

/// MCP server bridging tool invocations to the document store.
///
/// The store handle is an explicit constructor dependency. `None` models a
/// failed initialization: the server keeps serving and every tool answers
/// with its designated error shape instead of crashing the session. A failed
/// initialization is not retried for the process lifetime.
#[derive(Clone)]
pub struct FiregateMcpServer {
    store: Option<Arc<dyn DocumentStore>>,
    tool_router: rmcp::handler::server::router::tool::ToolRouter<FiregateMcpServer>,
}

#[tool_router]
impl FiregateMcpServer {
    /// Create a new MCP server over the given store handle.
    pub fn new(store: Option<Arc<dyn DocumentStore>>) -> Self {
        if store.is_none() {
            info!("No store handle; every tool will report the uninitialized state");
        }
        Self {
            store,
            tool_router: Self::tool_router(),
        }
    }

    fn store(&self) -> Option<&dyn DocumentStore> {
        self.store.as_deref()
    }

    #[tool(
        description = "List all top-level collections in the Firestore database. \
        Returns a list of objects each carrying a collection 'id'. \
        Use 'query_firestore_collection' to fetch documents from a collection."
    )]
    async fn list_firestore_collections(
        &self,
        Parameters(params): Parameters<ListCollectionsParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: list_firestore_collections");
        Ok(tools::list_collections::execute(self.store(), &params).await)
    }

    #[tool(
        description = "Retrieve documents from a Firestore collection, up to 'limit' (default 50). \
        Each returned document includes its 'id'. Order is store-defined. \
        Use 'query_firestore_collection_with_filter' to restrict results by field values."
    )]
    async fn query_firestore_collection(
        &self,
        Parameters(params): Parameters<QueryCollectionParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!(
            "Tool: query_firestore_collection, collection={}",
            params.collection_name
        );
        Ok(tools::query_collection::execute(self.store(), &params).await)
    }

    #[tool(
        description = "Retrieve documents from a Firestore collection matching equality filters. \
        'filters' maps field names to exact values; all entries must match (logical AND). \
        Only equality comparison is supported. An empty filter mapping returns unfiltered results."
    )]
    async fn query_firestore_collection_with_filter(
        &self,
        Parameters(params): Parameters<QueryCollectionWithFilterParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!(
            "Tool: query_firestore_collection_with_filter, collection={}",
            params.collection_name
        );
        Ok(tools::query_collection_with_filter::execute(self.store(), &params).await)
    }

    #[tool(
        description = "Retrieve a single document from a Firestore collection by its id. \
        Returns the document mapping including its 'id', or an error with 'not_found': true \
        if no such document exists."
    )]
    async fn get_firestore_document(
        &self,
        Parameters(params): Parameters<GetDocumentParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!(
            "Tool: get_firestore_document, collection={}, id={}",
            params.collection_name, params.document_id
        );
        Ok(tools::get_document::execute(self.store(), &params).await)
    }

    #[tool(
        description = "List all subcollections nested under a specific document. \
        Returns a list of objects each carrying a subcollection 'id'. \
        Fails if the parent document does not exist."
    )]
    async fn list_document_subcollections(
        &self,
        Parameters(params): Parameters<ListSubcollectionsParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!(
            "Tool: list_document_subcollections, collection={}, id={}",
            params.collection_name, params.document_id
        );
        Ok(tools::list_subcollections::execute(self.store(), &params).await)
    }

    #[tool(
        description = "Add a new document with an auto-generated id to a Firestore collection. \
        'document_data' is stored as-is without field validation. \
        Returns the generated document id on success."
    )]
    async fn add_document_to_firestore(
        &self,
        Parameters(params): Parameters<AddDocumentParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!(
            "Tool: add_document_to_firestore, collection={}",
            params.collection_name
        );
        Ok(tools::add_document::execute(self.store(), &params).await)
    }

    #[tool(
        description = "Merge fields into an existing Firestore document (partial update). \
        Fields not named in 'update_data' are left untouched. \
        Fails without creating the document if the target id does not exist."
    )]
    async fn update_firestore_document(
        &self,
        Parameters(params): Parameters<UpdateDocumentParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!(
            "Tool: update_firestore_document, collection={}, id={}",
            params.collection_name, params.document_id
        );
        Ok(tools::update_document::execute(self.store(), &params).await)
    }

    /// Serve MCP over stdio (stdin/stdout).
    ///
    /// This method blocks until the connection is closed.
    pub async fn serve_stdio(self) -> Result<(), ServerError> {
        debug!("Starting MCP server on stdio");
        let service = self
            .serve(stdio())
            .await
            .map_err(|e| ServerError::Mcp(format!("Failed to start server: {}", e)))?;
        service
            .waiting()
            .await
            .map_err(|e| ServerError::Mcp(format!("Server error: {}", e)))?;
        Ok(())
    }
}

#[tool_handler]
impl ServerHandler for FiregateMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "Firegate MCP server. Use tools to list, query, add, and update documents \
                 in Firestore. All results are JSON payloads in the text content."
                    .into(),
            ),
        }
    }
}
