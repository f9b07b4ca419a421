//! Document store abstraction for Firegate.
//!
//! Defines the narrow [`DocumentStore`] interface the MCP tools call into,
//! together with the production Firestore backend and an in-memory backend
//! used by tests and local dry runs.

mod backends;
mod document;
mod errors;
mod store;

pub mod credentials;

pub use backends::{FirestoreStore, MemoryStore};
pub use document::{Document, Fields, Filter};
pub use errors::StoreError;
pub use store::DocumentStore;
