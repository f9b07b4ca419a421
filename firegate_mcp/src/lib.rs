//! MCP server for Firestore.
//!
//! This crate exposes a fixed catalog of Firestore CRUD operations as MCP
//! (Model Context Protocol) tools over stdio, so AI assistants can discover
//! and invoke database operations without a Firestore client of their own.

pub mod tools;

mod server;

pub use server::{FiregateMcpServer, ServerError};
