//! # Relgraph - Relationship Graph API
//!
//! A small CRUD backend for a typed, weighted relationship graph.
//!
//! Relgraph provides:
//! - Nodes representing people, institutions, projects and methods
//! - Directed, typed links with a strength weight between nodes
//! - SQLite-backed storage with cascading link deletion
//! - Case-insensitive substring search across node text fields
//! - An axum HTTP/JSON surface and a destructive demo-data seeder

pub mod node;
pub mod link;
pub mod storage;
pub mod server;
pub mod seed;
pub mod config;

// Re-exports for convenient access
pub use node::{Node, NodeCreate, NodePatch};
pub use link::{Link, LinkCreate};
pub use storage::{GraphData, GraphStore};

/// Result type alias for Relgraph operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Relgraph operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Node with this ID already exists: {0}")]
    NodeExists(String),

    #[error("Node not found: {0}")]
    NodeNotFound(String),

    #[error("Link with this ID already exists: {0}")]
    LinkExists(String),

    #[error("Link not found: {0}")]
    LinkNotFound(String),

    #[error("Source or target node does not exist: {source_id} -> {target_id}")]
    MissingEndpoint {
        source_id: String,
        target_id: String,
    },

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
