//! SQLite-backed storage for the relationship graph

pub mod schema;
pub mod sqlite;

pub use sqlite::{GraphData, GraphStats, GraphStore};
