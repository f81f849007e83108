//! Link types - directed, typed, weighted relationships between nodes
//!
//! The dataset uses relationship types like `leads`, `develops`, `applies`,
//! `uses`, `mentored_by` and `supports`; the store treats the type as free
//! text. `strength` weights the relationship for graph rendering and defaults
//! to 1.0.

use serde::{Deserialize, Serialize};

fn default_strength() -> f64 {
    1.0
}

/// A link in the relationship graph.
///
/// Both endpoints must reference existing nodes at creation time. Links are
/// immutable once created; deleting either endpoint node cascades to the link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub id: String,
    pub source_id: String,
    pub target_id: String,
    pub relationship_type: String,
    pub strength: f64,
}

/// Payload for creating a link. `strength` defaults to 1.0 when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkCreate {
    pub id: String,
    pub source_id: String,
    pub target_id: String,
    pub relationship_type: String,
    #[serde(default = "default_strength")]
    pub strength: f64,
}

impl LinkCreate {
    /// Create a link payload with the default strength of 1.0
    pub fn new(
        id: impl Into<String>,
        source_id: impl Into<String>,
        target_id: impl Into<String>,
        relationship_type: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            source_id: source_id.into(),
            target_id: target_id.into(),
            relationship_type: relationship_type.into(),
            strength: 1.0,
        }
    }

    /// Set an explicit strength weight
    pub fn with_strength(mut self, strength: f64) -> Self {
        self.strength = strength;
        self
    }
}

impl From<LinkCreate> for Link {
    fn from(c: LinkCreate) -> Self {
        Link {
            id: c.id,
            source_id: c.source_id,
            target_id: c.target_id,
            relationship_type: c.relationship_type,
            strength: c.strength,
        }
    }
}

impl Link {
    /// True if the link touches the given node id as source or target
    pub fn touches(&self, node_id: &str) -> bool {
        self.source_id == node_id || self.target_id == node_id
    }
}
