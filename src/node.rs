//! Node types - entity records in the relationship graph
//!
//! A node is one of four broad categories:
//! - `People`: artists, researchers, practitioners
//! - `Institutions`: labs, universities, arts organisations
//! - `Projects`: funded works and interventions
//! - `Methods`: reusable practices and workshop formats
//!
//! The category is stored as free text rather than an enum; the four values
//! above are conventions of the dataset, not a constraint of the store.

use serde::{Deserialize, Serialize};

/// A node in the relationship graph.
///
/// `id` is caller-supplied and globally unique. `name` and `node_type` are
/// required; everything else is optional free text that only some categories
/// fill in (people have a `bio`, projects a `budget`, methods `steps`, and
/// so on).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: String,
    pub bio: Option<String>,
    pub description: Option<String>,
    pub website: Option<String>,
    pub connections: Option<String>,
    pub budget: Option<String>,
    pub methods: Option<String>,
    pub involved_institutions: Option<String>,
    pub category: Option<String>,
    pub steps: Option<String>,
    pub challenges: Option<String>,
    pub conditions: Option<String>,
    pub links: Option<String>,
}

/// Payload for creating a node. Identical to [`Node`]; creation supplies the
/// id along with all fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeCreate {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub connections: Option<String>,
    #[serde(default)]
    pub budget: Option<String>,
    #[serde(default)]
    pub methods: Option<String>,
    #[serde(default)]
    pub involved_institutions: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub steps: Option<String>,
    #[serde(default)]
    pub challenges: Option<String>,
    #[serde(default)]
    pub conditions: Option<String>,
    #[serde(default)]
    pub links: Option<String>,
}

impl NodeCreate {
    /// Create a minimal node payload with just the required fields
    pub fn new(id: impl Into<String>, name: impl Into<String>, node_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            node_type: node_type.into(),
            bio: None,
            description: None,
            website: None,
            connections: None,
            budget: None,
            methods: None,
            involved_institutions: None,
            category: None,
            steps: None,
            challenges: None,
            conditions: None,
            links: None,
        }
    }
}

impl From<NodeCreate> for Node {
    fn from(c: NodeCreate) -> Self {
        Node {
            id: c.id,
            name: c.name,
            node_type: c.node_type,
            bio: c.bio,
            description: c.description,
            website: c.website,
            connections: c.connections,
            budget: c.budget,
            methods: c.methods,
            involved_institutions: c.involved_institutions,
            category: c.category,
            steps: c.steps,
            challenges: c.challenges,
            conditions: c.conditions,
            links: c.links,
        }
    }
}

/// Deserialize any present value (including null) as `Some`, so a patch can
/// tell an explicitly supplied `null` apart from an omitted field
fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: serde::Deserialize<'de>,
    D: serde::Deserializer<'de>,
{
    serde::Deserialize::deserialize(deserializer).map(Some)
}

/// Partial update for a node. Only fields present in the payload overwrite
/// the stored row; absent fields keep their prior value.
///
/// Optional columns use a double `Option`: the outer level is presence in the
/// payload, the inner level is the stored value. `"bio": null` clears the
/// column, while leaving `bio` out keeps it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NodePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub node_type: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_some",
        skip_serializing_if = "Option::is_none"
    )]
    pub bio: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "deserialize_some",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "deserialize_some",
        skip_serializing_if = "Option::is_none"
    )]
    pub website: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "deserialize_some",
        skip_serializing_if = "Option::is_none"
    )]
    pub connections: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "deserialize_some",
        skip_serializing_if = "Option::is_none"
    )]
    pub budget: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "deserialize_some",
        skip_serializing_if = "Option::is_none"
    )]
    pub methods: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "deserialize_some",
        skip_serializing_if = "Option::is_none"
    )]
    pub involved_institutions: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "deserialize_some",
        skip_serializing_if = "Option::is_none"
    )]
    pub category: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "deserialize_some",
        skip_serializing_if = "Option::is_none"
    )]
    pub steps: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "deserialize_some",
        skip_serializing_if = "Option::is_none"
    )]
    pub challenges: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "deserialize_some",
        skip_serializing_if = "Option::is_none"
    )]
    pub conditions: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "deserialize_some",
        skip_serializing_if = "Option::is_none"
    )]
    pub links: Option<Option<String>>,
}

impl NodePatch {
    /// Apply this patch to an existing node, overwriting only supplied fields
    pub fn apply_to(&self, node: &mut Node) {
        if let Some(name) = &self.name {
            node.name = name.clone();
        }
        if let Some(node_type) = &self.node_type {
            node.node_type = node_type.clone();
        }
        if let Some(bio) = &self.bio {
            node.bio = bio.clone();
        }
        if let Some(description) = &self.description {
            node.description = description.clone();
        }
        if let Some(website) = &self.website {
            node.website = website.clone();
        }
        if let Some(connections) = &self.connections {
            node.connections = connections.clone();
        }
        if let Some(budget) = &self.budget {
            node.budget = budget.clone();
        }
        if let Some(methods) = &self.methods {
            node.methods = methods.clone();
        }
        if let Some(involved_institutions) = &self.involved_institutions {
            node.involved_institutions = involved_institutions.clone();
        }
        if let Some(category) = &self.category {
            node.category = category.clone();
        }
        if let Some(steps) = &self.steps {
            node.steps = steps.clone();
        }
        if let Some(challenges) = &self.challenges {
            node.challenges = challenges.clone();
        }
        if let Some(conditions) = &self.conditions {
            node.conditions = conditions.clone();
        }
        if let Some(links) = &self.links {
            node.links = links.clone();
        }
    }

    /// True if no field is set (applying would be a no-op)
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.node_type.is_none()
            && self.bio.is_none()
            && self.description.is_none()
            && self.website.is_none()
            && self.connections.is_none()
            && self.budget.is_none()
            && self.methods.is_none()
            && self.involved_institutions.is_none()
            && self.category.is_none()
            && self.steps.is_none()
            && self.challenges.is_none()
            && self.conditions.is_none()
            && self.links.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_overwrites_only_supplied_fields() {
        let mut node: Node = NodeCreate {
            bio: Some("original bio".to_string()),
            website: Some("https://example.org".to_string()),
            ..NodeCreate::new("P001", "Ada", "People")
        }
        .into();

        let patch = NodePatch {
            bio: Some(Some("updated bio".to_string())),
            ..Default::default()
        };
        patch.apply_to(&mut node);

        assert_eq!(node.bio.as_deref(), Some("updated bio"));
        assert_eq!(node.website.as_deref(), Some("https://example.org"));
        assert_eq!(node.name, "Ada");
    }

    #[test]
    fn test_explicit_null_clears_field() {
        let mut node: Node = NodeCreate {
            bio: Some("to be cleared".to_string()),
            website: Some("https://example.org".to_string()),
            ..NodeCreate::new("P001", "Ada", "People")
        }
        .into();

        // A supplied null clears the column; an omitted field keeps its value
        let patch: NodePatch = serde_json::from_str(r#"{"bio": null}"#).unwrap();
        assert!(patch.bio.is_some());
        assert!(patch.website.is_none());

        patch.apply_to(&mut node);
        assert!(node.bio.is_none());
        assert_eq!(node.website.as_deref(), Some("https://example.org"));
    }

    #[test]
    fn test_patch_distinguishes_null_from_absent() {
        let patch: NodePatch =
            serde_json::from_str(r#"{"bio": null, "website": "https://new.example"}"#).unwrap();

        assert_eq!(patch.bio, Some(None));
        assert_eq!(patch.website, Some(Some("https://new.example".to_string())));
        assert_eq!(patch.description, None);
    }

    #[test]
    fn test_empty_patch_is_noop() {
        let mut node: Node = NodeCreate::new("P001", "Ada", "People").into();
        let before = node.clone();

        let patch = NodePatch::default();
        assert!(patch.is_empty());
        patch.apply_to(&mut node);

        assert_eq!(node, before);
    }

    #[test]
    fn test_type_field_rename_in_json() {
        let node: Node = NodeCreate::new("M001", "Inclusive Design", "Methods").into();
        let json = serde_json::to_value(&node).unwrap();

        assert_eq!(json["type"], "Methods");
        assert!(json.get("node_type").is_none());

        let parsed: Node = serde_json::from_value(json).unwrap();
        assert_eq!(parsed.node_type, "Methods");
    }
}
