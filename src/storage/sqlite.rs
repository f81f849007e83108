//! SQLite storage implementation

use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};

use super::schema;
use crate::link::{Link, LinkCreate};
use crate::node::{Node, NodeCreate, NodePatch};
use crate::{Error, Result};

const NODE_COLUMNS: &str = "id, name, type, bio, description, website, connections, budget, \
                            methods, involved_institutions, category, steps, challenges, \
                            conditions, links";

const LINK_COLUMNS: &str = "id, source_id, target_id, relationship_type, strength";

/// Full snapshot of both tables, as served by the graph-data endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphData {
    pub nodes: Vec<Node>,
    pub links: Vec<Link>,
}

/// SQLite-backed storage for the relationship graph
pub struct GraphStore {
    conn: Connection,
}

impl GraphStore {
    /// Open a database file (creates if doesn't exist)
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the database schema
    fn initialize_schema(&self) -> Result<()> {
        for stmt in schema::all_schema_statements() {
            self.conn.execute(stmt, [])?;
        }
        Ok(())
    }

    // ========== Node Operations ==========

    /// List all nodes, optionally filtered by exact type
    pub fn list_nodes(&self, node_type: Option<&str>) -> Result<Vec<Node>> {
        let nodes = if let Some(node_type) = node_type {
            let mut stmt = self
                .conn
                .prepare(&format!("SELECT {NODE_COLUMNS} FROM nodes WHERE type = ?1"))?;
            let rows = stmt.query_map([node_type], row_to_node)?;
            rows.collect::<rusqlite::Result<Vec<_>>>()?
        } else {
            let mut stmt = self
                .conn
                .prepare(&format!("SELECT {NODE_COLUMNS} FROM nodes"))?;
            let rows = stmt.query_map([], row_to_node)?;
            rows.collect::<rusqlite::Result<Vec<_>>>()?
        };
        Ok(nodes)
    }

    /// Get a node by id
    pub fn get_node(&self, id: &str) -> Result<Option<Node>> {
        self.conn
            .query_row(
                &format!("SELECT {NODE_COLUMNS} FROM nodes WHERE id = ?1"),
                [id],
                row_to_node,
            )
            .optional()
            .map_err(Into::into)
    }

    /// Insert a new node; fails if the id is already taken
    pub fn insert_node(&self, create: NodeCreate) -> Result<Node> {
        if self.get_node(&create.id)?.is_some() {
            return Err(Error::NodeExists(create.id));
        }

        let node: Node = create.into();
        self.conn.execute(
            &format!(
                "INSERT INTO nodes ({NODE_COLUMNS}) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)"
            ),
            params![
                node.id,
                node.name,
                node.node_type,
                node.bio,
                node.description,
                node.website,
                node.connections,
                node.budget,
                node.methods,
                node.involved_institutions,
                node.category,
                node.steps,
                node.challenges,
                node.conditions,
                node.links,
            ],
        )?;
        Ok(node)
    }

    /// Apply a partial update to a node; unsupplied fields keep their value
    pub fn update_node(&self, id: &str, patch: &NodePatch) -> Result<Node> {
        let mut node = self
            .get_node(id)?
            .ok_or_else(|| Error::NodeNotFound(id.to_string()))?;

        patch.apply_to(&mut node);

        self.conn.execute(
            "UPDATE nodes SET name = ?2, type = ?3, bio = ?4, description = ?5, website = ?6, \
             connections = ?7, budget = ?8, methods = ?9, involved_institutions = ?10, \
             category = ?11, steps = ?12, challenges = ?13, conditions = ?14, links = ?15 \
             WHERE id = ?1",
            params![
                node.id,
                node.name,
                node.node_type,
                node.bio,
                node.description,
                node.website,
                node.connections,
                node.budget,
                node.methods,
                node.involved_institutions,
                node.category,
                node.steps,
                node.challenges,
                node.conditions,
                node.links,
            ],
        )?;
        Ok(node)
    }

    /// Delete a node and every link where it is source or target.
    ///
    /// Both deletions run inside one transaction; if the node does not exist
    /// nothing is deleted.
    pub fn delete_node(&mut self, id: &str) -> Result<()> {
        let tx = self.conn.transaction()?;

        let exists: Option<String> = tx
            .query_row("SELECT id FROM nodes WHERE id = ?1", [id], |row| row.get(0))
            .optional()?;
        if exists.is_none() {
            return Err(Error::NodeNotFound(id.to_string()));
        }

        tx.execute(
            "DELETE FROM links WHERE source_id = ?1 OR target_id = ?1",
            [id],
        )?;
        tx.execute("DELETE FROM nodes WHERE id = ?1", [id])?;
        tx.commit()?;
        Ok(())
    }

    /// Search nodes by case-insensitive substring across name, bio,
    /// description and methods (any field matching is enough)
    pub fn search_nodes(&self, query: &str) -> Result<Vec<Node>> {
        let pattern = format!("%{}%", query);
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {NODE_COLUMNS} FROM nodes \
             WHERE name LIKE ?1 OR bio LIKE ?1 OR description LIKE ?1 OR methods LIKE ?1"
        ))?;

        let nodes = stmt
            .query_map([pattern], row_to_node)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(nodes)
    }

    /// Count all nodes
    pub fn count_nodes(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM nodes", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    // ========== Link Operations ==========

    /// List all links
    pub fn list_links(&self) -> Result<Vec<Link>> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {LINK_COLUMNS} FROM links"))?;

        let links = stmt
            .query_map([], row_to_link)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(links)
    }

    /// Get a link by id
    pub fn get_link(&self, id: &str) -> Result<Option<Link>> {
        self.conn
            .query_row(
                &format!("SELECT {LINK_COLUMNS} FROM links WHERE id = ?1"),
                [id],
                row_to_link,
            )
            .optional()
            .map_err(Into::into)
    }

    /// Insert a new link; both endpoints must already exist as nodes
    pub fn insert_link(&self, create: LinkCreate) -> Result<Link> {
        let source_exists = self.get_node(&create.source_id)?.is_some();
        let target_exists = self.get_node(&create.target_id)?.is_some();
        if !source_exists || !target_exists {
            return Err(Error::MissingEndpoint {
                source_id: create.source_id,
                target_id: create.target_id,
            });
        }

        if self.get_link(&create.id)?.is_some() {
            return Err(Error::LinkExists(create.id));
        }

        let link: Link = create.into();
        self.conn.execute(
            &format!("INSERT INTO links ({LINK_COLUMNS}) VALUES (?1, ?2, ?3, ?4, ?5)"),
            params![
                link.id,
                link.source_id,
                link.target_id,
                link.relationship_type,
                link.strength,
            ],
        )?;
        Ok(link)
    }

    /// Delete a link by id
    pub fn delete_link(&self, id: &str) -> Result<()> {
        let deleted = self.conn.execute("DELETE FROM links WHERE id = ?1", [id])?;
        if deleted == 0 {
            return Err(Error::LinkNotFound(id.to_string()));
        }
        Ok(())
    }

    /// Count all links
    pub fn count_links(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM links", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    // ========== Graph Operations ==========

    /// Full snapshot of both tables, unfiltered
    pub fn graph_data(&self) -> Result<GraphData> {
        Ok(GraphData {
            nodes: self.list_nodes(None)?,
            links: self.list_links()?,
        })
    }

    /// Delete all data (links first, they reference nodes)
    pub fn clear_all(&self) -> Result<()> {
        self.conn.execute("DELETE FROM links", [])?;
        self.conn.execute("DELETE FROM nodes", [])?;
        Ok(())
    }

    // ========== Bulk Operations ==========

    /// Begin a transaction for bulk operations
    pub fn begin_transaction(&mut self) -> Result<()> {
        self.conn.execute("BEGIN TRANSACTION", [])?;
        Ok(())
    }

    /// Commit a transaction
    pub fn commit(&mut self) -> Result<()> {
        self.conn.execute("COMMIT", [])?;
        Ok(())
    }

    /// Rollback a transaction
    pub fn rollback(&mut self) -> Result<()> {
        self.conn.execute("ROLLBACK", [])?;
        Ok(())
    }

    /// Get database statistics
    pub fn stats(&self) -> Result<GraphStats> {
        Ok(GraphStats {
            nodes: self.count_nodes()?,
            links: self.count_links()?,
        })
    }
}

/// Helper to convert a row to a Node
fn row_to_node(row: &rusqlite::Row) -> rusqlite::Result<Node> {
    Ok(Node {
        id: row.get(0)?,
        name: row.get(1)?,
        node_type: row.get(2)?,
        bio: row.get(3)?,
        description: row.get(4)?,
        website: row.get(5)?,
        connections: row.get(6)?,
        budget: row.get(7)?,
        methods: row.get(8)?,
        involved_institutions: row.get(9)?,
        category: row.get(10)?,
        steps: row.get(11)?,
        challenges: row.get(12)?,
        conditions: row.get(13)?,
        links: row.get(14)?,
    })
}

/// Helper to convert a row to a Link
fn row_to_link(row: &rusqlite::Row) -> rusqlite::Result<Link> {
    Ok(Link {
        id: row.get(0)?,
        source_id: row.get(1)?,
        target_id: row.get(2)?,
        relationship_type: row.get(3)?,
        strength: row.get(4)?,
    })
}

/// Database statistics
#[derive(Debug, Clone, Serialize)]
pub struct GraphStats {
    pub nodes: usize,
    pub links: usize,
}

impl std::fmt::Display for GraphStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Graph Statistics:")?;
        writeln!(f, "  Nodes: {}", self.nodes)?;
        writeln!(f, "  Links: {}", self.links)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_node(id: &str, name: &str, node_type: &str) -> NodeCreate {
        NodeCreate::new(id, name, node_type)
    }

    fn store_with_pair() -> GraphStore {
        let store = GraphStore::open_in_memory().unwrap();
        store
            .insert_node(sample_node("P001", "Ada", "People"))
            .unwrap();
        store
            .insert_node(sample_node("PR001", "RiverSync", "Projects"))
            .unwrap();
        store
    }

    #[test]
    fn test_node_crud() {
        let store = GraphStore::open_in_memory().unwrap();

        let created = store
            .insert_node(NodeCreate {
                bio: Some("Studied at the Bauhaus University in Weimar".to_string()),
                website: Some("https://example.org".to_string()),
                ..sample_node("P001", "Jakob", "People")
            })
            .unwrap();

        let retrieved = store.get_node("P001").unwrap().unwrap();
        assert_eq!(retrieved, created);
        assert_eq!(retrieved.name, "Jakob");
        // Unsupplied optional fields come back empty
        assert!(retrieved.description.is_none());
        assert!(retrieved.budget.is_none());
    }

    #[test]
    fn test_duplicate_node_id_is_conflict() {
        let store = GraphStore::open_in_memory().unwrap();
        store
            .insert_node(NodeCreate {
                bio: Some("first".to_string()),
                ..sample_node("P001", "Ada", "People")
            })
            .unwrap();

        let err = store
            .insert_node(sample_node("P001", "Imposter", "People"))
            .unwrap_err();
        assert!(matches!(err, Error::NodeExists(_)));

        // Existing row unchanged
        let node = store.get_node("P001").unwrap().unwrap();
        assert_eq!(node.name, "Ada");
        assert_eq!(node.bio.as_deref(), Some("first"));
    }

    #[test]
    fn test_list_nodes_filtered_by_type() {
        let store = store_with_pair();

        let all = store.list_nodes(None).unwrap();
        assert_eq!(all.len(), 2);

        let people = store.list_nodes(Some("People")).unwrap();
        assert_eq!(people.len(), 1);
        assert_eq!(people[0].id, "P001");

        let none = store.list_nodes(Some("Institutions")).unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn test_partial_update_keeps_other_fields() {
        let store = GraphStore::open_in_memory().unwrap();
        store
            .insert_node(NodeCreate {
                bio: Some("bio stays".to_string()),
                website: Some("https://old.example".to_string()),
                ..sample_node("P001", "Ada", "People")
            })
            .unwrap();

        let patch = NodePatch {
            website: Some(Some("https://new.example".to_string())),
            ..Default::default()
        };
        let updated = store.update_node("P001", &patch).unwrap();
        assert_eq!(updated.website.as_deref(), Some("https://new.example"));
        assert_eq!(updated.bio.as_deref(), Some("bio stays"));
        assert_eq!(updated.name, "Ada");

        // Idempotent on repeat
        let again = store.update_node("P001", &patch).unwrap();
        assert_eq!(again, updated);
    }

    #[test]
    fn test_update_with_null_clears_field() {
        let store = GraphStore::open_in_memory().unwrap();
        store
            .insert_node(NodeCreate {
                bio: Some("to be cleared".to_string()),
                website: Some("https://example.org".to_string()),
                ..sample_node("P001", "Ada", "People")
            })
            .unwrap();

        let patch: NodePatch = serde_json::from_str(r#"{"bio": null}"#).unwrap();
        let updated = store.update_node("P001", &patch).unwrap();

        assert!(updated.bio.is_none());
        assert_eq!(updated.website.as_deref(), Some("https://example.org"));

        let reread = store.get_node("P001").unwrap().unwrap();
        assert!(reread.bio.is_none());
    }

    #[test]
    fn test_update_missing_node() {
        let store = GraphStore::open_in_memory().unwrap();
        let err = store.update_node("nope", &NodePatch::default()).unwrap_err();
        assert!(matches!(err, Error::NodeNotFound(_)));
    }

    #[test]
    fn test_link_requires_both_endpoints() {
        let store = store_with_pair();

        let err = store
            .insert_link(LinkCreate::new("L1", "P001", "ZZZ", "leads"))
            .unwrap_err();
        assert!(matches!(err, Error::MissingEndpoint { .. }));
        // Table unchanged after the failure
        assert_eq!(store.count_links().unwrap(), 0);

        let link = store
            .insert_link(LinkCreate::new("L1", "P001", "PR001", "leads"))
            .unwrap();
        assert_eq!(link.strength, 1.0);
        assert_eq!(store.count_links().unwrap(), 1);
    }

    #[test]
    fn test_duplicate_link_id_is_conflict() {
        let store = store_with_pair();
        store
            .insert_link(LinkCreate::new("L1", "P001", "PR001", "leads"))
            .unwrap();

        let err = store
            .insert_link(LinkCreate::new("L1", "PR001", "P001", "supports"))
            .unwrap_err();
        assert!(matches!(err, Error::LinkExists(_)));
        assert_eq!(store.count_links().unwrap(), 1);
    }

    #[test]
    fn test_delete_node_cascades_to_links() {
        let mut store = store_with_pair();
        store
            .insert_node(sample_node("I001", "Waag", "Institutions"))
            .unwrap();
        store
            .insert_link(LinkCreate::new("L1", "P001", "PR001", "leads"))
            .unwrap();
        store
            .insert_link(LinkCreate::new("L2", "I001", "PR001", "supports"))
            .unwrap();
        store
            .insert_link(LinkCreate::new("L3", "P001", "I001", "mentored_by"))
            .unwrap();

        store.delete_node("P001").unwrap();

        assert!(store.get_node("P001").unwrap().is_none());
        let remaining = store.list_links().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, "L2");
        assert!(!remaining.iter().any(|l| l.touches("P001")));
    }

    #[test]
    fn test_delete_missing_node() {
        let mut store = GraphStore::open_in_memory().unwrap();
        let err = store.delete_node("nope").unwrap_err();
        assert!(matches!(err, Error::NodeNotFound(_)));
    }

    #[test]
    fn test_delete_link() {
        let store = store_with_pair();
        store
            .insert_link(LinkCreate::new("L1", "P001", "PR001", "leads"))
            .unwrap();

        store.delete_link("L1").unwrap();
        assert_eq!(store.count_links().unwrap(), 0);

        let err = store.delete_link("L1").unwrap_err();
        assert!(matches!(err, Error::LinkNotFound(_)));
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let store = GraphStore::open_in_memory().unwrap();
        store
            .insert_node(NodeCreate {
                bio: Some("Studied at the Bauhaus University in Weimar".to_string()),
                ..sample_node("P001", "Jakob", "People")
            })
            .unwrap();
        store
            .insert_node(NodeCreate {
                methods: Some("bauhaus-inspired workshops".to_string()),
                ..sample_node("M001", "Workshop Method", "Methods")
            })
            .unwrap();
        store
            .insert_node(sample_node("P002", "Marina", "People"))
            .unwrap();

        let hits = store.search_nodes("BAUHAUS").unwrap();
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().any(|n| n.id == "P001"));
        assert!(hits.iter().any(|n| n.id == "M001"));
    }

    #[test]
    fn test_search_matches_name_field() {
        let store = store_with_pair();
        let hits = store.search_nodes("river").unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "PR001");
    }

    #[test]
    fn test_graph_data_snapshot() {
        let store = store_with_pair();
        store
            .insert_link(LinkCreate::new("L1", "P001", "PR001", "leads"))
            .unwrap();

        let graph = store.graph_data().unwrap();
        assert_eq!(graph.nodes.len(), 2);
        assert_eq!(graph.links.len(), 1);
    }

    #[test]
    fn test_clear_all() {
        let store = store_with_pair();
        store
            .insert_link(LinkCreate::new("L1", "P001", "PR001", "leads"))
            .unwrap();

        store.clear_all().unwrap();
        let stats = store.stats().unwrap();
        assert_eq!(stats.nodes, 0);
        assert_eq!(stats.links, 0);
    }

    #[test]
    fn test_open_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graph.db");
        {
            let store = GraphStore::open(&path).unwrap();
            store
                .insert_node(sample_node("P001", "Ada", "People"))
                .unwrap();
        }
        let store = GraphStore::open(&path).unwrap();
        assert_eq!(store.count_nodes().unwrap(), 1);
    }
}
