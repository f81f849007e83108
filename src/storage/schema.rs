//! Database schema definitions

/// SQL to create the nodes table
pub const CREATE_NODES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS nodes (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    type TEXT NOT NULL,
    bio TEXT,
    description TEXT,
    website TEXT,
    connections TEXT,
    budget TEXT,
    methods TEXT,
    involved_institutions TEXT,
    category TEXT,
    steps TEXT,
    challenges TEXT,
    conditions TEXT,
    links TEXT
)
"#;

/// SQL to create the links table
///
/// Endpoint existence is checked by the store at insert time; the foreign
/// keys document intent but cascading delete is performed by query so the
/// behavior does not depend on `PRAGMA foreign_keys`.
pub const CREATE_LINKS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS links (
    id TEXT PRIMARY KEY,
    source_id TEXT NOT NULL REFERENCES nodes(id),
    target_id TEXT NOT NULL REFERENCES nodes(id),
    relationship_type TEXT NOT NULL,
    strength REAL NOT NULL DEFAULT 1.0
)
"#;

/// SQL to create indexes
pub const CREATE_INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_nodes_type ON nodes(type)",
    "CREATE INDEX IF NOT EXISTS idx_links_source ON links(source_id)",
    "CREATE INDEX IF NOT EXISTS idx_links_target ON links(target_id)",
];

/// All schema creation statements
pub fn all_schema_statements() -> Vec<&'static str> {
    let mut stmts = vec![CREATE_NODES_TABLE, CREATE_LINKS_TABLE];
    stmts.extend(CREATE_INDEXES.iter().copied());
    stmts
}
