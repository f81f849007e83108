use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RelgraphConfig {
    pub database: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("relgraph.toml")
}

pub fn default_database_path() -> PathBuf {
    PathBuf::from("relationship_graph.db")
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Option<RelgraphConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: RelgraphConfig = toml::from_str(&contents)?;
    Ok(Some(config))
}

pub fn ensure_db_dir(db_path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_config_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_config(Some(&dir.path().join("relgraph.toml"))).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_load_config_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("relgraph.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "database = \"graph.db\"\nport = 9000").unwrap();

        let config = load_config(Some(&path)).unwrap().unwrap();
        assert_eq!(config.database.as_deref(), Some("graph.db"));
        assert_eq!(config.port, Some(9000));
        assert!(config.host.is_none());
    }

    #[test]
    fn test_ensure_db_dir_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("nested").join("graph.db");
        ensure_db_dir(&db).unwrap();
        assert!(db.parent().unwrap().exists());
    }
}
