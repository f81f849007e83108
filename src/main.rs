//! Relgraph CLI - serve the Relationship Graph API, seed demo data, show stats

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use relgraph::config;
use relgraph::storage::GraphStore;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "relgraph")]
#[command(version = "0.1.0")]
#[command(about = "Relationship Graph API - typed, weighted graph of people, institutions, projects and methods")]
#[command(long_about = r#"
Relgraph serves a small CRUD backend over a SQLite relationship graph:
  • Nodes: People, Institutions, Projects, Methods
  • Links: directed, typed relationships with a strength weight
  • Substring search across node text fields

Example usage:
  relgraph seed --database relationship_graph.db
  relgraph serve --port 8000
  relgraph stats
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to a relgraph.toml config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the HTTP API
    Serve {
        /// Host to bind (default 0.0.0.0)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (default 8000)
        #[arg(short, long)]
        port: Option<u16>,

        /// Path to the database file (default relationship_graph.db)
        #[arg(short, long)]
        database: Option<PathBuf>,
    },

    /// Wipe the database and populate it with the fixed demo dataset
    Seed {
        /// Path to the database file (default relationship_graph.db)
        #[arg(short, long)]
        database: Option<PathBuf>,
    },

    /// Show node and link counts
    Stats {
        /// Path to the database file (default relationship_graph.db)
        #[arg(short, long)]
        database: Option<PathBuf>,
    },
}

/// Flag > config file > built-in default
fn resolve_database(
    flag: Option<PathBuf>,
    file_config: &config::RelgraphConfig,
) -> PathBuf {
    flag.or_else(|| file_config.database.clone().map(PathBuf::from))
        .unwrap_or_else(config::default_database_path)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let file_config = config::load_config(cli.config.as_deref())?.unwrap_or_default();

    match cli.command {
        Commands::Serve { host, port, database } => {
            let host = host
                .or(file_config.host.clone())
                .unwrap_or_else(|| "0.0.0.0".to_string());
            let port = port.or(file_config.port).unwrap_or(8000);
            let database = resolve_database(database, &file_config);

            config::ensure_db_dir(&database)?;
            tracing::info!("Serving {:?} on {}:{}", database, host, port);
            relgraph::server::start_server(&host, port, &database).await?;
        }

        Commands::Seed { database } => {
            let database = resolve_database(database, &file_config);
            config::ensure_db_dir(&database)?;

            let mut store = GraphStore::open(&database)?;
            let (nodes, links) = relgraph::seed::populate(&mut store)?;

            println!("Database populated successfully!");
            println!("   - Added {} nodes", nodes);
            println!("   - Added {} links", links);
        }

        Commands::Stats { database } => {
            let database = resolve_database(database, &file_config);
            let store = GraphStore::open(&database)?;
            let stats = store.stats()?;

            println!("Relgraph Statistics ({:?})", database);
            println!("------------------------------------");
            println!("{}", stats);
        }
    }

    Ok(())
}
