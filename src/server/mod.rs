use axum::{
    routing::{delete, get, post},
    Router,
};
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::storage::GraphStore;

pub mod routes;

/// Server state shared across handlers.
///
/// One store connection guarded by an async mutex; each request locks it for
/// the duration of its storage calls.
pub struct AppState {
    pub store: Mutex<GraphStore>,
}

/// Build the API router for a given store
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(routes::root))
        .route("/api/graph-data", get(routes::get_graph_data))
        .route("/api/nodes", get(routes::get_nodes).post(routes::create_node))
        .route(
            "/api/nodes/{id}",
            get(routes::get_node)
                .put(routes::update_node)
                .delete(routes::delete_node),
        )
        .route("/api/links", get(routes::get_links).post(routes::create_link))
        .route("/api/links/{id}", delete(routes::delete_link))
        .route("/api/search", get(routes::search_nodes))
        .route("/api/initialise-data", post(routes::initialise_data))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Open the store and serve the API until the process is stopped
pub async fn start_server(host: &str, port: u16, database_path: &Path) -> anyhow::Result<()> {
    let store = GraphStore::open(database_path)?;
    let state = Arc::new(AppState {
        store: Mutex::new(store),
    });

    let app = build_router(state);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
