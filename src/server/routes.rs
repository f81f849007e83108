use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::link::{Link, LinkCreate};
use crate::node::{Node, NodeCreate, NodePatch};
use crate::server::AppState;
use crate::storage::GraphData;
use crate::Error;

#[derive(Deserialize)]
pub struct NodesParams {
    pub node_type: Option<String>,
}

#[derive(Deserialize)]
pub struct SearchParams {
    pub q: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Map a storage error to its HTTP status. Conflicts and referential
/// integrity violations surface as 400, matching the original contract.
fn error_response(err: Error) -> ApiError {
    let status = match err {
        Error::NodeNotFound(_) | Error::LinkNotFound(_) => StatusCode::NOT_FOUND,
        Error::NodeExists(_) | Error::LinkExists(_) | Error::MissingEndpoint { .. } => {
            StatusCode::BAD_REQUEST
        }
        Error::Storage(_) | Error::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}

pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Relationship Graph API".to_string(),
    })
}

pub async fn get_graph_data(
    State(state): State<Arc<AppState>>,
) -> Result<Json<GraphData>, ApiError> {
    let store = state.store.lock().await;
    let graph = store.graph_data().map_err(error_response)?;
    Ok(Json(graph))
}

pub async fn get_nodes(
    State(state): State<Arc<AppState>>,
    Query(params): Query<NodesParams>,
) -> Result<Json<Vec<Node>>, ApiError> {
    // An empty node_type means no filter, as the original backend treats it
    let node_type = params.node_type.as_deref().filter(|t| !t.is_empty());

    let store = state.store.lock().await;
    let nodes = store.list_nodes(node_type).map_err(error_response)?;
    Ok(Json(nodes))
}

pub async fn get_node(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Node>, ApiError> {
    let store = state.store.lock().await;
    let node = store
        .get_node(&id)
        .map_err(error_response)?
        .ok_or_else(|| error_response(Error::NodeNotFound(id)))?;
    Ok(Json(node))
}

pub async fn create_node(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NodeCreate>,
) -> Result<Json<Node>, ApiError> {
    let store = state.store.lock().await;
    let node = store.insert_node(payload).map_err(error_response)?;
    Ok(Json(node))
}

pub async fn update_node(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(patch): Json<NodePatch>,
) -> Result<Json<Node>, ApiError> {
    let store = state.store.lock().await;
    let node = store.update_node(&id, &patch).map_err(error_response)?;
    Ok(Json(node))
}

pub async fn delete_node(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let mut store = state.store.lock().await;
    store.delete_node(&id).map_err(error_response)?;
    Ok(Json(MessageResponse {
        message: "Node deleted successfully".to_string(),
    }))
}

pub async fn get_links(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Link>>, ApiError> {
    let store = state.store.lock().await;
    let links = store.list_links().map_err(error_response)?;
    Ok(Json(links))
}

pub async fn create_link(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LinkCreate>,
) -> Result<Json<Link>, ApiError> {
    let store = state.store.lock().await;
    let link = store.insert_link(payload).map_err(error_response)?;
    Ok(Json(link))
}

pub async fn delete_link(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let store = state.store.lock().await;
    store.delete_link(&id).map_err(error_response)?;
    Ok(Json(MessageResponse {
        message: "Link deleted successfully".to_string(),
    }))
}

pub async fn search_nodes(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Node>>, ApiError> {
    let store = state.store.lock().await;
    let nodes = store.search_nodes(&params.q).map_err(error_response)?;
    Ok(Json(nodes))
}

/// Stub kept for frontend compatibility; real population happens through the
/// `seed` subcommand, which is deliberately not reachable over the network.
pub async fn initialise_data(State(_state): State<Arc<AppState>>) -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Data initialisation endpoint ready".to_string(),
    })
}
