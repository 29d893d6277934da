// Client management handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde_json::json;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::api::error::ApiError;
use crate::config::state::AppState;
use crate::models::{Client, ClientCreate, ClientDetail, ClientUpdate, Pagination};
use crate::utils::response_handler::HandlerResponse;

#[instrument(name = "list_clients", skip(state))]
pub async fn list_clients_handler(
    State(state): State<AppState>,
    Query(page): Query<Pagination>,
) -> Result<HandlerResponse, ApiError> {
    let clients: Vec<Client> = state.repository.list_clients(page).await?;

    Ok(HandlerResponse::new(StatusCode::OK)
        .data(json!(clients))
        .message(format!("Retrieved {} clients", clients.len())))
}

#[instrument(name = "get_client", skip(state))]
pub async fn get_client_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<HandlerResponse, ApiError> {
    let detail: ClientDetail = state.repository.client_detail(id).await?;

    Ok(HandlerResponse::new(StatusCode::OK).data(json!(detail)))
}

/// Creates a client; emails are unique across clients
#[instrument(name = "create_client", skip(state, payload), fields(email = %payload.email))]
pub async fn create_client_handler(
    State(state): State<AppState>,
    Json(payload): Json<ClientCreate>,
) -> Result<HandlerResponse, ApiError> {
    let payload: ClientCreate = payload.normalized();
    payload.validate()?;

    let client: Client = state.repository.create_client(payload).await?;
    info!(client_id = %client.id, "Client created");

    Ok(HandlerResponse::new(StatusCode::CREATED)
        .data(json!(client))
        .message("Client created successfully"))
}

#[instrument(name = "update_client", skip(state, payload))]
pub async fn update_client_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ClientUpdate>,
) -> Result<HandlerResponse, ApiError> {
    let payload: ClientUpdate = payload.normalized();
    payload.validate()?;

    let client: Client = state.repository.update_client(id, payload).await?;

    Ok(HandlerResponse::new(StatusCode::OK)
        .data(json!(client))
        .message("Client updated successfully"))
}

/// Deletes a client that has no cases left
#[instrument(name = "delete_client", skip(state))]
pub async fn delete_client_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<HandlerResponse, ApiError> {
    state.repository.delete_client(id).await?;
    info!(client_id = %id, "Client deleted");

    Ok(HandlerResponse::new(StatusCode::OK)
        .data(json!({ "id": id }))
        .message("Client deleted successfully"))
}
