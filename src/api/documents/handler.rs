// Document metadata handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::json;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::api::error::ApiError;
use crate::config::state::AppState;
use crate::models::{Document, DocumentCreate};
use crate::utils::response_handler::HandlerResponse;

#[instrument(name = "list_documents", skip(state))]
pub async fn list_documents_handler(
    State(state): State<AppState>,
    Path(case_id): Path<Uuid>,
) -> Result<HandlerResponse, ApiError> {
    let documents: Vec<Document> = state.repository.list_documents(case_id).await?;

    Ok(HandlerResponse::new(StatusCode::OK)
        .data(json!(documents))
        .message(format!("Retrieved {} documents", documents.len())))
}

#[instrument(name = "create_document", skip(state, payload))]
pub async fn create_document_handler(
    State(state): State<AppState>,
    Path(case_id): Path<Uuid>,
    Json(payload): Json<DocumentCreate>,
) -> Result<HandlerResponse, ApiError> {
    let payload: DocumentCreate = payload.normalized();
    payload.validate()?;

    let document: Document = state.repository.create_document(case_id, payload).await?;
    info!(document_id = %document.id, "Document attached");

    Ok(HandlerResponse::new(StatusCode::CREATED)
        .data(json!(document))
        .message("Document attached successfully"))
}

#[instrument(name = "delete_document", skip(state))]
pub async fn delete_document_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<HandlerResponse, ApiError> {
    state.repository.delete_document(id).await?;

    Ok(HandlerResponse::new(StatusCode::OK)
        .data(json!({ "id": id }))
        .message("Document deleted successfully"))
}
