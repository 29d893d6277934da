// Case management handlers

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
use crate::models::{Case, CaseCreate, CaseDetail, CaseFilter, CaseUpdate};
use crate::utils::response_handler::HandlerResponse;

/// Lists cases, optionally narrowed by `client_id` and `status`
#[instrument(name = "list_cases", skip(state))]
pub async fn list_cases_handler(
    State(state): State<AppState>,
    Query(filter): Query<CaseFilter>,
) -> Result<HandlerResponse, ApiError> {
    let cases: Vec<Case> = state.repository.list_cases(&filter).await?;

    Ok(HandlerResponse::new(StatusCode::OK)
        .data(json!(cases))
        .message(format!("Retrieved {} cases", cases.len())))
}

/// Returns the case with its documents and tasks
#[instrument(name = "get_case", skip(state))]
pub async fn get_case_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<HandlerResponse, ApiError> {
    let detail: CaseDetail = state.repository.case_detail(id).await?;

    Ok(HandlerResponse::new(StatusCode::OK).data(json!(detail)))
}

#[instrument(name = "create_case", skip(state, payload), fields(client_id = %payload.client_id))]
pub async fn create_case_handler(
    State(state): State<AppState>,
    Json(payload): Json<CaseCreate>,
) -> Result<HandlerResponse, ApiError> {
    let payload: CaseCreate = payload.normalized();
    payload.validate()?;

    let case: Case = state.repository.create_case(payload).await?;
    info!(case_id = %case.id, "Case created");

    Ok(HandlerResponse::new(StatusCode::CREATED)
        .data(json!(case))
        .message("Case created successfully"))
}

#[instrument(name = "update_case", skip(state, payload))]
pub async fn update_case_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<CaseUpdate>,
) -> Result<HandlerResponse, ApiError> {
    let payload: CaseUpdate = payload.normalized();
    payload.validate()?;

    let case: Case = state.repository.update_case(id, payload).await?;

    Ok(HandlerResponse::new(StatusCode::OK)
        .data(json!(case))
        .message("Case updated successfully"))
}

/// Deletes a case together with its documents and tasks
#[instrument(name = "delete_case", skip(state))]
pub async fn delete_case_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<HandlerResponse, ApiError> {
    state.repository.delete_case(id).await?;
    info!(case_id = %id, "Case deleted");

    Ok(HandlerResponse::new(StatusCode::OK)
        .data(json!({ "id": id }))
        .message("Case deleted successfully"))
}
