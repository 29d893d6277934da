// Case task handlers

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
use crate::models::{Task, TaskCreate, TaskUpdate};
use crate::utils::response_handler::HandlerResponse;

#[instrument(name = "list_tasks", skip(state))]
pub async fn list_tasks_handler(
    State(state): State<AppState>,
    Path(case_id): Path<Uuid>,
) -> Result<HandlerResponse, ApiError> {
    let tasks: Vec<Task> = state.repository.list_tasks(case_id).await?;
    let open: usize = tasks.iter().filter(|t| !t.completed).count();

    Ok(HandlerResponse::new(StatusCode::OK)
        .data(json!(tasks))
        .message(format!("Retrieved {} tasks ({} open)", tasks.len(), open)))
}

#[instrument(name = "create_task", skip(state, payload))]
pub async fn create_task_handler(
    State(state): State<AppState>,
    Path(case_id): Path<Uuid>,
    Json(payload): Json<TaskCreate>,
) -> Result<HandlerResponse, ApiError> {
    let payload: TaskCreate = payload.normalized();
    payload.validate()?;

    let task: Task = state.repository.create_task(case_id, payload).await?;
    info!(task_id = %task.id, "Task created");

    Ok(HandlerResponse::new(StatusCode::CREATED)
        .data(json!(task))
        .message("Task created successfully"))
}

#[instrument(name = "update_task", skip(state, payload))]
pub async fn update_task_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<TaskUpdate>,
) -> Result<HandlerResponse, ApiError> {
    let payload: TaskUpdate = payload.normalized();
    payload.validate()?;

    let task: Task = state.repository.update_task(id, payload).await?;

    Ok(HandlerResponse::new(StatusCode::OK)
        .data(json!(task))
        .message("Task updated successfully"))
}

#[instrument(name = "delete_task", skip(state))]
pub async fn delete_task_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<HandlerResponse, ApiError> {
    state.repository.delete_task(id).await?;

    Ok(HandlerResponse::new(StatusCode::OK)
        .data(json!({ "id": id }))
        .message("Task deleted successfully"))
}
