// Liveness endpoint that also proves the storage backend answers

use axum::{extract::State, http::StatusCode};
use serde_json::json;
use tracing::{instrument, warn};

use crate::config::state::AppState;
use crate::utils::response_handler::HandlerResponse;

#[instrument(skip(state))]
pub async fn health_check(State(state): State<AppState>) -> HandlerResponse {
    let backend: &'static str = state.repository.backend();

    match state.repository.ping().await {
        Ok(()) => HandlerResponse::new(StatusCode::OK)
            .data(json!({ "status": "ok", "storage": backend }))
            .message("Service is healthy"),
        Err(e) => {
            warn!("Health check failed: {}", e);
            HandlerResponse::new(StatusCode::SERVICE_UNAVAILABLE)
                .data(json!({ "status": "unavailable", "storage": backend }))
                .message("Storage backend is not reachable")
        }
    }
}
