// Task route definitions

use axum::{routing::{get, put}, Router};

use crate::config::state::AppState;
use super::handler;

pub fn task_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/cases/{id}/tasks",
            get(handler::list_tasks_handler).post(handler::create_task_handler),
        )
        .route(
            "/tasks/{id}",
            put(handler::update_task_handler).delete(handler::delete_task_handler),
        )
}
