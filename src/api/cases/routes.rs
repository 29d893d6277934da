// Case management route definitions

use axum::{routing::get, Router};

use crate::config::state::AppState;
use super::handler;

/// Creates router with all case management endpoints
pub fn case_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/cases",
            get(handler::list_cases_handler).post(handler::create_case_handler),
        )
        .route(
            "/cases/{id}",
            get(handler::get_case_handler)
                .put(handler::update_case_handler)
                .delete(handler::delete_case_handler),
        )
}
