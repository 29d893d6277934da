// Client management route definitions

use axum::{routing::get, Router};

use crate::config::state::AppState;
use super::handler;

/// Creates router with all client management endpoints
pub fn client_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/clients",
            get(handler::list_clients_handler).post(handler::create_client_handler),
        )
        .route(
            "/clients/{id}",
            get(handler::get_client_handler)
                .put(handler::update_client_handler)
                .delete(handler::delete_client_handler),
        )
}
