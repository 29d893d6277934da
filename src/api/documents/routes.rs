// Document route definitions

use axum::{routing::{delete, get}, Router};

use crate::config::state::AppState;
use super::handler;

pub fn document_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/cases/{id}/documents",
            get(handler::list_documents_handler).post(handler::create_document_handler),
        )
        .route("/documents/{id}", delete(handler::delete_document_handler))
}
