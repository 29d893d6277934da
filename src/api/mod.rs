// Start of file: /src/api/mod.rs

/*
    * JSON API. Everything here is mounted under `/api` except `/health`.
*/

pub mod cases;
pub mod clients;
pub mod documents;
pub mod error;
pub mod health;
pub mod tasks;

use axum::{http::{StatusCode, Uri}, Router};

use crate::config::state::AppState;
use crate::utils::response_handler::HandlerResponse;

/// All `/api` endpoints, with a JSON 404 for anything unmatched below the prefix.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(clients::routes::client_routes())
        .merge(cases::routes::case_routes())
        .merge(documents::routes::document_routes())
        .merge(tasks::routes::task_routes())
        .fallback(api_not_found)
}

async fn api_not_found(uri: Uri) -> HandlerResponse {
    HandlerResponse::new(StatusCode::NOT_FOUND)
        .message(format!("No API route matches '{}'", uri.path()))
}

// End of file: /src/api/mod.rs
