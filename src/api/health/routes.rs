use axum::{routing::get, Router};

use crate::config::state::AppState;
use super::handler::health_check;

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
