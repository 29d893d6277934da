// Maps domain errors onto the unified response envelope.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::database::RepositoryError;
use crate::models::ValidationError;
use crate::utils::response_handler::HandlerResponse;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Repository(RepositoryError::NotFound { .. }) => StatusCode::NOT_FOUND,
            Self::Repository(RepositoryError::MissingReference { .. }) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Repository(RepositoryError::Conflict(_)) => StatusCode::CONFLICT,
            Self::Repository(RepositoryError::Database(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation_failed",
            Self::Repository(RepositoryError::NotFound { .. }) => "not_found",
            Self::Repository(RepositoryError::MissingReference { .. }) => "missing_reference",
            Self::Repository(RepositoryError::Conflict(_)) => "conflict",
            Self::Repository(RepositoryError::Database(_)) => "internal_error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status: StatusCode = self.status_code();

        // Database details stay in the logs
        let details: String = match &self {
            Self::Repository(RepositoryError::Database(e)) => {
                error!("Storage failure: {}", e);
                "Internal Server Error".to_string()
            }
            other => other.to_string(),
        };

        HandlerResponse::new(status)
            .data(json!({ "error": self.kind(), "details": details }))
            .message(details)
            .into_response()
    }
}
