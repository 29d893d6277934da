// Start of file: /src/utils/error_handler.rs

/*
    * Converts errors raised by the tower layers (body limit, timeout) into
    * plain status codes; `response_wrapper` turns those into envelopes.
*/

use std::{error::Error, iter};

use axum::{
    BoxError,
    http::StatusCode,
    response::IntoResponse,
};
use http_body_util::LengthLimitError;
use tower::timeout::error::Elapsed;
use tracing::{error, warn};

pub async fn handle_global_error(err: BoxError) -> impl IntoResponse {
    if find_cause::<LengthLimitError>(&*err).is_some() {
        return StatusCode::PAYLOAD_TOO_LARGE;
    }

    if find_cause::<Elapsed>(&*err).is_some() {
        warn!("Request exceeded the configured timeout");
        return StatusCode::REQUEST_TIMEOUT;
    }

    error!("Unhandled middleware error: {}", err);
    StatusCode::INTERNAL_SERVER_ERROR
}

/// First error of type `T` in `err` or its chain of sources.
pub fn find_cause<'a, T: Error + 'static>(err: &'a (dyn Error + 'static)) -> Option<&'a T> {
    iter::successors(Some(err), |&e| e.source()).find_map(|e| e.downcast_ref::<T>())
}


// End of file: /src/utils/error_handler.rs
