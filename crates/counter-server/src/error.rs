//! API error types with HTTP status code mapping.
//!
//! [`ApiError`] is the unified error type for the counter endpoints. It
//! implements `axum::response::IntoResponse` to produce a JSON body of the
//! form `{"error": "..."}`. Store failures only ever expose a generic
//! message; the underlying cause goes to the log.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::schema::counter::ErrorResponse;

/// Generic message for a failed `GET /counter`.
pub const GET_FAILED: &str = "Failed to get counter value";

/// Generic message for a failed `POST /counter`.
pub const UPDATE_FAILED: &str = "Failed to update counter value";

/// API errors with HTTP status code mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The requested action is not `increment` or `decrement` (400).
    #[error("Invalid action")]
    InvalidAction,

    /// The request body is not a JSON object (400).
    #[error("invalid request body: {0}")]
    InvalidBody(String),

    /// The backing store failed; carries the generic client message (500).
    #[error("{0}")]
    StoreUnavailable(&'static str),
}

impl ApiError {
    /// The HTTP status this error is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidAction | ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::StoreUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message sent to the client.
    pub fn client_message(&self) -> &'static str {
        match self {
            ApiError::InvalidAction => "Invalid action",
            ApiError::InvalidBody(_) => "Invalid request body",
            ApiError::StoreUnavailable(msg) => *msg,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.client_message().to_string(),
        };
        (self.status(), axum::Json(body)).into_response()
    }
}
