use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// Errors produced while turning a raw request body into a typed profile.
///
/// Every variant maps to HTTP 400; the display string is the wire message.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RequestError {
    /// The request body was absent or could not be parsed as JSON.
    #[error("Malformed JSON")]
    MalformedBody,
    /// A required field is missing (`role`, `yearsExperience`, `education`).
    #[error("Invalid payload")]
    InvalidPayload,
    #[error("unknown role: {0}")]
    UnknownRole(String),
    #[error("unknown education level: {0}")]
    UnknownEducation(String),
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (StatusCode::BAD_REQUEST, body).into_response()
    }
}
