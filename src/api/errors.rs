use axum::{http::StatusCode, response::IntoResponse};
use super::models::ErrorResponse;
use super::response::PrettyJson;

/// Routing and payload failures the mock reports as structured JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    InvalidJson,
    NotFound,
    PayloadTooLarge,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ApiError::InvalidJson => (StatusCode::BAD_REQUEST, "invalid_json"),
            ApiError::NotFound => (StatusCode::NOT_FOUND, "not_found"),
            ApiError::PayloadTooLarge => (StatusCode::PAYLOAD_TOO_LARGE, "payload_too_large"),
        };

        PrettyJson(status, ErrorResponse { error }).into_response()
    }
}
