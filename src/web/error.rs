// API error taxonomy.
//
// Two kinds only: the caller sent unusable input (400, message is
// specific), or something failed on our side (500, message is generic —
// the detail goes to the server log, never to the caller).

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

#[derive(Debug)]
pub enum ApiError {
    /// Client-caused: missing, non-string, or empty input.
    Validation(String),
    /// Server-caused: scorer or other unexpected failure.
    Internal,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal error".to_string(),
            ),
        };

        let body = serde_json::json!({ "error": message });
        (status, Json(body)).into_response()
    }
}
