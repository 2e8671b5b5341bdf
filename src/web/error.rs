use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::services::signup_service::SignupError;

/// HTTP-facing error for the activity routes.
///
/// Every variant is a client-input error surfaced as a 4xx with a
/// human-readable `detail` field; nothing here is retried or treated as a
/// server fault.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Signup(#[from] SignupError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Signup(SignupError::ActivityNotFound) => StatusCode::NOT_FOUND,
            ApiError::Signup(_) => StatusCode::BAD_REQUEST,
        };

        let body = json!({ "detail": self.to_string() });
        (status, Json(body)).into_response()
    }
}
