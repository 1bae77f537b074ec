use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::application::app_error::AppError;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            // Validation errors render the field-keyed map directly.
            AppError::Validation(errors) => {
                (StatusCode::BAD_REQUEST, Json(errors)).into_response()
            }
            AppError::NotFound { key, message } => keyed(StatusCode::NOT_FOUND, key, message),
            AppError::Conflict { key, message } => keyed(StatusCode::CONFLICT, key, message),
            AppError::Forbidden { key, message } => keyed(StatusCode::FORBIDDEN, key, message),
            AppError::InvalidCredentials => {
                keyed(StatusCode::UNAUTHORIZED, "error", "Invalid Credentials")
            }
            AppError::InvalidId(message) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
            }
            AppError::Database(err) => {
                tracing::error!("database error: {err}");
                internal()
            }
            AppError::PasswordHash | AppError::TokenSign => internal(),
        }
    }
}

fn keyed(status: StatusCode, key: &'static str, message: &'static str) -> Response {
    (status, Json(json!({ key: message }))).into_response()
}

fn internal() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "Internal Server Error" })),
    )
        .into_response()
}
