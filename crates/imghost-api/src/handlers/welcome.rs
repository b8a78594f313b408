use axum::{http::StatusCode, Json};
use imghost_core::constants::WELCOME_MESSAGE;
use imghost_core::models::{ErrorResponse, MessageResponse};

pub async fn welcome() -> Json<MessageResponse> {
    Json(MessageResponse {
        success: true,
        message: WELCOME_MESSAGE.to_string(),
    })
}

/// Fallback for unknown routes.
pub async fn not_found() -> (StatusCode, Json<ErrorResponse>) {
    (StatusCode::NOT_FOUND, Json(ErrorResponse::new("Not found")))
}
