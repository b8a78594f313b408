//! Static file route: serves stored uploads by name (no auth).

use crate::error::HttpAppError;
use crate::state::AppState;
use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, StatusCode},
    response::Response,
};
use futures::StreamExt;
use imghost_core::AppError;
use imghost_processing::{original_extension, ImageCodec};
use std::sync::Arc;

const IMMUTABLE_CACHE_CONTROL: &str = "public, max-age=31536000, immutable";
const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

fn content_type_for(filename: &str) -> &'static str {
    ImageCodec::from_extension(original_extension(filename))
        .map(ImageCodec::content_type)
        .unwrap_or(FALLBACK_CONTENT_TYPE)
}

#[tracing::instrument(skip(state), fields(operation = "serve_upload"))]
pub async fn serve_upload(
    State(state): State<Arc<AppState>>,
    Path(filename): Path<String>,
) -> Result<Response, HttpAppError> {
    let content_length = state.storage.content_length(&filename).await?;
    let stream = state.storage.download_stream(&filename).await?;

    let body_stream = stream.map(|result| {
        result.map_err(|e| std::io::Error::other(format!("Storage stream error: {}", e)))
    });

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type_for(&filename))
        .header(header::CONTENT_LENGTH, content_length)
        .header(header::CACHE_CONTROL, IMMUTABLE_CACHE_CONTROL)
        .body(Body::from_stream(body_stream))
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to build response");
            HttpAppError::from(AppError::Internal(e.to_string()))
        })?;

    Ok(response)
}

/// `GET /uploads/` names no file.
pub async fn missing_filename() -> HttpAppError {
    HttpAppError(AppError::NotFound("File not found".to_string()))
}
