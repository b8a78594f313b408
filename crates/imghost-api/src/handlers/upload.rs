use std::sync::Arc;

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use imghost_core::constants::IMAGE_FIELD_NAME;
use imghost_core::models::UploadResponse;
use imghost_core::AppError;

use crate::auth::models::AuthContext;
use crate::error::HttpAppError;
use crate::services::upload::{ImageUpload, UploadService};
use crate::state::AppState;

pub const PARSE_FORM_FAILED: &str = "Unable to parse the form data. Please try again.";
pub const RETRIEVE_FILE_FAILED: &str = "Unable to retrieve the file from the form data";

/// Upload image handler
///
/// Reads the `image` part of a multipart form and hands it to [`UploadService`],
/// which stores it and computes the blurhash.
///
/// # Errors
/// - `AppError::BadRequest` - malformed or oversized form, missing `image` part,
///   or unsupported extension
/// - `AppError::InternalWithSource` - storage, decode or hash failure
#[tracing::instrument(
    skip(state, auth, multipart),
    fields(subject = ?auth.subject, operation = "upload_image")
)]
pub async fn upload_image(
    State(state): State<Arc<AppState>>,
    auth: AuthContext,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, HttpAppError> {
    let multipart = multipart.map_err(|e| {
        tracing::debug!(error = %e, "Multipart request rejected");
        AppError::BadRequest(PARSE_FORM_FAILED.to_string())
    })?;

    let upload = extract_image(multipart, state.config.max_upload_size_bytes).await?;

    let service = UploadService::new(state.storage.clone(), state.upload_policy());
    let uploaded = service.upload(upload).await?;

    Ok(Json(UploadResponse::new(uploaded.path, uploaded.blurhash)))
}

/// Read the whole form and keep the first `image` part that carries a file name.
///
/// The part itself must not exceed `max_size_bytes`.
async fn extract_image(
    mut multipart: Multipart,
    max_size_bytes: usize,
) -> Result<ImageUpload, AppError> {
    let mut image = None;

    while let Some(field) = multipart.next_field().await.map_err(form_error)? {
        if image.is_some() || field.name() != Some(IMAGE_FIELD_NAME) {
            continue;
        }
        let Some(original_filename) = field.file_name().map(str::to_string) else {
            continue;
        };

        let data = field.bytes().await.map_err(form_error)?;
        if data.len() > max_size_bytes {
            tracing::debug!(
                size_bytes = data.len(),
                max_size_bytes,
                "Image part exceeds upload limit"
            );
            return Err(AppError::BadRequest(PARSE_FORM_FAILED.to_string()));
        }
        tracing::debug!(
            original_filename = %original_filename,
            size_bytes = data.len(),
            "Received image part"
        );
        image = Some(ImageUpload {
            original_filename,
            data,
        });
    }

    image.ok_or_else(|| AppError::BadRequest(RETRIEVE_FILE_FAILED.to_string()))
}

fn form_error(err: axum::extract::multipart::MultipartError) -> AppError {
    tracing::debug!(error = %err, status = %err.status(), "Failed to parse multipart form");
    AppError::BadRequest(PARSE_FORM_FAILED.to_string())
}
