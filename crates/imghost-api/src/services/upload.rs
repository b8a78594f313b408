//! Upload pipeline: name → (extension check) → store → re-read → decode → hash.
//!
//! The HTTP handler owns authentication and multipart parsing; everything after
//! the file part has been read lives here so it can be exercised without a server.

use bytes::Bytes;
use imghost_core::models::UploadedImage;
use imghost_core::{AppError, UploadPolicy};
use imghost_processing::{
    blurhash_for, generate_filename, original_extension, ImageCodec, ProcessingError,
};
use imghost_storage::{Storage, StorageError};
use std::io::Cursor;
use std::sync::Arc;

pub const UNSUPPORTED_EXTENSION: &str =
    "Unsupported image extension. Allowed extensions: .png, .jpg, .jpeg";
pub const CREATE_FAILED: &str = "Unable to create the file for the uploaded image. Check the write permissions on the upload folder.";
pub const COPY_FAILED: &str =
    "Unable to copy the uploaded file data to the destination file on the server";
pub const OPEN_FAILED: &str = "Unable to open the uploaded file";
pub const DECODE_FAILED: &str = "Unable to decode the uploaded file into image.Image";
pub const ENCODE_FAILED: &str = "Unable to encode the image into blurhash";

/// The file part extracted from the upload form.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub original_filename: String,
    pub data: Bytes,
}

pub struct UploadService {
    storage: Arc<dyn Storage>,
    policy: UploadPolicy,
}

impl UploadService {
    pub fn new(storage: Arc<dyn Storage>, policy: UploadPolicy) -> Self {
        Self { storage, policy }
    }

    /// Store the upload under a fresh name and compute its blurhash.
    pub async fn upload(&self, upload: ImageUpload) -> Result<UploadedImage, AppError> {
        let filename = generate_filename(&upload.original_filename);
        let extension = original_extension(&filename).to_string();

        if self.policy.reject_unknown_extensions && ImageCodec::from_extension(&extension).is_none()
        {
            tracing::debug!(
                original_filename = %upload.original_filename,
                extension = %extension,
                "Rejecting upload with unsupported extension"
            );
            return Err(AppError::BadRequest(UNSUPPORTED_EXTENSION.to_string()));
        }

        let size_bytes = upload.data.len();
        let storage_key = self
            .storage
            .upload_stream(&filename, Box::pin(Cursor::new(upload.data)))
            .await
            .map_err(persist_error)?;

        match self.hash_stored(&storage_key, extension).await {
            Ok(blurhash) => {
                tracing::info!(
                    storage_key = %storage_key,
                    size_bytes,
                    blurhash = %blurhash,
                    "Image uploaded"
                );
                Ok(UploadedImage {
                    path: self.storage.public_url(&storage_key),
                    blurhash,
                })
            }
            Err(e) => {
                if self.policy.cleanup_on_failure {
                    self.discard(&storage_key).await;
                } else {
                    tracing::warn!(storage_key = %storage_key, "Leaving stored file after failed upload");
                }
                Err(e)
            }
        }
    }

    /// Read the stored file back and hash it on the blocking pool.
    async fn hash_stored(&self, storage_key: &str, extension: String) -> Result<String, AppError> {
        let data = self
            .storage
            .download(storage_key)
            .await
            .map_err(|e| AppError::internal(OPEN_FAILED, e))?;

        tokio::task::spawn_blocking(move || blurhash_for(&extension, &data))
            .await
            .map_err(|e| AppError::internal(DECODE_FAILED, e))?
            .map_err(processing_error)
    }

    async fn discard(&self, storage_key: &str) {
        match self.storage.delete(storage_key).await {
            Ok(()) => {
                tracing::debug!(storage_key = %storage_key, "Removed stored file after failed upload")
            }
            Err(e) => {
                tracing::error!(storage_key = %storage_key, error = %e, "Failed to remove stored file after failed upload")
            }
        }
    }
}

fn persist_error(err: StorageError) -> AppError {
    match err {
        StorageError::UploadFailed(_) => AppError::internal(COPY_FAILED, err),
        other => AppError::internal(CREATE_FAILED, other),
    }
}

fn processing_error(err: ProcessingError) -> AppError {
    match err {
        ProcessingError::UnsupportedExtension(_) | ProcessingError::Decode(_) => {
            AppError::internal(DECODE_FAILED, err)
        }
        ProcessingError::Encode(_) => AppError::internal(ENCODE_FAILED, err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgb, RgbImage};
    use imghost_core::ErrorMetadata;
    use imghost_storage::LocalStorage;
    use tempfile::TempDir;

    fn encoded(format: ImageFormat) -> Bytes {
        let img = RgbImage::from_fn(24, 16, |x, y| Rgb([(x * 10) as u8, (y * 15) as u8, 60]));
        let mut buffer = Vec::new();
        img.write_to(&mut Cursor::new(&mut buffer), format).unwrap();
        Bytes::from(buffer)
    }

    async fn service(policy: UploadPolicy) -> (UploadService, TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::new(dir.path(), "/uploads".to_string())
            .await
            .unwrap();
        (UploadService::new(Arc::new(storage), policy), dir)
    }

    fn stored_files(dir: &TempDir) -> Vec<String> {
        std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect()
    }

    fn upload(name: &str, data: Bytes) -> ImageUpload {
        ImageUpload {
            original_filename: name.to_string(),
            data,
        }
    }

    #[tokio::test]
    async fn test_png_and_jpeg_succeed() {
        let (service, dir) = service(UploadPolicy::default()).await;

        let png = service
            .upload(upload("cat.png", encoded(ImageFormat::Png)))
            .await
            .unwrap();
        assert!(png.path.starts_with("/uploads/image_"));
        assert!(png.path.ends_with(".png"));
        assert!(!png.blurhash.is_empty());

        let jpeg = service
            .upload(upload("dog.JPG", encoded(ImageFormat::Jpeg)))
            .await
            .unwrap();
        assert!(jpeg.path.ends_with(".JPG"));

        assert_eq!(stored_files(&dir).len(), 2);
    }

    #[tokio::test]
    async fn test_stored_bytes_match_upload() {
        let (service, dir) = service(UploadPolicy::default()).await;
        let data = encoded(ImageFormat::Png);

        let result = service.upload(upload("a.png", data.clone())).await.unwrap();
        let name = result.path.trim_start_matches("/uploads/");
        assert_eq!(std::fs::read(dir.path().join(name)).unwrap(), data.to_vec());
    }

    #[tokio::test]
    async fn test_unknown_extension_rejected_before_write() {
        let (service, dir) = service(UploadPolicy::default()).await;

        let err = service
            .upload(upload("anim.gif", encoded(ImageFormat::Png)))
            .await
            .unwrap_err();
        assert_eq!(err.http_status_code(), 400);
        assert_eq!(err.client_message(), UNSUPPORTED_EXTENSION);

        let err = service
            .upload(upload("noext", encoded(ImageFormat::Png)))
            .await
            .unwrap_err();
        assert_eq!(err.http_status_code(), 400);

        assert!(stored_files(&dir).is_empty());
    }

    #[tokio::test]
    async fn test_legacy_policy_leaves_orphan() {
        let (service, dir) = service(UploadPolicy::legacy()).await;

        let err = service
            .upload(upload("anim.gif", encoded(ImageFormat::Png)))
            .await
            .unwrap_err();
        assert_eq!(err.http_status_code(), 500);
        assert_eq!(err.client_message(), DECODE_FAILED);

        let files = stored_files(&dir);
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with(".gif"));
    }

    #[tokio::test]
    async fn test_windows_client_path_fails_at_decode() {
        let (service, dir) = service(UploadPolicy::legacy()).await;

        let err = service
            .upload(upload("C:\\dir.d\\noext", encoded(ImageFormat::Png)))
            .await
            .unwrap_err();
        assert_eq!(err.client_message(), DECODE_FAILED);

        let files = stored_files(&dir);
        assert_eq!(files.len(), 1);
        assert!(!files[0].contains('.'));
    }

    #[tokio::test]
    async fn test_garbage_content_cleaned_up() {
        let (service, dir) = service(UploadPolicy::default()).await;

        let err = service
            .upload(upload("fake.png", Bytes::from_static(b"this is not a png")))
            .await
            .unwrap_err();
        assert_eq!(err.http_status_code(), 500);
        assert_eq!(err.client_message(), DECODE_FAILED);
        assert!(stored_files(&dir).is_empty());
    }

    #[tokio::test]
    async fn test_mismatched_content_kept_without_cleanup() {
        let policy = UploadPolicy {
            reject_unknown_extensions: true,
            cleanup_on_failure: false,
        };
        let (service, dir) = service(policy).await;

        let err = service
            .upload(upload("really_png.jpg", encoded(ImageFormat::Png)))
            .await
            .unwrap_err();
        assert_eq!(err.client_message(), DECODE_FAILED);
        assert_eq!(stored_files(&dir).len(), 1);
    }

    #[tokio::test]
    async fn test_missing_upload_dir_is_create_failure() {
        let (service, dir) = service(UploadPolicy::default()).await;
        let path = dir.path().to_path_buf();
        drop(dir);
        assert!(!path.exists());

        let err = service
            .upload(upload("a.png", encoded(ImageFormat::Png)))
            .await
            .unwrap_err();
        assert_eq!(err.http_status_code(), 500);
        assert_eq!(err.client_message(), CREATE_FAILED);
    }
}
