use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProcessingError {
    #[error("No decoder for extension '{0}'")]
    UnsupportedExtension(String),

    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Failed to encode blurhash: {0}")]
    Encode(String),
}
