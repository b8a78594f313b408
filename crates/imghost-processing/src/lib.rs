//! Imghost Processing Library
//!
//! Everything the upload pipeline does to an image that is not HTTP or disk:
//! naming the stored file, picking a decoder from the extension, and computing
//! the blurhash placeholder.

pub mod codec;
pub mod error;
pub mod filename;
pub mod placeholder;

pub use codec::ImageCodec;
pub use error::ProcessingError;
pub use filename::{generate_filename, original_extension};
pub use placeholder::BlurhashEncoder;

/// Decode `data` with the codec chosen by `extension` and hash it.
///
/// An extension without a codec is reported as a decode failure.
pub fn blurhash_for(extension: &str, data: &[u8]) -> Result<String, ProcessingError> {
    let codec = ImageCodec::from_extension(extension)
        .ok_or_else(|| ProcessingError::UnsupportedExtension(extension.to_string()))?;
    let image = codec.decode(data)?;
    BlurhashEncoder::default().encode(&image)
}
