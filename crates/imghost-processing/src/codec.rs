//! Extension based decoder selection.
//!
//! The decoder is picked from the stored file's extension only; content is
//! never sniffed, so a PNG renamed to `.jpg` fails to decode.

use image::{DynamicImage, ImageFormat};

use crate::error::ProcessingError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageCodec {
    Png,
    Jpeg,
}

impl ImageCodec {
    /// Extensions (with the leading dot) that have a decoder.
    pub const SUPPORTED_EXTENSIONS: [&'static str; 3] = [".png", ".jpg", ".jpeg"];

    /// Map an extension such as `.png` (ASCII case-insensitive) to its codec.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            ".png" => Some(ImageCodec::Png),
            ".jpg" | ".jpeg" => Some(ImageCodec::Jpeg),
            _ => None,
        }
    }

    pub fn format(self) -> ImageFormat {
        match self {
            ImageCodec::Png => ImageFormat::Png,
            ImageCodec::Jpeg => ImageFormat::Jpeg,
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            ImageCodec::Png => "image/png",
            ImageCodec::Jpeg => "image/jpeg",
        }
    }

    pub fn decode(self, data: &[u8]) -> Result<DynamicImage, ProcessingError> {
        Ok(image::load_from_memory_with_format(data, self.format())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgb, RgbImage};
    use std::io::Cursor;

    fn encode(format: ImageFormat) -> Vec<u8> {
        let img = RgbImage::from_pixel(8, 6, Rgb([30, 120, 200]));
        let mut buffer = Vec::new();
        img.write_to(&mut Cursor::new(&mut buffer), format).unwrap();
        buffer
    }

    #[test]
    fn test_from_extension() {
        assert_eq!(ImageCodec::from_extension(".png"), Some(ImageCodec::Png));
        assert_eq!(ImageCodec::from_extension(".jpg"), Some(ImageCodec::Jpeg));
        assert_eq!(ImageCodec::from_extension(".jpeg"), Some(ImageCodec::Jpeg));
        assert_eq!(ImageCodec::from_extension(".JPEG"), Some(ImageCodec::Jpeg));
        assert_eq!(ImageCodec::from_extension(".gif"), None);
        assert_eq!(ImageCodec::from_extension("png"), None);
        assert_eq!(ImageCodec::from_extension(""), None);
    }

    #[test]
    fn test_supported_extensions_all_map() {
        for ext in ImageCodec::SUPPORTED_EXTENSIONS {
            assert!(ImageCodec::from_extension(ext).is_some(), "{ext}");
        }
    }

    #[test]
    fn test_decode_png_and_jpeg() {
        let png = ImageCodec::Png.decode(&encode(ImageFormat::Png)).unwrap();
        assert_eq!((png.width(), png.height()), (8, 6));

        let jpeg = ImageCodec::Jpeg.decode(&encode(ImageFormat::Jpeg)).unwrap();
        assert_eq!((jpeg.width(), jpeg.height()), (8, 6));
    }

    #[test]
    fn test_mismatched_content_fails() {
        let png_bytes = encode(ImageFormat::Png);
        assert!(matches!(
            ImageCodec::Jpeg.decode(&png_bytes),
            Err(ProcessingError::Decode(_))
        ));
        assert!(ImageCodec::Png.decode(b"not an image").is_err());
    }
}
