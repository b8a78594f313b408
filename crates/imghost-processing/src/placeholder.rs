//! Blurhash placeholder encoding.

use image::DynamicImage;
use imghost_core::constants::{BLURHASH_COMPONENTS_X, BLURHASH_COMPONENTS_Y};

use crate::error::ProcessingError;

/// Blurhash encoder with a fixed component grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlurhashEncoder {
    components_x: u32,
    components_y: u32,
}

impl Default for BlurhashEncoder {
    fn default() -> Self {
        Self::new(BLURHASH_COMPONENTS_X, BLURHASH_COMPONENTS_Y)
    }
}

impl BlurhashEncoder {
    pub fn new(components_x: u32, components_y: u32) -> Self {
        Self {
            components_x,
            components_y,
        }
    }

    pub fn encode(&self, image: &DynamicImage) -> Result<String, ProcessingError> {
        let rgba = image.to_rgba8();
        let (width, height) = rgba.dimensions();
        if width == 0 || height == 0 {
            return Err(ProcessingError::Encode("image has no pixels".to_string()));
        }

        let hash = ::blurhash::encode(
            self.components_x,
            self.components_y,
            width,
            height,
            rgba.as_raw(),
        )
        .map_err(|e| ProcessingError::Encode(format!("{:?}", e)))?;

        tracing::debug!(width, height, hash = %hash, "Computed blurhash");
        Ok(hash)
    }
}
