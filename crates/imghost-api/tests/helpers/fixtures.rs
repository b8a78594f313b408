//! Test fixtures: small encoded images and multipart forms.

use axum_test::multipart::{MultipartForm, Part};
use image::{ImageFormat, Rgb, RgbImage};
use std::io::Cursor;

fn gradient(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x * 255 / width) as u8, (y * 255 / height) as u8, 128])
    })
}

fn encode(format: ImageFormat) -> Vec<u8> {
    let mut buffer = Vec::new();
    gradient(32, 20)
        .write_to(&mut Cursor::new(&mut buffer), format)
        .expect("Failed to encode fixture");
    buffer
}

pub fn png_bytes() -> Vec<u8> {
    encode(ImageFormat::Png)
}

pub fn jpeg_bytes() -> Vec<u8> {
    encode(ImageFormat::Jpeg)
}

/// A valid PNG padded with trailing bytes after `IEND` to exactly `len` bytes.
pub fn png_bytes_of_len(len: usize) -> Vec<u8> {
    let mut data = png_bytes();
    assert!(data.len() <= len, "fixture larger than requested length");
    data.resize(len, 0);
    data
}

/// Form with a single file part named `field`.
pub fn image_form(field: &str, filename: &str, data: Vec<u8>) -> MultipartForm {
    MultipartForm::new().add_part(
        field.to_string(),
        Part::bytes(data)
            .file_name(filename.to_string())
            .mime_type("application/octet-stream"),
    )
}
