//! Constants shared across crates.

/// URL prefix under which stored images are served.
pub const UPLOADS_URL_PREFIX: &str = "/uploads";

/// Multipart field that carries the uploaded image.
pub const IMAGE_FIELD_NAME: &str = "image";

/// Prefix of every generated filename.
pub const FILENAME_PREFIX: &str = "image";

/// Exclusive upper bound of the random filename component (8 decimal digits).
pub const FILENAME_RANDOM_UPPER: u32 = 100_000_000;

/// Blurhash grid: horizontal components.
pub const BLURHASH_COMPONENTS_X: u32 = 4;

/// Blurhash grid: vertical components.
pub const BLURHASH_COMPONENTS_Y: u32 = 3;

pub const WELCOME_MESSAGE: &str = "Welcome to Image Hoster API written in Rust";
