//! Imghost Storage Library
//!
//! This crate provides the storage abstraction for uploaded images and its
//! local filesystem implementation.
//!
//! # Storage key format
//!
//! Keys are bare filenames inside a single flat directory (`image_<ts>_<rand8><ext>`).
//! Keys must not be empty, contain path separators or `..`, and must resolve
//! inside the storage root.

pub mod local;
pub mod traits;

// Re-export commonly used types
pub use local::LocalStorage;
pub use traits::{ByteStream, Storage, StorageError, StorageResult};
