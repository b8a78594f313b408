//! Imghost Core Library
//!
//! This crate provides the configuration, error types, constants and response
//! models shared by the storage, processing and API crates.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use config::{Config, UploadPolicy};
pub use error::{AppError, ErrorMetadata, LogLevel};
