//! Imghost API Library
//!
//! HTTP handlers, middleware and application setup. The binary in `main.rs`
//! only loads configuration and starts the server.

mod handlers;
mod middleware;
mod services;
mod telemetry;

pub mod auth;
pub mod error;
pub mod setup;
pub mod state;

pub use error::HttpAppError;
pub use middleware::RequestId;
pub use services::upload::{ImageUpload, UploadService};
