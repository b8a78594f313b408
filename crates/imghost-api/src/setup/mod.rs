//! Application setup and initialization
//!
//! Kept out of main.rs so integration tests can build the same router.

pub mod routes;
pub mod server;
pub mod storage;

use crate::state::AppState;
use anyhow::{Context, Result};
use imghost_core::Config;
use std::sync::Arc;

/// Initialize telemetry, storage and routes.
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    crate::telemetry::init_telemetry(config.log_json, &config.environment)
        .map_err(|e| anyhow::anyhow!("Failed to initialize telemetry: {}", e))?;

    tracing::info!(
        environment = %config.environment,
        uploads_dir = %config.uploads_dir.display(),
        reject_unknown_extensions = config.upload_policy.reject_unknown_extensions,
        cleanup_on_failure = config.upload_policy.cleanup_on_failure,
        "Configuration loaded and validated successfully"
    );

    build_app(config).await
}

/// Storage, state and router without touching the global subscriber.
pub async fn build_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    let storage = storage::setup_storage(&config)
        .await
        .context("Failed to initialize storage")?;

    let state = Arc::new(AppState::new(config.clone(), storage));
    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}
