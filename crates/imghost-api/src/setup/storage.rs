//! Storage backend initialization

use anyhow::Result;
use imghost_core::constants::UPLOADS_URL_PREFIX;
use imghost_core::Config;
use imghost_storage::{LocalStorage, Storage};
use std::sync::Arc;

/// Create the uploads directory (if needed) and wrap it in a storage handle.
pub async fn setup_storage(config: &Config) -> Result<Arc<dyn Storage>> {
    let storage = LocalStorage::new(&config.uploads_dir, UPLOADS_URL_PREFIX.to_string()).await?;

    tracing::info!(
        path = %storage.base_path().display(),
        url_prefix = UPLOADS_URL_PREFIX,
        "Local storage initialized"
    );

    Ok(Arc::new(storage))
}
