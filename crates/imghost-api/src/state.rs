//! Application state shared by every handler.

use imghost_core::{Config, UploadPolicy};
use imghost_storage::Storage;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub storage: Arc<dyn Storage>,
}

impl AppState {
    pub fn new(config: Config, storage: Arc<dyn Storage>) -> Self {
        Self { config, storage }
    }

    pub fn upload_policy(&self) -> UploadPolicy {
        self.config.upload_policy
    }
}
