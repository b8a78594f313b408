//! Test helpers: build the router over a temporary uploads directory.
//!
//! Run from workspace root: `cargo test -p imghost-api`.

pub mod auth;
pub mod fixtures;

use axum_test::TestServer;
use imghost_api::setup;
use imghost_core::Config;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test application: server plus the directory it stores uploads in.
pub struct TestApp {
    pub server: TestServer,
    pub _temp_dir: TempDir,
    pub uploads_dir: PathBuf,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }

    pub fn uploads_dir(&self) -> &Path {
        &self.uploads_dir
    }

    /// Names of every file currently in the uploads directory.
    pub fn stored_files(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(&self.uploads_dir)
            .expect("uploads dir readable")
            .map(|e| e.expect("dir entry").file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

/// Setup test app with default settings.
pub async fn setup_test_app() -> TestApp {
    setup_test_app_with(&[]).await
}

/// Setup test app with extra configuration variables.
pub async fn setup_test_app_with(overrides: &[(&str, &str)]) -> TestApp {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let uploads_dir = temp_dir.path().join("uploads");

    let mut vars: HashMap<String, String> = HashMap::new();
    vars.insert("JWT_KEY".to_string(), auth::TEST_JWT_KEY.to_string());
    vars.insert(
        "UPLOADS_DIR".to_string(),
        uploads_dir.to_string_lossy().into_owned(),
    );
    for (key, value) in overrides {
        vars.insert(key.to_string(), value.to_string());
    }

    let config = Config::from_lookup(|key| vars.get(key).cloned()).expect("valid test config");
    let (_state, router) = setup::build_app(config)
        .await
        .expect("Failed to build app");

    let server = TestServer::new(router).expect("Failed to create test server");

    TestApp {
        server,
        _temp_dir: temp_dir,
        uploads_dir,
    }
}
