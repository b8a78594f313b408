//! Configuration module
//!
//! Configuration is read once at startup from the environment (optionally
//! seeded from a `.env` file) and passed explicitly into the HTTP layer.

use std::env;
use std::path::PathBuf;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_UPLOADS_DIR: &str = "./uploads";
const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000";
const MAX_UPLOAD_SIZE_MB: usize = 10;
const RECOMMENDED_SECRET_LEN: usize = 32;
const DEFAULT_HTTP_CONCURRENCY_LIMIT: usize = 10_000;

/// How the upload pipeline treats unsupported files and partial writes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UploadPolicy {
    /// Reject extensions without a decoder before anything is written.
    /// When false the file is stored first and decoding fails afterwards.
    pub reject_unknown_extensions: bool,
    /// Delete the stored file when a later pipeline step fails.
    pub cleanup_on_failure: bool,
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            reject_unknown_extensions: true,
            cleanup_on_failure: true,
        }
    }
}

impl UploadPolicy {
    /// Store-then-decode ordering with orphaned files left on disk.
    pub fn legacy() -> Self {
        Self {
            reject_unknown_extensions: false,
            cleanup_on_failure: false,
        }
    }
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    /// Shared secret used to verify bearer tokens (`JWT_KEY`).
    pub jwt_key: String,
    pub cors_origins: Vec<String>,
    pub uploads_dir: PathBuf,
    pub max_upload_size_bytes: usize,
    pub environment: String,
    pub upload_policy: UploadPolicy,
    pub log_json: bool,
    /// Maximum number of requests handled at once.
    pub http_concurrency_limit: usize,
}

impl Config {
    /// Load `.env` (if present) and build the configuration from the process environment.
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = lookup("ENVIRONMENT")
            .or_else(|| lookup("APP_ENV"))
            .unwrap_or_else(|| "development".to_string());

        let cors_origins = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| DEFAULT_CORS_ORIGINS.to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let max_upload_size_mb = lookup("MAX_UPLOAD_SIZE_MB")
            .unwrap_or_else(|| MAX_UPLOAD_SIZE_MB.to_string())
            .parse::<usize>()
            .unwrap_or(MAX_UPLOAD_SIZE_MB);

        let defaults = UploadPolicy::default();
        let upload_policy = UploadPolicy {
            reject_unknown_extensions: parse_bool(
                lookup("REJECT_UNKNOWN_EXTENSIONS"),
                defaults.reject_unknown_extensions,
            ),
            cleanup_on_failure: parse_bool(
                lookup("CLEANUP_ON_FAILURE"),
                defaults.cleanup_on_failure,
            ),
        };

        let config = Config {
            server_port: lookup("PORT")
                .unwrap_or_else(|| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?,
            jwt_key: lookup("JWT_KEY")
                .ok_or_else(|| anyhow::anyhow!("JWT_KEY must be set for authentication"))?,
            cors_origins,
            uploads_dir: lookup("UPLOADS_DIR")
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_UPLOADS_DIR.to_string())
                .into(),
            max_upload_size_bytes: max_upload_size_mb * 1024 * 1024,
            environment,
            upload_policy,
            log_json: lookup("LOG_FORMAT")
                .map(|s| s.eq_ignore_ascii_case("json"))
                .unwrap_or(false),
            http_concurrency_limit: lookup("HTTP_CONCURRENCY_LIMIT")
                .and_then(|s| s.parse::<usize>().ok())
                .unwrap_or(DEFAULT_HTTP_CONCURRENCY_LIMIT)
                .max(1),
        };

        config.validate()?;
        Ok(config)
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.jwt_key.trim().is_empty() {
            return Err(anyhow::anyhow!("JWT_KEY must not be empty"));
        }

        if self.jwt_key.len() < RECOMMENDED_SECRET_LEN {
            tracing::warn!(
                length = self.jwt_key.len(),
                "JWT_KEY is shorter than {} characters; consider a longer secret",
                RECOMMENDED_SECRET_LEN
            );
        }

        if self.max_upload_size_bytes == 0 {
            return Err(anyhow::anyhow!("MAX_UPLOAD_SIZE_MB must be greater than 0"));
        }

        if self.is_production() && self.cors_origins.iter().any(|o| o == "*") {
            return Err(anyhow::anyhow!(
                "CORS_ORIGINS cannot be '*' in production. Please specify explicit origins."
            ));
        }

        Ok(())
    }
}

fn parse_bool(value: Option<String>, default: bool) -> bool {
    value
        .map(|s| s.trim().to_lowercase())
        .and_then(|s| match s.as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
        .unwrap_or(default)
}
