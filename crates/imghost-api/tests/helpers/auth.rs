use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde_json::json;

/// Shared secret the test app is configured with.
pub const TEST_JWT_KEY: &str = "test-jwt-key-at-least-32-characters-long";

fn now() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("clock after epoch")
        .as_secs() as i64
}

pub fn sign(secret: &str, claims: serde_json::Value) -> String {
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("Failed to sign token")
}

/// A token valid for one hour.
pub fn valid_token() -> String {
    sign(TEST_JWT_KEY, json!({"sub": "integration-test", "exp": now() + 3600}))
}

pub fn expired_token() -> String {
    sign(TEST_JWT_KEY, json!({"sub": "integration-test", "exp": now() - 3600}))
}

pub fn foreign_token() -> String {
    sign(
        "some-other-secret-that-is-long-enough",
        json!({"sub": "integration-test", "exp": now() + 3600}),
    )
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}
