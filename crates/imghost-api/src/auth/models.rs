use crate::error::HttpAppError;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use imghost_core::AppError;
use serde::{Deserialize, Serialize};

/// JWT claims structure
///
/// No claim is required; `exp` and `nbf` are checked by the validator when
/// present and everything else is carried through untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenClaims {
    #[serde(flatten)]
    pub claims: serde_json::Map<String, serde_json::Value>,
}

impl TokenClaims {
    /// The `sub` claim when it is a string.
    pub fn subject(&self) -> Option<&str> {
        self.claims.get("sub").and_then(|v| v.as_str())
    }
}

/// Caller identity stored in request extensions by the auth middleware.
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub subject: Option<String>,
}

impl From<&TokenClaims> for AuthContext {
    fn from(claims: &TokenClaims) -> Self {
        Self {
            subject: claims.subject().map(str::to_string),
        }
    }
}

// Extension cannot be combined with Multipart, so the context is read from parts directly
impl<S> FromRequestParts<S> for AuthContext
where
    S: Send + Sync,
{
    type Rejection = HttpAppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| HttpAppError(AppError::Unauthorized("Invalid token".to_string())))
    }
}
