use crate::auth::models::{AuthContext, TokenClaims};
use crate::error::HttpAppError;
use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::{IntoResponse, Response},
};
use imghost_core::AppError;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use std::collections::HashSet;
use std::sync::Arc;

const BEARER_PREFIX: &str = "Bearer ";
const INVALID_TOKEN: &str = "Invalid token";

/// Shared-secret bearer token verification.
#[derive(Clone)]
pub struct AuthState {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl AuthState {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.algorithms = vec![Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];
        validation.required_spec_claims = HashSet::new();
        validation.validate_aud = false;
        validation.validate_nbf = true;

        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Verify a raw `Authorization` header value. A leading `Bearer ` is optional.
    pub fn verify(&self, header_value: &str) -> Result<TokenClaims, AppError> {
        let token = header_value
            .strip_prefix(BEARER_PREFIX)
            .unwrap_or(header_value)
            .trim();

        if token.is_empty() {
            return Err(AppError::Unauthorized(INVALID_TOKEN.to_string()));
        }

        decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::warn!(error = %e, "Token verification failed");
                AppError::Unauthorized(INVALID_TOKEN.to_string())
            })
    }
}

pub async fn auth_middleware(
    State(auth_state): State<Arc<AuthState>>,
    mut request: Request,
    next: Next,
) -> Response {
    let auth_header = match request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
    {
        Some(h) => h,
        None => {
            tracing::warn!("Missing authorization header");
            return HttpAppError(AppError::Unauthorized(INVALID_TOKEN.to_string())).into_response();
        }
    };

    let claims = match auth_state.verify(auth_header) {
        Ok(claims) => claims,
        Err(e) => return HttpAppError(e).into_response(),
    };

    tracing::debug!(subject = ?claims.subject(), "Request authenticated");
    request.extensions_mut().insert(AuthContext::from(&claims));

    next.run(request).await
}
