//! HTTP Basic authentication

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use base64::{Engine, prelude::BASE64_STANDARD};

use crate::api::AppState;
use crate::api::error::ApiError;

/// Username/password the stub accepts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    pub username: String,
    pub password: String,
}

impl BasicCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Parses an `Authorization: Basic ...` header value
    pub fn from_header(value: &str) -> Option<Self> {
        let encoded = value.strip_prefix("Basic ")?;
        let decoded = BASE64_STANDARD.decode(encoded.trim()).ok()?;
        let decoded = String::from_utf8(decoded).ok()?;
        let (username, password) = decoded.split_once(':')?;
        Some(Self::new(username, password))
    }
}

/// Rejects requests whose credentials do not match the configured pair
///
/// With no credentials configured every request passes.
pub async fn require_basic_auth(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let Some(expected) = &state.credentials else {
        return Ok(next.run(request).await);
    };

    let presented = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(BasicCredentials::from_header);

    if presented.as_ref() != Some(expected) {
        tracing::warn!("Rejected request to {} without valid credentials", request.uri());
        return Err(ApiError::Unauthorized);
    }

    Ok(next.run(request).await)
}
