//! Bearer token extraction for guarded endpoints.

use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;

use crate::domain::error::ApiError;
use crate::services::TokenService;

/// Gate a request behind the bearer token check.
///
/// Missing or malformed `Authorization` header fails as plain
/// `Unauthorized`; a present but unknown/expired token reports
/// `Invalid or expired token`.
pub async fn require_bearer(tokens: &TokenService, headers: &HeaderMap) -> Result<(), ApiError> {
    let token = bearer_token(headers)?;
    tokens.verify(token).await
}

fn bearer_token(headers: &HeaderMap) -> Result<&str, ApiError> {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or(ApiError::MissingBearer)
}
