//! Bearer token issuance and verification.
//!
//! Tokens are opaque strings checked for membership and non-expiry on
//! every guarded request. The issued set only grows; expired tokens are
//! never garbage-collected. Acceptable for a test double, a defect in
//! anything else.

use std::sync::Arc;

use chrono::{Duration, Utc};
use tokio::sync::RwLock;

use crate::domain::error::ApiError;
use crate::domain::ids;
use crate::domain::models::IssuedToken;

/// Mints bearer tokens and gates protected operations.
#[derive(Debug, Clone)]
pub struct TokenService {
    prefix: &'static str,
    ttl_secs: i64,
    issued: Arc<RwLock<Vec<IssuedToken>>>,
}

impl TokenService {
    /// `prefix` is baked into every token value; `ttl_secs` is the
    /// declared lifetime of tokens minted by [`issue`](Self::issue).
    pub fn new(prefix: &'static str, ttl_secs: i64) -> Self {
        Self {
            prefix,
            ttl_secs,
            issued: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Declared token lifetime in seconds, as reported by the login
    /// endpoints.
    pub fn ttl_secs(&self) -> i64 {
        self.ttl_secs
    }

    /// Mint a token with the configured lifetime.
    pub async fn issue(&self) -> IssuedToken {
        self.issue_with_ttl(self.ttl_secs).await
    }

    /// Mint a token expiring `ttl_secs` from now.
    pub async fn issue_with_ttl(&self, ttl_secs: i64) -> IssuedToken {
        let token = IssuedToken {
            token: ids::token_value(self.prefix),
            expires_at: Utc::now() + Duration::seconds(ttl_secs),
        };
        self.issued.write().await.push(token.clone());
        token
    }

    /// Accept iff the token was issued here and `expires_at > now`,
    /// compared at check time. Pure gate, no side effect on success.
    pub async fn verify(&self, token: &str) -> Result<(), ApiError> {
        let now = Utc::now();
        let issued = self.issued.read().await;
        if issued
            .iter()
            .any(|t| t.token == token && t.expires_at > now)
        {
            Ok(())
        } else {
            Err(ApiError::InvalidToken)
        }
    }
}
