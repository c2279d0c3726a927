//! Credential and token records.
//!
//! Credentials are fixed seed data; this is a test double, not a real
//! authentication system.

use chrono::{DateTime, Utc};

/// Seeded login record for the logistics service.
///
/// Accepted either as a username/password pair or via the standalone
/// API key.
#[derive(Debug, Clone)]
pub struct ApiUser {
    pub username: String,
    pub password: String,
    pub api_key: String,
}

/// Seeded OAuth client for the telephony service.
#[derive(Debug, Clone)]
pub struct ApiClient {
    pub client_id: String,
    pub client_secret: String,
    pub account_id: String,
}

/// An issued bearer token.
///
/// Tokens are never revoked; they simply age out. Valid iff
/// `expires_at > now` at check time.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}
