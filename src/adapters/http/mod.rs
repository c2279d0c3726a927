//! HTTP surface of both simulators.
//!
//! Each service builds an axum `Router` over an explicitly constructed
//! application state (seeded stores + token service) and serves it with
//! CORS and request tracing, mirroring the real vendor endpoints.

pub mod auth;
pub mod error;
pub mod logistics;
pub mod telephony;

pub use error::ErrorResponse;

/// Resolves when ctrl-c is received; used as the graceful-shutdown
/// signal for both servers.
pub(crate) async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}

/// Liveness probe shared by both routers.
pub(crate) async fn health_check() -> &'static str {
    "OK"
}
