//! Common test utilities for integration tests
//!
//! Drives the simulator routers in-process: requests are dispatched
//! straight into the axum `Router` with no network listener involved.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

/// Dispatch one request into the router and decode the JSON response.
///
/// Non-JSON bodies (e.g. the health probe) decode to `Value::Null`.
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("request build"),
        None => builder.body(Body::empty()).expect("request build"),
    };

    let response = app.clone().oneshot(request).await.expect("router response");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("response body")
        .to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

pub async fn get(app: &Router, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
    send(app, "GET", uri, token, None).await
}

pub async fn post_json(
    app: &Router,
    uri: &str,
    token: Option<&str>,
    body: Value,
) -> (StatusCode, Value) {
    send(app, "POST", uri, token, Some(body)).await
}

#[allow(dead_code)]
pub async fn put_json(
    app: &Router,
    uri: &str,
    token: Option<&str>,
    body: Value,
) -> (StatusCode, Value) {
    send(app, "PUT", uri, token, Some(body)).await
}

/// Log into the logistics simulator with the seeded API key.
#[allow(dead_code)]
pub async fn logistics_token(app: &Router) -> String {
    let (status, body) = post_json(
        app,
        "/auth/login",
        None,
        serde_json::json!({"apiKey": "test_api_key"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login failed: {body}");
    body["token"].as_str().expect("token in login body").to_string()
}

/// Log into the telephony simulator with the seeded client credentials.
#[allow(dead_code)]
pub async fn telephony_token(app: &Router) -> String {
    let (status, body) = post_json(
        app,
        "/oauth/token",
        None,
        serde_json::json!({
            "grant_type": "client_credentials",
            "client_id": "test_api_key",
            "client_secret": "test_api_secret",
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "token grant failed: {body}");
    body["access_token"]
        .as_str()
        .expect("access_token in grant body")
        .to_string()
}
