//! Telephony simulator.
//!
//! Mirrors the calling vendor API: OAuth client-credentials login,
//! account-scoped call and contact listings, and call lifecycle
//! actions (place, end, DTMF).

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::Json;
use axum::routing::{get, post};
use axum::Router;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::adapters::http::{auth, health_check, shutdown_signal};
use crate::domain::error::ApiError;
use crate::domain::ids;
use crate::domain::models::{
    ApiClient, Call, CallDirection, CallStatus, Contact, TelephonyConfig,
};
use crate::services::{seed, AnswerScheduler, EntityStore, TokenService};

/// Default caller id when a placed call names no `from_number`.
const DEFAULT_FROM_NUMBER: &str = "555-987-6543";

/// Everything the telephony handlers need, built once at startup.
#[derive(Debug)]
pub struct TelephonyState {
    pub calls: EntityStore<Call>,
    pub contacts: EntityStore<Contact>,
    pub clients: Vec<ApiClient>,
    pub tokens: TokenService,
    pub answers: AnswerScheduler,
}

impl TelephonyState {
    /// Construct a state seeded with the fixture records.
    pub fn seeded(token_ttl_secs: i64, answer_delay: Duration) -> Self {
        Self {
            calls: EntityStore::seeded(seed::calls()),
            contacts: EntityStore::seeded(seed::contacts()),
            clients: seed::api_clients(),
            tokens: TokenService::new("dp_token_", token_ttl_secs),
            answers: AnswerScheduler::new(answer_delay),
        }
    }
}

// Request/response shapes

#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    #[serde(default)]
    pub grant_type: Option<String>,
    #[serde(default)]
    pub client_id: Option<String>,
    #[serde(default)]
    pub client_secret: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: &'static str,
    pub expires_in: i64,
}

#[derive(Debug, Deserialize)]
pub struct CallQuery {
    #[serde(default = "default_limit")]
    pub limit: usize,
    #[serde(default)]
    pub offset: usize,
}

#[derive(Debug, Serialize)]
pub struct CallListResponse {
    pub total: usize,
    pub offset: usize,
    pub limit: usize,
    pub calls: Vec<Call>,
}

#[derive(Debug, Deserialize)]
pub struct PlaceCallRequest {
    #[serde(default)]
    pub to_number: Option<String>,
    #[serde(default)]
    pub from_number: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct EndCallResponse {
    pub success: bool,
    pub call: Call,
}

#[derive(Debug, Deserialize)]
pub struct DtmfRequest {
    #[serde(default)]
    pub digits: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DtmfResponse {
    pub success: bool,
    pub call_id: String,
    pub digits: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct ContactQuery {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default = "default_limit")]
    pub limit: usize,
    #[serde(default)]
    pub offset: usize,
}

#[derive(Debug, Serialize)]
pub struct ContactListResponse {
    pub total: usize,
    pub offset: usize,
    pub limit: usize,
    pub contacts: Vec<Contact>,
}

const fn default_limit() -> usize {
    20
}

/// Build the telephony router over a seeded state.
pub fn router(state: TelephonyState) -> Router {
    let state = Arc::new(state);
    Router::new()
        .route("/oauth/token", post(oauth_token))
        .route(
            "/accounts/{account_id}/calls",
            get(list_calls).post(place_call),
        )
        .route("/calls/{id}/end", post(end_call))
        .route("/calls/{id}/dtmf", post(send_dtmf))
        .route("/accounts/{account_id}/contacts", get(list_contacts))
        .route("/health", get(health_check))
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Seed, bind, and serve the telephony simulator until ctrl-c.
pub async fn serve(config: TelephonyConfig) -> Result<()> {
    let state = TelephonyState::seeded(
        config.token_ttl_secs,
        Duration::from_millis(config.answer_delay_ms),
    );
    let app = router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind telephony simulator to {addr}"))?;

    info!("telephony simulator listening on {addr}");
    info!("test credentials: client_id test_api_key / client_secret test_api_secret");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("telephony simulator exited")?;
    Ok(())
}

// Handler functions

async fn oauth_token(
    State(state): State<Arc<TelephonyState>>,
    Json(req): Json<TokenRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    if req.grant_type.as_deref() != Some("client_credentials") {
        return Err(ApiError::InvalidGrant);
    }

    let known = state.clients.iter().any(|c| {
        req.client_id.as_deref() == Some(c.client_id.as_str())
            && req.client_secret.as_deref() == Some(c.client_secret.as_str())
    });
    if !known {
        return Err(ApiError::InvalidCredentials);
    }

    let issued = state.tokens.issue().await;
    Ok(Json(TokenResponse {
        access_token: issued.token,
        token_type: "bearer",
        expires_in: state.tokens.ttl_secs(),
    }))
}

async fn list_calls(
    State(state): State<Arc<TelephonyState>>,
    headers: HeaderMap,
    Path(_account_id): Path<String>,
    Query(params): Query<CallQuery>,
) -> Result<Json<CallListResponse>, ApiError> {
    auth::require_bearer(&state.tokens, &headers).await?;

    let window = state.calls.slice(|_| true, params.offset, params.limit).await;
    Ok(Json(CallListResponse {
        total: window.total,
        offset: params.offset,
        limit: params.limit,
        calls: window.items,
    }))
}

async fn place_call(
    State(state): State<Arc<TelephonyState>>,
    headers: HeaderMap,
    Path(account_id): Path<String>,
    Json(req): Json<PlaceCallRequest>,
) -> Result<(StatusCode, Json<Call>), ApiError> {
    auth::require_bearer(&state.tokens, &headers).await?;

    let Some(to) = req.to_number.filter(|n| !n.is_empty()) else {
        return Err(ApiError::MissingField("Phone number"));
    };

    let call = Call {
        id: ids::call_id(),
        from: req
            .from_number
            .unwrap_or_else(|| DEFAULT_FROM_NUMBER.to_string()),
        to,
        status: CallStatus::Ringing,
        duration: None,
        recording_url: None,
        direction: CallDirection::Outbound,
        start_time: Utc::now(),
        end_time: None,
        notes: None,
        account_id: Some(account_id),
    };

    state.calls.insert(call.clone()).await;
    // The far end "answers" a moment after the response goes out.
    state.answers.schedule(state.calls.clone(), call.id.clone());

    Ok((StatusCode::CREATED, Json(call)))
}

async fn end_call(
    State(state): State<Arc<TelephonyState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<EndCallResponse>, ApiError> {
    auth::require_bearer(&state.tokens, &headers).await?;

    let call = state.calls.get(&id).await.ok_or(ApiError::NotFound("Call"))?;
    if call.status == CallStatus::Completed {
        return Err(ApiError::InvalidState("Call already ended"));
    }

    let call = state
        .calls
        .update(&id, |c| c.end(Utc::now()))
        .await
        .ok_or(ApiError::NotFound("Call"))?;

    Ok(Json(EndCallResponse {
        success: true,
        call,
    }))
}

async fn send_dtmf(
    State(state): State<Arc<TelephonyState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(req): Json<DtmfRequest>,
) -> Result<Json<DtmfResponse>, ApiError> {
    auth::require_bearer(&state.tokens, &headers).await?;

    let call = state.calls.get(&id).await.ok_or(ApiError::NotFound("Call"))?;
    if call.status != CallStatus::InProgress {
        return Err(ApiError::InvalidState(
            "Call must be in progress to send DTMF",
        ));
    }

    let Some(digits) = req.digits.filter(|d| !d.is_empty()) else {
        return Err(ApiError::MissingField("Digits"));
    };

    Ok(Json(DtmfResponse {
        success: true,
        call_id: call.id,
        digits,
        timestamp: Utc::now(),
    }))
}

async fn list_contacts(
    State(state): State<Arc<TelephonyState>>,
    headers: HeaderMap,
    Path(_account_id): Path<String>,
    Query(params): Query<ContactQuery>,
) -> Result<Json<ContactListResponse>, ApiError> {
    auth::require_bearer(&state.tokens, &headers).await?;

    let window = state
        .contacts
        .slice(
            |c| params.query.as_deref().is_none_or(|q| c.matches_query(q)),
            params.offset,
            params.limit,
        )
        .await;

    Ok(Json(ContactListResponse {
        total: window.total,
        offset: params.offset,
        limit: params.limit,
        contacts: window.items,
    }))
}
