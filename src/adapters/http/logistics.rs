//! Logistics CRM simulator.
//!
//! Mirrors the shipment-broker vendor API: bearer-token login, CRUD-ish
//! endpoints over shipments/customers/carriers/vehicles/quotes, a
//! fabricated tracking view, and notification stubs.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::Json;
use axum::routing::{get, post};
use axum::Router;
use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::adapters::http::{auth, health_check, shutdown_signal};
use crate::domain::error::ApiError;
use crate::domain::ids;
use crate::domain::models::{
    Address, ApiUser, Carrier, Customer, LogisticsConfig, Quote, Shipment, ShipmentPatch,
    ShipmentStatus, Vehicle,
};
use crate::services::{entity_store::paginate, seed, tracking, EntityStore, TokenService};

/// Everything the logistics handlers need, built once at startup.
#[derive(Debug, Clone)]
pub struct LogisticsState {
    pub shipments: EntityStore<Shipment>,
    pub customers: EntityStore<Customer>,
    pub carriers: EntityStore<Carrier>,
    pub quotes: EntityStore<Quote>,
    pub users: Vec<ApiUser>,
    pub tokens: TokenService,
}

impl LogisticsState {
    /// Construct a state seeded with the fixture records.
    pub fn seeded(token_ttl_secs: i64) -> Self {
        let carriers = seed::carriers();
        Self {
            shipments: EntityStore::seeded(seed::shipments(&carriers)),
            customers: EntityStore::seeded(seed::customers()),
            carriers: EntityStore::seeded(carriers),
            quotes: EntityStore::seeded(seed::quotes()),
            users: seed::api_users(),
            tokens: TokenService::new("token_", token_ttl_secs),
        }
    }
}

// Request/response shapes

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub expires_in: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentQuery {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub customer_id: Option<String>,
    #[serde(default = "default_page")]
    pub page: usize,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

#[derive(Debug, Serialize)]
pub struct ShipmentListResponse {
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub shipments: Vec<Shipment>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateShipmentRequest {
    pub customer_id: String,
    pub origin: Address,
    pub destination: Address,
    #[serde(default)]
    pub service_level: Option<String>,
    #[serde(default)]
    pub target_pickup_date: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignShipmentRequest {
    pub carrier_id: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub pickup_date: Option<String>,
    #[serde(default)]
    pub delivery_date: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AssignShipmentResponse {
    pub success: bool,
    pub shipment: Shipment,
    pub carrier: Carrier,
}

#[derive(Debug, Deserialize)]
pub struct CustomerQuery {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default = "default_page")]
    pub page: usize,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

#[derive(Debug, Serialize)]
pub struct CustomerListResponse {
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub customers: Vec<Customer>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub company: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CarrierQuery {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default = "default_page")]
    pub page: usize,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

#[derive(Debug, Serialize)]
pub struct CarrierListResponse {
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub carriers: Vec<Carrier>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleQuery {
    #[serde(default)]
    pub customer_id: Option<String>,
    #[serde(default)]
    pub shipment_id: Option<String>,
    #[serde(default = "default_page")]
    pub page: usize,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

/// A vehicle surfaced out of its owning shipment.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentVehicle {
    #[serde(flatten)]
    pub vehicle: Vehicle,
    pub shipment_id: String,
}

#[derive(Debug, Serialize)]
pub struct VehicleListResponse {
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub vehicles: Vec<ShipmentVehicle>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVehicleRequest {
    pub shipment_id: String,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub make: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub vin: Option<String>,
    #[serde(default)]
    pub condition: Option<String>,
    #[serde(rename = "type", default)]
    pub vehicle_type: Option<String>,
    #[serde(default)]
    pub modifications: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    #[serde(default)]
    pub shipment_id: Option<String>,
    #[serde(default)]
    pub service_level: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationRequest {
    #[serde(default)]
    pub shipment_id: Option<String>,
    #[serde(default)]
    pub customer_id: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationResponse {
    pub success: bool,
    pub notification_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    pub sent_at: chrono::DateTime<Utc>,
}

const fn default_page() -> usize {
    1
}

const fn default_limit() -> usize {
    10
}

/// Build the logistics router over a seeded state.
pub fn router(state: LogisticsState) -> Router {
    let state = Arc::new(state);
    Router::new()
        .route("/auth/login", post(login))
        .route("/shipments", get(list_shipments).post(create_shipment))
        .route("/shipments/{id}", get(get_shipment).put(update_shipment))
        .route("/shipments/{id}/tracking", get(shipment_tracking))
        .route("/shipments/{id}/assign", post(assign_shipment))
        .route("/customers", get(list_customers).post(create_customer))
        .route("/customers/{id}", get(get_customer))
        .route("/carriers", get(list_carriers))
        .route("/vehicles", get(list_vehicles).post(create_vehicle))
        .route("/quotes", post(create_quote))
        .route("/notifications/email", post(email_notification))
        .route("/notifications/sms", post(sms_notification))
        .route("/health", get(health_check))
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Seed, bind, and serve the logistics simulator until ctrl-c.
pub async fn serve(config: LogisticsConfig) -> Result<()> {
    let state = LogisticsState::seeded(config.token_ttl_secs);
    let app = router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind logistics simulator to {addr}"))?;

    info!("logistics simulator listening on {addr}");
    info!("test credentials: username admin / password password, or API key test_api_key");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("logistics simulator exited")?;
    Ok(())
}

// Handler functions

async fn login(
    State(state): State<Arc<LogisticsState>>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let key_ok = req
        .api_key
        .as_deref()
        .is_some_and(|key| state.users.iter().any(|u| u.api_key == key));
    let pair_ok = state.users.iter().any(|u| {
        req.username.as_deref() == Some(u.username.as_str())
            && req.password.as_deref() == Some(u.password.as_str())
    });

    if !key_ok && !pair_ok {
        return Err(ApiError::InvalidCredentials);
    }

    let issued = state.tokens.issue().await;
    Ok(Json(LoginResponse {
        token: issued.token,
        expires_in: state.tokens.ttl_secs(),
    }))
}

async fn list_shipments(
    State(state): State<Arc<LogisticsState>>,
    headers: HeaderMap,
    Query(params): Query<ShipmentQuery>,
) -> Result<Json<ShipmentListResponse>, ApiError> {
    auth::require_bearer(&state.tokens, &headers).await?;

    let page = state
        .shipments
        .page(
            |s| {
                params
                    .status
                    .as_deref()
                    .is_none_or(|status| s.status.as_str() == status)
                    && params
                        .customer_id
                        .as_deref()
                        .is_none_or(|id| s.customer_id == id)
            },
            params.page,
            params.limit,
        )
        .await;

    Ok(Json(ShipmentListResponse {
        total: page.total,
        page: params.page,
        limit: params.limit,
        shipments: page.items,
    }))
}

async fn get_shipment(
    State(state): State<Arc<LogisticsState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<Shipment>, ApiError> {
    auth::require_bearer(&state.tokens, &headers).await?;
    state
        .shipments
        .get(&id)
        .await
        .map(Json)
        .ok_or(ApiError::NotFound("Shipment"))
}

async fn create_shipment(
    State(state): State<Arc<LogisticsState>>,
    headers: HeaderMap,
    Json(req): Json<CreateShipmentRequest>,
) -> Result<(StatusCode, Json<Shipment>), ApiError> {
    auth::require_bearer(&state.tokens, &headers).await?;

    let shipment = Shipment {
        id: ids::shipment_id(),
        customer_id: req.customer_id,
        carrier: None,
        origin: req.origin,
        destination: req.destination,
        service_level: req.service_level.unwrap_or_else(|| "standard".to_string()),
        status: ShipmentStatus::Pending,
        vehicles: vec![],
        target_pickup_date: req.target_pickup_date,
        actual_pickup_date: None,
        scheduled_pickup_date: None,
        estimated_delivery: None,
        price: None,
        notes: req.notes,
        carrier_notes: None,
        created_at: Some(Utc::now()),
    };

    state.shipments.insert(shipment.clone()).await;
    Ok((StatusCode::CREATED, Json(shipment)))
}

async fn update_shipment(
    State(state): State<Arc<LogisticsState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(patch): Json<ShipmentPatch>,
) -> Result<Json<Shipment>, ApiError> {
    auth::require_bearer(&state.tokens, &headers).await?;
    state
        .shipments
        .update(&id, |shipment| patch.apply(shipment))
        .await
        .map(Json)
        .ok_or(ApiError::NotFound("Shipment"))
}

async fn shipment_tracking(
    State(state): State<Arc<LogisticsState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<tracking::TrackingReport>, ApiError> {
    auth::require_bearer(&state.tokens, &headers).await?;
    let shipment = state
        .shipments
        .get(&id)
        .await
        .ok_or(ApiError::NotFound("Shipment"))?;
    Ok(Json(tracking::report_for(&shipment)))
}

async fn assign_shipment(
    State(state): State<Arc<LogisticsState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(req): Json<AssignShipmentRequest>,
) -> Result<Json<AssignShipmentResponse>, ApiError> {
    auth::require_bearer(&state.tokens, &headers).await?;

    // Shipment existence is reported before carrier existence.
    state
        .shipments
        .get(&id)
        .await
        .ok_or(ApiError::NotFound("Shipment"))?;
    let carrier = state
        .carriers
        .get(&req.carrier_id)
        .await
        .ok_or(ApiError::NotFound("Carrier"))?;

    let shipment = state
        .shipments
        .update(&id, |s| {
            // Snapshot by value: later carrier edits must not propagate.
            s.carrier = Some(carrier.clone());
            s.status = ShipmentStatus::Assigned;
            s.price = req.price;
            s.scheduled_pickup_date = req.pickup_date.clone();
            s.estimated_delivery = req.delivery_date.clone();
            s.carrier_notes = req.notes.clone();
        })
        .await
        .ok_or(ApiError::NotFound("Shipment"))?;

    Ok(Json(AssignShipmentResponse {
        success: true,
        shipment,
        carrier,
    }))
}

async fn list_customers(
    State(state): State<Arc<LogisticsState>>,
    headers: HeaderMap,
    Query(params): Query<CustomerQuery>,
) -> Result<Json<CustomerListResponse>, ApiError> {
    auth::require_bearer(&state.tokens, &headers).await?;

    let page = state
        .customers
        .page(
            |c| params.query.as_deref().is_none_or(|q| c.matches_query(q)),
            params.page,
            params.limit,
        )
        .await;

    Ok(Json(CustomerListResponse {
        total: page.total,
        page: params.page,
        limit: params.limit,
        customers: page.items,
    }))
}

async fn get_customer(
    State(state): State<Arc<LogisticsState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<Customer>, ApiError> {
    auth::require_bearer(&state.tokens, &headers).await?;
    state
        .customers
        .get(&id)
        .await
        .map(Json)
        .ok_or(ApiError::NotFound("Customer"))
}

async fn create_customer(
    State(state): State<Arc<LogisticsState>>,
    headers: HeaderMap,
    Json(req): Json<CreateCustomerRequest>,
) -> Result<(StatusCode, Json<Customer>), ApiError> {
    auth::require_bearer(&state.tokens, &headers).await?;

    let customer = Customer {
        id: ids::customer_id(),
        first_name: req.first_name,
        last_name: req.last_name,
        email: req.email,
        phone: req.phone,
        company: req.company,
        created_at: Some(Utc::now()),
    };

    state.customers.insert(customer.clone()).await;
    Ok((StatusCode::CREATED, Json(customer)))
}

async fn list_carriers(
    State(state): State<Arc<LogisticsState>>,
    headers: HeaderMap,
    Query(params): Query<CarrierQuery>,
) -> Result<Json<CarrierListResponse>, ApiError> {
    auth::require_bearer(&state.tokens, &headers).await?;

    // Regional coverage is faked against the seeded fleet; unknown
    // regions leave the list unfiltered.
    let region_id = params.region.as_deref().and_then(|region| match region {
        "west" => Some("CAR-001"),
        "east" => Some("CAR-002"),
        _ => None,
    });

    let page = state
        .carriers
        .page(
            |c| {
                params
                    .status
                    .as_deref()
                    .is_none_or(|status| c.status == status)
                    && region_id.is_none_or(|id| c.id == id)
            },
            params.page,
            params.limit,
        )
        .await;

    Ok(Json(CarrierListResponse {
        total: page.total,
        page: params.page,
        limit: params.limit,
        carriers: page.items,
    }))
}

async fn list_vehicles(
    State(state): State<Arc<LogisticsState>>,
    headers: HeaderMap,
    Query(params): Query<VehicleQuery>,
) -> Result<Json<VehicleListResponse>, ApiError> {
    auth::require_bearer(&state.tokens, &headers).await?;

    // Vehicles have no store of their own; they ride on shipments.
    let owners = state
        .shipments
        .filtered(|s| {
            params
                .customer_id
                .as_deref()
                .is_none_or(|id| s.customer_id == id)
                && params.shipment_id.as_deref().is_none_or(|id| s.id == id)
        })
        .await;

    let vehicles: Vec<ShipmentVehicle> = owners
        .into_iter()
        .flat_map(|shipment| {
            let shipment_id = shipment.id.clone();
            shipment
                .vehicles
                .into_iter()
                .map(move |vehicle| ShipmentVehicle {
                    vehicle,
                    shipment_id: shipment_id.clone(),
                })
        })
        .collect();

    let page = paginate(vehicles, params.page, params.limit);
    Ok(Json(VehicleListResponse {
        total: page.total,
        page: params.page,
        limit: params.limit,
        vehicles: page.items,
    }))
}

async fn create_vehicle(
    State(state): State<Arc<LogisticsState>>,
    headers: HeaderMap,
    Json(req): Json<CreateVehicleRequest>,
) -> Result<(StatusCode, Json<ShipmentVehicle>), ApiError> {
    auth::require_bearer(&state.tokens, &headers).await?;

    let vehicle = Vehicle {
        id: ids::vehicle_id(),
        year: req.year,
        make: req.make,
        model: req.model,
        vin: req.vin,
        condition: req.condition,
        vehicle_type: req.vehicle_type,
        modifications: req.modifications,
        created_at: Some(Utc::now()),
    };

    state
        .shipments
        .update(&req.shipment_id, |s| s.vehicles.push(vehicle.clone()))
        .await
        .ok_or(ApiError::NotFound("Shipment"))?;

    Ok((
        StatusCode::CREATED,
        Json(ShipmentVehicle {
            vehicle,
            shipment_id: req.shipment_id,
        }),
    ))
}

async fn create_quote(
    State(state): State<Arc<LogisticsState>>,
    headers: HeaderMap,
    Json(req): Json<QuoteRequest>,
) -> Result<(StatusCode, Json<Quote>), ApiError> {
    auth::require_bearer(&state.tokens, &headers).await?;

    // Unknown shipments still get a generic quote, just without the
    // shipment reference.
    let shipment_id = match req.shipment_id {
        Some(id) => state.shipments.get(&id).await.map(|s| s.id),
        None => None,
    };

    let quote = Quote {
        id: ids::quote_id(),
        shipment_id,
        cost: Quote::cost_for(req.service_level.as_deref()),
        currency: "USD".to_string(),
        service_level: req.service_level,
        valid_until: (Utc::now() + Duration::days(7)).to_rfc3339(),
        created_at: Some(Utc::now()),
    };

    state.quotes.insert(quote.clone()).await;
    Ok((StatusCode::CREATED, Json(quote)))
}

async fn email_notification(
    State(state): State<Arc<LogisticsState>>,
    headers: HeaderMap,
    Json(req): Json<NotificationRequest>,
) -> Result<Json<NotificationResponse>, ApiError> {
    auth::require_bearer(&state.tokens, &headers).await?;
    Ok(Json(notification_stub("email", req)))
}

async fn sms_notification(
    State(state): State<Arc<LogisticsState>>,
    headers: HeaderMap,
    Json(req): Json<NotificationRequest>,
) -> Result<Json<NotificationResponse>, ApiError> {
    auth::require_bearer(&state.tokens, &headers).await?;
    Ok(Json(notification_stub("sms", req)))
}

fn notification_stub(channel: &'static str, req: NotificationRequest) -> NotificationResponse {
    NotificationResponse {
        success: true,
        notification_type: channel,
        shipment_id: req.shipment_id,
        customer_id: req.customer_id,
        kind: req.kind,
        sent_at: Utc::now(),
    }
}
