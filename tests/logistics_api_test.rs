//! Integration tests for the logistics simulator.
//!
//! Each test seeds a fresh state and drives the router in-process.

mod common;

use axum::http::StatusCode;
use axum::Router;
use serde_json::json;
use vendorsim::adapters::http::logistics::{router, LogisticsState};

use common::{get, logistics_token, post_json, put_json};

fn app() -> Router {
    router(LogisticsState::seeded(86_400))
}

#[tokio::test]
async fn login_with_api_key_issues_a_day_token() {
    let app = app();
    let (status, body) = post_json(&app, "/auth/login", None, json!({"apiKey": "test_api_key"})).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["token"].as_str().expect("token").starts_with("token_"));
    assert_eq!(body["expiresIn"], 86_400);
}

#[tokio::test]
async fn login_with_username_and_password() {
    let app = app();
    let (status, body) = post_json(
        &app,
        "/auth/login",
        None,
        json!({"username": "admin", "password": "password"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["token"].is_string());
}

#[tokio::test]
async fn login_with_wrong_credentials_is_rejected() {
    let app = app();
    let (status, body) = post_json(
        &app,
        "/auth/login",
        None,
        json!({"username": "admin", "password": "hunter2"}),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid credentials");
}

#[tokio::test]
async fn guarded_endpoints_reject_missing_and_forged_tokens() {
    let app = app();

    let (status, body) = get(&app, "/shipments", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Unauthorized");

    let (status, body) = get(&app, "/shipments", Some("token_forged")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid or expired token");
}

#[tokio::test]
async fn created_shipment_reads_back_with_synthesized_fields() {
    let app = app();
    let token = logistics_token(&app).await;

    let (status, created) = post_json(
        &app,
        "/shipments",
        Some(&token),
        json!({
            "customerId": "CUST-002",
            "origin": {"address": "1 First Ave", "city": "Denver", "state": "CO", "zipCode": "80201"},
            "destination": {"address": "2 Second St", "city": "Boise", "state": "ID", "zipCode": "83701"},
            "serviceLevel": "expedited",
            "targetPickupDate": "2025-05-02",
            "notes": "call ahead"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_str().expect("shipment id");
    assert!(id.starts_with("BT-"));
    assert_eq!(created["status"], "pending");
    assert_eq!(created["vehicles"], json!([]));
    assert!(created["createdAt"].is_string());

    let (status, fetched) = get(&app, &format!("/shipments/{id}"), Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn shipment_listing_filters_and_paginates() {
    let app = app();
    let token = logistics_token(&app).await;

    let (status, body) = get(&app, "/shipments?status=in_transit", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);
    assert_eq!(body["shipments"][0]["id"], "BT-47293");

    let (_, body) = get(&app, "/shipments?status=delivered", Some(&token)).await;
    assert_eq!(body["total"], 0);

    let (_, body) = get(&app, "/shipments?customerId=CUST-001", Some(&token)).await;
    assert_eq!(body["total"], 1);

    // Out-of-range page keeps the total but returns an empty slice.
    let (_, body) = get(&app, "/shipments?page=5&limit=10", Some(&token)).await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["page"], 5);
    assert_eq!(body["shipments"], json!([]));
}

#[tokio::test]
async fn shipment_patch_merges_known_fields_only() {
    let app = app();
    let token = logistics_token(&app).await;

    let (status, updated) = put_json(
        &app,
        "/shipments/BT-47293",
        Some(&token),
        json!({"status": "delivered", "notes": "left at dock", "bogusField": 99}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], "delivered");
    assert_eq!(updated["notes"], "left at dock");
    // Untouched fields survive the merge; unknown keys are dropped.
    assert_eq!(updated["origin"]["city"], "Chicago");
    assert_eq!(updated["serviceLevel"], "standard");
    assert!(updated.get("bogusField").is_none());

    let (status, body) = put_json(&app, "/shipments/BT-00000", Some(&token), json!({})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Shipment not found");
}

#[tokio::test]
async fn tracking_for_delivered_shipment_ends_at_destination() {
    let app = app();
    let token = logistics_token(&app).await;

    put_json(
        &app,
        "/shipments/BT-47293",
        Some(&token),
        json!({"status": "delivered"}),
    )
    .await;

    let (status, report) = get(&app, "/shipments/BT-47293/tracking", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["currentStatus"], "delivered");
    assert_eq!(report["currentLocation"], "Atlanta");

    let history = report["statusHistory"].as_array().expect("history");
    assert_eq!(history.len(), 6);
    let last = history.last().expect("non-empty");
    assert_eq!(last["status"], "delivered");
    assert_eq!(last["location"], "Atlanta");
}

#[tokio::test]
async fn tracking_for_pending_shipment_shows_only_the_start() {
    let app = app();
    let token = logistics_token(&app).await;

    let (_, created) = post_json(
        &app,
        "/shipments",
        Some(&token),
        json!({
            "customerId": "CUST-001",
            "origin": {"city": "Chicago", "state": "IL", "zipCode": "60601"},
            "destination": {"city": "Atlanta", "state": "GA", "zipCode": "30303"}
        }),
    )
    .await;
    let id = created["id"].as_str().expect("id");

    let (status, report) = get(&app, &format!("/shipments/{id}/tracking"), Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["currentStatus"], "pending");
    assert_eq!(report["currentLocation"], "Chicago");

    let history = report["statusHistory"].as_array().expect("history");
    assert_eq!(history.len(), 1);
    assert_eq!(history[0]["status"], "pending");
}

#[tokio::test]
async fn tracking_for_unknown_shipment_is_not_found() {
    let app = app();
    let token = logistics_token(&app).await;

    let (status, body) = get(&app, "/shipments/BT-00000/tracking", Some(&token)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Shipment not found");
}

#[tokio::test]
async fn assigning_a_carrier_snapshots_it_onto_the_shipment() {
    let app = app();
    let token = logistics_token(&app).await;

    let (status, body) = post_json(
        &app,
        "/shipments/BT-47293/assign",
        Some(&token),
        json!({
            "carrierId": "CAR-002",
            "price": 1250,
            "pickupDate": "2025-04-21",
            "deliveryDate": "2025-04-27",
            "notes": "enclosed trailer"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["carrier"]["id"], "CAR-002");
    assert_eq!(body["shipment"]["status"], "assigned");
    assert_eq!(body["shipment"]["carrier"]["name"], "Premium Car Shipping");
    assert_eq!(body["shipment"]["price"], 1250.0);
    assert_eq!(body["shipment"]["scheduledPickupDate"], "2025-04-21");
    assert_eq!(body["shipment"]["estimatedDelivery"], "2025-04-27");
    assert_eq!(body["shipment"]["carrierNotes"], "enclosed trailer");
}

#[tokio::test]
async fn assigning_reports_missing_records_in_order() {
    let app = app();
    let token = logistics_token(&app).await;

    let (status, body) = post_json(
        &app,
        "/shipments/BT-00000/assign",
        Some(&token),
        json!({"carrierId": "CAR-001"}),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Shipment not found");

    let (status, body) = post_json(
        &app,
        "/shipments/BT-47293/assign",
        Some(&token),
        json!({"carrierId": "CAR-999"}),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Carrier not found");
}

#[tokio::test]
async fn customer_search_is_case_insensitive() {
    let app = app();
    let token = logistics_token(&app).await;

    let (status, body) = get(&app, "/customers?query=JANE", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);
    assert_eq!(body["customers"][0]["id"], "CUST-002");

    let (_, body) = get(&app, "/customers?query=xyz", Some(&token)).await;
    assert_eq!(body["customers"][0]["company"], "XYZ Inc");

    let (_, body) = get(&app, "/customers?query=nobody", Some(&token)).await;
    assert_eq!(body["total"], 0);
}

#[tokio::test]
async fn created_customer_reads_back_by_id() {
    let app = app();
    let token = logistics_token(&app).await;

    let (status, created) = post_json(
        &app,
        "/customers",
        Some(&token),
        json!({
            "firstName": "Maria",
            "lastName": "Lopez",
            "email": "maria@example.com",
            "phone": "555-222-1111",
            "company": "Lopez Freight"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_str().expect("customer id");
    assert!(id.starts_with("CUST-"));
    assert!(created["createdAt"].is_string());

    let (status, fetched) = get(&app, &format!("/customers/{id}"), Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, body) = get(&app, "/customers/CUST-999x", Some(&token)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Customer not found");
}

#[tokio::test]
async fn carrier_listing_supports_region_shortcuts() {
    let app = app();
    let token = logistics_token(&app).await;

    let (status, body) = get(&app, "/carriers", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 2);

    let (_, body) = get(&app, "/carriers?region=east", Some(&token)).await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["carriers"][0]["id"], "CAR-002");

    let (_, body) = get(&app, "/carriers?region=west", Some(&token)).await;
    assert_eq!(body["carriers"][0]["id"], "CAR-001");

    let (_, body) = get(&app, "/carriers?status=available", Some(&token)).await;
    assert_eq!(body["total"], 2);
}

#[tokio::test]
async fn vehicles_are_listed_out_of_their_shipments() {
    let app = app();
    let token = logistics_token(&app).await;

    let (status, body) = get(&app, "/vehicles", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);
    assert_eq!(body["vehicles"][0]["id"], "VEH-001");
    assert_eq!(body["vehicles"][0]["shipmentId"], "BT-47293");

    let (_, body) = get(&app, "/vehicles?customerId=CUST-002", Some(&token)).await;
    assert_eq!(body["total"], 0);
}

#[tokio::test]
async fn adding_a_vehicle_appends_to_the_owning_shipment() {
    let app = app();
    let token = logistics_token(&app).await;

    let (status, body) = post_json(
        &app,
        "/vehicles",
        Some(&token),
        json!({
            "shipmentId": "BT-47293",
            "year": "2021",
            "make": "Tesla",
            "model": "Model 3",
            "vin": "5YJ3E1EA7MF000001",
            "condition": "running",
            "type": "sedan"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(body["id"].as_str().expect("vehicle id").starts_with("VEH-"));
    assert_eq!(body["shipmentId"], "BT-47293");
    assert_eq!(body["type"], "sedan");

    let (_, listing) = get(&app, "/vehicles?shipmentId=BT-47293", Some(&token)).await;
    assert_eq!(listing["total"], 2);

    let (status, body) = post_json(
        &app,
        "/vehicles",
        Some(&token),
        json!({"shipmentId": "BT-00000", "make": "Ford"}),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Shipment not found");
}

#[tokio::test]
async fn quotes_price_by_service_level() {
    let app = app();
    let token = logistics_token(&app).await;

    let (status, quote) = post_json(
        &app,
        "/quotes",
        Some(&token),
        json!({"shipmentId": "BT-47293", "serviceLevel": "expedited"}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(quote["cost"], 1500.0);
    assert_eq!(quote["currency"], "USD");
    assert_eq!(quote["shipmentId"], "BT-47293");
    assert!(quote["id"].as_str().expect("quote id").starts_with("QUOTE-"));

    // Unknown shipments still get a generic quote without the reference.
    let (status, quote) = post_json(
        &app,
        "/quotes",
        Some(&token),
        json!({"shipmentId": "BT-00000", "serviceLevel": "enclosed"}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(quote["cost"], 1800.0);
    assert!(quote.get("shipmentId").is_none());

    let (_, quote) = post_json(&app, "/quotes", Some(&token), json!({"serviceLevel": "standard"})).await;
    assert_eq!(quote["cost"], 1100.0);
}

#[tokio::test]
async fn notification_stubs_echo_the_request() {
    let app = app();
    let token = logistics_token(&app).await;

    let (status, body) = post_json(
        &app,
        "/notifications/email",
        Some(&token),
        json!({"shipmentId": "BT-47293", "customerId": "CUST-001", "type": "pickup_reminder"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["notificationType"], "email");
    assert_eq!(body["type"], "pickup_reminder");
    assert!(body["sentAt"].is_string());

    let (status, body) = post_json(&app, "/notifications/sms", Some(&token), json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["notificationType"], "sms");
}

#[tokio::test]
async fn health_probe_is_open() {
    let app = app();
    let (status, _) = get(&app, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
}
