//! Fabricated tracking timelines.
//!
//! The tracking endpoint synthesizes a status history from the
//! shipment's current status alone; there is no audit log behind it.
//! Events sit at fixed offsets in the past, with "now" standing in for
//! the most recent one.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::domain::models::{Shipment, ShipmentStatus};

/// One fabricated status transition.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingEvent {
    pub status: &'static str,
    pub location: String,
    pub timestamp: DateTime<Utc>,
}

/// Response body for `GET /shipments/{id}/tracking`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingReport {
    pub shipment_id: String,
    pub current_status: ShipmentStatus,
    pub status_update_time: DateTime<Utc>,
    pub current_location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_delivery: Option<String>,
    pub status_history: Vec<TrackingEvent>,
}

/// How many ladder entries a shipment in this status has climbed.
///
/// Assignment and pickup scheduling are reported together, as the real
/// API groups them.
fn ladder_len(status: ShipmentStatus) -> usize {
    match status {
        ShipmentStatus::Pending => 1,
        ShipmentStatus::Assigned | ShipmentStatus::PickupScheduled => 3,
        ShipmentStatus::PickedUp => 4,
        ShipmentStatus::InTransit => 5,
        ShipmentStatus::Delivered => 6,
    }
}

/// Build the fabricated tracking report for a shipment.
pub fn report_for(shipment: &Shipment) -> TrackingReport {
    let now = Utc::now();
    let ladder = [
        ("pending", "System".to_string(), 48),
        ("assigned", "System".to_string(), 36),
        ("pickup_scheduled", shipment.origin.city.clone(), 24),
        ("picked_up", shipment.origin.city.clone(), 12),
        ("in_transit", "En route".to_string(), 6),
        ("delivered", shipment.destination.city.clone(), 0),
    ];

    let status_history = ladder
        .into_iter()
        .take(ladder_len(shipment.status))
        .map(|(status, location, hours_ago)| TrackingEvent {
            status,
            location,
            timestamp: now - Duration::hours(hours_ago),
        })
        .collect();

    let current_location = match shipment.status {
        ShipmentStatus::InTransit => "Indianapolis, IN".to_string(),
        ShipmentStatus::Delivered => shipment.destination.city.clone(),
        _ => shipment.origin.city.clone(),
    };

    TrackingReport {
        shipment_id: shipment.id.clone(),
        current_status: shipment.status,
        status_update_time: now,
        current_location,
        estimated_delivery: shipment.estimated_delivery.clone(),
        status_history,
    }
}
