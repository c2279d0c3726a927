//! Shipment domain model.
//!
//! Shipments own their vehicles (there is no top-level vehicle store)
//! and hold a denormalized carrier snapshot once one is assigned.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::carrier::Carrier;
use crate::domain::ports::Keyed;

/// Lifecycle of a shipment through the simulated network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShipmentStatus {
    /// Booked, no carrier assigned yet
    Pending,
    /// Carrier assigned
    Assigned,
    /// Pickup window confirmed with the carrier
    PickupScheduled,
    /// Vehicles loaded at origin
    PickedUp,
    /// On the road
    InTransit,
    /// Dropped at destination
    Delivered,
}

impl Default for ShipmentStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl ShipmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Assigned => "assigned",
            Self::PickupScheduled => "pickup_scheduled",
            Self::PickedUp => "picked_up",
            Self::InTransit => "in_transit",
            Self::Delivered => "delivered",
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "assigned" => Some(Self::Assigned),
            "pickup_scheduled" => Some(Self::PickupScheduled),
            "picked_up" => Some(Self::PickedUp),
            "in_transit" => Some(Self::InTransit),
            "delivered" => Some(Self::Delivered),
            _ => None,
        }
    }
}

/// Origin or destination address block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub zip_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
}

/// A vehicle riding on a shipment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub make: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub vehicle_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modifications: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// A booked vehicle shipment.
///
/// `carrier` is a value snapshot taken at assignment time; mutating the
/// carrier record afterwards does not propagate here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shipment {
    pub id: String,
    pub customer_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carrier: Option<Carrier>,
    pub origin: Address,
    pub destination: Address,
    #[serde(default)]
    pub service_level: String,
    #[serde(default)]
    pub status: ShipmentStatus,
    #[serde(default)]
    pub vehicles: Vec<Vehicle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_pickup_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_pickup_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_pickup_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_delivery: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carrier_notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Keyed for Shipment {
    fn key(&self) -> &str {
        &self.id
    }
}

/// Partial update for `PUT /shipments/{id}`.
///
/// Merge is restricted to the known schema fields below; unknown JSON
/// keys in the request body are ignored rather than stored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentPatch {
    pub customer_id: Option<String>,
    pub origin: Option<Address>,
    pub destination: Option<Address>,
    pub service_level: Option<String>,
    pub status: Option<ShipmentStatus>,
    pub target_pickup_date: Option<String>,
    pub actual_pickup_date: Option<String>,
    pub scheduled_pickup_date: Option<String>,
    pub estimated_delivery: Option<String>,
    pub price: Option<f64>,
    pub notes: Option<String>,
    pub carrier_notes: Option<String>,
}

impl ShipmentPatch {
    /// Overlay the present fields onto an existing shipment.
    pub fn apply(self, shipment: &mut Shipment) {
        if let Some(v) = self.customer_id {
            shipment.customer_id = v;
        }
        if let Some(v) = self.origin {
            shipment.origin = v;
        }
        if let Some(v) = self.destination {
            shipment.destination = v;
        }
        if let Some(v) = self.service_level {
            shipment.service_level = v;
        }
        if let Some(v) = self.status {
            shipment.status = v;
        }
        if let Some(v) = self.target_pickup_date {
            shipment.target_pickup_date = Some(v);
        }
        if let Some(v) = self.actual_pickup_date {
            shipment.actual_pickup_date = Some(v);
        }
        if let Some(v) = self.scheduled_pickup_date {
            shipment.scheduled_pickup_date = Some(v);
        }
        if let Some(v) = self.estimated_delivery {
            shipment.estimated_delivery = Some(v);
        }
        if let Some(v) = self.price {
            shipment.price = Some(v);
        }
        if let Some(v) = self.notes {
            shipment.notes = Some(v);
        }
        if let Some(v) = self.carrier_notes {
            shipment.carrier_notes = Some(v);
        }
    }
}
