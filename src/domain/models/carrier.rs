//! Carrier domain model.

use serde::{Deserialize, Serialize};

use crate::domain::ports::Keyed;

/// A transport carrier available for assignment.
///
/// Carriers are flat records; a shipment embeds a copy of one rather
/// than referencing it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Carrier {
    pub id: String,
    pub name: String,
    pub rating: f64,
    pub base_price: f64,
    pub availability: String,
    pub estimated_pickup_date: String,
    pub phone: String,
    pub insurance_level: String,
    pub status: String,
    pub specialties: Vec<String>,
}

impl Keyed for Carrier {
    fn key(&self) -> &str {
        &self.id
    }
}
