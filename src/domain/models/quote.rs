//! Quote domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::ports::Keyed;

/// A shipping cost quote.
///
/// `shipment_id` is present only when the quote was issued against a
/// shipment that exists in the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipment_id: Option<String>,
    pub cost: f64,
    pub currency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_level: Option<String>,
    pub valid_until: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Keyed for Quote {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Quote {
    /// Base cost for a service level.
    pub fn cost_for(service_level: Option<&str>) -> f64 {
        match service_level {
            Some("standard") => 1100.0,
            Some("expedited") => 1500.0,
            _ => 1800.0,
        }
    }
}
