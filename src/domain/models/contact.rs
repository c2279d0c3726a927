//! Contact domain model.

use serde::{Deserialize, Serialize};

use crate::domain::ports::Keyed;

/// What kind of party a contact represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactType {
    Customer,
    Carrier,
}

/// A phone-book entry in the telephony service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(rename = "type")]
    pub contact_type: ContactType,
}

impl Keyed for Contact {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Contact {
    /// Substring match over name/email/company (case-insensitive) and
    /// the raw phone number.
    pub fn matches_query(&self, query: &str) -> bool {
        let q = query.to_lowercase();
        self.name.to_lowercase().contains(&q)
            || self.phone.contains(query)
            || self
                .email
                .as_ref()
                .is_some_and(|e| e.to_lowercase().contains(&q))
            || self
                .company
                .as_ref()
                .is_some_and(|c| c.to_lowercase().contains(&q))
    }
}
