//! Customer domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::ports::Keyed;

/// A shipping customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Keyed for Customer {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Customer {
    /// Case-insensitive substring match over the searchable fields.
    pub fn matches_query(&self, query: &str) -> bool {
        let q = query.to_lowercase();
        self.first_name.to_lowercase().contains(&q)
            || self.last_name.to_lowercase().contains(&q)
            || self.email.to_lowercase().contains(&q)
            || self
                .company
                .as_ref()
                .is_some_and(|c| c.to_lowercase().contains(&q))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer() -> Customer {
        Customer {
            id: "CUST-001".to_string(),
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            email: "john@example.com".to_string(),
            phone: "555-123-4567".to_string(),
            company: Some("ABC Corp".to_string()),
            created_at: None,
        }
    }

    #[test]
    fn query_matches_any_searchable_field() {
        let c = customer();
        assert!(c.matches_query("JOHN"));
        assert!(c.matches_query("doe"));
        assert!(c.matches_query("example.com"));
        assert!(c.matches_query("abc"));
        assert!(!c.matches_query("smith"));
    }
}
