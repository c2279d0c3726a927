//! Record id and token value synthesis.
//!
//! Ids carry a human-readable prefix plus random digits. Uniqueness is
//! best-effort: there is no collision check, matching the vendor APIs
//! being simulated.

use rand::Rng;
use uuid::Uuid;

/// Shipment reference, e.g. `BT-47293`.
pub fn shipment_id() -> String {
    format!("BT-{}", rand::thread_rng().gen_range(10_000..100_000))
}

/// Customer reference, e.g. `CUST-417`.
pub fn customer_id() -> String {
    three_digit("CUST")
}

/// Vehicle reference, e.g. `VEH-206`.
pub fn vehicle_id() -> String {
    three_digit("VEH")
}

/// Quote reference, e.g. `QUOTE-531`.
pub fn quote_id() -> String {
    three_digit("QUOTE")
}

/// Call reference, e.g. `CALL-764`.
pub fn call_id() -> String {
    three_digit("CALL")
}

/// Opaque bearer token value, unique within a running process.
pub fn token_value(prefix: &str) -> String {
    format!("{prefix}{}", Uuid::new_v4().simple())
}

fn three_digit(prefix: &str) -> String {
    format!("{prefix}-{}", rand::thread_rng().gen_range(100..1000))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_carry_expected_prefixes() {
        assert!(shipment_id().starts_with("BT-"));
        assert!(customer_id().starts_with("CUST-"));
        assert!(vehicle_id().starts_with("VEH-"));
        assert!(quote_id().starts_with("QUOTE-"));
        assert!(call_id().starts_with("CALL-"));
    }

    #[test]
    fn shipment_id_uses_five_digits() {
        let id = shipment_id();
        let digits = id.trim_start_matches("BT-");
        assert_eq!(digits.len(), 5);
        assert!(digits.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn token_values_are_unique() {
        let a = token_value("token_");
        let b = token_value("token_");
        assert!(a.starts_with("token_"));
        assert_ne!(a, b);
    }
}
