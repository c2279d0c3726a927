//! Fixture data loaded at process start.
//!
//! Both services reseed the same records on every boot; nothing here
//! survives a restart. Credentials are deliberately hard-coded test
//! values.

use chrono::{Duration, Utc};

use crate::domain::models::{
    Address, ApiClient, ApiUser, Call, CallDirection, CallStatus, Carrier, Contact, ContactType,
    Customer, Quote, Shipment, ShipmentStatus, Vehicle,
};

/// Login records accepted by the logistics service.
pub fn api_users() -> Vec<ApiUser> {
    vec![ApiUser {
        username: "admin".to_string(),
        password: "password".to_string(),
        api_key: "test_api_key".to_string(),
    }]
}

/// OAuth clients accepted by the telephony service.
pub fn api_clients() -> Vec<ApiClient> {
    vec![ApiClient {
        client_id: "test_api_key".to_string(),
        client_secret: "test_api_secret".to_string(),
        account_id: "test_account_id".to_string(),
    }]
}

pub fn customers() -> Vec<Customer> {
    vec![
        Customer {
            id: "CUST-001".to_string(),
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            email: "john@example.com".to_string(),
            phone: "555-123-4567".to_string(),
            company: Some("ABC Corp".to_string()),
            created_at: None,
        },
        Customer {
            id: "CUST-002".to_string(),
            first_name: "Jane".to_string(),
            last_name: "Smith".to_string(),
            email: "jane@example.com".to_string(),
            phone: "555-987-6543".to_string(),
            company: Some("XYZ Inc".to_string()),
            created_at: None,
        },
    ]
}

pub fn carriers() -> Vec<Carrier> {
    vec![
        Carrier {
            id: "CAR-001".to_string(),
            name: "Express Auto Transport".to_string(),
            rating: 4.8,
            base_price: 950.0,
            availability: "high".to_string(),
            estimated_pickup_date: "2025-04-20".to_string(),
            phone: "555-111-2222".to_string(),
            insurance_level: "$1M".to_string(),
            status: "available".to_string(),
            specialties: vec!["standard".to_string(), "expedited".to_string()],
        },
        Carrier {
            id: "CAR-002".to_string(),
            name: "Premium Car Shipping".to_string(),
            rating: 4.9,
            base_price: 1250.0,
            availability: "medium".to_string(),
            estimated_pickup_date: "2025-04-21".to_string(),
            phone: "555-333-4444".to_string(),
            insurance_level: "$2M".to_string(),
            status: "available".to_string(),
            specialties: vec!["enclosed".to_string(), "exotic".to_string()],
        },
    ]
}

/// One in-transit shipment, already assigned to the first seeded
/// carrier (as a snapshot) and carrying a single vehicle.
pub fn shipments(carriers: &[Carrier]) -> Vec<Shipment> {
    vec![Shipment {
        id: "BT-47293".to_string(),
        customer_id: "CUST-001".to_string(),
        carrier: carriers.first().cloned(),
        origin: Address {
            address: "123 Main St".to_string(),
            city: "Chicago".to_string(),
            state: "IL".to_string(),
            zip_code: "60601".to_string(),
            contact_name: Some("John Doe".to_string()),
            contact_phone: Some("555-123-4567".to_string()),
        },
        destination: Address {
            address: "456 Peachtree St".to_string(),
            city: "Atlanta".to_string(),
            state: "GA".to_string(),
            zip_code: "30303".to_string(),
            contact_name: Some("Mike Johnson".to_string()),
            contact_phone: Some("555-789-0123".to_string()),
        },
        service_level: "standard".to_string(),
        status: ShipmentStatus::InTransit,
        vehicles: vec![Vehicle {
            id: "VEH-001".to_string(),
            year: Some("2019".to_string()),
            make: Some("Audi".to_string()),
            model: Some("A4".to_string()),
            vin: Some("1A2B3C4D5E6F7G8H9".to_string()),
            condition: Some("running".to_string()),
            vehicle_type: None,
            modifications: None,
            created_at: None,
        }],
        target_pickup_date: Some("2025-04-12".to_string()),
        actual_pickup_date: Some("2025-04-12".to_string()),
        scheduled_pickup_date: None,
        estimated_delivery: Some("2025-04-18".to_string()),
        price: None,
        notes: Some("Ring doorbell on arrival".to_string()),
        carrier_notes: None,
        created_at: None,
    }]
}

pub fn quotes() -> Vec<Quote> {
    vec![Quote {
        id: "QUOTE-001".to_string(),
        shipment_id: Some("BT-47293".to_string()),
        cost: 1100.0,
        currency: "USD".to_string(),
        service_level: Some("standard".to_string()),
        valid_until: "2025-05-01".to_string(),
        created_at: None,
    }]
}

pub fn contacts() -> Vec<Contact> {
    vec![
        Contact {
            id: "CONT-001".to_string(),
            name: "John Doe".to_string(),
            phone: "555-123-4567".to_string(),
            email: Some("john@example.com".to_string()),
            company: Some("ABC Corp".to_string()),
            contact_type: ContactType::Customer,
        },
        Contact {
            id: "CONT-002".to_string(),
            name: "Express Auto Transport".to_string(),
            phone: "555-111-2222".to_string(),
            email: Some("dispatch@expressauto.com".to_string()),
            company: Some("Express Auto Transport".to_string()),
            contact_type: ContactType::Carrier,
        },
        Contact {
            id: "CONT-003".to_string(),
            name: "Premium Car Shipping".to_string(),
            phone: "555-333-4444".to_string(),
            email: Some("ops@premiumcarshipping.com".to_string()),
            company: Some("Premium Car Shipping".to_string()),
            contact_type: ContactType::Carrier,
        },
    ]
}

/// Two historical completed calls, timestamped relative to boot time.
pub fn calls() -> Vec<Call> {
    let day_ago = Utc::now() - Duration::hours(24);
    let half_day_ago = Utc::now() - Duration::hours(12);
    vec![
        Call {
            id: "CALL-001".to_string(),
            from: "555-987-6543".to_string(),
            to: "555-123-4567".to_string(),
            status: CallStatus::Completed,
            duration: Some(245),
            recording_url: Some("https://example.com/recordings/call-001.mp3".to_string()),
            direction: CallDirection::Outbound,
            start_time: day_ago,
            end_time: Some(day_ago + Duration::seconds(245)),
            notes: Some("Confirmed pickup details for tomorrow".to_string()),
            account_id: None,
        },
        Call {
            id: "CALL-002".to_string(),
            from: "555-111-2222".to_string(),
            to: "555-987-6543".to_string(),
            status: CallStatus::Completed,
            duration: Some(178),
            recording_url: Some("https://example.com/recordings/call-002.mp3".to_string()),
            direction: CallDirection::Inbound,
            start_time: half_day_ago,
            end_time: Some(half_day_ago + Duration::seconds(178)),
            notes: Some("Carrier called to confirm ETAs".to_string()),
            account_id: None,
        },
    ]
}
