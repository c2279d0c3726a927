//! Vendorsim - vendor API simulators for integration testing.
//!
//! Two standalone HTTP mock servers that reproduce a subset of two
//! third-party vendor contracts, without their real backend logic:
//!
//! - **Logistics**: a shipment/CRM-style logistics API (shipments,
//!   customers, carriers, vehicles, quotes, tracking).
//! - **Telephony**: a calling API (contacts, calls, DTMF, OAuth
//!   client-credentials login).
//!
//! Both services hold process-lifetime in-memory stores seeded with
//! fixture data on startup and gate their business endpoints behind
//! short-lived bearer tokens.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): record types, error taxonomy, id
//!   synthesis
//! - **Service Layer** (`services`): entity store, token issuance,
//!   tracking fabrication, call progression, seed data
//! - **Infrastructure Layer** (`infrastructure`): configuration
//! - **Adapter Layer** (`adapters`): axum routers and handlers
//! - **CLI Layer** (`cli`): command-line interface

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::error::ApiError;
pub use domain::models::{
    Call, CallDirection, CallStatus, Carrier, Config, Contact, ContactType, Customer,
    LoggingConfig, LogisticsConfig, Quote, Shipment, ShipmentPatch, ShipmentStatus,
    TelephonyConfig, Vehicle,
};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{AnswerScheduler, EntityStore, Page, TokenService};
