pub mod auth;
pub mod call;
pub mod carrier;
pub mod config;
pub mod contact;
pub mod customer;
pub mod quote;
pub mod shipment;

pub use auth::{ApiClient, ApiUser, IssuedToken};
pub use call::{Call, CallDirection, CallStatus};
pub use carrier::Carrier;
pub use config::{Config, LoggingConfig, LogisticsConfig, TelephonyConfig};
pub use contact::{Contact, ContactType};
pub use customer::Customer;
pub use quote::Quote;
pub use shipment::{Address, Shipment, ShipmentPatch, ShipmentStatus, Vehicle};
