pub mod entity_store;
pub mod progression;
pub mod seed;
pub mod token_service;
pub mod tracking;

pub use entity_store::{paginate, EntityStore, Page};
pub use progression::AnswerScheduler;
pub use token_service::TokenService;
pub use tracking::{TrackingEvent, TrackingReport};
