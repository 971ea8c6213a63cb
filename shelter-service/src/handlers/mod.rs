//! HTTP handlers for shelter-service.

pub mod adopters;
pub mod animals;
pub mod health;
pub mod reports;

pub use health::{health_check, metrics_handler, readiness_check, root};
