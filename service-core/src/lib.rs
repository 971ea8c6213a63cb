//! service-core: Shared infrastructure for the shelter HTTP service.
pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod observability;

pub use axum;
pub use serde;
pub use serde_json;
pub use sqlx;
pub use tokio;
pub use tower_http;
pub use tracing;
pub use validator;
