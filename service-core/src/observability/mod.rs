pub mod logging;

pub use logging::init_tracing;

/// Header name for request correlation ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";
