use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use service_core::error::AppError;

use crate::services::get_metrics;
use crate::startup::AppState;

pub async fn root() -> impl IntoResponse {
    Json(json!({ "message": "Shelter service is running" }))
}

/// Liveness: answers without touching the store.
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "shelter-service",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Readiness: the store must answer `SELECT 1`.
pub async fn readiness_check(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    state.db.health_check().await.map_err(|e| {
        tracing::warn!(error = %e, "Readiness check failed - database unavailable");
        AppError::ServiceUnavailable
    })?;

    tracing::debug!("Readiness check passed");
    Ok(Json(json!({ "status": "ready" })))
}

/// Prometheus metrics endpoint.
pub async fn metrics_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        [("content-type", "text/plain; charset=utf-8")],
        get_metrics(),
    )
}
