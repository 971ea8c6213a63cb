use axum::{extract::State, Json};
use service_core::error::AppError;
use service_core::extract::{ValidatedJson, ValidatedPath};

use crate::dtos::{MessageResponse, UpdateAdopterRequest};
use crate::startup::AppState;

/// The update runs unconditionally; "not found" is inferred from zero affected rows.
#[tracing::instrument(skip(state, ssn, request))]
pub async fn update_adopter(
    State(state): State<AppState>,
    ValidatedPath(ssn): ValidatedPath<String>,
    ValidatedJson(request): ValidatedJson<UpdateAdopterRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    if !state.db.update_adopter(&ssn, request.into()).await? {
        return Err(AppError::NotFound(anyhow::anyhow!("Adopter not found")));
    }

    Ok(Json(MessageResponse {
        message: "Adopter updated successfully",
    }))
}
