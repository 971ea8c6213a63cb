use axum::{extract::State, Json};
use service_core::error::AppError;
use service_core::extract::{ValidatedJson, ValidatedPath, ValidatedQuery};

use crate::dtos::{AnimalSearchParams, CreateAnimalRequest, DeleteAnimalResponse, StatusResponse};
use crate::models::Animal;
use crate::startup::AppState;

#[tracing::instrument(skip(state))]
pub async fn list_animals_simple(
    State(state): State<AppState>,
) -> Result<Json<Vec<Animal>>, AppError> {
    let animals = state.db.list_animals_simple().await?;
    Ok(Json(animals))
}

#[tracing::instrument(skip(state))]
pub async fn search_animals(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<AnimalSearchParams>,
) -> Result<Json<Vec<Animal>>, AppError> {
    let animals = state
        .db
        .search_animals(&params.species, &params.org_id)
        .await?;

    tracing::debug!(count = animals.len(), "Animals matched");
    Ok(Json(animals))
}

#[tracing::instrument(skip(state, request), fields(animal_id = request.animal_id))]
pub async fn create_animal(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateAnimalRequest>,
) -> Result<Json<StatusResponse>, AppError> {
    state.db.create_animal(request.into()).await?;
    Ok(Json(StatusResponse { status: "success" }))
}

#[tracing::instrument(skip(state))]
pub async fn delete_animal(
    State(state): State<AppState>,
    ValidatedPath(animal_id): ValidatedPath<i64>,
) -> Result<Json<DeleteAnimalResponse>, AppError> {
    if !state.db.delete_animal(animal_id).await? {
        return Err(AppError::NotFound(anyhow::anyhow!("Animal not found")));
    }

    Ok(Json(DeleteAnimalResponse {
        status: "deleted",
        animal_id,
    }))
}
