use axum::{extract::State, Json};
use service_core::error::AppError;
use service_core::extract::ValidatedQuery;

use crate::dtos::{AdoptionStatsParams, OutcomeStatsParams, WelfareFollowupParams};
use crate::models::{AdoptionStat, OutcomeStat, SpeciesCount, WelfareFollowup};
use crate::startup::AppState;

#[tracing::instrument(skip(state))]
pub async fn animal_stats(
    State(state): State<AppState>,
) -> Result<Json<Vec<SpeciesCount>>, AppError> {
    Ok(Json(state.db.animal_stats().await?))
}

#[tracing::instrument(skip(state))]
pub async fn welfare_followups(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<WelfareFollowupParams>,
) -> Result<Json<Vec<WelfareFollowup>>, AppError> {
    Ok(Json(state.db.welfare_followups(&params.species).await?))
}

#[tracing::instrument(skip(state))]
pub async fn adoption_stats(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<AdoptionStatsParams>,
) -> Result<Json<Vec<AdoptionStat>>, AppError> {
    Ok(Json(state.db.adoption_stats(&params.state).await?))
}

#[tracing::instrument(skip(state))]
pub async fn outcome_stats(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<OutcomeStatsParams>,
) -> Result<Json<Vec<OutcomeStat>>, AppError> {
    Ok(Json(
        state
            .db
            .outcome_stats(&params.org_id, &params.outcome_type)
            .await?,
    ))
}
