//! Aggregate and joined report rows.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Animal count per species.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct SpeciesCount {
    #[sqlx(rename = "Species")]
    #[serde(rename = "Species")]
    pub species: String,
    #[sqlx(rename = "Count")]
    #[serde(rename = "Count")]
    pub count: i64,
}

/// A low-scoring welfare exam joined with its animal and organization.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct WelfareFollowup {
    #[sqlx(rename = "ExamID")]
    #[serde(rename = "ExamID")]
    pub exam_id: i64,
    #[sqlx(rename = "AnimalID")]
    #[serde(rename = "AnimalID")]
    pub animal_id: i64,
    #[sqlx(rename = "Species")]
    #[serde(rename = "Species")]
    pub species: String,
    #[sqlx(rename = "OrgID")]
    #[serde(rename = "OrgID")]
    pub org_id: i64,
    #[sqlx(rename = "OrgName")]
    #[serde(rename = "OrgName")]
    pub org_name: String,
    /// `YYYY-MM-DD`.
    #[sqlx(rename = "Date")]
    #[serde(rename = "Date")]
    pub date: String,
    #[sqlx(rename = "HealthScore")]
    #[serde(rename = "HealthScore")]
    pub health_score: i64,
    #[sqlx(rename = "Notes")]
    #[serde(rename = "Notes")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct AdoptionStat {
    #[sqlx(rename = "State")]
    #[serde(rename = "State")]
    pub state: String,
    #[sqlx(rename = "Species")]
    #[serde(rename = "Species")]
    pub species: String,
    #[sqlx(rename = "AdoptionCount")]
    #[serde(rename = "AdoptionCount")]
    pub adoption_count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct OutcomeStat {
    #[sqlx(rename = "OutcomeType")]
    #[serde(rename = "OutcomeType")]
    pub outcome_type: String,
    #[sqlx(rename = "Count")]
    #[serde(rename = "Count")]
    pub count: i64,
}
