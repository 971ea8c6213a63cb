//! Animal rows.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One row of the `Animal` table, serialized with its column names.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Animal {
    #[sqlx(rename = "AnimalID")]
    #[serde(rename = "AnimalID")]
    pub animal_id: i64,
    #[sqlx(rename = "OrgID")]
    #[serde(rename = "OrgID")]
    pub org_id: i64,
    #[sqlx(rename = "Species")]
    #[serde(rename = "Species")]
    pub species: String,
    #[sqlx(rename = "Sex")]
    #[serde(rename = "Sex")]
    pub sex: String,
    #[sqlx(rename = "AgeMonths")]
    #[serde(rename = "AgeMonths")]
    pub age_months: i64,
    #[sqlx(rename = "Microchip")]
    #[serde(rename = "Microchip")]
    pub microchip: Option<String>,
    #[sqlx(rename = "Notes")]
    #[serde(rename = "Notes")]
    pub notes: Option<String>,
}

/// Input for inserting an animal. The identifier is chosen by the client.
#[derive(Debug, Clone)]
pub struct NewAnimal {
    pub animal_id: i64,
    pub org_id: i64,
    pub species: String,
    pub sex: String,
    pub age_months: i64,
    pub microchip: Option<String>,
    pub notes: Option<String>,
}
