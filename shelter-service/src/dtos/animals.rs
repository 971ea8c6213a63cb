use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::NewAnimal;
use crate::query::Filter;

/// Body of `POST /animals`. Field names match the table's columns.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateAnimalRequest {
    #[serde(rename = "AnimalID")]
    #[validate(range(min = 1, message = "AnimalID must be at least 1"))]
    pub animal_id: i64,
    #[serde(rename = "OrgID")]
    #[validate(range(min = 1, message = "OrgID must be at least 1"))]
    pub org_id: i64,
    #[serde(rename = "Species")]
    #[validate(length(min = 1, max = 50, message = "Species must be 1-50 characters"))]
    pub species: String,
    #[serde(rename = "Sex")]
    #[validate(length(min = 1, max = 10, message = "Sex must be 1-10 characters"))]
    pub sex: String,
    #[serde(rename = "AgeMonths")]
    #[validate(range(min = 0, message = "AgeMonths cannot be negative"))]
    pub age_months: i64,
    #[serde(rename = "Microchip", default)]
    #[validate(length(max = 50, message = "Microchip is at most 50 characters"))]
    pub microchip: Option<String>,
    #[serde(rename = "Notes", default)]
    #[validate(length(max = 500, message = "Notes is at most 500 characters"))]
    pub notes: Option<String>,
}

impl From<CreateAnimalRequest> for NewAnimal {
    fn from(req: CreateAnimalRequest) -> Self {
        Self {
            animal_id: req.animal_id,
            org_id: req.org_id,
            species: req.species,
            sex: req.sex,
            age_months: req.age_months,
            microchip: req.microchip,
            notes: req.notes,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnimalSearchParams {
    #[serde(default)]
    pub species: Filter<String>,
    #[serde(default)]
    pub org_id: Filter<i64>,
}

#[derive(Debug, Serialize)]
pub struct DeleteAnimalResponse {
    pub status: &'static str,
    pub animal_id: i64,
}
