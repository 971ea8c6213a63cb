//! Request and response shapes for the HTTP surface.

mod adopters;
mod animals;
mod reports;

pub use adopters::UpdateAdopterRequest;
pub use animals::{AnimalSearchParams, CreateAnimalRequest, DeleteAnimalResponse};
pub use reports::{AdoptionStatsParams, OutcomeStatsParams, WelfareFollowupParams};

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
