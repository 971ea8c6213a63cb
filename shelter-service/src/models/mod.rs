//! Row models for shelter-service.

mod adopter;
mod animal;
mod report;

pub use adopter::AdopterContact;
pub use animal::{Animal, NewAnimal};
pub use report::{AdoptionStat, OutcomeStat, SpeciesCount, WelfareFollowup};
