//! Shelter Service - CRUD and reporting over the animal-shelter schema.

pub mod config;
pub mod dtos;
pub mod handlers;
pub mod models;
pub mod query;
pub mod services;
pub mod startup;
