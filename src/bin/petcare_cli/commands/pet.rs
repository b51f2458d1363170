// ABOUTME: Pet command for petcare-cli
// ABOUTME: Builds a pet record from its birthday and prints its feeding recommendation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PetCare Feeding

use chrono::{Local, NaiveDate};
use petcare::{AppResult, FeedingRecommendationEngine, PetRecord};
use tracing::info;

use crate::helpers::display::{display_pet_recommendation, OutputFormat};

/// Pet fields as entered on the command line
pub struct PetInput {
    pub name: String,
    pub breed: String,
    pub species: String,
    pub gender: String,
    pub birthday: NaiveDate,
    pub weight_kg: f64,
}

/// Compute and display a recommendation for a pet as of `today`
pub fn run(
    engine: &FeedingRecommendationEngine,
    input: PetInput,
    today: Option<NaiveDate>,
    format: OutputFormat,
) -> AppResult<()> {
    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let pet = PetRecord::new(
        input.name,
        input.breed,
        input.species,
        input.gender,
        input.birthday,
        input.weight_kg,
    );

    let recommendation = engine.recommend_for_pet(&pet, today)?;
    let age_months = pet.age_in_months(today)?;
    info!(
        pet_id = %pet.id,
        age_months,
        age_category = %recommendation.age_category,
        "Pet recommendation computed"
    );

    display_pet_recommendation(&pet, age_months, &recommendation, format)
}
