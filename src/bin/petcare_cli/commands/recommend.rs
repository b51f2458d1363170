// ABOUTME: Recommend command for petcare-cli
// ABOUTME: Validates raw species, weight, and age input and prints a recommendation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PetCare Feeding

use petcare::{ActivityLevel, AnimalProfile, AppResult, FeedingRecommendationEngine};
use tracing::{debug, info};

use crate::helpers::display::{display_recommendation, OutputFormat};

/// Compute and display a recommendation for an animal profile
pub fn run(
    engine: &FeedingRecommendationEngine,
    species: &str,
    weight_kg: f64,
    age_months: i64,
    activity: ActivityLevel,
    format: OutputFormat,
) -> AppResult<()> {
    let profile = AnimalProfile::parse(species, weight_kg, age_months)
        .inspect_err(|e| debug!(field = e.field().as_str(), "Invalid animal profile: {e}"))?
        .with_activity(activity);

    let recommendation = engine.recommend(&profile)?;
    info!(
        species = %profile.species,
        age_category = %recommendation.age_category,
        daily_food_grams = recommendation.daily_food_grams,
        "Recommendation computed"
    );

    display_recommendation(&recommendation, format)
}
