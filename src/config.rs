// ABOUTME: Application configuration loading for the PetCare tools
// ABOUTME: Layers command-line policy choices over environment-driven feeding configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PetCare Feeding

use petcare_core::errors::AppResult;
use petcare_intelligence::{DogAgePolicy, FeedingConfig, MealCountPolicy};
use tracing::{debug, info};

/// Policy choices made on the command line
///
/// `None` keeps the value from the environment, or the canonical default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PolicyOverrides {
    /// Dog life-stage policy override
    pub dog_age_policy: Option<DogAgePolicy>,
    /// Meal count policy override
    pub meal_count_policy: Option<MealCountPolicy>,
}

/// Load the feeding configuration
///
/// Precedence is defaults, then `PETCARE_FEEDING_*` environment variables,
/// then `overrides`.
///
/// # Errors
///
/// Returns a configuration error if an environment variable cannot be parsed
/// or the resulting configuration fails validation
pub fn load_feeding_config(overrides: PolicyOverrides) -> AppResult<FeedingConfig> {
    let mut config = FeedingConfig::load()?;

    if let Some(policy) = overrides.dog_age_policy {
        config.policy.dog_age_policy = policy;
    }
    if let Some(policy) = overrides.meal_count_policy {
        config.policy.meal_count_policy = policy;
    }

    info!(
        dog_age_policy = %config.policy.dog_age_policy,
        meal_count_policy = %config.policy.meal_count_policy,
        energy_density = config.food.energy_density_kcal_per_100g,
        "Feeding configuration ready"
    );
    debug!(
        "Dog life stages: {}",
        config.policy.dog_age_policy.description()
    );
    Ok(config)
}
