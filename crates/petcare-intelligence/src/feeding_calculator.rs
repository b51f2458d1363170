// ABOUTME: Feeding recommendation engine for cats and dogs
// ABOUTME: Calories, food mass, meal count, schedule, tips, and ideal weight range
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PetCare Feeding

//! Feeding Calculator Module
//!
//! Computes a daily feeding recommendation from an [`AnimalProfile`]:
//!
//! 1. Life stage from species and age (dogs through the configured
//!    [`DogAgePolicy`](crate::algorithms::DogAgePolicy))
//! 2. Base calories `coefficient * weight_kg ^ exponent`
//! 3. Daily calories = base * life-stage multiplier * activity multiplier
//! 4. Food mass from a fixed energy density (350 kcal per 100 g)
//! 5. Meals per day from the configured
//!    [`MealCountPolicy`](crate::algorithms::MealCountPolicy), split evenly
//! 6. Fixed clock-time schedule, static nutrition tips, ideal weight range
//!
//! Every function is pure. The same profile and configuration always produce
//! the same recommendation.

use chrono::NaiveDate;
use petcare_core::errors::ValidationError;
use petcare_core::models::{
    ActivityLevel, AgeCategory, AnimalProfile, PetRecord, SizeBand, Species,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::algorithms::age_policy;
use crate::config::FeedingConfig;
use crate::nutrition_tips;

const FOUR_MEAL_SCHEDULE: [&str; 4] = ["07:00", "12:00", "17:00", "21:00"];
const THREE_MEAL_SCHEDULE: [&str; 3] = ["08:00", "14:00", "20:00"];
const TWO_MEAL_SCHEDULE: [&str; 2] = ["08:00", "18:00"];

/// Ideal weight bounds around the current weight
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WeightRange {
    /// Lower bound in kilograms
    pub min: f64,
    /// Upper bound in kilograms
    pub max: f64,
    /// Target weight in kilograms
    pub ideal: f64,
}

/// Assessment of a weight against an ideal weight range
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WeightStatus {
    /// Below the range minimum
    Underweight,
    /// Within the range, bounds included
    Normal,
    /// Above the range maximum
    Overweight,
}

impl WeightStatus {
    /// Display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal",
            Self::Overweight => "Overweight",
        }
    }
}

/// Complete feeding recommendation for one animal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeedingRecommendation {
    /// Species the recommendation was computed for
    pub species: Species,
    /// Derived life stage
    pub age_category: AgeCategory,
    /// Activity level used for the calorie adjustment
    pub activity_level: ActivityLevel,
    /// Weight-derived baseline before multipliers (kcal)
    pub base_calories: f64,
    /// Daily energy requirement (kcal)
    pub daily_calories: f64,
    /// Daily food mass (g)
    pub daily_food_grams: f64,
    /// Number of meals per day
    pub meals_per_day: u8,
    /// Food mass per meal (g)
    pub grams_per_meal: f64,
    /// Clock times of each meal, one per meal
    pub feeding_times: Vec<String>,
    /// Advice for the species and life stage
    pub nutrition_tips: Vec<String>,
    /// Heuristic ideal weight range (kg)
    pub ideal_weight_range: WeightRange,
}

impl FeedingRecommendation {
    /// Classify `current_weight_kg` against the ideal weight range
    #[must_use]
    pub fn weight_status(&self, current_weight_kg: f64) -> WeightStatus {
        if current_weight_kg < self.ideal_weight_range.min {
            WeightStatus::Underweight
        } else if current_weight_kg > self.ideal_weight_range.max {
            WeightStatus::Overweight
        } else {
            WeightStatus::Normal
        }
    }

    /// Daily food mass rounded to whole grams, e.g. "127g"
    #[must_use]
    pub fn formatted_daily_amount(&self) -> String {
        format!("{:.0}g", self.daily_food_grams)
    }

    /// Per-meal food mass rounded to whole grams, e.g. "32g"
    #[must_use]
    pub fn formatted_meal_size(&self) -> String {
        format!("{:.0}g", self.grams_per_meal)
    }
}

/// Compute a feeding recommendation
///
/// # Errors
///
/// Returns `ValidationError::InvalidWeight` if the profile weight is not a
/// positive finite number. Species and age are already closed types here;
/// their errors are raised when parsing untyped input with
/// [`AnimalProfile::parse`].
pub fn compute_recommendation(
    profile: &AnimalProfile,
    config: &FeedingConfig,
) -> Result<FeedingRecommendation, ValidationError> {
    if let Err(error) = profile.validate() {
        debug!(field = error.field().as_str(), %error, "Rejected animal profile");
        return Err(error);
    }

    let AnimalProfile {
        species,
        weight_kg,
        age_months,
        activity_level,
    } = *profile;

    let age_category = determine_age_category(species, weight_kg, age_months, config);
    let base_calories = calculate_base_calories(species, weight_kg, config);
    let daily_calories = base_calories
        * age_multiplier(species, age_category, config)
        * activity_multiplier(activity_level, config);
    let daily_food_grams = calculate_food_grams(daily_calories, config);
    let meals = meals_per_day(age_category, age_months, config);
    let grams_per_meal = daily_food_grams / f64::from(meals);

    debug!(
        species = %species,
        age_category = %age_category,
        activity_level = %activity_level,
        base_calories,
        daily_calories,
        daily_food_grams,
        meals_per_day = meals,
        "Computed feeding recommendation"
    );

    Ok(FeedingRecommendation {
        species,
        age_category,
        activity_level,
        base_calories,
        daily_calories,
        daily_food_grams,
        meals_per_day: meals,
        grams_per_meal,
        feeding_times: feeding_schedule(meals),
        nutrition_tips: nutrition_tips::nutrition_tips(species, age_category)
            .iter()
            .map(|&tip| tip.to_owned())
            .collect(),
        ideal_weight_range: ideal_weight_range(weight_kg, config),
    })
}

/// Life stage under the configured dog age policy
#[must_use]
pub fn determine_age_category(
    species: Species,
    weight_kg: f64,
    age_months: u32,
    config: &FeedingConfig,
) -> AgeCategory {
    age_policy::determine_age_category(
        species,
        weight_kg,
        age_months,
        config.policy.dog_age_policy,
        &config.age_thresholds,
    )
}

/// Dog size band from body weight
#[must_use]
pub fn size_band(weight_kg: f64, config: &FeedingConfig) -> SizeBand {
    age_policy::size_band(weight_kg, &config.age_thresholds)
}

/// Base metabolic calories `coefficient * weight_kg ^ exponent`
#[must_use]
pub fn calculate_base_calories(species: Species, weight_kg: f64, config: &FeedingConfig) -> f64 {
    let exponent = match species {
        Species::Cat => config.metabolic.cat_exponent,
        Species::Dog => config.metabolic.dog_exponent,
    };
    weight_kg.powf(exponent) * config.metabolic.coefficient
}

/// Calorie multiplier for a species and life stage
#[must_use]
pub const fn age_multiplier(species: Species, category: AgeCategory, config: &FeedingConfig) -> f64 {
    let m = &config.age_multipliers;
    match (species, category) {
        (Species::Cat, AgeCategory::Juvenile) => m.cat_juvenile,
        (Species::Cat, AgeCategory::Adult) => m.cat_adult,
        (Species::Cat, AgeCategory::Senior) => m.cat_senior,
        (Species::Dog, AgeCategory::Juvenile) => m.dog_juvenile,
        (Species::Dog, AgeCategory::Adult) => m.dog_adult,
        (Species::Dog, AgeCategory::Senior) => m.dog_senior,
    }
}

/// Calorie multiplier for an activity level
#[must_use]
pub const fn activity_multiplier(activity_level: ActivityLevel, config: &FeedingConfig) -> f64 {
    match activity_level {
        ActivityLevel::Low => config.activity_multipliers.low,
        ActivityLevel::Normal => config.activity_multipliers.normal,
        ActivityLevel::High => config.activity_multipliers.high,
    }
}

/// Food mass in grams providing `calories` at the configured energy density
#[must_use]
pub fn calculate_food_grams(calories: f64, config: &FeedingConfig) -> f64 {
    calories / config.food.energy_density_kcal_per_100g * 100.0
}

/// Meals per day under the configured meal count policy
#[must_use]
pub const fn meals_per_day(category: AgeCategory, age_months: u32, config: &FeedingConfig) -> u8 {
    config.policy.meal_count_policy.meals_per_day(
        category,
        age_months,
        &config.age_thresholds,
        &config.meals,
    )
}

/// Clock times for the given number of meals
///
/// Four and three meals have dedicated schedules; any other count falls back
/// to the two-meal schedule.
#[must_use]
pub fn feeding_schedule(meals: u8) -> Vec<String> {
    let times: &[&str] = match meals {
        4 => &FOUR_MEAL_SCHEDULE,
        3 => &THREE_MEAL_SCHEDULE,
        _ => &TWO_MEAL_SCHEDULE,
    };
    times.iter().map(|&time| time.to_owned()).collect()
}

/// Ideal weight range around the current weight
///
/// A heuristic placeholder (±10% by default), not a breed-specific target.
#[must_use]
pub fn ideal_weight_range(weight_kg: f64, config: &FeedingConfig) -> WeightRange {
    WeightRange {
        min: weight_kg * config.weight_range.min_factor,
        max: weight_kg * config.weight_range.max_factor,
        ideal: weight_kg,
    }
}

/// Feeding recommendation engine bound to one configuration
///
/// A plain value: construct one per configuration and share it freely.
#[derive(Debug, Clone, Default)]
pub struct FeedingRecommendationEngine {
    config: FeedingConfig,
}

impl FeedingRecommendationEngine {
    /// Create an engine using the given configuration
    #[must_use]
    pub const fn new(config: FeedingConfig) -> Self {
        Self { config }
    }

    /// Configuration used by this engine
    #[must_use]
    pub const fn config(&self) -> &FeedingConfig {
        &self.config
    }

    /// Compute a recommendation for an animal profile
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidWeight` for a non-positive weight
    pub fn recommend(
        &self,
        profile: &AnimalProfile,
    ) -> Result<FeedingRecommendation, ValidationError> {
        compute_recommendation(profile, &self.config)
    }

    /// Compute a recommendation for a stored pet as of `today`
    ///
    /// # Errors
    ///
    /// Returns the first failing check of [`PetRecord::to_profile`]: blank
    /// name, unknown species, non-positive weight, or a future birthday
    pub fn recommend_for_pet(
        &self,
        pet: &PetRecord,
        today: NaiveDate,
    ) -> Result<FeedingRecommendation, ValidationError> {
        let profile = pet.to_profile(today).inspect_err(|error| {
            debug!(pet_id = %pet.id, field = error.field().as_str(), %error, "Rejected pet record");
        })?;
        self.recommend(&profile)
    }
}
