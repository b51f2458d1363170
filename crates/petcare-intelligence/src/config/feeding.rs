// ABOUTME: Feeding engine configuration for calorie, life-stage, and meal calculations
// ABOUTME: Carries every numeric constant of the engine plus the selected policies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PetCare Feeding

//! Feeding Recommendation Configuration
//!
//! Every constant used by the engine lives here so that a recommendation is a
//! pure function of `(AnimalProfile, FeedingConfig)`. Defaults reproduce the
//! canonical policy set: simple dog life stages and meal counts keyed by life
//! stage.
//!
//! Daily calories are estimated as `coefficient * weight_kg ^ exponent`,
//! scaled by life-stage and activity multipliers, then converted to grams of
//! food using a fixed energy density.

use std::env::{self, VarError};
use std::str::FromStr;

use petcare_core::constants::env_config;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::ConfigError;
use crate::algorithms::{DogAgePolicy, MealCountPolicy};

/// Complete feeding engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FeedingConfig {
    /// Power-law base calorie parameters
    pub metabolic: MetabolicConfig,
    /// Life-stage thresholds in months and dog size bands in kilograms
    pub age_thresholds: AgeThresholdsConfig,
    /// Calorie multipliers per species and life stage
    pub age_multipliers: AgeMultipliersConfig,
    /// Calorie multipliers per activity level
    pub activity_multipliers: ActivityMultipliersConfig,
    /// Food energy density
    pub food: FoodConfig,
    /// Meal counts used by both meal policies
    pub meals: MealCountConfig,
    /// Ideal weight range factors
    pub weight_range: WeightRangeConfig,
    /// Selected classification and meal count policies
    pub policy: FeedingPolicy,
}

/// Base metabolic calorie parameters
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetabolicConfig {
    /// Multiplier applied to `weight_kg ^ exponent` (70)
    pub coefficient: f64,
    /// Weight exponent for cats (0.67)
    pub cat_exponent: f64,
    /// Weight exponent for dogs (0.75)
    pub dog_exponent: f64,
}

impl Default for MetabolicConfig {
    fn default() -> Self {
        Self {
            coefficient: 70.0,
            cat_exponent: 0.67,
            dog_exponent: 0.75,
        }
    }
}

/// Life-stage thresholds
///
/// All month values are exclusive upper bounds of the earlier stage: an
/// animal exactly `juvenile_max_months` old is already an adult.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AgeThresholdsConfig {
    /// Juvenile below this age for both species (12)
    pub juvenile_max_months: u32,
    /// Cats are senior from this age (84)
    pub cat_senior_start_months: u32,
    /// Dogs are senior from this age under the simple policy (84)
    pub dog_senior_start_months: u32,
    /// Small dogs are senior from this age under the size-adjusted policy (96)
    pub small_dog_senior_start_months: u32,
    /// Medium dogs are senior from this age under the size-adjusted policy (84)
    pub medium_dog_senior_start_months: u32,
    /// Large dogs are senior from this age under the size-adjusted policy (72)
    pub large_dog_senior_start_months: u32,
    /// Dogs at or above this weight are medium (10 kg)
    pub medium_dog_min_kg: f64,
    /// Dogs at or above this weight are large (25 kg)
    pub large_dog_min_kg: f64,
}

impl Default for AgeThresholdsConfig {
    fn default() -> Self {
        Self {
            juvenile_max_months: 12,
            cat_senior_start_months: 84,
            dog_senior_start_months: 84,
            small_dog_senior_start_months: 96,
            medium_dog_senior_start_months: 84,
            large_dog_senior_start_months: 72,
            medium_dog_min_kg: 10.0,
            large_dog_min_kg: 25.0,
        }
    }
}

/// Calorie multipliers per species and life stage
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AgeMultipliersConfig {
    /// Kittens: 2.5
    pub cat_juvenile: f64,
    /// Adult cats: 1.4
    pub cat_adult: f64,
    /// Senior cats: 1.2
    pub cat_senior: f64,
    /// Puppies: 2.0
    pub dog_juvenile: f64,
    /// Adult dogs: 1.6
    pub dog_adult: f64,
    /// Senior dogs: 1.3
    pub dog_senior: f64,
}

impl Default for AgeMultipliersConfig {
    fn default() -> Self {
        Self {
            cat_juvenile: 2.5,
            cat_adult: 1.4,
            cat_senior: 1.2,
            dog_juvenile: 2.0,
            dog_adult: 1.6,
            dog_senior: 1.3,
        }
    }
}

/// Calorie multipliers per activity level
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityMultipliersConfig {
    /// Low activity: 0.8
    pub low: f64,
    /// Normal activity: 1.0
    pub normal: f64,
    /// High activity: 1.3
    pub high: f64,
}

impl Default for ActivityMultipliersConfig {
    fn default() -> Self {
        Self {
            low: 0.8,
            normal: 1.0,
            high: 1.3,
        }
    }
}

/// Food energy density
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FoodConfig {
    /// Energy per 100 g of food in kcal (350). A design parameter, not derived.
    pub energy_density_kcal_per_100g: f64,
}

impl Default for FoodConfig {
    fn default() -> Self {
        Self {
            energy_density_kcal_per_100g: 350.0,
        }
    }
}

/// Meal counts for both meal count policies
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MealCountConfig {
    /// By life stage: juvenile meals per day (4)
    pub juvenile_meals: u8,
    /// By life stage: adult meals per day (2)
    pub adult_meals: u8,
    /// By life stage: senior meals per day (2)
    pub senior_meals: u8,
    /// By age: the youngest bracket ends at this age (6 months)
    pub early_juvenile_max_months: u32,
    /// By age: meals per day in the youngest bracket (4)
    pub early_juvenile_meals: u8,
    /// By age: meals per day until `juvenile_max_months` (3)
    pub late_juvenile_meals: u8,
    /// By age: meals per day once grown (2)
    pub grown_meals: u8,
}

impl Default for MealCountConfig {
    fn default() -> Self {
        Self {
            juvenile_meals: 4,
            adult_meals: 2,
            senior_meals: 2,
            early_juvenile_max_months: 6,
            early_juvenile_meals: 4,
            late_juvenile_meals: 3,
            grown_meals: 2,
        }
    }
}

/// Ideal weight range factors
///
/// This is a heuristic placeholder of ±10% around the current weight, not a
/// breed-specific target.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeightRangeConfig {
    /// Lower bound factor (0.9)
    pub min_factor: f64,
    /// Upper bound factor (1.1)
    pub max_factor: f64,
}

impl Default for WeightRangeConfig {
    fn default() -> Self {
        Self {
            min_factor: 0.9,
            max_factor: 1.1,
        }
    }
}

/// Selected policies
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeedingPolicy {
    /// How dogs are assigned a life stage
    pub dog_age_policy: DogAgePolicy,
    /// How meals per day are chosen
    pub meal_count_policy: MealCountPolicy,
}

impl FeedingPolicy {
    /// Canonical policy set: simple dog life stages, meals by life stage
    #[must_use]
    pub const fn canonical() -> Self {
        Self {
            dog_age_policy: DogAgePolicy::Simple,
            meal_count_policy: MealCountPolicy::ByAgeCategory,
        }
    }

    /// Policy set of the per-pet recommendation screen: size-adjusted dog
    /// life stages, meals by life stage
    #[must_use]
    pub const fn per_pet() -> Self {
        Self {
            dog_age_policy: DogAgePolicy::SizeAdjusted,
            meal_count_policy: MealCountPolicy::ByAgeCategory,
        }
    }

    /// Policy set of the standalone calculator: simple dog life stages,
    /// meals by raw age in months
    #[must_use]
    pub const fn standalone_calculator() -> Self {
        Self {
            dog_age_policy: DogAgePolicy::Simple,
            meal_count_policy: MealCountPolicy::ByAgeMonths,
        }
    }
}

impl FeedingConfig {
    /// Load configuration from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or
    /// validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        debug!(
            dog_age_policy = %config.policy.dog_age_policy,
            meal_count_policy = %config.policy.meal_count_policy,
            "Feeding configuration loaded"
        );
        Ok(config)
    }

    /// Return a copy of this configuration using the given policies
    #[must_use]
    pub fn with_policy(mut self, policy: FeedingPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` for non-positive coefficients,
    /// multipliers, energy density, or meal counts, and
    /// `ConfigError::InvalidRange` for thresholds out of order
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_energy()?;
        self.validate_thresholds()?;
        self.validate_meals()?;

        let range = &self.weight_range;
        if range.min_factor <= 0.0 || range.min_factor > 1.0 || range.max_factor < 1.0 {
            return Err(ConfigError::InvalidRange(
                "weight range factors must satisfy 0 < min_factor <= 1.0 <= max_factor",
            ));
        }

        Ok(())
    }

    fn validate_energy(&self) -> Result<(), ConfigError> {
        let metabolic = &self.metabolic;
        if !all_positive(&[
            metabolic.coefficient,
            metabolic.cat_exponent,
            metabolic.dog_exponent,
        ]) {
            return Err(ConfigError::ValueOutOfRange(
                "metabolic coefficient and exponents must be positive",
            ));
        }

        let age = &self.age_multipliers;
        if !all_positive(&[
            age.cat_juvenile,
            age.cat_adult,
            age.cat_senior,
            age.dog_juvenile,
            age.dog_adult,
            age.dog_senior,
        ]) {
            return Err(ConfigError::ValueOutOfRange(
                "age multipliers must be positive",
            ));
        }

        let activity = &self.activity_multipliers;
        if !all_positive(&[activity.low, activity.normal, activity.high]) {
            return Err(ConfigError::ValueOutOfRange(
                "activity multipliers must be positive",
            ));
        }
        if activity.low > activity.normal || activity.normal > activity.high {
            return Err(ConfigError::InvalidRange(
                "activity multipliers must satisfy low <= normal <= high",
            ));
        }

        if !all_positive(&[self.food.energy_density_kcal_per_100g]) {
            return Err(ConfigError::ValueOutOfRange(
                "energy density must be positive",
            ));
        }

        Ok(())
    }

    fn validate_thresholds(&self) -> Result<(), ConfigError> {
        let t = &self.age_thresholds;
        let senior_starts = [
            t.cat_senior_start_months,
            t.dog_senior_start_months,
            t.small_dog_senior_start_months,
            t.medium_dog_senior_start_months,
            t.large_dog_senior_start_months,
        ];
        if senior_starts
            .iter()
            .any(|&start| start <= t.juvenile_max_months)
        {
            return Err(ConfigError::InvalidRange(
                "senior onset must be later than juvenile_max_months",
            ));
        }

        if !all_positive(&[t.medium_dog_min_kg]) || t.medium_dog_min_kg >= t.large_dog_min_kg {
            return Err(ConfigError::InvalidRange(
                "dog size bands must satisfy 0 < medium_dog_min_kg < large_dog_min_kg",
            ));
        }

        Ok(())
    }

    fn validate_meals(&self) -> Result<(), ConfigError> {
        let m = &self.meals;
        if [
            m.juvenile_meals,
            m.adult_meals,
            m.senior_meals,
            m.early_juvenile_meals,
            m.late_juvenile_meals,
            m.grown_meals,
        ]
        .contains(&0)
        {
            return Err(ConfigError::ValueOutOfRange(
                "meals per day must be at least 1",
            ));
        }

        if m.early_juvenile_max_months > self.age_thresholds.juvenile_max_months {
            return Err(ConfigError::InvalidRange(
                "early_juvenile_max_months must be <= juvenile_max_months",
            ));
        }

        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        let val = match env::var(env_var_name) {
            Ok(val) => val,
            Err(VarError::NotPresent) => return Ok(()),
            Err(e) => return Err(e.into()),
        };
        *target = val
            .trim()
            .parse()
            .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}: '{val}'")))?;
        Ok(())
    }

    /// Apply `PETCARE_FEEDING_*` environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(
            env_config::ENERGY_DENSITY,
            &mut self.food.energy_density_kcal_per_100g,
        )?;
        Self::apply_env_var(
            env_config::METABOLIC_COEFFICIENT,
            &mut self.metabolic.coefficient,
        )?;
        Self::apply_env_var(env_config::CAT_EXPONENT, &mut self.metabolic.cat_exponent)?;
        Self::apply_env_var(env_config::DOG_EXPONENT, &mut self.metabolic.dog_exponent)?;
        Self::apply_env_var(
            env_config::ACTIVITY_LOW,
            &mut self.activity_multipliers.low,
        )?;
        Self::apply_env_var(
            env_config::ACTIVITY_HIGH,
            &mut self.activity_multipliers.high,
        )?;
        Self::apply_env_var(
            env_config::DOG_AGE_POLICY,
            &mut self.policy.dog_age_policy,
        )?;
        Self::apply_env_var(
            env_config::MEAL_COUNT_POLICY,
            &mut self.policy.meal_count_policy,
        )?;

        Ok(self)
    }
}

fn all_positive(values: &[f64]) -> bool {
    values.iter().all(|v| v.is_finite() && *v > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_defaults_validate() {
        assert!(FeedingConfig::default().validate().is_ok());
        assert_eq!(FeedingConfig::default().policy, FeedingPolicy::canonical());
    }

    #[test]
    fn test_rejects_senior_before_juvenile_end() {
        let mut config = FeedingConfig::default();
        config.age_thresholds.large_dog_senior_start_months = 10;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange(_))
        ));
    }

    #[test]
    fn test_rejects_zero_energy_density() {
        let mut config = FeedingConfig::default();
        config.food.energy_density_kcal_per_100g = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange(_))
        ));
    }

    #[test]
    fn test_rejects_zero_meals() {
        let mut config = FeedingConfig::default();
        config.meals.adult_meals = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_inverted_weight_range() {
        let mut config = FeedingConfig::default();
        config.weight_range.max_factor = 0.95;
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_env_overrides_apply() {
        env::set_var(env_config::ENERGY_DENSITY, "400");
        env::set_var(env_config::DOG_AGE_POLICY, "size_adjusted");
        let loaded = FeedingConfig::load();
        env::remove_var(env_config::ENERGY_DENSITY);
        env::remove_var(env_config::DOG_AGE_POLICY);

        let config = loaded.unwrap();
        assert!((config.food.energy_density_kcal_per_100g - 400.0).abs() < f64::EPSILON);
        assert_eq!(config.policy.dog_age_policy, DogAgePolicy::SizeAdjusted);
    }

    #[test]
    #[serial]
    fn test_env_override_parse_failure() {
        env::set_var(env_config::MEAL_COUNT_POLICY, "whenever");
        let loaded = FeedingConfig::load();
        env::remove_var(env_config::MEAL_COUNT_POLICY);

        assert!(matches!(loaded, Err(ConfigError::Parse(_))));
    }

    #[test]
    #[serial]
    fn test_env_override_failing_validation() {
        env::set_var(env_config::ENERGY_DENSITY, "-5");
        let loaded = FeedingConfig::load();
        env::remove_var(env_config::ENERGY_DENSITY);

        assert!(matches!(loaded, Err(ConfigError::ValueOutOfRange(_))));
    }

    #[cfg(unix)]
    #[test]
    #[serial]
    fn test_env_override_not_unicode() {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;

        env::set_var(
            env_config::CAT_EXPONENT,
            OsString::from_vec(vec![0x30, 0x2e, 0xff]),
        );
        let loaded = FeedingConfig::load();
        env::remove_var(env_config::CAT_EXPONENT);

        assert!(matches!(
            loaded,
            Err(ConfigError::EnvVar(VarError::NotUnicode(_)))
        ));
    }
}
