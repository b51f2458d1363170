// ABOUTME: Animal profile input for the feeding recommendation engine
// ABOUTME: Species, weight, age in months, and activity level with boundary validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PetCare Feeding

use serde::{Deserialize, Serialize};

use super::species::{ActivityLevel, Species};
use crate::errors::ValidationError;

/// Immutable description of the animal a recommendation is computed for
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct AnimalProfile {
    /// Species of the animal
    pub species: Species,
    /// Current body weight in kilograms
    pub weight_kg: f64,
    /// Age in whole elapsed calendar months
    pub age_months: u32,
    /// Activity level (defaults to normal)
    #[serde(default)]
    pub activity_level: ActivityLevel,
}

impl AnimalProfile {
    /// Create a profile with normal activity
    #[must_use]
    pub const fn new(species: Species, weight_kg: f64, age_months: u32) -> Self {
        Self {
            species,
            weight_kg,
            age_months,
            activity_level: ActivityLevel::Normal,
        }
    }

    /// Return a copy of this profile with the given activity level
    #[must_use]
    pub const fn with_activity(mut self, activity_level: ActivityLevel) -> Self {
        self.activity_level = activity_level;
        self
    }

    /// Build a profile from untyped input, validating every field
    ///
    /// # Errors
    ///
    /// - `InvalidSpecies` if `species` is empty or not a supported species
    /// - `InvalidWeight` if `weight_kg` is not a positive finite number
    /// - `InvalidAge` if `age_months` is negative or too large
    pub fn parse(species: &str, weight_kg: f64, age_months: i64) -> Result<Self, ValidationError> {
        let species: Species = species.parse()?;
        validate_weight(weight_kg)?;
        let age_months = u32::try_from(age_months).map_err(|_| {
            let reason = if age_months < 0 {
                format!("age must be a non-negative number of months, got {age_months}")
            } else {
                format!("age must be at most {} months, got {age_months}", u32::MAX)
            };
            ValidationError::invalid_age(reason)
        })?;

        Ok(Self::new(species, weight_kg, age_months))
    }

    /// Check the numeric preconditions of the profile
    ///
    /// # Errors
    ///
    /// Returns `InvalidWeight` if the weight is zero, negative, or not finite
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_weight(self.weight_kg)
    }
}

/// Weight must be a positive, finite number of kilograms
///
/// # Errors
///
/// Returns `InvalidWeight` carrying the rejected value
pub fn validate_weight(weight_kg: f64) -> Result<(), ValidationError> {
    if weight_kg.is_finite() && weight_kg > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::invalid_weight(weight_kg))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_profile() {
        let profile = AnimalProfile::parse("cat", 4.0, 6).unwrap();
        assert_eq!(profile.species, Species::Cat);
        assert_eq!(profile.age_months, 6);
        assert_eq!(profile.activity_level, ActivityLevel::Normal);
    }

    #[test]
    fn test_parse_rejects_negative_age() {
        let err = AnimalProfile::parse("dog", 10.0, -1).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidAge { .. }));
    }

    #[test]
    fn test_parse_checks_species_before_weight() {
        let err = AnimalProfile::parse("", -1.0, 3).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidSpecies { .. }));
    }

    #[test]
    fn test_validate_weight_rejects_non_finite() {
        assert!(validate_weight(f64::NAN).is_err());
        assert!(validate_weight(f64::INFINITY).is_err());
        assert!(validate_weight(0.0).is_err());
        assert!(validate_weight(0.1).is_ok());
    }
}
