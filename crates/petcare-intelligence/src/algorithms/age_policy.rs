// ABOUTME: Life-stage classification policies for cats and dogs
// ABOUTME: Simple fixed thresholds or size-adjusted senior onset derived from dog weight
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PetCare Feeding

use std::fmt;
use std::str::FromStr;

use petcare_core::errors::AppError;
use petcare_core::models::{AgeCategory, SizeBand, Species};
use serde::{Deserialize, Serialize};

use crate::config::AgeThresholdsConfig;

/// Dog life-stage classification policy
///
/// Two policies exist and are never blended:
///
/// - `Simple`: juvenile below 12 months, senior from 84 months regardless of size
/// - `SizeAdjusted`: senior onset depends on the size band derived from body
///   weight (small 96, medium 84, large 72 months), since larger breeds age faster
///
/// Cats always use fixed thresholds (juvenile below 12, senior from 84 months).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DogAgePolicy {
    /// Fixed thresholds shared with cats
    #[default]
    Simple,
    /// Senior onset keyed by size band
    SizeAdjusted,
}

impl DogAgePolicy {
    /// Classify a dog of the given weight and age
    #[must_use]
    pub fn categorize(
        &self,
        weight_kg: f64,
        age_months: u32,
        thresholds: &AgeThresholdsConfig,
    ) -> AgeCategory {
        if age_months < thresholds.juvenile_max_months {
            return AgeCategory::Juvenile;
        }

        let senior_start = match self {
            Self::Simple => thresholds.dog_senior_start_months,
            Self::SizeAdjusted => match size_band(weight_kg, thresholds) {
                SizeBand::Small => thresholds.small_dog_senior_start_months,
                SizeBand::Medium => thresholds.medium_dog_senior_start_months,
                SizeBand::Large => thresholds.large_dog_senior_start_months,
            },
        };

        if age_months < senior_start {
            AgeCategory::Adult
        } else {
            AgeCategory::Senior
        }
    }

    /// Policy name for logging and configuration
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::SizeAdjusted => "size_adjusted",
        }
    }

    /// Human-readable summary of the thresholds
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Simple => "Simple: juvenile < 12 months, senior >= 84 months",
            Self::SizeAdjusted => {
                "Size-adjusted: juvenile < 12 months, senior >= 96/84/72 months for small/medium/large dogs"
            }
        }
    }
}

impl fmt::Display for DogAgePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DogAgePolicy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "simple" => Ok(Self::Simple),
            "size_adjusted" | "size" => Ok(Self::SizeAdjusted),
            other => Err(AppError::invalid_input(format!(
                "Unknown dog age policy: '{other}'. Valid options: simple, size_adjusted"
            ))),
        }
    }
}

/// Dog size band from body weight
///
/// Small below `medium_dog_min_kg`, large at or above `large_dog_min_kg`,
/// medium in between.
#[must_use]
pub fn size_band(weight_kg: f64, thresholds: &AgeThresholdsConfig) -> SizeBand {
    if weight_kg < thresholds.medium_dog_min_kg {
        SizeBand::Small
    } else if weight_kg < thresholds.large_dog_min_kg {
        SizeBand::Medium
    } else {
        SizeBand::Large
    }
}

/// Classify a cat by age
#[must_use]
pub const fn categorize_cat(age_months: u32, thresholds: &AgeThresholdsConfig) -> AgeCategory {
    if age_months < thresholds.juvenile_max_months {
        AgeCategory::Juvenile
    } else if age_months < thresholds.cat_senior_start_months {
        AgeCategory::Adult
    } else {
        AgeCategory::Senior
    }
}

/// Determine the age category for any supported species
#[must_use]
pub fn determine_age_category(
    species: Species,
    weight_kg: f64,
    age_months: u32,
    policy: DogAgePolicy,
    thresholds: &AgeThresholdsConfig,
) -> AgeCategory {
    match species {
        Species::Cat => categorize_cat(age_months, thresholds),
        Species::Dog => policy.categorize(weight_kg, age_months, thresholds),
    }
}
