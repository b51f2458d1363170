// ABOUTME: Meal count policies deciding how many meals a day to recommend
// ABOUTME: Keyed either by life stage or by raw age in months
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PetCare Feeding

use std::fmt;
use std::str::FromStr;

use petcare_core::errors::AppError;
use petcare_core::models::AgeCategory;
use serde::{Deserialize, Serialize};

use crate::config::{AgeThresholdsConfig, MealCountConfig};

/// Meal count policy
///
/// - `ByAgeCategory`: juvenile 4, adult 2, senior 2
/// - `ByAgeMonths`: under 6 months 4, under 12 months 3, otherwise 2
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MealCountPolicy {
    /// Meal count follows the life stage
    #[default]
    ByAgeCategory,
    /// Meal count follows raw age, tapering from 4 to 3 to 2 meals
    ByAgeMonths,
}

impl MealCountPolicy {
    /// Meals per day for an animal of the given life stage and age
    #[must_use]
    pub const fn meals_per_day(
        &self,
        category: AgeCategory,
        age_months: u32,
        thresholds: &AgeThresholdsConfig,
        meals: &MealCountConfig,
    ) -> u8 {
        match self {
            Self::ByAgeCategory => match category {
                AgeCategory::Juvenile => meals.juvenile_meals,
                AgeCategory::Adult => meals.adult_meals,
                AgeCategory::Senior => meals.senior_meals,
            },
            Self::ByAgeMonths => {
                if age_months < meals.early_juvenile_max_months {
                    meals.early_juvenile_meals
                } else if age_months < thresholds.juvenile_max_months {
                    meals.late_juvenile_meals
                } else {
                    meals.grown_meals
                }
            }
        }
    }

    /// Policy name for logging and configuration
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::ByAgeCategory => "by_age_category",
            Self::ByAgeMonths => "by_age_months",
        }
    }
}

impl fmt::Display for MealCountPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MealCountPolicy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "by_age_category" | "age_category" | "category" => Ok(Self::ByAgeCategory),
            "by_age_months" | "age_months" | "months" => Ok(Self::ByAgeMonths),
            other => Err(AppError::invalid_input(format!(
                "Unknown meal count policy: '{other}'. Valid options: by_age_category, by_age_months"
            ))),
        }
    }
}
