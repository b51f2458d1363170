// ABOUTME: Closed enumerations for species, activity level, life stage, and dog size band
// ABOUTME: Species text is parsed once at the boundary instead of compared as strings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PetCare Feeding

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Supported animal species
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Species {
    /// Domestic cat
    Cat,
    /// Domestic dog
    Dog,
}

impl Species {
    /// All supported species in display order
    pub const ALL: [Self; 2] = [Self::Cat, Self::Dog];

    /// Lowercase name for logging and serialization
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Cat => "cat",
            Self::Dog => "dog",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Species {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cat" | "cats" | "kitten" | "feline" | "猫" | "猫咪" => Ok(Self::Cat),
            "dog" | "dogs" | "puppy" | "canine" | "狗" | "狗狗" => Ok(Self::Dog),
            _ => Err(ValidationError::invalid_species(s)),
        }
    }
}

/// Activity level used to scale daily calories
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Mostly resting, indoor animal
    Low,
    /// Typical daily activity
    #[default]
    Normal,
    /// Working or very energetic animal
    High,
}

impl ActivityLevel {
    /// Lowercase name for logging and serialization
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Normal => "normal",
            Self::High => "high",
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ActivityLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "normal" | "moderate" => Ok(Self::Normal),
            "high" => Ok(Self::High),
            other => Err(format!(
                "Unknown activity level: '{other}'. Valid options: low, normal, high"
            )),
        }
    }
}

/// Coarse life stage driving calorie and meal-count policy
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AgeCategory {
    /// Growing animal (kitten or puppy)
    Juvenile,
    /// Fully grown animal
    Adult,
    /// Aging animal
    Senior,
}

impl AgeCategory {
    /// All life stages in chronological order
    pub const ALL: [Self; 3] = [Self::Juvenile, Self::Adult, Self::Senior];

    /// Species-neutral lowercase name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Juvenile => "juvenile",
            Self::Adult => "adult",
            Self::Senior => "senior",
        }
    }

    /// Species-specific display name ("kitten", "puppy", "adult", "senior")
    #[must_use]
    pub const fn display_name(&self, species: Species) -> &'static str {
        match (self, species) {
            (Self::Juvenile, Species::Cat) => "kitten",
            (Self::Juvenile, Species::Dog) => "puppy",
            (Self::Adult, _) => "adult",
            (Self::Senior, _) => "senior",
        }
    }
}

impl fmt::Display for AgeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Dog size class derived from body weight
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SizeBand {
    /// Under the medium threshold (10 kg by default)
    Small,
    /// Between the medium and large thresholds
    Medium,
    /// At or above the large threshold (25 kg by default)
    Large,
}

impl SizeBand {
    /// Lowercase name for logging and serialization
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

impl fmt::Display for SizeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
