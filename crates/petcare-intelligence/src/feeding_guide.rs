// ABOUTME: Static feeding guide reference content for cats and dogs per life stage
// ABOUTME: Per-pound calorie guidance kept separate from the power-law engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PetCare Feeding

//! Feeding Guide
//!
//! Reference text shown alongside computed recommendations. The calorie
//! guidance here is expressed per pound of body weight and is intentionally
//! not reconciled with [`crate::feeding_calculator`]: the two estimates give
//! different magnitudes for the same animal.

use petcare_core::models::{AgeCategory, Species};
use serde::Serialize;

/// One guide entry for a species and life stage
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct FeedingGuide {
    /// Species this entry applies to
    pub species: Species,
    /// Life stage this entry applies to
    pub age_category: AgeCategory,
    /// Age range label, e.g. "1-7 years"
    pub age_range: &'static str,
    /// Recommended number of meals, e.g. "2-3 meals"
    pub daily_meals: &'static str,
    /// Meal timing advice
    pub meal_timing: &'static str,
    /// Nutrients to focus on
    pub nutrition_focus: &'static [&'static str],
    /// Things to watch out for
    pub important_notes: &'static [&'static str],
    /// Calorie guidance label
    pub calories: &'static str,
}

impl FeedingGuide {
    /// Heading such as "Kitten (0-12 months)"
    #[must_use]
    pub fn title(&self) -> String {
        let name = self.age_category.display_name(self.species);
        let mut chars = name.chars();
        let capitalized = chars.next().map_or_else(String::new, |first| {
            first.to_uppercase().chain(chars).collect()
        });
        format!("{capitalized} ({})", self.age_range)
    }
}

const JUVENILE_RANGE: &str = "0-12 months";
const ADULT_RANGE: &str = "1-7 years";
const SENIOR_RANGE: &str = "7+ years";

const CAT_GUIDES: [FeedingGuide; 3] = [
    FeedingGuide {
        species: Species::Cat,
        age_category: AgeCategory::Juvenile,
        age_range: JUVENILE_RANGE,
        daily_meals: "4-6 meals",
        meal_timing: "Feed every 3-4 hours",
        nutrition_focus: &[
            "High protein content (50-60%)",
            "High fat for energy",
            "Easily digestible quality protein",
            "Sufficient taurine",
            "Appropriate calcium to phosphorus ratio",
        ],
        important_notes: &[
            "Kittens grow rapidly and need ample nutrition",
            "Before 6 months they need about 60-65 kcal per pound of body weight a day",
            "Transition gradually from milk or formula to solid food",
            "Serve food at a suitable temperature",
            "Always provide clean drinking water",
        ],
        calories: "60-65 kcal/lb/day",
    },
    FeedingGuide {
        species: Species::Cat,
        age_category: AgeCategory::Adult,
        age_range: ADULT_RANGE,
        daily_meals: "2-3 meals",
        meal_timing: "Feed at fixed times morning and evening",
        nutrition_focus: &[
            "Quality animal protein (cats are obligate carnivores)",
            "Moderate fat to maintain weight",
            "Essential fatty acids for skin and coat",
            "Taurine for heart and eye health",
            "Limited carbohydrate intake",
        ],
        important_notes: &[
            "Adult cat metabolism is stable",
            "Avoid overfeeding that leads to obesity",
            "Regular, measured meals aid digestion",
            "Monitor weight changes",
            "Provide plenty of fresh water",
        ],
        calories: "20-30 kcal/lb/day",
    },
    FeedingGuide {
        species: Species::Cat,
        age_category: AgeCategory::Senior,
        age_range: SENIOR_RANGE,
        daily_meals: "2-3 meals",
        meal_timing: "Small frequent meals to ease digestion",
        nutrition_focus: &[
            "Easily digestible quality protein",
            "More protein to maintain muscle",
            "Lower phosphorus to protect the kidneys",
            "Antioxidants to slow aging",
            "Moderate fiber for gut health",
        ],
        important_notes: &[
            "Protein metabolism declines in senior cats",
            "Watch kidney and heart health",
            "Food may need softening",
            "Adjust the diet after regular checkups",
            "Keep a healthy weight to spare the joints",
        ],
        calories: "Adjust to activity, usually slightly less than in adulthood",
    },
];

const DOG_GUIDES: [FeedingGuide; 3] = [
    FeedingGuide {
        species: Species::Dog,
        age_category: AgeCategory::Juvenile,
        age_range: JUVENILE_RANGE,
        daily_meals: "3-4 meals",
        meal_timing: "Feed every 4-6 hours",
        nutrition_focus: &[
            "High protein to support growth",
            "Moderate fat for energy",
            "Balanced calcium and phosphorus for bone development",
            "DHA for brain development",
            "Easily digestible nutrients",
        ],
        important_notes: &[
            "Growing puppies have high nutritional needs",
            "Growth is mostly complete at 8-10 months",
            "Large and small breeds have different needs",
            "Avoid overfeeding, which affects bone development",
            "Switch to adult food after 12 months",
        ],
        calories: "Adjust by breed size, higher for small breeds",
    },
    FeedingGuide {
        species: Species::Dog,
        age_category: AgeCategory::Adult,
        age_range: ADULT_RANGE,
        daily_meals: "1-2 meals",
        meal_timing: "Once in the morning and once in the evening, or once a day",
        nutrition_focus: &[
            "Balanced protein, fat, and carbohydrates",
            "Mostly quality animal protein",
            "Moderate fiber to aid digestion",
            "Essential fatty acids for the coat",
            "Balanced vitamins and minerals",
        ],
        important_notes: &[
            "Adult dog metabolism is stable",
            "Adjust portions to activity",
            "Avoid vigorous exercise right after meals",
            "Monitor weight and body condition regularly",
            "Choose a food suited to body size",
        ],
        calories: "Calculate from weight, age, and activity",
    },
    FeedingGuide {
        species: Species::Dog,
        age_category: AgeCategory::Senior,
        age_range: SENIOR_RANGE,
        daily_meals: "2-3 meals",
        meal_timing: "Small frequent meals for easier digestion",
        nutrition_focus: &[
            "Easily digestible quality protein",
            "Fewer calories to control weight",
            "Lower sodium to protect the heart",
            "Glucosamine for joint health",
            "Antioxidants to slow aging",
        ],
        important_notes: &[
            "Metabolism slows in senior dogs",
            "A dedicated senior dog food may be needed",
            "Watch dental health and soften food when needed",
            "Adjust the diet plan after regular checkups",
            "Pair the diet with moderate exercise",
        ],
        calories: "10-20% less than in adulthood",
    },
];

/// Every guide entry, cats first, each species in life-stage order
#[must_use]
pub fn all_guides() -> Vec<FeedingGuide> {
    CAT_GUIDES.iter().chain(DOG_GUIDES.iter()).copied().collect()
}

/// Guide entries for one species in life-stage order
#[must_use]
pub const fn guides_for(species: Species) -> &'static [FeedingGuide] {
    match species {
        Species::Cat => &CAT_GUIDES,
        Species::Dog => &DOG_GUIDES,
    }
}

/// The guide entry for one species and life stage
#[must_use]
pub fn guide_for(species: Species, category: AgeCategory) -> Option<&'static FeedingGuide> {
    guides_for(species)
        .iter()
        .find(|guide| guide.age_category == category)
}
