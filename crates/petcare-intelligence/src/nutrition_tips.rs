// ABOUTME: Static nutrition advice keyed by species and life stage
// ABOUTME: Pure lookup table attached to every feeding recommendation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PetCare Feeding

use petcare_core::models::{AgeCategory, Species};

const KITTEN_TIPS: &[&str] = &[
    "Choose a high-protein kitten food",
    "Make sure the food is easy to digest",
    "Transition gradually to solid food",
];

const ADULT_CAT_TIPS: &[&str] = &[
    "Keep protein content above 32%",
    "Limit carbohydrate intake",
    "Make sure the diet provides enough taurine",
];

const SENIOR_CAT_TIPS: &[&str] = &[
    "Choose an easily digestible senior cat food",
    "Increase daily water intake",
    "Have kidney health checked regularly",
];

const PUPPY_TIPS: &[&str] = &[
    "Choose a puppy food suited to the expected adult size",
    "Keep the calcium to phosphorus ratio balanced",
    "Avoid overfeeding",
];

const ADULT_DOG_TIPS: &[&str] = &[
    "Adjust portions to the amount of activity",
    "Maintain an ideal body weight",
    "Check body condition regularly",
];

const SENIOR_DOG_TIPS: &[&str] = &[
    "Choose a low-sodium senior dog food",
    "Add joint care ingredients",
    "Smaller, more frequent meals are easier to digest",
];

/// Advisory strings for an animal of the given species and life stage
///
/// The table is total: every `(Species, AgeCategory)` pair has three tips.
#[must_use]
pub const fn nutrition_tips(species: Species, category: AgeCategory) -> &'static [&'static str] {
    match (species, category) {
        (Species::Cat, AgeCategory::Juvenile) => KITTEN_TIPS,
        (Species::Cat, AgeCategory::Adult) => ADULT_CAT_TIPS,
        (Species::Cat, AgeCategory::Senior) => SENIOR_CAT_TIPS,
        (Species::Dog, AgeCategory::Juvenile) => PUPPY_TIPS,
        (Species::Dog, AgeCategory::Adult) => ADULT_DOG_TIPS,
        (Species::Dog, AgeCategory::Senior) => SENIOR_DOG_TIPS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_pair_has_tips() {
        for species in Species::ALL {
            for category in AgeCategory::ALL {
                assert_eq!(nutrition_tips(species, category).len(), 3);
            }
        }
    }

    #[test]
    fn test_tips_differ_by_species() {
        assert_ne!(
            nutrition_tips(Species::Cat, AgeCategory::Senior),
            nutrition_tips(Species::Dog, AgeCategory::Senior)
        );
    }
}
