// ABOUTME: Integration tests for the feeding recommendation engine
// ABOUTME: Reference scenarios, life-stage policies, meal policies, activity, and invariants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PetCare Feeding
//! Feeding calculator test suite
//!
//! - Reference scenarios for kittens, adult dogs, and senior cats
//! - Simple and size-adjusted dog life stages
//! - Meal count policies
//! - Activity multipliers
//! - Invariants over a grid of profiles
//! - Input validation at the parsing boundary

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::thread;

use petcare::{
    compute_recommendation, ActivityLevel, AgeCategory, AnimalProfile, DogAgePolicy,
    FeedingConfig, FeedingRecommendationEngine, MealCountPolicy, SizeBand, Species,
    ValidationError, ValidationField, WeightStatus,
};
use petcare_intelligence::feeding_calculator::{
    activity_multiplier, age_multiplier, calculate_base_calories, determine_age_category,
    feeding_schedule, ideal_weight_range, size_band,
};

mod common;

use common::{adult_dog, assert_close, config_with, init_test_logging, kitten, senior_cat};

// ============================================================================
// REFERENCE SCENARIOS
// ============================================================================

#[test]
fn test_kitten_reference_scenario() {
    init_test_logging();
    let rec = compute_recommendation(&kitten(), &FeedingConfig::default()).unwrap();

    // 4.0^0.67 * 70 = 177.21, x2.5 = 443.01 kcal, /350*100 = 126.58 g
    assert_eq!(rec.age_category, AgeCategory::Juvenile);
    assert_close(rec.base_calories, 177.21, 0.01);
    assert_close(rec.daily_calories, 443.01, 0.01);
    assert_close(rec.daily_food_grams, 126.58, 0.01);
    assert_eq!(rec.meals_per_day, 4);
    assert_close(rec.grams_per_meal, 31.64, 0.01);
    assert_eq!(rec.feeding_times, vec!["07:00", "12:00", "17:00", "21:00"]);
    assert_eq!(rec.formatted_daily_amount(), "127g");
    assert_eq!(rec.formatted_meal_size(), "32g");
}

#[test]
fn test_adult_dog_reference_scenario() {
    init_test_logging();
    let rec = compute_recommendation(&adult_dog(), &FeedingConfig::default()).unwrap();

    // 20^0.75 * 70 = 662.02, x1.6 = 1059.23 kcal, /350*100 = 302.64 g
    assert_eq!(rec.age_category, AgeCategory::Adult);
    assert_close(rec.base_calories, 662.02, 0.01);
    assert_close(rec.daily_calories, 1059.23, 0.01);
    assert_close(rec.daily_food_grams, 302.64, 0.01);
    assert_eq!(rec.meals_per_day, 2);
    assert_close(rec.grams_per_meal, 151.32, 0.01);
    assert_eq!(rec.feeding_times, vec!["08:00", "18:00"]);
}

#[test]
fn test_senior_cat_reference_scenario() {
    let config = FeedingConfig::default();
    let rec = compute_recommendation(&senior_cat(), &config).unwrap();

    assert_eq!(rec.age_category, AgeCategory::Senior);
    assert_close(age_multiplier(Species::Cat, AgeCategory::Senior, &config), 1.2, 1e-12);
    assert_close(rec.daily_calories, rec.base_calories * 1.2, 1e-9);
    assert_eq!(rec.meals_per_day, 2);
}

#[test]
fn test_recommendation_is_pure() {
    let config = FeedingConfig::default();
    let first = compute_recommendation(&kitten(), &config).unwrap();
    let second = compute_recommendation(&kitten(), &config).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.daily_calories.to_bits(), second.daily_calories.to_bits());
}

// ============================================================================
// LIFE STAGES
// ============================================================================

#[test]
fn test_cat_life_stage_boundaries() {
    let config = FeedingConfig::default();
    let stage = |age| determine_age_category(Species::Cat, 4.0, age, &config);

    assert_eq!(stage(0), AgeCategory::Juvenile);
    assert_eq!(stage(11), AgeCategory::Juvenile);
    assert_eq!(stage(12), AgeCategory::Adult);
    assert_eq!(stage(83), AgeCategory::Adult);
    assert_eq!(stage(84), AgeCategory::Senior);
}

#[test]
fn test_cats_ignore_dog_age_policy() {
    let config = config_with(DogAgePolicy::SizeAdjusted, MealCountPolicy::ByAgeCategory);
    assert_eq!(
        determine_age_category(Species::Cat, 30.0, 80, &config),
        AgeCategory::Adult
    );
}

#[test]
fn test_simple_dog_policy_ignores_size() {
    let config = FeedingConfig::default();
    for weight in [5.0, 15.0, 40.0] {
        assert_eq!(
            determine_age_category(Species::Dog, weight, 11, &config),
            AgeCategory::Juvenile
        );
        assert_eq!(
            determine_age_category(Species::Dog, weight, 83, &config),
            AgeCategory::Adult
        );
        assert_eq!(
            determine_age_category(Species::Dog, weight, 84, &config),
            AgeCategory::Senior
        );
    }
}

#[test]
fn test_size_adjusted_dog_policy_boundaries() {
    let config = config_with(DogAgePolicy::SizeAdjusted, MealCountPolicy::ByAgeCategory);
    let stage = |weight, age| determine_age_category(Species::Dog, weight, age, &config);

    // Small: senior from 96 months
    assert_eq!(stage(8.0, 95), AgeCategory::Adult);
    assert_eq!(stage(8.0, 96), AgeCategory::Senior);
    // Medium: senior from 84 months
    assert_eq!(stage(15.0, 83), AgeCategory::Adult);
    assert_eq!(stage(15.0, 84), AgeCategory::Senior);
    // Large: senior from 72 months
    assert_eq!(stage(30.0, 71), AgeCategory::Adult);
    assert_eq!(stage(30.0, 72), AgeCategory::Senior);
    // Juvenile regardless of size
    assert_eq!(stage(30.0, 11), AgeCategory::Juvenile);
}

#[test]
fn test_size_band_thresholds() {
    let config = FeedingConfig::default();
    assert_eq!(size_band(9.9, &config), SizeBand::Small);
    assert_eq!(size_band(10.0, &config), SizeBand::Medium);
    assert_eq!(size_band(24.99, &config), SizeBand::Medium);
    assert_eq!(size_band(25.0, &config), SizeBand::Large);
}

#[test]
fn test_policy_changes_large_dog_recommendation() {
    let profile = AnimalProfile::new(Species::Dog, 30.0, 75);
    let simple = compute_recommendation(&profile, &FeedingConfig::default()).unwrap();
    let sized = compute_recommendation(
        &profile,
        &config_with(DogAgePolicy::SizeAdjusted, MealCountPolicy::ByAgeCategory),
    )
    .unwrap();

    assert_eq!(simple.age_category, AgeCategory::Adult);
    assert_eq!(sized.age_category, AgeCategory::Senior);
    assert!(sized.daily_calories < simple.daily_calories);
}

// ============================================================================
// MEALS AND SCHEDULES
// ============================================================================

#[test]
fn test_age_months_meal_policy() {
    let config = config_with(DogAgePolicy::Simple, MealCountPolicy::ByAgeMonths);
    let meals = |age| {
        compute_recommendation(&AnimalProfile::new(Species::Dog, 6.0, age), &config)
            .unwrap()
            .meals_per_day
    };

    assert_eq!(meals(0), 4);
    assert_eq!(meals(5), 4);
    assert_eq!(meals(6), 3);
    assert_eq!(meals(11), 3);
    assert_eq!(meals(12), 2);
    assert_eq!(meals(120), 2);
}

#[test]
fn test_three_meal_schedule() {
    let config = config_with(DogAgePolicy::Simple, MealCountPolicy::ByAgeMonths);
    let rec = compute_recommendation(&AnimalProfile::new(Species::Cat, 2.5, 8), &config).unwrap();

    assert_eq!(rec.meals_per_day, 3);
    assert_eq!(rec.feeding_times, vec!["08:00", "14:00", "20:00"]);
}

#[test]
fn test_unknown_meal_counts_use_two_meal_schedule() {
    for meals in [0, 1, 2, 5, 9] {
        assert_eq!(feeding_schedule(meals), vec!["08:00", "18:00"]);
    }
}

// ============================================================================
// ACTIVITY
// ============================================================================

#[test]
fn test_activity_scales_calories_and_food() {
    let config = FeedingConfig::default();
    let normal = compute_recommendation(&adult_dog(), &config).unwrap();
    let low = compute_recommendation(&adult_dog().with_activity(ActivityLevel::Low), &config)
        .unwrap();
    let high = compute_recommendation(&adult_dog().with_activity(ActivityLevel::High), &config)
        .unwrap();

    assert_close(low.daily_calories, normal.daily_calories * 0.8, 1e-9);
    assert_close(high.daily_calories, normal.daily_calories * 1.3, 1e-9);
    assert_close(high.daily_food_grams, normal.daily_food_grams * 1.3, 1e-9);
    assert_eq!(high.meals_per_day, normal.meals_per_day);
    assert_eq!(high.activity_level, ActivityLevel::High);
    assert_close(activity_multiplier(ActivityLevel::Normal, &config), 1.0, 1e-12);
}

// ============================================================================
// INVARIANTS
// ============================================================================

#[test]
fn test_invariants_hold_across_profiles() {
    let configs = [
        FeedingConfig::default(),
        config_with(DogAgePolicy::SizeAdjusted, MealCountPolicy::ByAgeMonths),
    ];

    for config in &configs {
        for profile in common::profile_grid() {
            let rec = compute_recommendation(&profile, config).unwrap();

            assert!(rec.meals_per_day >= 1);
            assert_eq!(rec.feeding_times.len(), usize::from(rec.meals_per_day));
            assert_close(
                rec.daily_food_grams,
                f64::from(rec.meals_per_day) * rec.grams_per_meal,
                1e-9,
            );
            assert!(rec.daily_calories > 0.0);
            assert!(!rec.nutrition_tips.is_empty());
            assert_close(
                rec.base_calories,
                calculate_base_calories(profile.species, profile.weight_kg, config),
                1e-12,
            );
        }
    }
}

#[test]
fn test_ideal_weight_range_brackets_current_weight() {
    let config = FeedingConfig::default();
    let range = ideal_weight_range(20.0, &config);
    assert_close(range.min, 18.0, 1e-9);
    assert_close(range.max, 22.0, 1e-9);
    assert_close(range.ideal, 20.0, 1e-12);

    let rec = compute_recommendation(&adult_dog(), &config).unwrap();
    assert_eq!(rec.ideal_weight_range, range);
    assert_eq!(rec.weight_status(20.0), WeightStatus::Normal);
    assert_eq!(rec.weight_status(17.0), WeightStatus::Underweight);
    assert_eq!(rec.weight_status(23.5), WeightStatus::Overweight);
}

#[test]
fn test_engine_is_shareable_across_threads() {
    let engine = FeedingRecommendationEngine::default();
    let expected = engine.recommend(&kitten()).unwrap();

    thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| engine.recommend(&kitten()).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

// ============================================================================
// VALIDATION
// ============================================================================

#[test]
fn test_non_positive_weight_rejected_for_every_species_and_age() {
    let config = FeedingConfig::default();
    for species in Species::ALL {
        for age in [0, 12, 100] {
            for weight in [0.0, -0.5, f64::NAN, f64::INFINITY] {
                let error =
                    compute_recommendation(&AnimalProfile::new(species, weight, age), &config)
                        .unwrap_err();
                assert_eq!(error.field(), ValidationField::Weight);
            }
        }
    }
}

#[test]
fn test_unrecognized_species_rejected() {
    for species in ["", "   ", "bird", "hamster"] {
        let error = AnimalProfile::parse(species, 4.0, 6).unwrap_err();
        assert!(matches!(error, ValidationError::InvalidSpecies { .. }));
    }
}

#[test]
fn test_negative_age_rejected() {
    let error = AnimalProfile::parse("dog", 10.0, -1).unwrap_err();
    assert_eq!(error.field(), ValidationField::Age);
    assert!(error.to_string().contains("non-negative"));
}

#[test]
fn test_oversized_age_rejected_with_upper_bound() {
    let error = AnimalProfile::parse("dog", 10.0, i64::MAX).unwrap_err();
    let message = error.to_string();

    assert_eq!(error.field(), ValidationField::Age);
    assert!(message.contains(&format!("at most {}", u32::MAX)), "{message}");
    assert!(!message.contains("non-negative"), "{message}");
}

#[test]
fn test_parse_checks_species_before_weight() {
    let error = AnimalProfile::parse("bird", -1.0, -1).unwrap_err();
    assert_eq!(error.field(), ValidationField::Species);
}

#[test]
fn test_recommendation_serializes_snake_case() {
    let rec = compute_recommendation(&kitten(), &FeedingConfig::default()).unwrap();
    let value = serde_json::to_value(&rec).unwrap();

    assert_eq!(value["species"], "cat");
    assert_eq!(value["age_category"], "juvenile");
    assert_eq!(value["activity_level"], "normal");
    assert_eq!(value["meals_per_day"], 4);
    assert_eq!(value["feeding_times"].as_array().unwrap().len(), 4);
}
