// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup, canonical profiles, and float comparison helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PetCare Feeding
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `petcare`

use std::env;
use std::sync::Once;

use chrono::NaiveDate;
use petcare::{AnimalProfile, DogAgePolicy, FeedingConfig, FeedingPolicy, MealCountPolicy, Species};
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level, quiet by default
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            Ok("WARN" | "ERROR") | _ => Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Assert two floats are within `tolerance` of each other
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} ± {tolerance}, got {actual}"
    );
}

/// Calendar date shorthand
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// 6 month old, 4 kg cat
pub const fn kitten() -> AnimalProfile {
    AnimalProfile::new(Species::Cat, 4.0, 6)
}

/// 3 year old, 20 kg dog
pub const fn adult_dog() -> AnimalProfile {
    AnimalProfile::new(Species::Dog, 20.0, 36)
}

/// 100 month old, 5 kg cat
pub const fn senior_cat() -> AnimalProfile {
    AnimalProfile::new(Species::Cat, 5.0, 100)
}

/// Default configuration with the given policies
pub fn config_with(dog_age_policy: DogAgePolicy, meal_count_policy: MealCountPolicy) -> FeedingConfig {
    FeedingConfig::default().with_policy(FeedingPolicy {
        dog_age_policy,
        meal_count_policy,
    })
}

/// Profiles spanning both species, every life stage, and all size bands
pub fn profile_grid() -> Vec<AnimalProfile> {
    let mut profiles = Vec::new();
    for species in Species::ALL {
        for weight_kg in [0.8, 3.5, 9.9, 10.0, 18.0, 25.0, 42.0] {
            for age_months in [0, 3, 6, 11, 12, 40, 71, 72, 83, 84, 95, 96, 180] {
                profiles.push(AnimalProfile::new(species, weight_kg, age_months));
            }
        }
    }
    profiles
}
