// ABOUTME: Main library entry point for the PetCare feeding tools
// ABOUTME: Re-exports the feeding engine and models, plus logging and configuration loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PetCare Feeding

#![deny(unsafe_code)]

//! # `PetCare` Feeding
//!
//! Feeding recommendations for cats and dogs: daily calories, food mass,
//! meals per day, a feeding schedule, nutrition tips, and an ideal weight
//! range, computed from species, weight, and age.
//!
//! ## Example
//!
//! ```rust
//! use petcare::{FeedingRecommendationEngine, AnimalProfile, Species};
//!
//! let engine = FeedingRecommendationEngine::default();
//! let profile = AnimalProfile::new(Species::Cat, 4.0, 6);
//! let recommendation = engine.recommend(&profile)?;
//! assert_eq!(recommendation.meals_per_day, 4);
//! # Ok::<(), petcare::ValidationError>(())
//! ```

/// Application configuration loading
pub mod config;

/// Logging configuration and structured logging setup
pub mod logging;

pub use petcare_core::errors::{AppError, AppResult, ErrorCode, ValidationError, ValidationField};
pub use petcare_core::models::{
    ActivityLevel, AgeCategory, AnimalProfile, PetRecord, SizeBand, Species,
};
pub use petcare_intelligence::{
    all_guides, compute_recommendation, guide_for, guides_for, DogAgePolicy, FeedingConfig,
    FeedingGuide, FeedingPolicy, FeedingRecommendation, FeedingRecommendationEngine,
    MealCountPolicy, WeightRange, WeightStatus,
};
