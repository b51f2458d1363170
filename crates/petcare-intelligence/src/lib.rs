// ABOUTME: Feeding recommendation engine crate for cats and dogs
// ABOUTME: Calculator, life-stage and meal policies, tips, guide content, and configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PetCare Feeding

//! # `PetCare` Intelligence
//!
//! Pure, deterministic feeding calculations. Nothing in this crate performs
//! I/O; the only side effects are `tracing` events.

#![deny(unsafe_code)]

/// Selectable dog life-stage and meal count policies
pub mod algorithms;

/// Engine configuration and environment overrides
pub mod config;

/// Feeding recommendation engine
pub mod feeding_calculator;

/// Static feeding guide reference content
pub mod feeding_guide;

/// Nutrition tips lookup table
pub mod nutrition_tips;

pub use algorithms::{DogAgePolicy, MealCountPolicy};
pub use config::{ConfigError, FeedingConfig, FeedingPolicy};
pub use feeding_calculator::{
    compute_recommendation, FeedingRecommendation, FeedingRecommendationEngine, WeightRange,
    WeightStatus,
};
pub use feeding_guide::{all_guides, guide_for, guides_for, FeedingGuide};
