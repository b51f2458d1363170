// ABOUTME: Configuration for the feeding recommendation engine
// ABOUTME: Engine constants, selected policies, and configuration errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PetCare Feeding

/// Configuration error types
pub mod error;

/// Engine constants and policy selection
pub mod feeding;

pub use error::ConfigError;
pub use feeding::{
    ActivityMultipliersConfig, AgeMultipliersConfig, AgeThresholdsConfig, FeedingConfig,
    FeedingPolicy, FoodConfig, MealCountConfig, MetabolicConfig, WeightRangeConfig,
};
