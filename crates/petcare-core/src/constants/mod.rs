// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Service names, environment variable keys, and display formats
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PetCare Feeding

//! Constants module
//!
//! Numeric feeding parameters are not here: they live in `FeedingConfig`
//! defaults so they can be overridden and validated as a unit.

/// Service identifiers used in structured logging
pub mod service_names {
    /// Name of the command-line front end
    pub const PETCARE_CLI: &str = "petcare-cli";
    /// Name of the library crate, used for log filter directives
    pub const PETCARE: &str = "petcare";
}

/// Environment variable keys for feeding configuration overrides
pub mod env_config {
    /// Prefix shared by all feeding configuration overrides
    pub const PREFIX: &str = "PETCARE_FEEDING_";
    /// Energy density of food in kcal per 100 g
    pub const ENERGY_DENSITY: &str = "PETCARE_FEEDING_ENERGY_DENSITY_KCAL_PER_100G";
    /// Metabolic coefficient applied to the weight power law
    pub const METABOLIC_COEFFICIENT: &str = "PETCARE_FEEDING_METABOLIC_COEFFICIENT";
    /// Cat weight exponent
    pub const CAT_EXPONENT: &str = "PETCARE_FEEDING_CAT_EXPONENT";
    /// Dog weight exponent
    pub const DOG_EXPONENT: &str = "PETCARE_FEEDING_DOG_EXPONENT";
    /// Dog age category policy (`simple` or `size_adjusted`)
    pub const DOG_AGE_POLICY: &str = "PETCARE_FEEDING_DOG_AGE_POLICY";
    /// Meal count policy (`by_age_category` or `by_age_months`)
    pub const MEAL_COUNT_POLICY: &str = "PETCARE_FEEDING_MEAL_COUNT_POLICY";
    /// Low activity multiplier
    pub const ACTIVITY_LOW: &str = "PETCARE_FEEDING_ACTIVITY_LOW";
    /// High activity multiplier
    pub const ACTIVITY_HIGH: &str = "PETCARE_FEEDING_ACTIVITY_HIGH";
}

/// Formats used when rendering values for people
pub mod display {
    /// Calendar date format accepted and produced by the CLI
    pub const DATE_FORMAT: &str = "%Y-%m-%d";
}

/// Calendar arithmetic
pub mod calendar {
    /// Months in a year
    pub const MONTHS_PER_YEAR: u32 = 12;
}
