// ABOUTME: Validation error taxonomy for feeding recommendation inputs
// ABOUTME: One variant per precondition check, each carrying a human-readable message
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PetCare Feeding

use thiserror::Error;

/// Input validation failures raised before any recommendation is computed.
///
/// Every variant is terminal for the computation that raised it: no partial
/// recommendation is ever returned alongside a `ValidationError`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Pet name is empty or whitespace only
    #[error("Pet name must not be empty")]
    InvalidName,

    /// Species text does not map to a supported species
    #[error("Pet species '{value}' is invalid (expected cat or dog)")]
    InvalidSpecies {
        /// The rejected species text
        value: String,
    },

    /// Weight is zero, negative, or not a finite number
    #[error("Pet weight must be greater than 0 kg, got {value}")]
    InvalidWeight {
        /// The rejected weight in kilograms
        value: f64,
    },

    /// Age is negative or could not be derived
    #[error("Pet age is invalid: {reason}")]
    InvalidAge {
        /// Why the age was rejected
        reason: String,
    },
}

/// Field identifiers reported alongside validation failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationField {
    /// `name`
    Name,
    /// `species`
    Species,
    /// `weight_kg`
    Weight,
    /// `age_months` or `birthday`
    Age,
}

impl ValidationField {
    /// Field name as it appears in profile and record structs
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Species => "species",
            Self::Weight => "weight_kg",
            Self::Age => "age_months",
        }
    }
}

impl ValidationError {
    /// Create an invalid species error
    #[must_use]
    pub fn invalid_species(value: impl Into<String>) -> Self {
        Self::InvalidSpecies {
            value: value.into(),
        }
    }

    /// Create an invalid weight error
    #[must_use]
    pub const fn invalid_weight(value: f64) -> Self {
        Self::InvalidWeight { value }
    }

    /// Create an invalid age error
    #[must_use]
    pub fn invalid_age(reason: impl Into<String>) -> Self {
        Self::InvalidAge {
            reason: reason.into(),
        }
    }

    /// Which input field failed validation
    #[must_use]
    pub const fn field(&self) -> ValidationField {
        match self {
            Self::InvalidName => ValidationField::Name,
            Self::InvalidSpecies { .. } => ValidationField::Species,
            Self::InvalidWeight { .. } => ValidationField::Weight,
            Self::InvalidAge { .. } => ValidationField::Age,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_mapping() {
        assert_eq!(ValidationError::InvalidName.field(), ValidationField::Name);
        assert_eq!(
            ValidationError::invalid_species("hamster").field(),
            ValidationField::Species
        );
        assert_eq!(
            ValidationError::invalid_weight(0.0).field(),
            ValidationField::Weight
        );
        assert_eq!(
            ValidationError::invalid_age("negative").field().as_str(),
            "age_months"
        );
    }

    #[test]
    fn test_messages_are_human_readable() {
        let err = ValidationError::invalid_species("hamster");
        assert_eq!(
            err.to_string(),
            "Pet species 'hamster' is invalid (expected cat or dog)"
        );
        assert_eq!(
            ValidationError::InvalidName.to_string(),
            "Pet name must not be empty"
        );
    }
}
