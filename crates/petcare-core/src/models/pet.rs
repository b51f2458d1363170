// ABOUTME: Pet record model supplied by callers of the feeding engine
// ABOUTME: Validates name, species, and weight and derives age from the birthday
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PetCare Feeding

use chrono::{DateTime, Datelike, Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use super::profile::{validate_weight, AnimalProfile};
use super::species::Species;
use crate::constants::calendar::MONTHS_PER_YEAR;
use crate::errors::ValidationError;

/// A pet as recorded by the owning application
///
/// Persistence is the caller's concern; this type only carries the fields
/// the feeding engine needs plus bookkeeping metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PetRecord {
    /// Unique identifier
    pub id: Uuid,
    /// Pet name
    pub name: String,
    /// Breed (free text, not used by the engine)
    pub breed: String,
    /// Species as entered by the user; parsed on validation
    pub species: String,
    /// Gender (free text, not used by the engine)
    pub gender: String,
    /// Date of birth
    pub birthday: NaiveDate,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// When the record was created
    pub created_at: DateTime<Utc>,
    /// When the record was last updated
    pub updated_at: DateTime<Utc>,
}

impl PetRecord {
    /// Create a new record with a fresh identifier and timestamps
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        breed: impl Into<String>,
        species: impl Into<String>,
        gender: impl Into<String>,
        birthday: NaiveDate,
        weight_kg: f64,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            breed: breed.into(),
            species: species.into(),
            gender: gender.into(),
            birthday,
            weight_kg,
            created_at: now,
            updated_at: now,
        }
    }

    /// Record a new weight measurement
    pub fn set_weight(&mut self, weight_kg: f64) {
        self.weight_kg = weight_kg;
        self.updated_at = Utc::now();
    }

    /// Check name, species, and weight in that order
    ///
    /// # Errors
    ///
    /// Returns the first failing check as `InvalidName`, `InvalidSpecies`,
    /// or `InvalidWeight`
    pub fn validate(&self) -> Result<Species, ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::InvalidName);
        }
        let species = self.species.parse()?;
        validate_weight(self.weight_kg)?;
        Ok(species)
    }

    /// Age in whole elapsed calendar months as of `today`
    ///
    /// # Errors
    ///
    /// Returns `InvalidAge` if the birthday lies after `today`
    pub fn age_in_months(&self, today: NaiveDate) -> Result<u32, ValidationError> {
        whole_months_between(self.birthday, today).ok_or_else(|| {
            ValidationError::invalid_age(format!(
                "birthday {} is after {today}",
                self.birthday
            ))
        })
    }

    /// Age in whole elapsed years as of `today`
    ///
    /// # Errors
    ///
    /// Returns `InvalidAge` if the birthday lies after `today`
    pub fn age_in_years(&self, today: NaiveDate) -> Result<u32, ValidationError> {
        Ok(self.age_in_months(today)? / MONTHS_PER_YEAR)
    }

    /// Convert into an engine profile with normal activity
    ///
    /// # Errors
    ///
    /// Returns any failure from [`PetRecord::validate`] or
    /// [`PetRecord::age_in_months`]
    pub fn to_profile(&self, today: NaiveDate) -> Result<AnimalProfile, ValidationError> {
        let species = self.validate()?;
        let age_months = self.age_in_months(today)?;
        debug!(
            pet.id = %self.id,
            pet.species = %species,
            pet.age_months = age_months,
            "Derived feeding profile from pet record"
        );
        Ok(AnimalProfile::new(species, self.weight_kg, age_months))
    }
}

/// Whole calendar months elapsed from `from` to `to`
///
/// A month counts once the day of month has been reached again. When `to` is
/// the last day of a shorter month, the month also counts (Jan 31 to Feb 28
/// is one month). Returns `None` when `to` precedes `from`.
#[must_use]
pub fn whole_months_between(from: NaiveDate, to: NaiveDate) -> Option<u32> {
    if to < from {
        return None;
    }

    let mut months = (i64::from(to.year()) - i64::from(from.year())) * i64::from(MONTHS_PER_YEAR)
        + i64::from(to.month())
        - i64::from(from.month());

    if to.day() < from.day() && !is_last_day_of_month(to) {
        months -= 1;
    }

    u32::try_from(months).ok()
}

fn is_last_day_of_month(date: NaiveDate) -> bool {
    date.checked_add_days(Days::new(1))
        .map_or(true, |next| next.month() != date.month())
}
