// ABOUTME: Core data models for the PetCare feeding platform
// ABOUTME: Re-exports species enums, the engine input profile, and the pet record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PetCare Feeding

//! # Data Models
//!
//! - `Species`, `ActivityLevel`, `AgeCategory`, `SizeBand`: closed enumerations
//!   replacing free-form species text
//! - `AnimalProfile`: the validated input of the feeding engine
//! - `PetRecord`: the caller-owned pet record a profile is derived from

mod pet;
mod profile;
mod species;

pub use pet::{whole_months_between, PetRecord};
pub use profile::{validate_weight, AnimalProfile};
pub use species::{ActivityLevel, AgeCategory, SizeBand, Species};
