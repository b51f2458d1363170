// ABOUTME: Core types and constants for the PetCare feeding platform
// ABOUTME: Foundation crate with error handling, pet models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PetCare Feeding

#![deny(unsafe_code)]

//! # `PetCare` Core
//!
//! Foundation crate providing shared types and constants for the `PetCare`
//! feeding recommendation engine. Nothing here performs calculations beyond
//! input validation and calendar arithmetic; the engine itself lives in
//! `petcare-intelligence`.
//!
//! ## Modules
//!
//! - **errors**: `ValidationError` taxonomy plus the application-level `AppError`
//! - **models**: `Species`, `AgeCategory`, `AnimalProfile`, `PetRecord`
//! - **constants**: service names and environment variable keys

/// Unified error handling with validation failures and application error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (species, activity level, profiles, pet records)
pub mod models;
