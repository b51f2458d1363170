// ABOUTME: Re-exports command modules for petcare-cli
// ABOUTME: Provides access to recommend, pet, and guide commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PetCare Feeding

pub mod guide;
pub mod pet;
pub mod recommend;
