// ABOUTME: Guide command for petcare-cli
// ABOUTME: Prints the static feeding guide, optionally for a single species
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PetCare Feeding

use petcare::{all_guides, guides_for, AppResult, Species};

use crate::helpers::display::{display_guides, OutputFormat};

/// Display feeding guide entries for one species, or all of them
pub fn run(species: Option<&str>, format: OutputFormat) -> AppResult<()> {
    let guides = match species {
        Some(value) => guides_for(value.parse::<Species>()?).to_vec(),
        None => all_guides(),
    };
    display_guides(&guides, format)
}
