// ABOUTME: Output formatting helpers for petcare-cli
// ABOUTME: Renders recommendations, pet summaries, and guide entries as text or JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PetCare Feeding

use clap::ValueEnum;
use petcare::{AppResult, FeedingGuide, FeedingRecommendation, PetRecord};
use petcare_core::constants::calendar::MONTHS_PER_YEAR;
use petcare_core::constants::display::DATE_FORMAT;
use serde::Serialize;
use serde_json::json;

/// How command output is rendered on stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// Pretty-printed JSON
    Json,
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Display a feeding recommendation
pub fn display_recommendation(
    recommendation: &FeedingRecommendation,
    format: OutputFormat,
) -> AppResult<()> {
    match format {
        OutputFormat::Json => print_json(recommendation),
        OutputFormat::Text => {
            print_recommendation_text(recommendation);
            Ok(())
        }
    }
}

/// Display a pet summary followed by its feeding recommendation
pub fn display_pet_recommendation(
    pet: &PetRecord,
    age_months: u32,
    recommendation: &FeedingRecommendation,
    format: OutputFormat,
) -> AppResult<()> {
    let status = recommendation.weight_status(pet.weight_kg);
    match format {
        OutputFormat::Json => print_json(&json!({
            "pet": pet,
            "age_months": age_months,
            "weight_status": status,
            "recommendation": recommendation,
        })),
        OutputFormat::Text => {
            println!("\nPet: {}", pet.name);
            println!("{}", "=".repeat(50));
            if !pet.breed.is_empty() {
                println!("   Breed: {}", pet.breed);
            }
            if !pet.gender.is_empty() {
                println!("   Gender: {}", pet.gender);
            }
            println!("   Birthday: {}", pet.birthday.format(DATE_FORMAT));
            println!(
                "   Age: {} years {} months",
                age_months / MONTHS_PER_YEAR,
                age_months % MONTHS_PER_YEAR
            );
            println!("   Weight: {:.1} kg ({})", pet.weight_kg, status.label());
            print_recommendation_text(recommendation);
            Ok(())
        }
    }
}

fn print_recommendation_text(recommendation: &FeedingRecommendation) {
    let stage = recommendation
        .age_category
        .display_name(recommendation.species);

    println!("\nFeeding Recommendation ({} {stage})", recommendation.species);
    println!("{}", "=".repeat(50));
    println!("   Activity level: {}", recommendation.activity_level);
    println!(
        "   Daily calories: {:.0} kcal (base {:.0} kcal)",
        recommendation.daily_calories, recommendation.base_calories
    );
    println!(
        "   Daily food: {}",
        recommendation.formatted_daily_amount()
    );
    println!(
        "   Meals: {} per day, {} each",
        recommendation.meals_per_day,
        recommendation.formatted_meal_size()
    );
    println!(
        "   Feeding times: {}",
        recommendation.feeding_times.join(", ")
    );

    let range = &recommendation.ideal_weight_range;
    println!(
        "   Ideal weight: {:.1} - {:.1} kg (target {:.1} kg)",
        range.min, range.max, range.ideal
    );

    println!("\nNutrition tips:");
    for tip in &recommendation.nutrition_tips {
        println!("• {tip}");
    }
}

/// Display feeding guide entries
pub fn display_guides(guides: &[FeedingGuide], format: OutputFormat) -> AppResult<()> {
    if format == OutputFormat::Json {
        return print_json(guides);
    }

    for guide in guides {
        println!("\n{}: {}", guide.species, guide.title());
        println!("{}", "=".repeat(50));
        println!("   Meals per day: {}", guide.daily_meals);
        println!("   Meal timing: {}", guide.meal_timing);
        println!("   Calories: {}", guide.calories);

        println!("\n   Nutrition focus:");
        for item in guide.nutrition_focus {
            println!("   • {item}");
        }

        println!("\n   Important notes:");
        for note in guide.important_notes {
            println!("   • {note}");
        }
    }
    Ok(())
}
