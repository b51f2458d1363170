// ABOUTME: Selectable policies used by the feeding engine
// ABOUTME: Dog life-stage classification and meal count strategies

/// Life-stage classification (cats fixed, dogs simple or size-adjusted)
pub mod age_policy;

/// Meals-per-day strategies
pub mod meal_policy;

pub use age_policy::{determine_age_category, size_band, DogAgePolicy};
pub use meal_policy::MealCountPolicy;
