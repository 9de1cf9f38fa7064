pub mod catalog;
pub mod config;
pub mod error;
pub mod model;
pub mod plan;
pub mod planner;
pub mod search;
pub mod text;

pub use error::Error;
pub use model::{
    ActivityLevel, CalorieBreakdown, Goal, IngredientRef, Meal, MealTime, RankedResult,
    SearchQuery, UserProfile,
};
pub use planner::Planner;
pub use text::normalize;
