//! Services built on top of the nutrition backend

pub mod dashboard;
pub mod food_log;

pub use dashboard::{DashboardService, DashboardView, NutritionSource};
pub use food_log::{EntryPreview, FoodLogService, MealLog};
