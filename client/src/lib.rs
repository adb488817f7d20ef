//! Nutrition Tracker client
//!
//! Typed access to the nutrition backend plus the food-log and dashboard
//! services that combine backend data with the shared aggregation logic.

pub mod config;
pub mod error;
pub mod external;
pub mod services;

pub use config::Config;
pub use error::{ApiOperation, ClientError, ClientResult, RequestFailure};
pub use external::NutritionApiClient;
pub use services::{DashboardService, DashboardView, FoodLogService, MealLog, NutritionSource};
