//! External API integrations

pub mod nutrition_api;

pub use nutrition_api::NutritionApiClient;
