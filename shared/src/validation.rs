//! Validation utilities for the Nutrition Tracker
//!
//! These guard the entry-creation and search paths. Aggregation itself never
//! validates: it works on whatever entries the backend returned.

use chrono::NaiveDate;

use crate::models::{FoodEntryCreate, NutritionGoals};

/// Largest page size the food search accepts
pub const MAX_SEARCH_LIMIT: usize = 50;

// ============================================================================
// Entry Validations
// ============================================================================

/// Validate a logged quantity is a positive, finite number of grams
pub fn validate_quantity_grams(quantity_grams: f64) -> Result<(), &'static str> {
    if !quantity_grams.is_finite() {
        return Err("Quantity must be a finite number");
    }
    if quantity_grams <= 0.0 {
        return Err("Quantity must be greater than 0 grams");
    }
    Ok(())
}

/// Validate an entry creation request before it is sent
pub fn validate_entry_create(request: &FoodEntryCreate) -> Result<(), &'static str> {
    if request.food_id <= 0 {
        return Err("Food id must be positive");
    }
    validate_quantity_grams(request.quantity_grams)
}

/// Parse a `YYYY-MM-DD` calendar date
pub fn parse_iso_date(value: &str) -> Result<NaiveDate, &'static str> {
    let value = value.trim();
    if value.len() != 10 {
        return Err("Date must use the YYYY-MM-DD format");
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| "Date must use the YYYY-MM-DD format")
}

// ============================================================================
// Search Validations
// ============================================================================

/// Validate a food search query is not blank
pub fn validate_search_query(query: &str) -> Result<(), &'static str> {
    if query.trim().is_empty() {
        return Err("Search query cannot be empty");
    }
    Ok(())
}

/// Validate the number of search results requested
pub fn validate_search_limit(limit: usize) -> Result<(), &'static str> {
    if limit == 0 {
        return Err("Search limit must be at least 1");
    }
    if limit > MAX_SEARCH_LIMIT {
        return Err("Search limit must be at most 50");
    }
    Ok(())
}

// ============================================================================
// Goal Validations
// ============================================================================

/// Validate every goal is a positive, finite value
pub fn validate_goals(goals: &NutritionGoals) -> Result<(), &'static str> {
    let all = [goals.calories, goals.protein, goals.carbs, goals.fat, goals.fiber];
    if all.iter().any(|g| !g.is_finite() || *g <= 0.0) {
        return Err("Goals must be positive numbers");
    }
    Ok(())
}
