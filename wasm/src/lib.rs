//! WebAssembly module for the Nutrition Tracker
//!
//! Provides the browser front end with the same computations the client uses:
//! - Daily aggregation of logged entries
//! - Meal grouping and per-meal calories
//! - Goal comparison
//! - Nutrient preview for a food and quantity
//!
//! Structured values cross the boundary as JSON strings.

use serde::Serialize;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages in browser console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Aggregate a day's entries (JSON array) into daily totals (JSON)
///
/// Every per-day export ignores entries dated other than `date`, so totals and
/// meal views built from one payload agree.
#[wasm_bindgen]
pub fn aggregate_daily_nutrition(date: &str, entries_json: &str) -> Result<String, JsValue> {
    to_js(aggregate_json(date, entries_json))
}

/// Group a day's entries (JSON array) by meal type
#[wasm_bindgen]
pub fn group_entries_by_meal(date: &str, entries_json: &str) -> Result<String, JsValue> {
    to_js(group_json(date, entries_json))
}

/// Calories per meal; meals with nothing logged are dropped unless `include_empty`
#[wasm_bindgen]
pub fn meal_calorie_breakdown(
    date: &str,
    entries_json: &str,
    include_empty: bool,
) -> Result<String, JsValue> {
    to_js(breakdown_json(date, entries_json, include_empty))
}

/// Compare daily totals with goals; the default goals apply when none are given
#[wasm_bindgen]
pub fn compare_nutrition_with_goals(
    nutrition_json: &str,
    goals_json: Option<String>,
) -> Result<String, JsValue> {
    to_js(compare_json(nutrition_json, goals_json.as_deref()))
}

/// Nutrients `quantity_grams` of a food (JSON) would contribute
#[wasm_bindgen]
pub fn preview_entry_nutrients(food_json: &str, quantity_grams: f64) -> Result<String, JsValue> {
    to_js(preview_json(food_json, quantity_grams))
}

/// Display label for a meal type name, `undefined` when unknown
#[wasm_bindgen]
pub fn meal_type_label(value: &str) -> Option<String> {
    value
        .parse::<MealType>()
        .ok()
        .map(|meal_type| meal_type.label().to_string())
}

/// Meal type names in display order
#[wasm_bindgen]
pub fn meal_types() -> js_sys::Array {
    MealType::ALL
        .iter()
        .map(|meal_type| JsValue::from_str(meal_type.as_str()))
        .collect()
}

/// Default daily goals as JSON
#[wasm_bindgen]
pub fn default_goals() -> Result<String, JsValue> {
    to_js(to_json(&NutritionGoals::default()))
}

fn to_js(result: Result<String, String>) -> Result<String, JsValue> {
    result.map_err(|message| {
        web_sys::console::error_1(&JsValue::from_str(&message));
        JsValue::from_str(&message)
    })
}

/// Parse the entries, keeping only those logged on `date`
fn parse_entries_on(date: &str, entries_json: &str) -> Result<Vec<FoodEntry>, String> {
    let date = parse_iso_date(date)?;
    let entries: Vec<FoodEntry> = serde_json::from_str(entries_json)
        .map_err(|e| format!("Invalid entries JSON: {}", e))?;
    Ok(entries_on(date, &entries))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("Serialization failed: {}", e))
}

fn aggregate_json(date: &str, entries_json: &str) -> Result<String, String> {
    let day = parse_iso_date(date)?;
    let entries = parse_entries_on(date, entries_json)?;
    to_json(&aggregate_daily(day, &entries))
}

fn group_json(date: &str, entries_json: &str) -> Result<String, String> {
    let entries = parse_entries_on(date, entries_json)?;
    to_json(&group_by_meal(&entries))
}

fn breakdown_json(date: &str, entries_json: &str, include_empty: bool) -> Result<String, String> {
    let entries = parse_entries_on(date, entries_json)?;
    let breakdown = calories_by_meal(&entries);
    if include_empty {
        to_json(&breakdown)
    } else {
        to_json(&non_empty_meals(&breakdown))
    }
}

fn compare_json(nutrition_json: &str, goals_json: Option<&str>) -> Result<String, String> {
    let nutrition: DailyNutrition = serde_json::from_str(nutrition_json)
        .map_err(|e| format!("Invalid nutrition JSON: {}", e))?;
    let goals = match goals_json {
        Some(json) => serde_json::from_str(json).map_err(|e| format!("Invalid goals JSON: {}", e))?,
        None => NutritionGoals::default(),
    };
    to_json(&compare_with_goals(&nutrition, &goals))
}

fn preview_json(food_json: &str, quantity_grams: f64) -> Result<String, String> {
    validate_quantity_grams(quantity_grams)?;
    let food: FoodItem =
        serde_json::from_str(food_json).map_err(|e| format!("Invalid food JSON: {}", e))?;
    to_json(&food.nutrients_for(quantity_grams))
}
