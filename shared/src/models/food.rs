//! Food database items

use serde::{Deserialize, Serialize};

/// A food from the backend database, with nutrient densities per 100 g
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FoodItem {
    pub id: i64,
    pub name: String,
    pub calories_per_100g: f64,
    pub protein_per_100g: f64,
    pub carbs_per_100g: f64,
    pub fat_per_100g: f64,
    #[serde(default)]
    pub fiber_per_100g: f64,
    #[serde(default)]
    pub sugar_per_100g: f64,
    /// Grams, not milligrams
    #[serde(default)]
    pub sodium_per_100g: f64,
}

/// Nutrients contained in a concrete quantity of a food
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct NutrientAmounts {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub fiber: f64,
}

impl FoodItem {
    /// Scale the per-100 g densities to `quantity_grams`
    pub fn nutrients_for(&self, quantity_grams: f64) -> NutrientAmounts {
        let multiplier = quantity_grams / 100.0;
        NutrientAmounts {
            calories: self.calories_per_100g * multiplier,
            protein: self.protein_per_100g * multiplier,
            carbs: self.carbs_per_100g * multiplier,
            fat: self.fat_per_100g * multiplier,
            fiber: self.fiber_per_100g * multiplier,
        }
    }
}
