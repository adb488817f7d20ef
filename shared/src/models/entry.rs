//! Logged food entries

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::food::{FoodItem, NutrientAmounts};
use super::meal::MealType;

/// One logged consumption event
///
/// Nutrient totals are computed once when the entry is created and travel
/// with it; entries are never updated in place.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FoodEntry {
    pub id: i64,
    pub food_id: i64,
    #[serde(default)]
    pub food_name: String,
    pub quantity_grams: f64,
    pub meal_type: MealType,
    pub date: NaiveDate,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    /// Missing from older backend payloads, in which case it reads as zero
    #[serde(default)]
    pub fiber: f64,
}

impl FoodEntry {
    /// Build an entry for `food`, storing its nutrients for `quantity_grams`
    pub fn new(
        id: i64,
        food: &FoodItem,
        quantity_grams: f64,
        meal_type: MealType,
        date: NaiveDate,
    ) -> Self {
        let NutrientAmounts {
            calories,
            protein,
            carbs,
            fat,
            fiber,
        } = food.nutrients_for(quantity_grams);

        Self {
            id,
            food_id: food.id,
            food_name: food.name.clone(),
            quantity_grams,
            meal_type,
            date,
            calories,
            protein,
            carbs,
            fat,
            fiber,
        }
    }

    pub fn nutrients(&self) -> NutrientAmounts {
        NutrientAmounts {
            calories: self.calories,
            protein: self.protein,
            carbs: self.carbs,
            fat: self.fat,
            fiber: self.fiber,
        }
    }
}

/// Request body for `POST /api/food-entries`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FoodEntryCreate {
    pub food_id: i64,
    pub quantity_grams: f64,
    pub meal_type: MealType,
    pub date: NaiveDate,
}
