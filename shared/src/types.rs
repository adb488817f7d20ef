//! Common types used across the tracker

use serde::{Deserialize, Serialize};

use crate::models::{FoodEntry, FoodItem};

/// Energy density of protein (kcal per gram)
pub const PROTEIN_KCAL_PER_GRAM: f64 = 4.0;

/// Energy density of carbohydrate (kcal per gram)
pub const CARBS_KCAL_PER_GRAM: f64 = 4.0;

/// Energy density of fat (kcal per gram)
pub const FAT_KCAL_PER_GRAM: f64 = 9.0;

/// The three energy-contributing macronutrients
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MacroNutrient {
    Protein,
    Carbs,
    Fat,
}

impl MacroNutrient {
    pub const ALL: [MacroNutrient; 3] = [
        MacroNutrient::Protein,
        MacroNutrient::Carbs,
        MacroNutrient::Fat,
    ];

    pub fn kcal_per_gram(&self) -> f64 {
        match self {
            MacroNutrient::Protein => PROTEIN_KCAL_PER_GRAM,
            MacroNutrient::Carbs => CARBS_KCAL_PER_GRAM,
            MacroNutrient::Fat => FAT_KCAL_PER_GRAM,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MacroNutrient::Protein => "Protein",
            MacroNutrient::Carbs => "Carbs",
            MacroNutrient::Fat => "Fat",
        }
    }

    /// Chart colour
    pub fn color(&self) -> &'static str {
        match self {
            MacroNutrient::Protein => "#ef4444",
            MacroNutrient::Carbs => "#eab308",
            MacroNutrient::Fat => "#3b82f6",
        }
    }
}

impl std::fmt::Display for MacroNutrient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Response body of `GET /api/foods/search`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodSearchResponse {
    pub foods: Vec<FoodItem>,
}

/// Response body of `GET /api/food-entries`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodEntriesResponse {
    pub entries: Vec<FoodEntry>,
}

/// Plain acknowledgement returned by delete endpoints
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}
