//! Daily nutrition aggregation
//!
//! Turns the entries logged for a date into totals and the share of calories
//! contributed by each macronutrient.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::entry::FoodEntry;
use crate::types::MacroNutrient;

/// Nutrition totals for a single day
///
/// Macro percentages are each macro's share of `total_calories` and are not
/// normalised: they may sum to less than 100 when calories come from other
/// sources or the stored values were rounded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyNutrition {
    pub date: NaiveDate,
    pub total_calories: f64,
    pub total_protein: f64,
    pub total_carbs: f64,
    pub total_fat: f64,
    pub total_fiber: f64,
    pub protein_percentage: f64,
    pub carbs_percentage: f64,
    pub fat_percentage: f64,
}

/// One slice of the macro distribution
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MacroShare {
    pub macro_nutrient: MacroNutrient,
    pub grams: f64,
    pub percentage: f64,
}

impl DailyNutrition {
    /// Zero totals, used when nothing is logged or nothing could be loaded
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            total_calories: 0.0,
            total_protein: 0.0,
            total_carbs: 0.0,
            total_fat: 0.0,
            total_fiber: 0.0,
            protein_percentage: 0.0,
            carbs_percentage: 0.0,
            fat_percentage: 0.0,
        }
    }

    pub fn grams(&self, macro_nutrient: MacroNutrient) -> f64 {
        match macro_nutrient {
            MacroNutrient::Protein => self.total_protein,
            MacroNutrient::Carbs => self.total_carbs,
            MacroNutrient::Fat => self.total_fat,
        }
    }

    pub fn percentage(&self, macro_nutrient: MacroNutrient) -> f64 {
        match macro_nutrient {
            MacroNutrient::Protein => self.protein_percentage,
            MacroNutrient::Carbs => self.carbs_percentage,
            MacroNutrient::Fat => self.fat_percentage,
        }
    }

    pub fn macro_distribution(&self) -> Vec<MacroShare> {
        MacroNutrient::ALL
            .into_iter()
            .map(|macro_nutrient| MacroShare {
                macro_nutrient,
                grams: self.grams(macro_nutrient),
                percentage: self.percentage(macro_nutrient),
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.total_calories == 0.0
            && self.total_protein == 0.0
            && self.total_carbs == 0.0
            && self.total_fat == 0.0
            && self.total_fiber == 0.0
    }
}

/// Share of `total_calories` contributed by `grams` of a macro, 0 when there are no calories
pub fn calorie_share(grams: f64, macro_nutrient: MacroNutrient, total_calories: f64) -> f64 {
    if total_calories == 0.0 {
        return 0.0;
    }
    (grams * macro_nutrient.kcal_per_gram() / total_calories) * 100.0
}

/// Entries logged on `date`, in input order
///
/// Every per-day view (totals, meal groups, meal calories) is built from this
/// subset so they agree with each other.
pub fn entries_on(date: NaiveDate, entries: &[FoodEntry]) -> Vec<FoodEntry> {
    entries.iter().filter(|e| e.date == date).cloned().collect()
}

/// Aggregate the entries logged on `date`
///
/// Entries for other dates are skipped, as in `entries_on`. An empty slice
/// yields all zeros.
pub fn aggregate_daily(date: NaiveDate, entries: &[FoodEntry]) -> DailyNutrition {
    let mut daily = DailyNutrition::empty(date);
    for entry in entries.iter().filter(|e| e.date == date) {
        daily.total_calories += entry.calories;
        daily.total_protein += entry.protein;
        daily.total_carbs += entry.carbs;
        daily.total_fat += entry.fat;
        daily.total_fiber += entry.fiber;
    }

    let total = daily.total_calories;
    daily.protein_percentage = calorie_share(daily.total_protein, MacroNutrient::Protein, total);
    daily.carbs_percentage = calorie_share(daily.total_carbs, MacroNutrient::Carbs, total);
    daily.fat_percentage = calorie_share(daily.total_fat, MacroNutrient::Fat, total);
    daily
}
