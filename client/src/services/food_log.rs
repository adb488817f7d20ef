//! Food logging: search, preview, log and remove entries

use chrono::NaiveDate;
use serde::Serialize;
use shared::{
    aggregate_daily, calories_by_meal, entries_on, group_by_meal, validate_entry_create,
    validate_quantity_grams, validate_search_limit, validate_search_query, FoodEntry,
    FoodEntryCreate, FoodItem, MealCalories, MealGroups, MessageResponse, NutrientAmounts,
};
use tracing::{info, instrument};

use crate::error::{ClientError, ClientResult};
use crate::external::NutritionApiClient;

/// Food logging service
#[derive(Debug, Clone)]
pub struct FoodLogService {
    api: NutritionApiClient,
    default_limit: usize,
}

/// What logging `quantity_grams` of a food would add
#[derive(Debug, Clone, Serialize)]
pub struct EntryPreview {
    pub food: FoodItem,
    pub quantity_grams: f64,
    pub nutrients: NutrientAmounts,
}

/// A day's entries grouped for display
#[derive(Debug, Clone, Serialize)]
pub struct MealLog {
    pub date: NaiveDate,
    pub meals: MealGroups,
    pub breakdown: Vec<MealCalories>,
    pub total_calories: f64,
}

impl MealLog {
    /// Entries dated other than `date` are left out of every view
    pub fn from_entries(date: NaiveDate, entries: &[FoodEntry]) -> Self {
        let entries = entries_on(date, entries);
        Self {
            date,
            meals: group_by_meal(&entries),
            breakdown: calories_by_meal(&entries),
            total_calories: aggregate_daily(date, &entries).total_calories,
        }
    }
}

impl FoodLogService {
    pub fn new(api: NutritionApiClient, default_limit: usize) -> Self {
        Self { api, default_limit }
    }

    /// Search the food database; `limit` falls back to the configured default
    #[instrument(skip(self))]
    pub async fn search(&self, query: &str, limit: Option<usize>) -> ClientResult<Vec<FoodItem>> {
        validate_search_query(query).map_err(ClientError::Validation)?;
        let limit = limit.unwrap_or(self.default_limit);
        validate_search_limit(limit).map_err(ClientError::Validation)?;

        let foods = self.api.search_foods(query.trim(), limit).await?;
        info!(results = foods.len(), "food search completed");
        Ok(foods)
    }

    #[instrument(skip(self))]
    pub async fn food(&self, food_id: i64) -> ClientResult<FoodItem> {
        self.api.get_food(food_id).await
    }

    /// Nutrients `quantity_grams` of a food would contribute, without logging it
    #[instrument(skip(self))]
    pub async fn preview(&self, food_id: i64, quantity_grams: f64) -> ClientResult<EntryPreview> {
        validate_quantity_grams(quantity_grams).map_err(ClientError::Validation)?;
        let food = self.api.get_food(food_id).await?;
        let nutrients = food.nutrients_for(quantity_grams);

        Ok(EntryPreview {
            food,
            quantity_grams,
            nutrients,
        })
    }

    /// Validate and create an entry
    #[instrument(skip(self), fields(food_id = request.food_id, meal = %request.meal_type))]
    pub async fn log_food(&self, request: FoodEntryCreate) -> ClientResult<FoodEntry> {
        validate_entry_create(&request).map_err(ClientError::Validation)?;

        let entry = self.api.create_entry(&request).await?;
        info!(
            entry_id = entry.id,
            food = %entry.food_name,
            calories = entry.calories,
            date = %entry.date,
            "food logged"
        );
        Ok(entry)
    }

    #[instrument(skip(self))]
    pub async fn delete_entry(&self, entry_id: i64) -> ClientResult<MessageResponse> {
        let response = self.api.delete_entry(entry_id).await?;
        info!(entry_id, "food entry deleted");
        Ok(response)
    }

    /// Entries for `date`, grouped by meal with per-meal calories
    #[instrument(skip(self))]
    pub async fn entries_by_meal(&self, date: NaiveDate) -> ClientResult<MealLog> {
        let entries = self.api.list_entries(date).await?;
        Ok(MealLog::from_entries(date, &entries))
    }
}
