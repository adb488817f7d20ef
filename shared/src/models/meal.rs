//! Meal categories and per-meal grouping of entries

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::entry::FoodEntry;

/// Meal category an entry is logged against
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    /// All meal types in display order
    pub const ALL: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snack,
    ];

    /// Wire value
    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
            MealType::Snack => "Snack",
        }
    }

    /// Icon name (lucide icon set)
    pub fn icon(&self) -> &'static str {
        match self {
            MealType::Breakfast => "coffee",
            MealType::Lunch => "sun",
            MealType::Dinner => "moon",
            MealType::Snack => "cookie",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            MealType::Breakfast => "#f59e0b",
            MealType::Lunch => "#10b981",
            MealType::Dinner => "#3b82f6",
            MealType::Snack => "#8b5cf6",
        }
    }
}

impl std::fmt::Display for MealType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown meal type '{0}', expected breakfast, lunch, dinner or snack")]
pub struct ParseMealTypeError(pub String);

impl FromStr for MealType {
    type Err = ParseMealTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "breakfast" => Ok(MealType::Breakfast),
            "lunch" => Ok(MealType::Lunch),
            "dinner" => Ok(MealType::Dinner),
            "snack" => Ok(MealType::Snack),
            other => Err(ParseMealTypeError(other.to_string())),
        }
    }
}

/// Entries partitioned by meal type
///
/// Every meal type has a group, possibly empty. Within a group entries keep
/// the order they had in the input.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(transparent)]
pub struct MealGroups {
    groups: BTreeMap<MealType, Vec<FoodEntry>>,
}

impl MealGroups {
    pub fn get(&self, meal_type: MealType) -> &[FoodEntry] {
        self.groups
            .get(&meal_type)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Groups in display order, empty ones included
    pub fn iter(&self) -> impl Iterator<Item = (MealType, &[FoodEntry])> + '_ {
        MealType::ALL
            .into_iter()
            .map(move |meal_type| (meal_type, self.get(meal_type)))
    }

    pub fn calories(&self, meal_type: MealType) -> f64 {
        self.get(meal_type).iter().map(|e| e.calories).sum()
    }

    pub fn total_entries(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }
}

/// Calories logged for one meal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealCalories {
    pub meal_type: MealType,
    pub label: String,
    pub color: String,
    pub calories: f64,
}

/// Partition entries by meal type
pub fn group_by_meal(entries: &[FoodEntry]) -> MealGroups {
    let mut groups: BTreeMap<MealType, Vec<FoodEntry>> = MealType::ALL
        .into_iter()
        .map(|meal_type| (meal_type, Vec::new()))
        .collect();

    for entry in entries {
        groups.entry(entry.meal_type).or_default().push(entry.clone());
    }

    MealGroups { groups }
}

/// Sum calories per meal type, one row per meal in display order
pub fn calories_by_meal(entries: &[FoodEntry]) -> Vec<MealCalories> {
    MealType::ALL
        .into_iter()
        .map(|meal_type| MealCalories {
            meal_type,
            label: meal_type.label().to_string(),
            color: meal_type.color().to_string(),
            calories: entries
                .iter()
                .filter(|e| e.meal_type == meal_type)
                .map(|e| e.calories)
                .sum(),
        })
        .collect()
}

/// Drop meals with nothing logged, as the meal breakdown chart does
pub fn non_empty_meals(breakdown: &[MealCalories]) -> Vec<MealCalories> {
    breakdown
        .iter()
        .filter(|meal| meal.calories > 0.0)
        .cloned()
        .collect()
}
