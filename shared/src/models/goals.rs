//! Daily goals and progress against them

use serde::{Deserialize, Serialize};

use super::nutrition::DailyNutrition;

/// Fixed daily targets used for progress display
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct NutritionGoals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub fiber: f64,
}

impl Default for NutritionGoals {
    fn default() -> Self {
        Self {
            calories: 2000.0,
            protein: 150.0,
            carbs: 250.0,
            fat: 65.0,
            fiber: 25.0,
        }
    }
}

/// Tracked goal metrics
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Calories,
    Protein,
    Carbs,
    Fat,
    Fiber,
}

impl Metric {
    pub const ALL: [Metric; 5] = [
        Metric::Calories,
        Metric::Protein,
        Metric::Carbs,
        Metric::Fat,
        Metric::Fiber,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Metric::Calories => "Calories",
            Metric::Protein => "Protein",
            Metric::Carbs => "Carbs",
            Metric::Fat => "Fat",
            Metric::Fiber => "Fiber",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Metric::Calories => "kcal",
            Metric::Protein | Metric::Carbs | Metric::Fat | Metric::Fiber => "g",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Metric::Calories => "#2563eb",
            Metric::Protein => "#ef4444",
            Metric::Carbs => "#eab308",
            Metric::Fat => "#3b82f6",
            Metric::Fiber => "#10b981",
        }
    }
}

/// Progress of one metric towards its goal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GoalProgress {
    pub actual: f64,
    pub goal: f64,
    /// Clamped to [0, 100]; overage shows up as `actual > goal`
    pub progress_percentage: f64,
    pub remaining: f64,
}

impl GoalProgress {
    pub fn new(actual: f64, goal: f64) -> Self {
        let progress_percentage = if goal > 0.0 {
            let ratio = actual / goal * 100.0;
            // clamp passes NaN through
            if ratio.is_nan() {
                0.0
            } else {
                ratio.clamp(0.0, 100.0)
            }
        } else {
            100.0
        };

        Self {
            actual,
            goal,
            progress_percentage,
            remaining: (goal - actual).max(0.0),
        }
    }

    pub fn is_exceeded(&self) -> bool {
        self.actual > self.goal
    }
}

/// Progress for every tracked metric
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GoalComparison {
    pub calories: GoalProgress,
    pub protein: GoalProgress,
    pub carbs: GoalProgress,
    pub fat: GoalProgress,
    pub fiber: GoalProgress,
}

impl GoalComparison {
    pub fn get(&self, metric: Metric) -> &GoalProgress {
        match metric {
            Metric::Calories => &self.calories,
            Metric::Protein => &self.protein,
            Metric::Carbs => &self.carbs,
            Metric::Fat => &self.fat,
            Metric::Fiber => &self.fiber,
        }
    }

    /// Metrics in display order
    pub fn iter(&self) -> impl Iterator<Item = (Metric, &GoalProgress)> + '_ {
        Metric::ALL.into_iter().map(move |metric| (metric, self.get(metric)))
    }

    /// Calories still available today ("Remaining = Goal - Food")
    pub fn remaining_calories(&self) -> f64 {
        self.calories.remaining
    }
}

/// Compare a day's totals with the goals
pub fn compare_with_goals(nutrition: &DailyNutrition, goals: &NutritionGoals) -> GoalComparison {
    GoalComparison {
        calories: GoalProgress::new(nutrition.total_calories, goals.calories),
        protein: GoalProgress::new(nutrition.total_protein, goals.protein),
        carbs: GoalProgress::new(nutrition.total_carbs, goals.carbs),
        fat: GoalProgress::new(nutrition.total_fat, goals.fat),
        fiber: GoalProgress::new(nutrition.total_fiber, goals.fiber),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_over_goal_clamped() {
        let progress = GoalProgress::new(2500.0, 2000.0);
        assert_eq!(progress.progress_percentage, 100.0);
        assert_eq!(progress.remaining, 0.0);
        assert!(progress.is_exceeded());
    }

    #[test]
    fn test_under_goal() {
        let progress = GoalProgress::new(500.0, 2000.0);
        assert_eq!(progress.progress_percentage, 25.0);
        assert_eq!(progress.remaining, 1500.0);
        assert!(!progress.is_exceeded());
    }

    #[test]
    fn test_exactly_at_goal() {
        let progress = GoalProgress::new(65.0, 65.0);
        assert_eq!(progress.progress_percentage, 100.0);
        assert_eq!(progress.remaining, 0.0);
        assert!(!progress.is_exceeded());
    }

    #[test]
    fn test_non_positive_goal_does_not_produce_nan() {
        let progress = GoalProgress::new(10.0, 0.0);
        assert_eq!(progress.progress_percentage, 100.0);
        assert_eq!(progress.remaining, 0.0);
    }

    #[test]
    fn test_nan_actual_stays_in_range() {
        let progress = GoalProgress::new(f64::NAN, 2000.0);
        assert_eq!(progress.progress_percentage, 0.0);
        assert_eq!(progress.remaining, 2000.0);

        let infinite = GoalProgress::new(f64::INFINITY, 2000.0);
        assert_eq!(infinite.progress_percentage, 100.0);
        assert_eq!(infinite.remaining, 0.0);
    }

    #[test]
    fn test_default_goals() {
        let goals = NutritionGoals::default();
        assert_eq!(goals.calories, 2000.0);
        assert_eq!(goals.protein, 150.0);
        assert_eq!(goals.carbs, 250.0);
        assert_eq!(goals.fat, 65.0);
        assert_eq!(goals.fiber, 25.0);
    }

    #[test]
    fn test_compare_with_goals() {
        let mut daily = DailyNutrition::empty(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        daily.total_calories = 500.0;
        daily.total_protein = 75.0;
        daily.total_fat = 80.0;

        let comparison = compare_with_goals(&daily, &NutritionGoals::default());

        assert_eq!(comparison.calories.progress_percentage, 25.0);
        assert_eq!(comparison.remaining_calories(), 1500.0);
        assert_eq!(comparison.protein.progress_percentage, 50.0);
        assert_eq!(comparison.carbs.progress_percentage, 0.0);
        assert_eq!(comparison.carbs.remaining, 250.0);
        assert_eq!(comparison.fat.progress_percentage, 100.0);
        assert!(comparison.fat.is_exceeded());
    }

    #[test]
    fn test_comparison_iterates_in_display_order() {
        let daily = DailyNutrition::empty(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        let comparison = compare_with_goals(&daily, &NutritionGoals::default());
        let metrics: Vec<Metric> = comparison.iter().map(|(m, _)| m).collect();
        assert_eq!(metrics, Metric::ALL.to_vec());
        assert_eq!(comparison.get(Metric::Fiber).goal, 25.0);
        assert_eq!(Metric::Calories.unit(), "kcal");
    }
}
