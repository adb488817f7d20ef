//! Property tests for daily aggregation, meal grouping and goal comparison

use chrono::NaiveDate;
use proptest::prelude::*;
use shared::{
    aggregate_daily, calories_by_meal, compare_with_goals, entries_on, group_by_meal,
    DailyNutrition, FoodEntry, GoalProgress, MealType, NutritionGoals,
};

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-6 * (1.0 + a.abs().max(b.abs()))
}

// ============================================================================
// Strategies
// ============================================================================

fn meal_type_strategy() -> impl Strategy<Value = MealType> {
    prop_oneof![
        Just(MealType::Breakfast),
        Just(MealType::Lunch),
        Just(MealType::Dinner),
        Just(MealType::Snack),
    ]
}

fn entry_strategy() -> impl Strategy<Value = FoodEntry> {
    (
        1i64..10_000,
        meal_type_strategy(),
        0.0f64..2000.0,
        0.0f64..150.0,
        0.0f64..250.0,
        0.0f64..100.0,
        0.0f64..30.0,
    )
        .prop_map(|(id, meal_type, calories, protein, carbs, fat, fiber)| FoodEntry {
            id,
            food_id: id,
            food_name: format!("food {}", id),
            quantity_grams: 100.0,
            meal_type,
            date: day(),
            calories,
            protein,
            carbs,
            fat,
            fiber,
        })
}

fn entries_strategy() -> impl Strategy<Value = Vec<FoodEntry>> {
    prop::collection::vec(entry_strategy(), 0..40)
}

/// Entries spread over the target day and its neighbours
fn mixed_date_entries_strategy() -> impl Strategy<Value = Vec<FoodEntry>> {
    prop::collection::vec((entry_strategy(), -1i64..=1), 0..40).prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(mut entry, offset)| {
                entry.date = day() + chrono::Duration::days(offset);
                entry
            })
            .collect()
    })
}

// ============================================================================
// Scenario Tests
// ============================================================================

mod scenarios {
    use super::*;

    fn entry(calories: f64, protein: f64, carbs: f64, fat: f64) -> FoodEntry {
        FoodEntry {
            id: 1,
            food_id: 1,
            food_name: "test".to_string(),
            quantity_grams: 100.0,
            meal_type: MealType::Lunch,
            date: day(),
            calories,
            protein,
            carbs,
            fat,
            fiber: 0.0,
        }
    }

    #[test]
    fn two_entries_totals_and_percentages() {
        let daily = aggregate_daily(
            day(),
            &[entry(200.0, 10.0, 20.0, 5.0), entry(300.0, 20.0, 10.0, 15.0)],
        );
        assert!(approx(daily.total_calories, 500.0));
        assert!(approx(daily.protein_percentage, 24.0));
        assert!(approx(daily.carbs_percentage, 24.0));
        assert!(approx(daily.fat_percentage, 36.0));
    }

    #[test]
    fn no_entries_is_all_zero() {
        assert_eq!(aggregate_daily(day(), &[]), DailyNutrition::empty(day()));
    }

    #[test]
    fn mixed_dates_total_matches_meal_breakdown() {
        let mut today = entry(200.0, 0.0, 0.0, 0.0);
        today.meal_type = MealType::Dinner;
        let mut yesterday = today.clone();
        yesterday.id = 2;
        yesterday.calories = 400.0;
        yesterday.date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let entries = entries_on(day(), &[today, yesterday]);

        let total = aggregate_daily(day(), &entries).total_calories;
        let by_meal: f64 = calories_by_meal(&entries).iter().map(|m| m.calories).sum();
        let dinner = group_by_meal(&entries).calories(MealType::Dinner);

        assert_eq!(total, 200.0);
        assert_eq!(total, by_meal);
        assert_eq!(total, dinner);
    }

    #[test]
    fn goal_overage_and_shortfall() {
        let over = GoalProgress::new(2500.0, 2000.0);
        assert_eq!((over.progress_percentage, over.remaining), (100.0, 0.0));

        let under = GoalProgress::new(500.0, 2000.0);
        assert_eq!((under.progress_percentage, under.remaining), (25.0, 1500.0));
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Totals equal the sum of the per-entry values
    #[test]
    fn prop_totals_match_entry_sums(entries in entries_strategy()) {
        let daily = aggregate_daily(day(), &entries);

        let calories: f64 = entries.iter().map(|e| e.calories).sum();
        let protein: f64 = entries.iter().map(|e| e.protein).sum();
        let fiber: f64 = entries.iter().map(|e| e.fiber).sum();

        prop_assert!(approx(daily.total_calories, calories));
        prop_assert!(approx(daily.total_protein, protein));
        prop_assert!(approx(daily.total_fiber, fiber));
    }

    /// Aggregation does not depend on entry order
    #[test]
    fn prop_aggregation_order_independent(entries in entries_strategy()) {
        let forward = aggregate_daily(day(), &entries);
        let mut reversed = entries.clone();
        reversed.reverse();
        let backward = aggregate_daily(day(), &reversed);

        prop_assert!(approx(forward.total_calories, backward.total_calories));
        prop_assert!(approx(forward.total_fat, backward.total_fat));
        prop_assert!(approx(forward.fat_percentage, backward.fat_percentage));
    }

    /// Zero calories always means zero percentages, whatever the macro grams
    #[test]
    fn prop_zero_calories_zero_percentages(entries in entries_strategy()) {
        let zeroed: Vec<FoodEntry> = entries
            .into_iter()
            .map(|mut e| { e.calories = 0.0; e })
            .collect();
        let daily = aggregate_daily(day(), &zeroed);

        prop_assert_eq!(daily.protein_percentage, 0.0);
        prop_assert_eq!(daily.carbs_percentage, 0.0);
        prop_assert_eq!(daily.fat_percentage, 0.0);
    }

    /// Percentages are never NaN or negative
    #[test]
    fn prop_percentages_finite(entries in entries_strategy()) {
        let daily = aggregate_daily(day(), &entries);
        for pct in [daily.protein_percentage, daily.carbs_percentage, daily.fat_percentage] {
            prop_assert!(pct.is_finite());
            prop_assert!(pct >= 0.0);
        }
    }

    /// Grouping partitions the input and keeps per-meal order
    #[test]
    fn prop_grouping_partitions_input(entries in entries_strategy()) {
        let groups = group_by_meal(&entries);

        prop_assert_eq!(groups.total_entries(), entries.len());
        for (meal_type, group) in groups.iter() {
            let expected: Vec<&FoodEntry> =
                entries.iter().filter(|e| e.meal_type == meal_type).collect();
            let actual: Vec<&FoodEntry> = group.iter().collect();
            prop_assert_eq!(actual, expected);
        }
    }

    /// Per-meal calories add up to the daily total
    #[test]
    fn prop_meal_calories_sum_to_total(entries in entries_strategy()) {
        let breakdown = calories_by_meal(&entries);
        let daily = aggregate_daily(day(), &entries);
        let sum: f64 = breakdown.iter().map(|m| m.calories).sum();

        prop_assert_eq!(breakdown.len(), 4);
        prop_assert!(approx(sum, daily.total_calories));
    }

    /// Progress stays within [0, 100] and remaining is never negative
    #[test]
    fn prop_goal_progress_bounded(
        actual in 0.0f64..1_000_000.0,
        goal in 0.001f64..100_000.0
    ) {
        let progress = GoalProgress::new(actual, goal);
        prop_assert!(progress.progress_percentage >= 0.0);
        prop_assert!(progress.progress_percentage <= 100.0);
        prop_assert!(progress.remaining >= 0.0);
        prop_assert_eq!(progress.is_exceeded(), actual > goal);
    }

    /// Once restricted to the day, totals and meal views agree
    #[test]
    fn prop_day_views_agree_on_mixed_dates(entries in mixed_date_entries_strategy()) {
        let daily = aggregate_daily(day(), &entries);
        let todays = entries_on(day(), &entries);

        prop_assert_eq!(&aggregate_daily(day(), &todays), &daily);
        let by_meal: f64 = calories_by_meal(&todays).iter().map(|m| m.calories).sum();
        prop_assert!(approx(by_meal, daily.total_calories));
        prop_assert!(todays.iter().all(|e| e.date == day()));
        prop_assert_eq!(group_by_meal(&todays).total_entries(), todays.len());
    }

    /// Bounds hold for any actual value, including NaN and infinities
    #[test]
    fn prop_goal_progress_bounded_for_any_actual(
        actual in any::<f64>(),
        goal in 0.001f64..100_000.0
    ) {
        let progress = GoalProgress::new(actual, goal);
        prop_assert!((0.0..=100.0).contains(&progress.progress_percentage));
        prop_assert!(progress.remaining >= 0.0);
    }

    /// Every metric of a comparison respects the same bounds
    #[test]
    fn prop_comparison_bounded(entries in entries_strategy()) {
        let daily = aggregate_daily(day(), &entries);
        let comparison = compare_with_goals(&daily, &NutritionGoals::default());

        for (_, progress) in comparison.iter() {
            prop_assert!((0.0..=100.0).contains(&progress.progress_percentage));
            prop_assert!(progress.remaining >= 0.0);
        }
    }
}
