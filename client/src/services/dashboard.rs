//! Daily dashboard: totals, goal progress, macro split and meals for one date
//!
//! The backend's own aggregate is preferred. When it cannot be loaded the
//! totals are aggregated locally from the day's entries, and when neither is
//! available the dashboard renders zeros instead of failing.

use chrono::NaiveDate;
use serde::Serialize;
use shared::{
    aggregate_daily, calories_by_meal, compare_with_goals, entries_on, group_by_meal,
    DailyNutrition, FoodEntry, GoalComparison, MacroShare, MealCalories, MealGroups,
    NutritionGoals,
};
use tracing::{debug, info, instrument};

use crate::error::{ApiOperation, ClientResult};
use crate::external::NutritionApiClient;

/// Where the day's totals came from
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NutritionSource {
    /// Backend aggregate
    Server,
    /// Aggregated locally from entries
    Client,
    /// Nothing could be loaded; zero values
    Fallback,
}

/// Everything the dashboard renders for one date
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub date: NaiveDate,
    pub source: NutritionSource,
    pub nutrition: DailyNutrition,
    pub goals: NutritionGoals,
    pub progress: GoalComparison,
    pub remaining_calories: f64,
    pub macros: Vec<MacroShare>,
    pub meals: MealGroups,
    pub meal_breakdown: Vec<MealCalories>,
    /// Backend operations that failed while loading
    pub failures: Vec<ApiOperation>,
}

impl DashboardView {
    /// Meal views only use entries dated `date`, matching local aggregation
    pub fn build(
        date: NaiveDate,
        source: NutritionSource,
        nutrition: DailyNutrition,
        entries: &[FoodEntry],
        goals: NutritionGoals,
        failures: Vec<ApiOperation>,
    ) -> Self {
        let progress = compare_with_goals(&nutrition, &goals);
        let entries = entries_on(date, entries);

        Self {
            date,
            source,
            remaining_calories: progress.remaining_calories(),
            macros: nutrition.macro_distribution(),
            meals: group_by_meal(&entries),
            meal_breakdown: calories_by_meal(&entries),
            nutrition,
            goals,
            progress,
            failures,
        }
    }

    pub fn is_degraded(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Pick the day's totals: backend aggregate, then local aggregation, then zeros
pub fn resolve_nutrition(
    date: NaiveDate,
    server: ClientResult<DailyNutrition>,
    entries: Option<&[FoodEntry]>,
) -> (DailyNutrition, NutritionSource) {
    match (server, entries) {
        (Ok(nutrition), _) => (nutrition, NutritionSource::Server),
        (Err(_), Some(entries)) => (aggregate_daily(date, entries), NutritionSource::Client),
        (Err(_), None) => (DailyNutrition::empty(date), NutritionSource::Fallback),
    }
}

/// Dashboard service
#[derive(Debug, Clone)]
pub struct DashboardService {
    api: NutritionApiClient,
    goals: NutritionGoals,
}

impl DashboardService {
    pub fn new(api: NutritionApiClient, goals: NutritionGoals) -> Self {
        Self { api, goals }
    }

    pub fn goals(&self) -> &NutritionGoals {
        &self.goals
    }

    /// Load the dashboard for `date`; never fails
    #[instrument(skip(self), fields(date = %date))]
    pub async fn load(&self, date: NaiveDate) -> DashboardView {
        let (server, entries) = tokio::join!(
            self.api.daily_nutrition(date),
            self.api.list_entries(date)
        );

        let mut failures = Vec::new();
        if server.is_err() {
            failures.push(ApiOperation::DailyNutrition);
        }
        let entries = match entries {
            Ok(entries) => Some(entries),
            Err(_) => {
                failures.push(ApiOperation::ListEntries);
                None
            }
        };

        let (nutrition, source) = resolve_nutrition(date, server, entries.as_deref());
        if source != NutritionSource::Server {
            debug!(?source, "daily aggregate unavailable, using fallback");
        }

        let view = DashboardView::build(
            date,
            source,
            nutrition,
            entries.as_deref().unwrap_or(&[]),
            self.goals,
            failures,
        );
        info!(
            ?source,
            calories = view.nutrition.total_calories,
            remaining = view.remaining_calories,
            "dashboard loaded"
        );
        view
    }

    /// Totals for `date` only, with the same fallback order as `load`
    #[instrument(skip(self), fields(date = %date))]
    pub async fn daily_nutrition(&self, date: NaiveDate) -> (DailyNutrition, NutritionSource) {
        let server = self.api.daily_nutrition(date).await;
        if server.is_ok() {
            return resolve_nutrition(date, server, None);
        }

        let entries = self.api.list_entries(date).await.ok();
        resolve_nutrition(date, server, entries.as_deref())
    }
}
