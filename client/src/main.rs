//! Nutrition Tracker - command line client
//!
//! Usage:
//! ```bash
//! # Search the food database
//! nutrition-tracker search banana --limit 5
//!
//! # Log 150 g of food 3 as lunch for today
//! nutrition-tracker log 3 150 --meal lunch
//!
//! # Show today's dashboard against a different backend
//! nutrition-tracker --base-url http://nutrition.local:8000 dashboard
//! ```

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nutrition_tracker_client::{Config, DashboardService, FoodLogService, NutritionApiClient};
use shared::{parse_iso_date, FoodEntryCreate, MealType};

#[derive(Parser)]
#[command(
    name = "nutrition-tracker",
    about = "Nutrition Tracker CLI",
    long_about = "Log food against the nutrition backend and review daily totals, meals and goal progress."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Backend base URL override
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Search foods by name
    Search {
        query: String,

        /// Maximum number of results
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Show one food
    Food { id: i64 },

    /// Show what a quantity of a food would add without logging it
    Preview { food_id: i64, grams: f64 },

    /// Log a food entry
    Log {
        food_id: i64,

        grams: f64,

        /// breakfast, lunch, dinner or snack
        #[arg(long)]
        meal: MealType,

        /// Entry date (YYYY-MM-DD), defaults to today
        #[arg(long, value_parser = parse_date_arg)]
        date: Option<NaiveDate>,
    },

    /// List a day's entries grouped by meal
    Entries {
        #[arg(long, value_parser = parse_date_arg)]
        date: Option<NaiveDate>,
    },

    /// Delete a food entry
    Delete { id: i64 },

    /// Show a day's nutrition totals
    Daily {
        #[arg(long, value_parser = parse_date_arg)]
        date: Option<NaiveDate>,
    },

    /// Show the full dashboard for a day
    Dashboard {
        #[arg(long, value_parser = parse_date_arg)]
        date: Option<NaiveDate>,
    },
}

fn parse_date_arg(value: &str) -> Result<NaiveDate, String> {
    parse_iso_date(value).map_err(str::to_string)
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "nutrition_tracker=debug,nutrition_tracker_client=debug"
    } else {
        "nutrition_tracker=info,nutrition_tracker_client=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let mut config = Config::load()?;
    if let Some(base_url) = cli.base_url {
        config.api.base_url = base_url;
    }
    config.validate()?;

    tracing::debug!(
        environment = %config.environment,
        base_url = %config.api.base_url,
        "configuration loaded"
    );

    let api = NutritionApiClient::new(&config.api)?;
    let food_log = FoodLogService::new(api.clone(), config.search.default_limit);
    let dashboard = DashboardService::new(api, config.goals);

    match cli.command {
        Command::Search { query, limit } => print_json(&food_log.search(&query, limit).await?),
        Command::Food { id } => print_json(&food_log.food(id).await?),
        Command::Preview { food_id, grams } => print_json(&food_log.preview(food_id, grams).await?),
        Command::Log {
            food_id,
            grams,
            meal,
            date,
        } => {
            let request = FoodEntryCreate {
                food_id,
                quantity_grams: grams,
                meal_type: meal,
                date: date.unwrap_or_else(today),
            };
            print_json(&food_log.log_food(request).await?)
        }
        Command::Entries { date } => {
            print_json(&food_log.entries_by_meal(date.unwrap_or_else(today)).await?)
        }
        Command::Delete { id } => print_json(&food_log.delete_entry(id).await?),
        Command::Daily { date } => {
            let (nutrition, source) = dashboard.daily_nutrition(date.unwrap_or_else(today)).await;
            tracing::debug!(?source, "daily totals resolved");
            print_json(&nutrition)
        }
        Command::Dashboard { date } => {
            let view = dashboard.load(date.unwrap_or_else(today)).await;
            if view.is_degraded() {
                tracing::warn!(failures = ?view.failures, "dashboard shown with partial data");
            }
            print_json(&view)
        }
    }
}
