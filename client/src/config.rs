//! Configuration management for the Nutrition Tracker client
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (config/development.toml, config/production.toml)
//! 3. Environment variable overrides with NUTRITION__ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;
use shared::{validate_goals, validate_search_limit, NutritionGoals};

use crate::error::{ClientError, ClientResult};

/// Main client configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Backend API configuration
    pub api: ApiConfig,

    /// Food search configuration
    pub search: SearchConfig,

    /// Daily goals shown on the dashboard
    pub goals: NutritionGoals,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Base URL of the nutrition backend, without trailing slash
    pub base_url: String,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SearchConfig {
    /// Results requested when no limit is given
    pub default_limit: usize,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("NUTRITION_ENVIRONMENT").unwrap_or_else(|_| "development".into());
        let defaults = NutritionGoals::default();

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("api.base_url", "http://localhost:8000")?
            .set_default("api.timeout_secs", 10)?
            .set_default("search.default_limit", 10)?
            .set_default("goals.calories", defaults.calories)?
            .set_default("goals.protein", defaults.protein)?
            .set_default("goals.carbs", defaults.carbs)?
            .set_default("goals.fat", defaults.fat)?
            .set_default("goals.fiber", defaults.fiber)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (NUTRITION__ prefix)
            .add_source(
                Environment::with_prefix("NUTRITION")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Check values the type system cannot
    pub fn validate(&self) -> ClientResult<()> {
        self.api.validate()?;
        validate_search_limit(self.search.default_limit)
            .map_err(|e| ClientError::Configuration(e.to_string()))?;
        validate_goals(&self.goals).map_err(|e| ClientError::Configuration(e.to_string()))?;
        Ok(())
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> ClientResult<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ClientError::Configuration(format!(
                "api.base_url must be an http(s) URL, got '{}'",
                self.base_url
            )));
        }
        if self.timeout_secs == 0 {
            return Err(ClientError::Configuration(
                "api.timeout_secs must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout_secs: 10,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { default_limit: 10 }
    }
}
