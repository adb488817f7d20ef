//! Nutrition backend API client
//!
//! One method per backend endpoint. The client holds only an HTTP connection
//! pool and the base URL, both fixed at construction.

use std::time::Duration;

use chrono::NaiveDate;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use shared::{
    DailyNutrition, FoodEntriesResponse, FoodEntry, FoodEntryCreate, FoodItem,
    FoodSearchResponse, MessageResponse,
};
use tracing::{debug, warn};

use crate::config::ApiConfig;
use crate::error::{ApiOperation, ClientError, ClientResult, RequestFailure};

/// Nutrition backend client
#[derive(Debug, Clone)]
pub struct NutritionApiClient {
    client: Client,
    base_url: String,
}

impl NutritionApiClient {
    /// Create a new client from the API configuration
    pub fn new(config: &ApiConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ClientError::Configuration(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a new client with default settings for `base_url` (for testing)
    pub fn with_base_url(base_url: impl Into<String>) -> ClientResult<Self> {
        Self::new(&ApiConfig::new(base_url))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /api/foods/search?q={query}&limit={limit}`
    pub async fn search_foods(&self, query: &str, limit: usize) -> ClientResult<Vec<FoodItem>> {
        let request = self
            .client
            .get(self.url("/api/foods/search"))
            .query(&[("q", query.to_string()), ("limit", limit.to_string())]);

        let response: FoodSearchResponse = self.send(ApiOperation::SearchFoods, request).await?;
        Ok(response.foods)
    }

    /// `GET /api/foods/{id}`
    pub async fn get_food(&self, food_id: i64) -> ClientResult<FoodItem> {
        let request = self.client.get(self.url(&format!("/api/foods/{}", food_id)));
        self.send(ApiOperation::GetFood, request).await
    }

    /// `POST /api/food-entries`
    pub async fn create_entry(&self, entry: &FoodEntryCreate) -> ClientResult<FoodEntry> {
        let request = self.client.post(self.url("/api/food-entries")).json(entry);
        self.send(ApiOperation::CreateEntry, request).await
    }

    /// `GET /api/food-entries?date={date}`
    pub async fn list_entries(&self, date: NaiveDate) -> ClientResult<Vec<FoodEntry>> {
        let request = self
            .client
            .get(self.url("/api/food-entries"))
            .query(&[("date", date.to_string())]);

        let response: FoodEntriesResponse = self.send(ApiOperation::ListEntries, request).await?;
        Ok(response.entries)
    }

    /// `DELETE /api/food-entries/{id}`
    pub async fn delete_entry(&self, entry_id: i64) -> ClientResult<MessageResponse> {
        let request = self
            .client
            .delete(self.url(&format!("/api/food-entries/{}", entry_id)));
        self.send(ApiOperation::DeleteEntry, request).await
    }

    /// `GET /api/nutrition/daily?date={date}`
    pub async fn daily_nutrition(&self, date: NaiveDate) -> ClientResult<DailyNutrition> {
        let request = self
            .client
            .get(self.url("/api/nutrition/daily"))
            .query(&[("date", date.to_string())]);
        self.send(ApiOperation::DailyNutrition, request).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        operation: ApiOperation,
        request: RequestBuilder,
    ) -> ClientResult<T> {
        debug!(%operation, "sending backend request");

        let response = request
            .send()
            .await
            .map_err(|e| request_failed(operation, RequestFailure::Transport(e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(request_failed(
                operation,
                RequestFailure::Status { status, body },
            ));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| request_failed(operation, RequestFailure::Decode(e)))
    }
}

/// Log a failed request once and wrap it
fn request_failed(operation: ApiOperation, reason: RequestFailure) -> ClientError {
    warn!(%operation, error = %reason, "backend request failed");
    ClientError::RequestFailed { operation, reason }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let client = NutritionApiClient::with_base_url("http://localhost:8000/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(
            client.url("/api/foods/3"),
            "http://localhost:8000/api/foods/3"
        );
    }
}
