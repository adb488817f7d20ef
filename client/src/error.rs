//! Error handling for the Nutrition Tracker client
//!
//! Transport failures and non-success responses collapse into a single
//! `RequestFailed` error that names the backend operation involved.

use reqwest::StatusCode;
use serde::Serialize;
use thiserror::Error;

/// Backend operations the client performs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiOperation {
    SearchFoods,
    GetFood,
    CreateEntry,
    ListEntries,
    DeleteEntry,
    DailyNutrition,
}

impl ApiOperation {
    pub fn name(&self) -> &'static str {
        match self {
            ApiOperation::SearchFoods => "search_foods",
            ApiOperation::GetFood => "get_food",
            ApiOperation::CreateEntry => "create_entry",
            ApiOperation::ListEntries => "list_entries",
            ApiOperation::DeleteEntry => "delete_entry",
            ApiOperation::DailyNutrition => "daily_nutrition",
        }
    }
}

impl std::fmt::Display for ApiOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Why a backend request failed
#[derive(Error, Debug)]
pub enum RequestFailure {
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("invalid response body: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Client error types
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Request failed ({operation}): {reason}")]
    RequestFailed {
        operation: ApiOperation,
        #[source]
        reason: RequestFailure,
    },

    #[error("Validation error: {0}")]
    Validation(&'static str),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ClientError {
    /// Operation that failed, for request errors
    pub fn operation(&self) -> Option<ApiOperation> {
        match self {
            ClientError::RequestFailed { operation, .. } => Some(*operation),
            ClientError::Validation(_) | ClientError::Configuration(_) => None,
        }
    }

    /// HTTP status, when the backend answered with one
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::RequestFailed {
                reason: RequestFailure::Status { status, .. },
                ..
            } => Some(*status),
            _ => None,
        }
    }
}

impl From<config::ConfigError> for ClientError {
    fn from(err: config::ConfigError) -> Self {
        ClientError::Configuration(err.to_string())
    }
}

/// Result type alias for client operations
pub type ClientResult<T> = Result<T, ClientError>;
