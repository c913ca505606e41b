//! Data Transfer Objects for the HTTP API.
//!
//! Query parameters arrive as raw strings so that parse failures are reported
//! through the JSON error envelope instead of axum's plain-text rejection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use crate::api::{ActiveYears, ActivityData, SubmissionRecord};
pub use crate::db::PoolStats;

/// Success envelope wrapping every non-error payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Query parameters for `GET /v1/activity`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityQuery {
    #[serde(default)]
    pub user_id: Option<String>,
    /// Calendar year in `1..=9999`; defaults to the current local year
    #[serde(default)]
    pub year: Option<String>,
}

/// Query parameters for `GET /v1/activity/years`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearsQuery {
    #[serde(default)]
    pub user_id: Option<String>,
}

/// Request body for `POST /v1/users/{userId}/submissions`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordSubmissionRequest {
    pub problem_id: String,
    pub status: String,
    /// Defaults to the time the request is handled
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the crate serving the API
    pub version: String,
    /// Database connection status
    pub database: String,
    /// Round trip of the database health query
    pub latency_ms: u64,
    /// Connection pool statistics, omitted for unpooled backends
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pool: Option<PoolStats>,
}
