//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for business logic.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};

use super::dto::{
    ActiveYears, ActivityData, ActivityQuery, ApiResponse, HealthResponse,
    RecordSubmissionRequest, SubmissionRecord, YearsQuery,
};
use super::error::AppError;
use super::state::AppState;
use crate::api::{ProblemId, SubmissionStatus, UserId};
use crate::db::services as db_services;
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<ApiResponse<T>>, AppError>;

const MIN_YEAR: i32 = 1;
const MAX_YEAR: i32 = 9999;

fn parse_user_id(raw: Option<&str>) -> Result<UserId, AppError> {
    UserId::parse(raw).map_err(|e| AppError::BadRequest(e.to_string()))
}

fn query_params<T>(query: Result<Query<T>, QueryRejection>) -> Result<T, AppError> {
    query
        .map(|Query(params)| params)
        .map_err(|e| AppError::BadRequest(e.body_text()))
}

fn parse_year(raw: Option<&str>) -> Result<Option<i32>, AppError> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    let invalid = || {
        AppError::BadRequest(format!(
            "year must be an integer between {} and {}, got '{}'",
            MIN_YEAR, MAX_YEAR, raw
        ))
    };
    let year: i32 = raw.trim().parse().map_err(|_| invalid())?;
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(invalid());
    }
    Ok(Some(year))
}

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and database is accessible.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let report = db_services::health_check_detailed(state.repository.as_ref()).await;
    let db_status = match (report.healthy, report.error) {
        (true, _) => "connected".to_string(),
        (false, None) => "disconnected".to_string(),
        (false, Some(e)) => format!("error: {}", e),
    };

    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: db_status,
        latency_ms: report.latency_ms,
        pool: report.pool,
    })
}

// =============================================================================
// Activity
// =============================================================================

/// GET /v1/activity?userId=&year=
///
/// Streaks, heatmap and active days for one user.
pub async fn get_activity(
    State(state): State<AppState>,
    query: Result<Query<ActivityQuery>, QueryRejection>,
) -> HandlerResult<ActivityData> {
    let query = query_params(query)?;
    let user_id = parse_user_id(query.user_id.as_deref())?;
    let year = parse_year(query.year.as_deref())?;

    let data = services::get_user_activity(
        state.repository.as_ref(),
        &user_id,
        year,
        state.clock.now(),
        &state.day_boundary,
    )
    .await
    .map_err(|e| AppError::repository("Failed to fetch activity data", e))?;

    tracing::debug!(
        user = %user_id,
        year = data.year,
        current_streak = data.current_streak,
        "activity summary served"
    );
    Ok(Json(ApiResponse::ok(data)))
}

/// GET /v1/activity/years?userId=
///
/// Local calendar years containing at least one accepted submission.
pub async fn get_active_years(
    State(state): State<AppState>,
    query: Result<Query<YearsQuery>, QueryRejection>,
) -> HandlerResult<ActiveYears> {
    let query = query_params(query)?;
    let user_id = parse_user_id(query.user_id.as_deref())?;

    let years = services::get_active_years(state.repository.as_ref(), &user_id, &state.day_boundary)
        .await
        .map_err(|e| AppError::repository("Failed to fetch active years", e))?;

    Ok(Json(ApiResponse::ok(years)))
}

// =============================================================================
// Submissions
// =============================================================================

/// POST /v1/users/{user_id}/submissions
///
/// Append a judged submission to the log.
pub async fn record_submission(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    body: Result<Json<RecordSubmissionRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<SubmissionRecord>>), AppError> {
    let user_id = parse_user_id(Some(&user_id))?;
    let Json(request) =
        body.map_err(|e| AppError::BadRequest(format!("Invalid request body: {}", e.body_text())))?;
    let status: SubmissionStatus = request.status.parse().map_err(AppError::BadRequest)?;

    let record = SubmissionRecord {
        user_id,
        problem_id: ProblemId::new(request.problem_id),
        created_at: request.created_at.unwrap_or_else(|| state.clock.now()),
        status,
    };

    let stored = db_services::record_submission(state.repository.as_ref(), record)
        .await
        .map_err(|e| AppError::repository("Failed to record submission", e))?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(stored))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_year_accepts_range() {
        assert_eq!(parse_year(None).unwrap(), None);
        assert_eq!(parse_year(Some("2024")).unwrap(), Some(2024));
        assert_eq!(parse_year(Some(" 1 ")).unwrap(), Some(1));
        assert_eq!(parse_year(Some("9999")).unwrap(), Some(9999));
    }

    #[test]
    fn test_parse_year_rejects_garbage() {
        for raw in ["", "abc", "0", "10000", "-5", "20.5"] {
            assert!(
                matches!(parse_year(Some(raw)), Err(AppError::BadRequest(_))),
                "{raw} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_user_id_requires_value() {
        assert!(matches!(parse_user_id(None), Err(AppError::BadRequest(_))));
        assert!(matches!(parse_user_id(Some("  ")), Err(AppError::BadRequest(_))));
        assert_eq!(parse_user_id(Some("ana")).unwrap().as_str(), "ana");
    }
}
