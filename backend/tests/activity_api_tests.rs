//! End-to-end tests of the HTTP API against the in-memory repository.

#![cfg(feature = "http-server")]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use chrono::{DateTime, Duration, TimeZone, Utc};
use serde_json::{json, Value};
use tower::ServiceExt;

use activity_streaks::api::{ProblemId, SubmissionRecord, SubmissionStatus, UserId};
use activity_streaks::db::{FullRepository, LocalRepository};
use activity_streaks::http::{create_router, AppState};
use activity_streaks::models::FixedClock;

/// 2024-06-15 12:00 at +05:30.
fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 6, 30, 0).unwrap()
}

fn app(repo: &LocalRepository) -> Router {
    let shared = Arc::new(repo.clone()) as Arc<dyn FullRepository>;
    create_router(AppState::new(shared).with_clock(Arc::new(FixedClock(now()))))
}

fn accepted(user: &str, problem: &str, at: DateTime<Utc>) -> SubmissionRecord {
    SubmissionRecord::accepted(
        user.parse::<UserId>().unwrap(),
        ProblemId::new(problem),
        at,
    )
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

#[tokio::test]
async fn test_health_reports_repository_state() {
    let repo = LocalRepository::new();
    let (status, body) = get(app(&repo), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "connected");
    assert!(body["latencyMs"].is_u64());
    assert!(body.get("pool").is_none());

    repo.set_healthy(false);
    let (_, body) = get(app(&repo), "/health").await;
    assert_eq!(body["database"], "disconnected");
}

#[tokio::test]
async fn test_activity_requires_user_id() {
    let repo = LocalRepository::new();
    for uri in ["/v1/activity", "/v1/activity?userId=", "/v1/activity?userId=%20%20"] {
        let (status, body) = get(app(&repo), uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body["success"], false);
        assert_eq!(body["code"], "BAD_REQUEST");
    }
}

#[tokio::test]
async fn test_malformed_query_uses_error_envelope() {
    let repo = LocalRepository::new();
    for uri in [
        "/v1/activity?userId=a&userId=b",
        "/v1/activity?userId=ana&year=2023&year=2024",
        "/v1/activity/years?userId=a&userId=b",
    ] {
        let (status, body) = get(app(&repo), uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body["success"], false, "{uri}");
        assert_eq!(body["code"], "BAD_REQUEST", "{uri}");
        assert!(
            body["error"].as_str().is_some_and(|e| e.contains("duplicate field")),
            "{uri}: {body}"
        );
    }
}

#[tokio::test]
async fn test_activity_rejects_invalid_year() {
    let repo = LocalRepository::new();
    for year in ["abc", "0", "10000", "2024.5"] {
        let uri = format!("/v1/activity?userId=ana&year={year}");
        let (status, body) = get(app(&repo), &uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{year}");
        assert_eq!(body["success"], false);
    }
}

#[tokio::test]
async fn test_missing_user_fails_before_storage() {
    let repo = LocalRepository::new();
    repo.set_healthy(false);
    let (status, _) = get(app(&repo), "/v1/activity").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_activity_fetch_failure_is_server_error() {
    let repo = LocalRepository::new();
    repo.set_healthy(false);

    let (status, body) = get(app(&repo), "/v1/activity?userId=ana").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    assert_eq!(body["code"], "REPOSITORY_ERROR");
    assert_eq!(body["message"], "Failed to fetch activity data");
    assert_eq!(body["error"], "Database is not healthy");
    assert!(body.get("data").is_none());
}

#[tokio::test]
async fn test_activity_for_unknown_user_is_empty() {
    let repo = LocalRepository::new();
    let (status, body) = get(app(&repo), "/v1/activity?userId=ghost").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(
        body["data"],
        json!({
            "currentStreak": 0,
            "longestStreak": 0,
            "totalActiveDays": 0,
            "heatmapData": {},
            "activeDays": [],
            "year": 2024
        })
    );
}

#[tokio::test]
async fn test_activity_three_day_streak() {
    let repo = LocalRepository::new();
    repo.seed(vec![
        accepted("ana", "a", now()),
        accepted("ana", "b", now() - Duration::days(1)),
        accepted("ana", "c", now() - Duration::days(2)),
        accepted("ana", "c", now() - Duration::days(2) + Duration::minutes(3)),
    ]);

    let (status, body) = get(app(&repo), "/v1/activity?userId=ana").await;
    assert_eq!(status, StatusCode::OK);
    let data = &body["data"];
    assert_eq!(data["currentStreak"], 3);
    assert_eq!(data["longestStreak"], 3);
    assert_eq!(data["totalActiveDays"], 3);
    assert_eq!(data["heatmapData"]["2024-06-13"], 1);
    assert_eq!(
        data["activeDays"],
        json!([
            { "date": "2024-06-13", "count": 1 },
            { "date": "2024-06-14", "count": 1 },
            { "date": "2024-06-15", "count": 1 }
        ])
    );
}

#[tokio::test]
async fn test_activity_past_year_is_zero_filled() {
    let repo = LocalRepository::new();
    // 2023-03-10 09:00 at +05:30
    repo.seed(vec![accepted(
        "ana",
        "a",
        Utc.with_ymd_and_hms(2023, 3, 10, 3, 30, 0).unwrap(),
    )]);

    let (status, body) = get(app(&repo), "/v1/activity?userId=ana&year=2023").await;
    assert_eq!(status, StatusCode::OK);
    let heatmap = body["data"]["heatmapData"].as_object().unwrap();
    assert_eq!(heatmap.len(), 365);
    assert_eq!(heatmap["2023-03-10"], 1);
    assert_eq!(heatmap.values().filter(|v| *v != 0).count(), 1);
    assert_eq!(body["data"]["year"], 2023);
    assert_eq!(body["data"]["currentStreak"], 0);
    assert_eq!(body["data"]["longestStreak"], 1);
}

#[tokio::test]
async fn test_activity_current_year_is_sparse() {
    let repo = LocalRepository::new();
    repo.seed(vec![accepted("ana", "a", now())]);

    let (_, body) = get(app(&repo), "/v1/activity?userId=ana&year=2024").await;
    assert_eq!(body["data"]["heatmapData"], json!({ "2024-06-15": 1 }));
}

#[tokio::test]
async fn test_active_years_descending() {
    let repo = LocalRepository::new();
    repo.seed(vec![
        accepted("ana", "a", now()),
        accepted("ana", "b", Utc.with_ymd_and_hms(2022, 5, 1, 12, 0, 0).unwrap()),
        // 2022-12-31 19:00 UTC is already 2023-01-01 at +05:30
        accepted("ana", "c", Utc.with_ymd_and_hms(2022, 12, 31, 19, 0, 0).unwrap()),
    ]);

    let (status, body) = get(app(&repo), "/v1/activity/years?userId=ana").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["userId"], "ana");
    assert_eq!(body["data"]["years"], json!([2024, 2023, 2022]));

    let (status, _) = get(app(&repo), "/v1/activity/years").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_record_then_read_round_trip() {
    let repo = LocalRepository::new();

    let (status, body) = post_json(
        app(&repo),
        "/v1/users/ana/submissions",
        json!({ "problemId": "two-sum", "status": "accepted" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["problemId"], "two-sum");
    assert_eq!(body["data"]["status"], "accepted");

    let (status, _) = post_json(
        app(&repo),
        "/v1/users/ana/submissions",
        json!({ "problemId": "graph", "status": "wrong_answer" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(repo.submission_count(), 2);

    let (_, body) = get(app(&repo), "/v1/activity?userId=ana").await;
    assert_eq!(body["data"]["currentStreak"], 1);
    assert_eq!(body["data"]["heatmapData"], json!({ "2024-06-15": 1 }));
}

#[tokio::test]
async fn test_record_with_explicit_timestamp() {
    let repo = LocalRepository::new();
    let (status, _) = post_json(
        app(&repo),
        "/v1/users/ana/submissions",
        json!({
            "problemId": "dp",
            "status": "ACCEPTED",
            "createdAt": "2024-06-14T10:00:00Z"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, body) = get(app(&repo), "/v1/activity?userId=ana").await;
    assert_eq!(body["data"]["activeDays"], json!([{ "date": "2024-06-14", "count": 1 }]));
    assert_eq!(body["data"]["currentStreak"], 1);
}

#[tokio::test]
async fn test_record_rejects_bad_input() {
    let repo = LocalRepository::new();

    let (status, body) = post_json(
        app(&repo),
        "/v1/users/ana/submissions",
        json!({ "problemId": "dp", "status": "exploded" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");

    let (status, body) = post_json(
        app(&repo),
        "/v1/users/ana/submissions",
        json!({ "status": "accepted" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);

    let (status, _) = post_json(
        app(&repo),
        "/v1/users/ana/submissions",
        json!({ "problemId": "   ", "status": "accepted" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert_eq!(repo.submission_count(), 0);
}

#[tokio::test]
async fn test_record_fails_when_repository_down() {
    let repo = LocalRepository::new();
    repo.set_healthy(false);

    let (status, body) = post_json(
        app(&repo),
        "/v1/users/ana/submissions",
        json!({ "problemId": "dp", "status": "accepted" }),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Failed to record submission");
}

#[test]
fn test_status_names_match_wire_format() {
    assert_eq!(
        serde_json::to_value(SubmissionStatus::TimeLimitExceeded).unwrap(),
        "time_limit_exceeded"
    );
}
