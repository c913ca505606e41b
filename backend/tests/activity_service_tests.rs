//! Service-level scenarios over the public library API.

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};

use activity_streaks::api::{ProblemId, SubmissionRecord, SubmissionStatus, UserId};
use activity_streaks::db::LocalRepository;
use activity_streaks::models::DayBoundary;
use activity_streaks::services::{get_active_years, get_user_activity};

fn user() -> UserId {
    "solver".parse().unwrap()
}

/// Noon local time (+05:30) on the given day.
fn local_noon(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 6, 30, 0).unwrap()
}

fn accepted(problem: &str, at: DateTime<Utc>) -> SubmissionRecord {
    SubmissionRecord::accepted(user(), ProblemId::new(problem), at)
}

#[tokio::test]
async fn test_gap_then_four_day_run_ending_today() {
    let repo = LocalRepository::new();
    let days = [1, 2, 3, 7, 8, 9, 10];
    repo.seed(
        days.iter()
            .map(|d| accepted(&format!("p{d}"), local_noon(2024, 4, *d))),
    );

    let data = get_user_activity(
        &repo,
        &user(),
        None,
        local_noon(2024, 4, 10),
        &DayBoundary::ist(),
    )
    .await
    .unwrap();

    assert_eq!(data.current_streak, 4);
    assert_eq!(data.longest_streak, 4);
    assert_eq!(data.total_active_days, 7);
    assert_eq!(data.heatmap_data.len(), 7);
}

#[tokio::test]
async fn test_stale_activity_keeps_longest() {
    let repo = LocalRepository::new();
    let last = local_noon(2024, 4, 10);
    repo.seed((0..5).map(|i| accepted("p", last - Duration::days(i))));

    let data = get_user_activity(
        &repo,
        &user(),
        None,
        last + Duration::days(3),
        &DayBoundary::ist(),
    )
    .await
    .unwrap();

    assert_eq!(data.current_streak, 0);
    assert_eq!(data.longest_streak, 5);
}

#[tokio::test]
async fn test_rejected_submissions_do_not_count() {
    let repo = LocalRepository::new();
    let now = local_noon(2024, 4, 10);
    let mut failed = accepted("hard", now);
    failed.status = SubmissionStatus::RuntimeError;
    repo.seed(vec![failed]);

    let data = get_user_activity(&repo, &user(), None, now, &DayBoundary::ist())
        .await
        .unwrap();
    assert_eq!(data.total_active_days, 0);
    assert!(data.active_days.is_empty());

    let years = get_active_years(&repo, &user(), &DayBoundary::ist())
        .await
        .unwrap();
    assert!(years.years.is_empty());
}

#[tokio::test]
async fn test_day_boundary_changes_bucketing() {
    let repo = LocalRepository::new();
    // 20:00 UTC: next day at +05:30, same day at UTC
    let late = Utc.with_ymd_and_hms(2024, 4, 9, 20, 0, 0).unwrap();
    repo.seed(vec![accepted("p", late)]);
    let now = local_noon(2024, 4, 10);

    let ist = get_user_activity(&repo, &user(), None, now, &DayBoundary::ist())
        .await
        .unwrap();
    assert_eq!(
        ist.active_days[0].date,
        NaiveDate::from_ymd_opt(2024, 4, 10).unwrap()
    );

    let utc = DayBoundary::from_offset_minutes(0).unwrap();
    let plain = get_user_activity(&repo, &user(), None, now, &utc)
        .await
        .unwrap();
    assert_eq!(
        plain.active_days[0].date,
        NaiveDate::from_ymd_opt(2024, 4, 9).unwrap()
    );
    assert_eq!(plain.current_streak, 1);
}

#[tokio::test]
async fn test_repeated_calls_are_identical() {
    let repo = LocalRepository::new();
    let now = local_noon(2024, 4, 10);
    repo.seed(vec![
        accepted("a", now),
        accepted("b", now - Duration::days(1)),
        accepted("a", now - Duration::days(30)),
    ]);

    let first = get_user_activity(&repo, &user(), Some(2023), now, &DayBoundary::ist())
        .await
        .unwrap();
    let second = get_user_activity(&repo, &user(), Some(2023), now, &DayBoundary::ist())
        .await
        .unwrap();
    assert_eq!(first, second);
    assert_eq!(first.heatmap_data.len(), 365);
}
