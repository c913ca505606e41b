//! Activity summary: streaks, heatmap and active days for one user.
//!
//! The pure part ([`summarize_activity`]) works on records already in memory;
//! [`get_user_activity`] adds the single repository fetch in front of it.

use std::collections::BTreeSet;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use log::debug;

use crate::api::{ActiveYears, ActivityData, SubmissionRecord, UserId};
use crate::db::repository::{FullRepository, RepositoryResult};
use crate::models::DayBoundary;

use super::bucketing::{active_days, bucket_by_local_day};
use super::heatmap::{build_heatmap, HeatmapMode};
use super::streaks::compute_streaks;

/// Summarize a user's submission history as seen at `now`.
///
/// `requested_year` only affects the heatmap shape and the echoed `year`;
/// streaks and active days always cover the whole history.
pub fn summarize_activity(
    records: &[SubmissionRecord],
    requested_year: Option<i32>,
    now: DateTime<Utc>,
    boundary: &DayBoundary,
) -> ActivityData {
    let today = boundary.local_day(now);
    let current_year = today.year();

    let buckets = bucket_by_local_day(records, boundary);
    let active_days = active_days(&buckets);
    let dates: Vec<NaiveDate> = active_days.iter().map(|d| d.date).collect();
    let streaks = compute_streaks(&dates, today);

    let mode = HeatmapMode::for_request(requested_year, current_year);
    let heatmap_data = build_heatmap(&active_days, mode);

    ActivityData {
        current_streak: streaks.current_streak,
        longest_streak: streaks.longest_streak,
        total_active_days: streaks.total_active_days,
        heatmap_data,
        active_days,
        year: requested_year.unwrap_or(current_year),
    }
}

/// Local years containing accepted activity, most recent first.
pub fn active_years(records: &[SubmissionRecord], boundary: &DayBoundary) -> Vec<i32> {
    let years: BTreeSet<i32> = records
        .iter()
        .filter(|r| r.status.is_accepted())
        .map(|r| boundary.local_year(r.created_at))
        .collect();
    years.into_iter().rev().collect()
}

/// Fetch a user's accepted submissions and summarize them.
pub async fn get_user_activity<R: FullRepository + ?Sized>(
    repo: &R,
    user_id: &UserId,
    requested_year: Option<i32>,
    now: DateTime<Utc>,
    boundary: &DayBoundary,
) -> RepositoryResult<ActivityData> {
    let records = repo.fetch_accepted_submissions(user_id).await?;
    debug!(
        "Summarizing {} accepted submissions for user {}",
        records.len(),
        user_id
    );
    Ok(summarize_activity(&records, requested_year, now, boundary))
}

/// Fetch a user's accepted submissions and list the years they cover.
pub async fn get_active_years<R: FullRepository + ?Sized>(
    repo: &R,
    user_id: &UserId,
    boundary: &DayBoundary,
) -> RepositoryResult<ActiveYears> {
    let records = repo.fetch_accepted_submissions(user_id).await?;
    Ok(ActiveYears {
        user_id: user_id.clone(),
        years: active_years(&records, boundary),
    })
}
