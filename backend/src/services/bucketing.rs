//! Grouping of accepted submissions into local calendar days.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;

use crate::api::{ActiveDay, ProblemId, SubmissionRecord};
use crate::models::DayBoundary;

/// Distinct problems solved per local day.
pub type DayBuckets = BTreeMap<NaiveDate, BTreeSet<ProblemId>>;

/// Group accepted submissions by the local day they fall on.
///
/// Each problem is counted once per day no matter how many times it was
/// accepted. Records with any other status are ignored.
pub fn bucket_by_local_day(records: &[SubmissionRecord], boundary: &DayBoundary) -> DayBuckets {
    let mut buckets = DayBuckets::new();
    for record in records.iter().filter(|r| r.status.is_accepted()) {
        buckets
            .entry(boundary.local_day(record.created_at))
            .or_default()
            .insert(record.problem_id.clone());
    }
    buckets
}

/// Flatten buckets into active days, ascending by date.
pub fn active_days(buckets: &DayBuckets) -> Vec<ActiveDay> {
    buckets
        .iter()
        .filter(|(_, problems)| !problems.is_empty())
        .map(|(date, problems)| ActiveDay {
            date: *date,
            count: problems.len() as u32,
        })
        .collect()
}
