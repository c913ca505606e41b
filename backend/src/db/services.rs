//! High-level database service layer.
//!
//! Repository-agnostic operations that apply the same checks whatever the
//! storage backend is. Handlers call these instead of the traits directly.
//!
//! # Usage
//!
//! ```no_run
//! use activity_streaks::db::{services, repositories::LocalRepository};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let repo = LocalRepository::new();
//!     let healthy = services::health_check(&repo).await?;
//!     println!("repository healthy: {}", healthy);
//!     Ok(())
//! }
//! ```

use log::{debug, info, warn};
use std::time::Instant;

use super::repository::{
    ErrorContext, FullRepository, PoolStats, RepositoryError, RepositoryResult,
};
use crate::api::{SubmissionRecord, UserId};

/// Longest problem identifier accepted on the write path.
pub const MAX_PROBLEM_ID_LEN: usize = 128;

// ==================== Health & Connection ====================

/// Check if the database connection is healthy.
///
/// This is a simple pass-through to the repository's health check.
pub async fn health_check<R: FullRepository + ?Sized>(repo: &R) -> RepositoryResult<bool> {
    repo.health_check().await
}

/// Outcome of a timed health check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthReport {
    pub healthy: bool,
    pub latency_ms: u64,
    pub error: Option<String>,
    /// Present only for pooled backends
    pub pool: Option<PoolStats>,
}

/// Run the repository health check, timing it and collecting pool statistics.
///
/// Never fails: a repository error is reported as unhealthy with its message.
pub async fn health_check_detailed<R: FullRepository + ?Sized>(repo: &R) -> HealthReport {
    let start = Instant::now();
    let result = repo.health_check().await;
    let latency_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

    let (healthy, error) = match result {
        Ok(true) => (true, None),
        Ok(false) => (false, None),
        Err(e) => {
            warn!("Health check failed: {}", e);
            (false, Some(e.to_string()))
        }
    };

    HealthReport {
        healthy,
        latency_ms,
        error,
        pool: repo.pool_stats(),
    }
}

// ==================== Submission Log ====================

/// Store a judged submission after validating it.
///
/// The problem identifier is trimmed and must be non-empty and at most
/// [`MAX_PROBLEM_ID_LEN`] characters.
///
/// # Returns
/// * `Ok(SubmissionRecord)` - The stored record
/// * `Err(RepositoryError::ValidationError)` - If the record is malformed
/// * `Err` - If storage fails
pub async fn record_submission<R: FullRepository + ?Sized>(
    repo: &R,
    mut record: SubmissionRecord,
) -> RepositoryResult<SubmissionRecord> {
    let problem = record.problem_id.as_str().trim();
    if problem.is_empty() || problem.chars().count() > MAX_PROBLEM_ID_LEN {
        return Err(RepositoryError::validation_with_context(
            format!(
                "problem id must be between 1 and {} characters",
                MAX_PROBLEM_ID_LEN
            ),
            ErrorContext::new("record_submission")
                .with_entity("submission")
                .with_entity_id(&record.user_id),
        ));
    }
    record.problem_id = crate::api::ProblemId::new(problem);

    let stored = repo.record_submission(record).await.map_err(|e| {
        warn!("Failed to record submission: {}", e);
        e
    })?;
    info!(
        "Recorded {} submission of {} for user {}",
        stored.status, stored.problem_id, stored.user_id
    );
    Ok(stored)
}

/// Count all stored submissions of a user, whatever their status.
pub async fn count_submissions<R: FullRepository + ?Sized>(
    repo: &R,
    user_id: &UserId,
) -> RepositoryResult<usize> {
    let count = repo.count_submissions(user_id).await?;
    debug!("User {} has {} stored submissions", user_id, count);
    Ok(count)
}
