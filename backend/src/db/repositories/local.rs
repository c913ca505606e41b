//! In-memory local repository implementation.
//!
//! This module provides a local implementation of all repository traits
//! suitable for unit testing and local development. Submissions are kept in
//! a per-user `HashMap` of `Vec`s, giving fast, deterministic and isolated
//! execution.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::api::{SubmissionRecord, UserId};
use crate::db::repository::*;

/// In-memory local repository.
///
/// # Example
/// ```
/// use activity_streaks::api::{ProblemId, SubmissionRecord, UserId};
/// use activity_streaks::db::repositories::LocalRepository;
///
/// let repo = LocalRepository::new();
/// let user: UserId = "ana".parse().unwrap();
/// repo.seed(vec![SubmissionRecord::accepted(user, ProblemId::new("two-sum"), chrono::Utc::now())]);
/// assert_eq!(repo.submission_count(), 1);
/// ```
#[derive(Clone)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    submissions: HashMap<UserId, Vec<SubmissionRecord>>,

    // Connection health
    is_healthy: bool,
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            submissions: HashMap::new(),
            is_healthy: true,
        }
    }
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData::default())),
        }
    }

    // A panicking writer cannot leave the maps half-updated, so a poisoned
    // lock still guards consistent data.
    fn read(&self) -> RwLockReadGuard<'_, LocalData> {
        self.data.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, LocalData> {
        self.data.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Pre-populate the repository with submissions of any status.
    pub fn seed(&self, records: impl IntoIterator<Item = SubmissionRecord>) {
        let mut data = self.write();
        for record in records {
            data.submissions
                .entry(record.user_id.clone())
                .or_default()
                .push(record);
        }
    }

    /// Set the health status (for testing error handling).
    pub fn set_healthy(&self, healthy: bool) {
        self.write().is_healthy = healthy;
    }

    /// Clear all data (for test cleanup).
    pub fn clear(&self) {
        let mut data = self.write();
        *data = LocalData {
            is_healthy: data.is_healthy,
            ..Default::default()
        };
    }

    /// Get the number of stored submissions across all users (for testing).
    pub fn submission_count(&self) -> usize {
        self.read().submissions.values().map(Vec::len).sum()
    }

    /// Helper to check health and return error if unhealthy.
    fn check_health(&self, operation: &str) -> RepositoryResult<()> {
        if !self.read().is_healthy {
            return Err(RepositoryError::connection_with_context(
                "Database is not healthy",
                ErrorContext::new(operation),
            ));
        }
        Ok(())
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SubmissionRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(self.read().is_healthy)
    }

    async fn record_submission(
        &self,
        record: SubmissionRecord,
    ) -> RepositoryResult<SubmissionRecord> {
        self.check_health("record_submission")?;
        self.write()
            .submissions
            .entry(record.user_id.clone())
            .or_default()
            .push(record.clone());
        Ok(record)
    }

    async fn count_submissions(&self, user_id: &UserId) -> RepositoryResult<usize> {
        self.check_health("count_submissions")?;
        Ok(self.read().submissions.get(user_id).map_or(0, Vec::len))
    }
}

#[async_trait]
impl ActivityRepository for LocalRepository {
    async fn fetch_accepted_submissions(
        &self,
        user_id: &UserId,
    ) -> RepositoryResult<Vec<SubmissionRecord>> {
        self.check_health("fetch_accepted_submissions")?;
        let data = self.read();
        Ok(data
            .submissions
            .get(user_id)
            .map(|records| {
                records
                    .iter()
                    .filter(|r| r.status.is_accepted())
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }
}
