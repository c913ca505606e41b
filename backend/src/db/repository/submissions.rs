//! Submission repository trait for the write side of the submission log.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::error::RepositoryResult;
use crate::api::{SubmissionRecord, UserId};

/// Connection pool statistics reported by pooled backends.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolStats {
    /// Number of connections currently in use
    pub connections_in_use: u32,
    /// Number of idle connections
    pub idle_connections: u32,
    /// Total number of connections in the pool
    pub total_connections: u32,
    /// Maximum pool size
    pub max_size: u32,
    /// Total successful queries executed
    pub total_queries: u64,
    /// Total failed queries
    pub failed_queries: u64,
    /// Total retried operations
    pub retried_operations: u64,
}

/// Repository trait for storing judged submissions.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait SubmissionRepository: Send + Sync {
    /// Check that the backing store is reachable.
    ///
    /// # Returns
    /// * `Ok(true)` - The store answered
    /// * `Err(RepositoryError)` - If the check could not be performed
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// Append a judged submission to the log.
    ///
    /// # Arguments
    /// * `record` - Submission to store; any status is accepted
    ///
    /// # Returns
    /// * `Ok(SubmissionRecord)` - The stored record
    /// * `Err(RepositoryError)` - If the operation fails
    async fn record_submission(&self, record: SubmissionRecord)
        -> RepositoryResult<SubmissionRecord>;

    /// Count every stored submission of a user, whatever its status.
    async fn count_submissions(&self, user_id: &UserId) -> RepositoryResult<usize>;

    /// Connection pool statistics, for backends that pool connections.
    fn pool_stats(&self) -> Option<PoolStats> {
        None
    }
}
