//! Activity repository trait: the read side feeding streak computation.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::api::{SubmissionRecord, UserId};

/// Repository trait for reading a user's submission history.
///
/// This is the only data dependency of the activity summary; everything
/// after the fetch happens in memory.
#[async_trait]
pub trait ActivityRepository: Send + Sync {
    /// Fetch every accepted submission of a user.
    ///
    /// # Arguments
    /// * `user_id` - The user whose history is read
    ///
    /// # Returns
    /// * `Ok(Vec<SubmissionRecord>)` - Accepted submissions in no particular order;
    ///   empty for unknown users
    /// * `Err(RepositoryError)` - If the fetch fails
    async fn fetch_accepted_submissions(
        &self,
        user_id: &UserId,
    ) -> RepositoryResult<Vec<SubmissionRecord>>;
}
