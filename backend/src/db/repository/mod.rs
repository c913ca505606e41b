//! Repository trait definitions for database operations.
//!
//! # Module Organization
//!
//! - [`error`]: Error types for repository operations
//! - [`submissions`]: Write side of the submission log
//! - [`activity`]: Read side used by the activity summary
//!
//! # Convenience Trait Bound
//!
//! For functions that need all repository capabilities, use the [`FullRepository`] trait bound:
//!
//! ```ignore
//! async fn my_service<R: FullRepository + ?Sized>(repo: &R, user: &UserId) -> RepositoryResult<()> {
//!     repo.record_submission(record).await?;
//!     let history = repo.fetch_accepted_submissions(user).await?;
//!     Ok(())
//! }
//! ```

pub mod activity;
pub mod error;
pub mod submissions;

// Re-export error types
pub use error::{ErrorContext, RepositoryError, RepositoryResult};

// Re-export all traits
pub use activity::ActivityRepository;
pub use submissions::{PoolStats, SubmissionRepository};

/// Composite trait bound for a complete repository implementation.
pub trait FullRepository: SubmissionRepository + ActivityRepository {}

// Blanket implementation: any type implementing both traits automatically implements FullRepository
impl<T> FullRepository for T where T: SubmissionRepository + ActivityRepository {}
