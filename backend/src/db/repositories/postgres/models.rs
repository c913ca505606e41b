use chrono::{DateTime, Utc};
use diesel::prelude::*;

use super::schema::submissions;
use crate::api::{ProblemId, SubmissionRecord, SubmissionStatus, UserId};
use crate::db::repository::{ErrorContext, RepositoryError, RepositoryResult};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = submissions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[allow(dead_code)] // id is only used as the primary key
pub struct SubmissionRow {
    pub id: i64,
    pub user_id: String,
    pub problem_id: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = submissions)]
pub struct NewSubmissionRow {
    pub user_id: String,
    pub problem_id: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<&SubmissionRecord> for NewSubmissionRow {
    fn from(record: &SubmissionRecord) -> Self {
        Self {
            user_id: record.user_id.as_str().to_string(),
            problem_id: record.problem_id.as_str().to_string(),
            status: record.status.as_str().to_string(),
            created_at: record.created_at,
        }
    }
}

impl TryFrom<SubmissionRow> for SubmissionRecord {
    type Error = RepositoryError;

    fn try_from(row: SubmissionRow) -> RepositoryResult<Self> {
        let context = || {
            ErrorContext::new("decode_submission")
                .with_entity("submission")
                .with_entity_id(row.id)
        };
        let user_id: UserId = row
            .user_id
            .parse()
            .map_err(|e| RepositoryError::validation_with_context(format!("{e}"), context()))?;
        let status: SubmissionStatus = row
            .status
            .parse()
            .map_err(|e: String| RepositoryError::validation_with_context(e, context()))?;

        Ok(SubmissionRecord {
            user_id,
            problem_id: ProblemId::new(row.problem_id),
            status,
            created_at: row.created_at,
        })
    }
}
