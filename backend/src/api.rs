//! Public API surface for the activity backend.
//!
//! This file consolidates the identifier newtypes, submission records and the
//! response DTOs returned by the HTTP API.
//! All types derive Serialize/Deserialize for JSON serialization.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Maximum accepted length of a user identifier.
pub const MAX_USER_ID_LEN: usize = 128;

/// User identifier.
///
/// Always non-empty, trimmed and free of whitespace or control characters.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

/// Reasons a raw user identifier is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserIdError {
    #[error("user id is required")]
    Missing,
    #[error("user id exceeds 128 characters")]
    TooLong,
    #[error("user id contains whitespace or control characters")]
    InvalidCharacters,
}

impl UserId {
    /// Validate a raw identifier coming from a request.
    pub fn parse(raw: Option<&str>) -> Result<Self, UserIdError> {
        let value = raw.map(str::trim).unwrap_or_default();
        if value.is_empty() {
            return Err(UserIdError::Missing);
        }
        if value.chars().count() > MAX_USER_ID_LEN {
            return Err(UserIdError::TooLong);
        }
        if value.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(UserIdError::InvalidCharacters);
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for UserId {
    type Err = UserIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(Some(s))
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Problem identifier (opaque, owned by the problem catalogue).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProblemId(pub String);

impl ProblemId {
    pub fn new(value: impl Into<String>) -> Self {
        ProblemId(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProblemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Verdict of the judge for a single submission.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    Accepted,
    WrongAnswer,
    TimeLimitExceeded,
    MemoryLimitExceeded,
    RuntimeError,
    CompilationError,
    Pending,
}

impl SubmissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Accepted => "accepted",
            Self::WrongAnswer => "wrong_answer",
            Self::TimeLimitExceeded => "time_limit_exceeded",
            Self::MemoryLimitExceeded => "memory_limit_exceeded",
            Self::RuntimeError => "runtime_error",
            Self::CompilationError => "compilation_error",
            Self::Pending => "pending",
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

impl FromStr for SubmissionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "accepted" => Ok(Self::Accepted),
            "wrong_answer" => Ok(Self::WrongAnswer),
            "time_limit_exceeded" => Ok(Self::TimeLimitExceeded),
            "memory_limit_exceeded" => Ok(Self::MemoryLimitExceeded),
            "runtime_error" => Ok(Self::RuntimeError),
            "compilation_error" => Ok(Self::CompilationError),
            "pending" => Ok(Self::Pending),
            _ => Err(format!("Unknown submission status: {}", s)),
        }
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A judged submission as stored by the submission pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord {
    pub user_id: UserId,
    pub problem_id: ProblemId,
    pub created_at: DateTime<Utc>,
    pub status: SubmissionStatus,
}

impl SubmissionRecord {
    pub fn accepted(user_id: UserId, problem_id: ProblemId, created_at: DateTime<Utc>) -> Self {
        Self {
            user_id,
            problem_id,
            created_at,
            status: SubmissionStatus::Accepted,
        }
    }
}

/// A local calendar day with at least one accepted submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ActiveDay {
    /// Local calendar day, serialized as `YYYY-MM-DD`
    pub date: NaiveDate,
    /// Number of distinct problems solved that day
    pub count: u32,
}

/// Streak statistics derived from the set of active days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakResult {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub total_active_days: u32,
}

/// Calendar-keyed activity counts, serialized with `YYYY-MM-DD` keys.
pub type HeatmapData = BTreeMap<NaiveDate, u32>;

/// Payload of the activity endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityData {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub total_active_days: u32,
    pub heatmap_data: HeatmapData,
    pub active_days: Vec<ActiveDay>,
    pub year: i32,
}

/// Years (local calendar) containing at least one active day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveYears {
    pub user_id: UserId,
    pub years: Vec<i32>,
}
