//! # Activity Streaks Backend
//!
//! Turns a user's judged submissions into the numbers behind a coding
//! activity dashboard: current and longest daily streaks, the number of
//! active days, and a per-day heatmap of distinct problems solved.
//!
//! ## Architecture
//!
//! - [`api`]: Identifiers, submission records and response types
//! - [`models`]: Local-day policy ([`models::DayBoundary`]), clocks, date helpers
//! - [`services`]: Day bucketing, streak and heatmap computation
//! - [`db`]: Repository pattern over the submission log (in-memory or Postgres)
//! - [`config`]: Server settings read from the environment
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! Days are computed by shifting UTC instants by a fixed offset (+05:30 by
//! default) and taking the calendar date.

// Allow large error types - RepositoryError contains rich context for debugging
#![allow(clippy::result_large_err)]

pub mod api;
pub mod config;
pub mod db;
pub mod models;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
