//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer that sits between the repository
//! and the HTTP handlers. The bucketing, streak and heatmap steps are pure
//! functions over in-memory data; `activity` wires them behind one fetch.

pub mod activity;
pub mod bucketing;
pub mod heatmap;
pub mod streaks;

pub use activity::{active_years, get_active_years, get_user_activity, summarize_activity};
pub use bucketing::{active_days, bucket_by_local_day, DayBuckets};
pub use heatmap::{build_heatmap, HeatmapMode};
pub use streaks::compute_streaks;
