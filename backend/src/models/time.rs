use std::sync::Arc;

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};

/// Offset of the platform's reference calendar (+05:30) in seconds.
pub const IST_OFFSET_SECONDS: i32 = 5 * 3600 + 30 * 60;

/// Largest offset accepted by [`DayBoundary::from_offset_minutes`], exclusive.
const MAX_OFFSET_MINUTES: i32 = 24 * 60;

/// Policy mapping UTC instants onto local calendar days.
///
/// Activity is bucketed with a fixed offset rather than a timezone database:
/// the instant is shifted by the offset and the date portion is kept. The
/// default is +05:30 for every user.
///
/// Instants whose shifted value would leave chrono's representable range keep
/// their UTC date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayBoundary {
    offset_seconds: i32,
}

impl DayBoundary {
    /// Boundary at +05:30.
    pub fn ist() -> Self {
        Self {
            offset_seconds: IST_OFFSET_SECONDS,
        }
    }

    /// Build a boundary from an offset east of UTC, in minutes.
    ///
    /// Returns `None` when the offset is not strictly within ±24 hours.
    pub fn from_offset_minutes(minutes: i32) -> Option<Self> {
        if minutes <= -MAX_OFFSET_MINUTES || minutes >= MAX_OFFSET_MINUTES {
            return None;
        }
        Some(Self {
            offset_seconds: minutes * 60,
        })
    }

    /// Offset east of UTC, in minutes.
    pub fn offset_minutes(&self) -> i32 {
        self.offset_seconds / 60
    }

    /// Local calendar day an instant falls on.
    ///
    /// Falls back to the UTC date when the shift overflows.
    pub fn local_day(&self, instant: DateTime<Utc>) -> NaiveDate {
        instant
            .checked_add_signed(Duration::seconds(i64::from(self.offset_seconds)))
            .unwrap_or(instant)
            .date_naive()
    }

    /// Local calendar year an instant falls in.
    pub fn local_year(&self, instant: DateTime<Utc>) -> i32 {
        self.local_day(instant).year()
    }
}

impl Default for DayBoundary {
    fn default() -> Self {
        Self::ist()
    }
}

/// Source of the calculation instant.
///
/// Streak anchoring depends on "today", so handlers read the time through this
/// trait instead of calling `Utc::now()` directly.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at a given instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Shared clock handle stored in application state.
pub type SharedClock = Arc<dyn Clock>;

/// Every day of a calendar year, in order.
///
/// Empty when the year is outside chrono's supported range.
pub fn days_of_year(year: i32) -> impl Iterator<Item = NaiveDate> {
    NaiveDate::from_ymd_opt(year, 1, 1)
        .into_iter()
        .flat_map(|first| first.iter_days())
        .take_while(move |day| day.year() == year)
}
