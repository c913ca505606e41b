//! Application state for the HTTP server.

use std::sync::Arc;

use crate::db::repository::FullRepository;
use crate::models::{DayBoundary, SharedClock, SystemClock};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Repository instance for database operations
    pub repository: Arc<dyn FullRepository>,
    /// Offset that decides which calendar day a submission counts towards
    pub day_boundary: DayBoundary,
    /// Source of "now" for the current streak and the default year
    pub clock: SharedClock,
}

impl AppState {
    /// Create a new application state with the given repository, the +05:30
    /// day boundary and the system clock.
    pub fn new(repository: Arc<dyn FullRepository>) -> Self {
        Self {
            repository,
            day_boundary: DayBoundary::default(),
            clock: Arc::new(SystemClock),
        }
    }

    pub fn with_day_boundary(mut self, day_boundary: DayBoundary) -> Self {
        self.day_boundary = day_boundary;
        self
    }

    pub fn with_clock(mut self, clock: SharedClock) -> Self {
        self.clock = clock;
        self
    }
}
