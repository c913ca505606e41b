//! Calendar heatmap construction.

use chrono::Datelike;

use crate::api::{ActiveDay, HeatmapData};
use crate::models::days_of_year;

/// Shape of the heatmap returned to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeatmapMode {
    /// Only days with activity, across the whole history.
    Sparse,
    /// Every day of the given year, zero where inactive.
    ZeroFilledYear(i32),
}

impl HeatmapMode {
    /// Select the mode for a request.
    ///
    /// An explicit year other than the current one gets a zero-filled
    /// calendar; no year, or the current year, gets the sparse map.
    pub fn for_request(requested_year: Option<i32>, current_year: i32) -> Self {
        match requested_year {
            Some(year) if year != current_year => Self::ZeroFilledYear(year),
            _ => Self::Sparse,
        }
    }
}

/// Build the heatmap for the given active days.
pub fn build_heatmap(active_days: &[ActiveDay], mode: HeatmapMode) -> HeatmapData {
    match mode {
        HeatmapMode::Sparse => active_days
            .iter()
            .filter(|day| day.count > 0)
            .map(|day| (day.date, day.count))
            .collect(),
        HeatmapMode::ZeroFilledYear(year) => {
            let mut heatmap: HeatmapData = days_of_year(year).map(|date| (date, 0)).collect();
            for day in active_days.iter().filter(|day| day.date.year() == year) {
                heatmap.insert(day.date, day.count);
            }
            heatmap
        }
    }
}
