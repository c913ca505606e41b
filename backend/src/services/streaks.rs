//! Current and longest streak over a set of active days.

use chrono::NaiveDate;

use crate::api::StreakResult;

/// Compute streak statistics for a set of active days.
///
/// `days` may be unordered and contain duplicates. `today` is the local date
/// of the calculation instant; the leading run only counts as the current
/// streak when the most recent active day is `today` or the day before.
pub fn compute_streaks(days: &[NaiveDate], today: NaiveDate) -> StreakResult {
    let mut days = days.to_vec();
    days.sort_unstable_by(|a, b| b.cmp(a));
    days.dedup();

    let Some(&latest) = days.first() else {
        return StreakResult::default();
    };

    let anchored = latest == today || Some(latest) == today.pred_opt();
    let mut in_leading_run = anchored;
    let mut run = 1u32;
    let mut longest_streak = 1u32;
    let mut current_streak = u32::from(anchored);

    for pair in days.windows(2) {
        if pair[0].pred_opt() == Some(pair[1]) {
            run += 1;
        } else {
            run = 1;
            in_leading_run = false;
        }

        if in_leading_run {
            current_streak = run;
        }
        longest_streak = longest_streak.max(run);
    }

    StreakResult {
        current_streak,
        longest_streak,
        total_active_days: days.len() as u32,
    }
}
