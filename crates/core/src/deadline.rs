//! Deadline urgency computed at calendar-date granularity.

use chrono::NaiveDate;

/// Days remaining before the deadline becomes urgent.
pub const URGENT_WINDOW_DAYS: i64 = 3;

/// How far a deadline is from a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct TimeRemaining {
    /// Whole days until the deadline; negative once it has passed.
    pub days_remaining: i64,
    pub overdue: bool,
    pub urgent: bool,
}

/// Classify a deadline relative to `today`.
///
/// A deadline falling on `today` is neither overdue nor urgent
/// (`days_remaining == 0`).
pub fn time_remaining(deadline: NaiveDate, today: NaiveDate) -> TimeRemaining {
    let days_remaining = (deadline - today).num_days();
    TimeRemaining {
        days_remaining,
        overdue: days_remaining < 0,
        urgent: days_remaining > 0 && days_remaining <= URGENT_WINDOW_DAYS,
    }
}
