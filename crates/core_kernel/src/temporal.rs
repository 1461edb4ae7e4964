//! Rolling date windows
//!
//! Underwriting and rating look back over a fixed number of days from the
//! quote date. The window is anchored on a caller-supplied "today" so that a
//! single request always sees one consistent cut-off.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A look-back window of a fixed number of whole days
///
/// A date falls inside the window when it is on or after `today - days`.
/// Dates after `today` are also inside the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LookbackWindow {
    days: u64,
}

impl LookbackWindow {
    /// Creates a window spanning `days` days back from the reference date
    pub const fn days(days: u64) -> Self {
        Self { days }
    }

    /// Returns the earliest date inside the window (inclusive)
    ///
    /// Saturates to `NaiveDate::MIN` when the subtraction would underflow.
    pub fn start(&self, today: NaiveDate) -> NaiveDate {
        today
            .checked_sub_days(Days::new(self.days))
            .unwrap_or(NaiveDate::MIN)
    }

    /// Returns true if `date` falls inside the window ending at `today`
    pub fn contains(&self, date: NaiveDate, today: NaiveDate) -> bool {
        date >= self.start(today)
    }
}

impl fmt::Display for LookbackWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "last {} days", self.days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_window_start() {
        let window = LookbackWindow::days(10);
        assert_eq!(window.start(date(2024, 1, 11)), date(2024, 1, 1));
    }

    #[test]
    fn test_window_boundary_is_inclusive() {
        let today = date(2024, 6, 15);
        let window = LookbackWindow::days(1825);
        let boundary = window.start(today);

        assert!(window.contains(boundary, today));
        assert!(!window.contains(boundary.pred_opt().unwrap(), today));
    }

    #[test]
    fn test_window_saturates_at_min_date() {
        let window = LookbackWindow::days(u64::MAX);
        assert_eq!(window.start(date(2024, 1, 1)), NaiveDate::MIN);
    }
}
