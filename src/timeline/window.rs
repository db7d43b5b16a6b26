// src/timeline/window.rs

//! Resolution of the date range a timeline is drawn against.

use chrono::{Days, NaiveDate};
use tracing::debug;

use crate::timeline::task::Task;

/// Span used when no task carries a due date and no explicit end is given.
pub const DEFAULT_WINDOW_DAYS: u64 = 30;

/// Minimum span of a resolved window.
pub const MIN_WINDOW_DAYS: u64 = 1;

/// A concrete, non-degenerate date range (`end > start`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimelineWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl TimelineWindow {
    /// Build a window, extending `end` to `start + MIN_WINDOW_DAYS` when it
    /// does not lie strictly after `start`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        if end > start {
            return Self { start, end };
        }

        let extended = add_days(start, MIN_WINDOW_DAYS);
        debug!(%start, %end, %extended, "degenerate window; extending end");
        if extended > start {
            return Self {
                start,
                end: extended,
            };
        }

        // `start` is the last representable date.
        Self {
            start: sub_days(start, MIN_WINDOW_DAYS),
            end: start,
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Length of the window in days (always >= 1).
    pub fn span_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// Whole days from the window start to `date` (negative before the start).
    pub fn offset_days(&self, date: NaiveDate) -> i64 {
        (date - self.start).num_days()
    }

    /// Express a number of days as a percentage of the window span.
    pub fn percent_of_span(&self, days: i64) -> f64 {
        days as f64 / self.span_days() as f64 * 100.0
    }
}

/// Resolve the window to lay `tasks` out against.
///
/// - An explicit bound is used as given.
/// - A missing start falls back to the earliest due date, then to `today`.
/// - A missing end falls back to the latest due date, then to
///   `today + DEFAULT_WINDOW_DAYS`.
///
/// Never fails; the result always satisfies `end > start`.
pub fn compute_window(
    tasks: &[Task],
    explicit_start: Option<NaiveDate>,
    explicit_end: Option<NaiveDate>,
    today: NaiveDate,
) -> TimelineWindow {
    let due_dates = || tasks.iter().filter_map(|t| t.due_date);

    let start = explicit_start
        .or_else(|| due_dates().min())
        .unwrap_or(today);
    let end = explicit_end
        .or_else(|| due_dates().max())
        .unwrap_or_else(|| add_days(today, DEFAULT_WINDOW_DAYS));

    let window = TimelineWindow::new(start, end);
    debug!(
        start = %window.start(),
        end = %window.end(),
        explicit_start = explicit_start.is_some(),
        explicit_end = explicit_end.is_some(),
        "resolved timeline window"
    );
    window
}

/// Saturating day arithmetic: dates at the edge of chrono's range stay put.
pub(crate) fn add_days(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_add_days(Days::new(days)).unwrap_or(date)
}

pub(crate) fn sub_days(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_sub_days(Days::new(days)).unwrap_or(date)
}
