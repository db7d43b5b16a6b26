// src/timeline/position.rs

//! Mapping of a task's date range onto percentages of the timeline window.

use chrono::NaiveDate;

use crate::timeline::task::Task;
use crate::timeline::window::{TimelineWindow, add_days, sub_days};

/// Span assumed for a task that only has one of its two dates.
pub const DEFAULT_TASK_SPAN_DAYS: u64 = 7;

/// Smallest bar width, in percent of the window, so short tasks stay visible.
pub const MIN_BAR_WIDTH_PERCENT: f64 = 2.0;

/// Horizontal placement of a task bar, in percent of the window span.
///
/// Bars are not clipped: a task outside the window can have a negative
/// `left` or extend past 100. Clipping is up to whoever draws them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaskBar {
    pub left: f64,
    pub width: f64,
}

impl TaskBar {
    /// Right edge of the bar (`left + width`).
    pub fn end(&self) -> f64 {
        self.left + self.width
    }
}

/// Effective `(start, end)` dates used to draw a task, or `None` when the
/// task has neither a start nor a due date.
pub fn effective_range(task: &Task) -> Option<(NaiveDate, NaiveDate)> {
    let start = match (task.start_date, task.due_date) {
        (Some(start), _) => start,
        (None, Some(due)) => sub_days(due, DEFAULT_TASK_SPAN_DAYS),
        (None, None) => return None,
    };
    let end = task
        .due_date
        .unwrap_or_else(|| add_days(start, DEFAULT_TASK_SPAN_DAYS));
    Some((start, end))
}

/// Place `task` on `window`.
///
/// Returns `None` for a task without any date: such a task is in a
/// "no-date" state and must not be drawn as a zero-width bar.
pub fn compute_position(task: &Task, window: &TimelineWindow) -> Option<TaskBar> {
    let (start, end) = effective_range(task)?;

    let left = window.percent_of_span(window.offset_days(start));
    let width = window.percent_of_span((end - start).num_days());

    Some(TaskBar {
        left,
        width: width.max(MIN_BAR_WIDTH_PERCENT),
    })
}

/// Duration of a task in whole days, only when both dates are set.
pub fn task_duration_days(task: &Task) -> Option<i64> {
    match (task.start_date, task.due_date) {
        (Some(start), Some(due)) => Some((due - start).num_days()),
        _ => None,
    }
}
