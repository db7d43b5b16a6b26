// src/timeline/headers.rs

//! Column headers drawn above the bars.

use chrono::{Datelike, NaiveDate};

use crate::timeline::window::{TimelineWindow, add_days};
use crate::types::ViewMode;

/// Upper bound on weekly columns.
pub const MAX_WEEK_COLUMNS: i64 = 13;

/// One header column.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineHeader {
    pub date: NaiveDate,
    pub label: String,
    /// Width in percent of the window span.
    pub width: f64,
}

/// Build the header columns for `mode` over `window`.
pub fn timeline_headers(window: &TimelineWindow, mode: ViewMode) -> Vec<TimelineHeader> {
    match mode {
        ViewMode::Weekly => weekly_headers(window),
        ViewMode::Monthly => monthly_headers(window),
        ViewMode::Yearly => yearly_headers(window),
    }
}

fn weekly_headers(window: &TimelineWindow) -> Vec<TimelineHeader> {
    let span = window.span_days();
    let weeks = ((span + 6) / 7).min(MAX_WEEK_COLUMNS);
    let width = window.percent_of_span(7);

    (0..weeks)
        .map(|i| {
            let week_start = add_days(window.start(), (i * 7) as u64);
            let week_end = add_days(week_start, 6);
            TimelineHeader {
                date: week_start,
                label: format!(
                    "{} - {}",
                    week_start.format("%b %-d"),
                    week_end.format("%b %-d")
                ),
                width,
            }
        })
        .collect()
}

fn monthly_headers(window: &TimelineWindow) -> Vec<TimelineHeader> {
    let mut headers = Vec::new();
    let mut current = first_of_month(window.start());

    while let Some(month_start) = current {
        if month_start >= window.end() {
            break;
        }
        let next = next_month(month_start);
        let Some(month_end) = next.and_then(|n| n.pred_opt()) else {
            break;
        };
        headers.push(TimelineHeader {
            date: month_start,
            label: month_start.format("%b %y").to_string(),
            width: window.percent_of_span((month_end - month_start).num_days()),
        });
        current = next;
    }

    headers
}

fn yearly_headers(window: &TimelineWindow) -> Vec<TimelineHeader> {
    let mut headers = Vec::new();
    let mut current = NaiveDate::from_ymd_opt(window.start().year(), 1, 1);

    while let Some(year_start) = current {
        if year_start >= window.end() {
            break;
        }
        let next = NaiveDate::from_ymd_opt(year_start.year() + 1, 1, 1);
        let Some(year_end) = next.and_then(|n| n.pred_opt()) else {
            break;
        };
        headers.push(TimelineHeader {
            date: year_start,
            label: year_start.year().to_string(),
            width: window.percent_of_span((year_end - year_start).num_days()),
        });
        current = next;
    }

    headers
}

fn first_of_month(date: NaiveDate) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1)
}

fn next_month(first: NaiveDate) -> Option<NaiveDate> {
    if first.month() == 12 {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
    }
}
