// tests/position_window.rs

mod common;
use crate::common::{date, init_tracing, TaskBuilder};

use taskline::timeline::{
    compute_position, compute_window, effective_range, task_duration_days, Task,
    TimelineWindow,
};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

fn january() -> TimelineWindow {
    TimelineWindow::new(date("2026-01-01"), date("2026-01-31"))
}

#[test]
fn due_only_task_starts_a_week_before_its_due_date() {
    init_tracing();

    let task = TaskBuilder::new("t").due("2026-01-15").build();
    let window = january();
    assert_eq!(window.span_days(), 30);

    let (start, end) = effective_range(&task).unwrap();
    assert_eq!(start, date("2026-01-08"));
    assert_eq!(end, date("2026-01-15"));

    let bar = compute_position(&task, &window).unwrap();
    assert!(approx(bar.left, 7.0 / 30.0 * 100.0), "left = {}", bar.left);
    assert!(approx(bar.width, 7.0 / 30.0 * 100.0), "width = {}", bar.width);
}

#[test]
fn start_only_task_lasts_a_week() {
    let task = TaskBuilder::new("t").start("2026-01-10").build();
    let bar = compute_position(&task, &january()).unwrap();

    assert!(approx(bar.left, 30.0));
    assert!(approx(bar.width, 7.0 / 30.0 * 100.0));
    assert_eq!(task_duration_days(&task), None);
}

#[test]
fn task_without_dates_has_no_bar() {
    let task = Task::new("t", "No dates");
    assert_eq!(effective_range(&task), None);
    assert_eq!(compute_position(&task, &january()), None);
}

#[test]
fn short_task_is_widened_to_minimum() {
    let window = TimelineWindow::new(date("2026-01-01"), date("2026-12-31"));
    let task = TaskBuilder::new("t")
        .start("2026-01-05")
        .due("2026-01-06")
        .build();

    let bar = compute_position(&task, &window).unwrap();
    assert!(approx(bar.width, 2.0));
    assert_eq!(task_duration_days(&task), Some(1));
}

#[test]
fn due_before_start_still_gets_minimum_width() {
    let task = TaskBuilder::new("t")
        .start("2026-01-20")
        .due("2026-01-10")
        .build();

    let bar = compute_position(&task, &january()).unwrap();
    assert!(approx(bar.width, 2.0));
    assert_eq!(task_duration_days(&task), Some(-10));
}

#[test]
fn bars_outside_window_are_not_clipped() {
    let window = january();
    let before = TaskBuilder::new("b")
        .start("2025-12-01")
        .due("2025-12-11")
        .build();
    let after = TaskBuilder::new("a")
        .start("2026-02-15")
        .due("2026-02-20")
        .build();

    let before = compute_position(&before, &window).unwrap();
    let after = compute_position(&after, &window).unwrap();
    assert!(before.left < 0.0);
    assert!(before.end() < 0.0);
    assert!(after.left > 100.0);
}

#[test]
fn explicit_window_is_used_as_given() {
    let tasks = vec![TaskBuilder::new("t").due("2027-06-01").build()];
    let window = compute_window(
        &tasks,
        Some(date("2026-01-01")),
        Some(date("2026-01-31")),
        date("2030-01-01"),
    );

    assert_eq!(window.start(), date("2026-01-01"));
    assert_eq!(window.end(), date("2026-01-31"));
}

#[test]
fn window_falls_back_to_due_date_extremes() {
    let tasks = vec![
        TaskBuilder::new("a").due("2026-03-10").build(),
        TaskBuilder::new("b").start("2025-01-01").build(),
        TaskBuilder::new("c").due("2026-02-01").build(),
        TaskBuilder::new("d").due("2026-04-20").build(),
    ];
    let window = compute_window(&tasks, None, None, date("2030-01-01"));

    // Start dates do not widen the window.
    assert_eq!(window.start(), date("2026-02-01"));
    assert_eq!(window.end(), date("2026-04-20"));
}

#[test]
fn window_without_due_dates_starts_today_and_spans_thirty_days() {
    let tasks = vec![Task::new("t", "undated")];
    let window = compute_window(&tasks, None, None, date("2026-03-10"));

    assert_eq!(window.start(), date("2026-03-10"));
    assert_eq!(window.end(), date("2026-04-09"));

    let empty = compute_window(&[], None, None, date("2026-03-10"));
    assert_eq!(empty, window);
}

#[test]
fn each_bound_falls_back_on_its_own() {
    let tasks = vec![
        TaskBuilder::new("a").due("2026-02-01").build(),
        TaskBuilder::new("b").due("2026-05-01").build(),
    ];
    let window = compute_window(&tasks, Some(date("2026-01-15")), None, date("2030-01-01"));
    assert_eq!(window.start(), date("2026-01-15"));
    assert_eq!(window.end(), date("2026-05-01"));
}

#[test]
fn single_due_date_window_is_extended_by_a_day() {
    let tasks = vec![TaskBuilder::new("t").due("2026-01-15").build()];
    let window = compute_window(&tasks, None, None, date("2030-01-01"));

    assert_eq!(window.start(), date("2026-01-15"));
    assert_eq!(window.end(), date("2026-01-16"));
    assert_eq!(window.span_days(), 1);
}

#[test]
fn inverted_explicit_window_is_normalized() {
    let window = compute_window(
        &[],
        Some(date("2026-02-01")),
        Some(date("2026-01-01")),
        date("2030-01-01"),
    );
    assert_eq!(window.start(), date("2026-02-01"));
    assert_eq!(window.end(), date("2026-02-02"));
}

#[test]
fn window_at_the_end_of_the_calendar_stays_non_degenerate() {
    let window = TimelineWindow::new(chrono::NaiveDate::MAX, chrono::NaiveDate::MAX);
    assert!(window.end() > window.start());
    assert_eq!(window.span_days(), 1);
}
