// tests/property_timeline.rs

mod common;
use crate::common::date;

use std::collections::HashSet;

use chrono::{Days, NaiveDate};
use proptest::prelude::*;

use taskline::timeline::{
    build_dependency_edges, classify_readiness, compute_position, compute_window, Readiness,
    Task, TaskIndex,
};
use taskline::types::TaskStatus;

fn base() -> NaiveDate {
    date("2026-01-01")
}

fn day(offset: u64) -> NaiveDate {
    base()
        .checked_add_days(Days::new(offset))
        .expect("offset within range")
}

fn status_strategy() -> impl Strategy<Value = TaskStatus> {
    prop_oneof![
        Just(TaskStatus::Todo),
        Just(TaskStatus::InProgress),
        Just(TaskStatus::Done),
        Just(TaskStatus::Other("COMPLETED".to_string())),
    ]
}

/// Up to 12 tasks with ids `t0..tN`, random optional dates, and dependencies
/// that may point at missing ids (`t12..t15`) or form cycles.
fn tasks_strategy() -> impl Strategy<Value = Vec<Task>> {
    prop::collection::vec(
        (
            status_strategy(),
            prop::option::of(0u64..400),
            prop::option::of(0u64..400),
            prop::collection::vec(0usize..16, 0..4),
        ),
        0..12,
    )
    .prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (status, start, due, deps))| {
                let mut task = Task::new(format!("t{i}"), format!("Task {i}"));
                task.status = status;
                task.start_date = start.map(day);
                task.due_date = due.map(day);
                task.depends_on = deps.into_iter().map(|d| format!("t{d}")).collect();
                task
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn window_is_never_degenerate(
        tasks in tasks_strategy(),
        start in prop::option::of(0u64..400),
        end in prop::option::of(0u64..400),
        today in 0u64..400,
    ) {
        let window = compute_window(&tasks, start.map(day), end.map(day), day(today));
        prop_assert!(window.end() > window.start());
        prop_assert!(window.span_days() >= 1);
    }

    #[test]
    fn bars_are_finite_and_at_least_minimum_width(tasks in tasks_strategy(), today in 0u64..400) {
        let window = compute_window(&tasks, None, None, day(today));
        for task in &tasks {
            match compute_position(task, &window) {
                Some(bar) => {
                    prop_assert!(task.start_date.is_some() || task.due_date.is_some());
                    prop_assert!(bar.left.is_finite());
                    prop_assert!(bar.width.is_finite());
                    prop_assert!(bar.width >= 2.0);
                }
                None => {
                    prop_assert!(task.start_date.is_none() && task.due_date.is_none());
                }
            }
        }
    }

    #[test]
    fn readiness_matches_dependency_states(tasks in tasks_strategy()) {
        let index = TaskIndex::new(&tasks);
        for task in &tasks {
            let readiness = classify_readiness(task, &index);
            if task.depends_on.is_empty() {
                prop_assert_eq!(readiness, Readiness::None);
                continue;
            }
            let all_done = task
                .depends_on
                .iter()
                .all(|d| index.get(d).is_some_and(|t| t.status == TaskStatus::Done));
            let expected = if all_done { Readiness::Ready } else { Readiness::Blocked };
            prop_assert_eq!(readiness, expected);
        }
    }

    #[test]
    fn edges_are_unique_and_resolvable(tasks in tasks_strategy()) {
        let index = TaskIndex::new(&tasks);
        let edges = build_dependency_edges(&tasks, &index);

        let mut seen = HashSet::new();
        for edge in &edges {
            prop_assert!(index.contains(&edge.from));
            prop_assert!(index.contains(&edge.to));
            prop_assert!(seen.insert((edge.from.clone(), edge.to.clone())));
            let to = index.get(&edge.to).unwrap();
            prop_assert!(to.depends_on.contains(&edge.from));
        }
    }
}
