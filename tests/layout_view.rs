// tests/layout_view.rs

mod common;
use crate::common::{date, init_tracing, SnapshotBuilder, TaskBuilder};

use std::sync::Arc;

use taskline::snapshot::Snapshot;
use taskline::timeline::cache::fingerprint;
use taskline::timeline::{
    BarStyle, LayoutCache, Readiness, TaskFilter, TaskSort, TimelineLayout, ViewState,
};
use taskline::types::{SortField, SortOrder, TaskPriority, TaskStatus, ViewMode};

fn today() -> chrono::NaiveDate {
    date("2026-01-01")
}

/// design (done) -> build (in progress) -> ship (todo), plus an undated,
/// unassigned chore.
fn release_snapshot() -> Snapshot {
    SnapshotBuilder::new()
        .project_name("Release")
        .project_window("2026-01-01", "2026-01-31")
        .with_user("u1", "Alice")
        .with_task(
            TaskBuilder::new("design")
                .title("Design")
                .status("DONE")
                .priority(TaskPriority::High)
                .start("2026-01-01")
                .due("2026-01-06")
                .assignee("u1")
                .build(),
        )
        .with_task(
            TaskBuilder::new("build")
                .title("Build")
                .status("IN_PROGRESS")
                .priority(TaskPriority::Urgent)
                .start("2026-01-07")
                .due("2026-01-20")
                .assignee("u2")
                .depends_on("design")
                .build(),
        )
        .with_task(
            TaskBuilder::new("ship")
                .title("Ship")
                .priority(TaskPriority::Low)
                .due("2026-01-31")
                .depends_on("build")
                .depends_on("design")
                .build(),
        )
        .with_task(TaskBuilder::new("chore").title("Chore").build())
        .build()
}

#[test]
fn layout_rows_follow_snapshot_order() {
    init_tracing();

    let layout = TimelineLayout::compute(&release_snapshot(), &ViewState::default(), today());

    let ids: Vec<&str> = layout.rows.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["design", "build", "ship", "chore"]);
    assert_eq!(layout.total_tasks, 4);
    assert_eq!(layout.project_name.as_deref(), Some("Release"));
    assert_eq!(layout.window.start(), date("2026-01-01"));
    assert_eq!(layout.window.end(), date("2026-01-31"));
}

#[test]
fn layout_rows_carry_readiness_style_and_names() {
    let layout = TimelineLayout::compute(&release_snapshot(), &ViewState::default(), today());

    let design = layout.row("design").unwrap();
    assert_eq!(design.readiness, Readiness::None);
    assert_eq!(design.style, BarStyle::Complete);
    assert_eq!(design.assignee_name, "Alice");
    assert_eq!(design.duration_days, Some(5));
    assert_eq!(design.bar_label.as_deref(), Some("Jan 1 - Jan 6"));

    let build = layout.row("build").unwrap();
    assert_eq!(build.readiness, Readiness::Ready);
    assert_eq!(build.style, BarStyle::Active);
    assert_eq!(build.assignee_name, "Unknown");

    let ship = layout.row("ship").unwrap();
    assert_eq!(ship.readiness, Readiness::Blocked);
    assert_eq!(ship.style, BarStyle::Pending);
    assert_eq!(ship.blockers.len(), 1);
    assert_eq!(ship.blockers[0].dependency, "build");
    assert_eq!(ship.bar_label.as_deref(), Some("Jan 31"));

    let chore = layout.row("chore").unwrap();
    assert_eq!(chore.bar, None);
    assert_eq!(chore.assignee_name, "Unassigned");

    assert_eq!(layout.readiness_counts(), (2, 1, 1));
}

#[test]
fn layout_edges_have_connectors_between_dated_rows() {
    let layout = TimelineLayout::compute(&release_snapshot(), &ViewState::default(), today());

    let pairs: Vec<(&str, &str)> = layout
        .edges
        .iter()
        .map(|e| (e.edge.from.as_str(), e.edge.to.as_str()))
        .collect();
    assert_eq!(
        pairs,
        vec![("design", "build"), ("build", "ship"), ("design", "ship")]
    );

    let first = &layout.edges[0];
    let connector = first.connector.expect("both tasks have bars");
    assert_eq!(connector.from.y, layout.geometry.y_for_row(0));
    assert_eq!(connector.to.y, layout.geometry.y_for_row(1));
}

#[test]
fn filter_hides_rows_but_keeps_window_and_readiness() {
    let view = ViewState {
        filter: TaskFilter {
            status: Some(TaskStatus::Todo),
            ..TaskFilter::default()
        },
        ..ViewState::default()
    };
    let layout = TimelineLayout::compute(&release_snapshot(), &view, today());

    let ids: Vec<&str> = layout.rows.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["ship", "chore"]);
    assert_eq!(layout.total_tasks, 4);
    // Hidden dependencies still count for readiness.
    assert_eq!(layout.row("ship").unwrap().readiness, Readiness::Blocked);
    // No edges between the two visible rows.
    assert!(layout.edges.is_empty());
    assert_eq!(layout.window.end(), date("2026-01-31"));
}

#[test]
fn start_date_filter_excludes_undated_tasks() {
    let filter = TaskFilter {
        start_from: Some(date("2026-01-05")),
        ..TaskFilter::default()
    };
    let snapshot = release_snapshot();
    let matching: Vec<&str> = snapshot
        .tasks
        .iter()
        .filter(|t| filter.matches(t))
        .map(|t| t.id.as_str())
        .collect();

    assert_eq!(matching, vec!["build"]);
    assert!(!filter.is_empty());
    assert!(TaskFilter::default().is_empty());
}

#[test]
fn sort_by_priority_puts_urgent_first() {
    let view = ViewState {
        sort: Some(TaskSort::new(SortField::Priority, SortOrder::Asc)),
        ..ViewState::default()
    };
    let layout = TimelineLayout::compute(&release_snapshot(), &view, today());

    let ids: Vec<&str> = layout.rows.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["build", "design", "chore", "ship"]);
}

#[test]
fn sort_by_due_date_keeps_missing_dates_last() {
    let snapshot = release_snapshot();

    let asc = TaskSort::new(SortField::DueDate, SortOrder::Asc);
    let mut rows: Vec<_> = snapshot.tasks.iter().collect();
    asc.apply(&mut rows);
    let ids: Vec<&str> = rows.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["design", "build", "ship", "chore"]);

    let desc = TaskSort::new(SortField::DueDate, SortOrder::Desc);
    desc.apply(&mut rows);
    let ids: Vec<&str> = rows.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["chore", "ship", "build", "design"]);
}

#[test]
fn expanded_row_lists_its_dependencies() {
    let mut view = ViewState::default();
    assert!(view.toggle_expanded("ship"));
    // Expanding a task without dependencies has no effect on the layout.
    view.toggle_expanded("chore");

    let layout = TimelineLayout::compute(&release_snapshot(), &view, today());

    let ship = layout.row("ship").unwrap();
    assert!(ship.expanded);
    let deps: Vec<&str> = ship.dependencies.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(deps, vec!["build", "design"]);
    assert!(ship.dependencies.iter().all(|d| d.bar.is_some()));
    assert_eq!(ship.dependencies[1].style, BarStyle::Complete);

    let chore = layout.row("chore").unwrap();
    assert!(!chore.expanded);
    assert!(chore.dependencies.is_empty());

    assert!(!layout.row("build").unwrap().expanded);

    assert!(!view.toggle_expanded("ship"));
    assert!(!view.is_expanded("ship"));
}

#[test]
fn view_window_overrides_project_dates() {
    let view = ViewState {
        mode: ViewMode::Monthly,
        window_start: Some(date("2025-12-01")),
        ..ViewState::default()
    };
    let layout = TimelineLayout::compute(&release_snapshot(), &view, today());

    assert_eq!(layout.window.start(), date("2025-12-01"));
    assert_eq!(layout.window.end(), date("2026-01-31"));
    assert_eq!(layout.headers.len(), 2);
}

#[test]
fn completed_label_is_drawn_complete_but_does_not_unblock() {
    let snapshot = SnapshotBuilder::new()
        .with_task(TaskBuilder::new("a").status("COMPLETED").due("2026-01-10").build())
        .with_task(TaskBuilder::new("b").depends_on("a").due("2026-01-20").build())
        .build();
    let layout = TimelineLayout::compute(&snapshot, &ViewState::default(), today());

    assert_eq!(layout.row("a").unwrap().style, BarStyle::Complete);
    assert_eq!(layout.row("b").unwrap().readiness, Readiness::Blocked);
}

#[test]
fn cache_reuses_layout_for_identical_inputs() {
    let snapshot = release_snapshot();
    let view = ViewState::default();
    let mut cache = LayoutCache::new();

    let (key1, first) = cache.get_or_compute(&snapshot, &view, today());
    let (key2, second) = cache.get_or_compute(&snapshot, &view, today());

    assert_eq!(key1, key2);
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(cache.hits(), 1);
    assert_eq!(cache.misses(), 1);

    cache.invalidate();
    let (_, third) = cache.get_or_compute(&snapshot, &view, today());
    assert!(!Arc::ptr_eq(&first, &third));
    assert_eq!(cache.misses(), 2);
}

#[test]
fn fingerprint_changes_with_any_input() {
    let snapshot = release_snapshot();
    let view = ViewState::default();
    let base = fingerprint(&snapshot, &view, today());

    let mut changed = snapshot.clone();
    changed.tasks[2].status = TaskStatus::Done;
    assert_ne!(base, fingerprint(&changed, &view, today()));

    let mut expanded = view.clone();
    expanded.toggle_expanded("ship");
    assert_ne!(base, fingerprint(&snapshot, &expanded, today()));

    assert_ne!(base, fingerprint(&snapshot, &view, date("2026-01-02")));
    assert_eq!(base, fingerprint(&snapshot.clone(), &view.clone(), today()));
}
