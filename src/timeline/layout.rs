// src/timeline/layout.rs

//! Full timeline layout for one snapshot and one view state.
//!
//! This is the only place that combines the window, positions, readiness,
//! edges and headers. Everything it produces is plain data; drawing is left
//! to [`crate::render`].

use std::collections::HashMap;

use chrono::NaiveDate;
use tracing::debug;

use crate::snapshot::Snapshot;
use crate::timeline::edges::{build_dependency_edges, edge_anchors, DependencyEdge, EdgeAnchors};
use crate::timeline::geometry::{ChartGeometry, Connector};
use crate::timeline::headers::{timeline_headers, TimelineHeader};
use crate::timeline::position::{compute_position, task_duration_days, TaskBar};
use crate::timeline::readiness::{blockers, classify_readiness, Blocker, Readiness};
use crate::timeline::task::{Task, TaskId, TaskIndex};
use crate::timeline::view::ViewState;
use crate::timeline::window::{compute_window, TimelineWindow};
use crate::types::{TaskPriority, TaskStatus, ViewMode};

/// How a bar is coloured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarStyle {
    Complete,
    Active,
    Pending,
}

impl BarStyle {
    pub fn for_status(status: &TaskStatus) -> Self {
        if status.is_done() || status.label() == "COMPLETED" {
            return BarStyle::Complete;
        }
        match status {
            TaskStatus::InProgress => BarStyle::Active,
            _ => BarStyle::Pending,
        }
    }
}

/// A dependency shown under an expanded row.
#[derive(Debug, Clone, PartialEq)]
pub struct DependencyRow {
    pub id: TaskId,
    pub title: String,
    pub due_date: Option<NaiveDate>,
    /// Only present when the dependency has a due date.
    pub bar: Option<TaskBar>,
    pub style: BarStyle,
}

/// One task row.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutRow {
    pub id: TaskId,
    pub title: String,
    pub assignee_name: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub start_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    /// `None` for tasks without any date.
    pub bar: Option<TaskBar>,
    pub bar_label: Option<String>,
    pub style: BarStyle,
    pub readiness: Readiness,
    pub blockers: Vec<Blocker>,
    pub duration_days: Option<i64>,
    pub has_dependencies: bool,
    pub expanded: bool,
    /// Filled only when the row is expanded.
    pub dependencies: Vec<DependencyRow>,
}

/// A dependency edge between two visible rows.
#[derive(Debug, Clone, PartialEq)]
pub struct LaidOutEdge {
    pub edge: DependencyEdge,
    pub anchors: EdgeAnchors,
    /// `None` when either end has no bar.
    pub connector: Option<Connector>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimelineLayout {
    pub project_name: Option<String>,
    pub window: TimelineWindow,
    pub mode: ViewMode,
    pub headers: Vec<TimelineHeader>,
    pub rows: Vec<LayoutRow>,
    pub edges: Vec<LaidOutEdge>,
    pub geometry: ChartGeometry,
    /// Number of tasks in the snapshot, before filtering.
    pub total_tasks: usize,
}

impl TimelineLayout {
    /// Lay out `snapshot` as seen through `view`.
    ///
    /// - The window covers the whole snapshot, so filtering does not move
    ///   the bars.
    /// - Readiness is judged against the whole snapshot, so a filtered-out
    ///   `DONE` dependency still counts as done.
    /// - Edges are drawn only between rows that are visible.
    pub fn compute(snapshot: &Snapshot, view: &ViewState, today: NaiveDate) -> Self {
        let window = compute_window(
            &snapshot.tasks,
            view.window_start.or(snapshot.project.start_date),
            view.window_end.or(snapshot.project.end_date),
            today,
        );
        let full_index = TaskIndex::new(&snapshot.tasks);

        let mut visible: Vec<&Task> = snapshot
            .tasks
            .iter()
            .filter(|t| view.filter.matches(t))
            .collect();
        if let Some(sort) = view.sort {
            sort.apply(&mut visible);
        }

        let rows: Vec<LayoutRow> = visible
            .iter()
            .map(|task| layout_row(task, snapshot, view, &full_index, &window))
            .collect();

        let visible_index: TaskIndex<'_> = visible.iter().copied().collect();
        let row_of: HashMap<&str, usize> = visible
            .iter()
            .enumerate()
            .map(|(i, t)| (t.id.as_str(), i))
            .collect();

        let edges = build_dependency_edges(visible.iter().copied(), &visible_index)
            .into_iter()
            .map(|edge| {
                let anchors = edge_anchors(&edge, &visible_index, &window);
                let connector = match (row_of.get(edge.from.as_str()), row_of.get(edge.to.as_str())) {
                    (Some(&from_row), Some(&to_row)) => {
                        Connector::between(&anchors, from_row, to_row, &snapshot.chart)
                    }
                    _ => None,
                };
                LaidOutEdge {
                    edge,
                    anchors,
                    connector,
                }
            })
            .collect::<Vec<_>>();

        debug!(
            rows = rows.len(),
            edges = edges.len(),
            total = snapshot.tasks.len(),
            "computed timeline layout"
        );

        Self {
            project_name: snapshot.project.name.clone(),
            window,
            mode: view.mode,
            headers: timeline_headers(&window, view.mode),
            rows,
            edges,
            geometry: snapshot.chart,
            total_tasks: snapshot.tasks.len(),
        }
    }

    pub fn row(&self, id: &str) -> Option<&LayoutRow> {
        self.rows.iter().find(|r| r.id == id)
    }

    /// Count rows per readiness state: `(none, ready, blocked)`.
    pub fn readiness_counts(&self) -> (usize, usize, usize) {
        self.rows
            .iter()
            .fold((0, 0, 0), |(n, r, b), row| match row.readiness {
                Readiness::None => (n + 1, r, b),
                Readiness::Ready => (n, r + 1, b),
                Readiness::Blocked => (n, r, b + 1),
            })
    }
}

fn layout_row(
    task: &Task,
    snapshot: &Snapshot,
    view: &ViewState,
    index: &TaskIndex<'_>,
    window: &TimelineWindow,
) -> LayoutRow {
    let expanded = task.has_dependencies() && view.is_expanded(&task.id);

    let dependencies = if expanded {
        dependency_rows(task, index, window)
    } else {
        Vec::new()
    };

    LayoutRow {
        id: task.id.clone(),
        title: task.title.clone(),
        assignee_name: snapshot.assignee_name(task.assignee.as_deref()),
        status: task.status.clone(),
        priority: task.priority,
        start_date: task.start_date,
        due_date: task.due_date,
        bar: compute_position(task, window),
        bar_label: bar_label(task),
        style: BarStyle::for_status(&task.status),
        readiness: classify_readiness(task, index),
        blockers: blockers(task, index),
        duration_days: task_duration_days(task),
        has_dependencies: task.has_dependencies(),
        expanded,
        dependencies,
    }
}

/// Resolvable dependencies of `task`; dangling references are skipped.
fn dependency_rows(
    task: &Task,
    index: &TaskIndex<'_>,
    window: &TimelineWindow,
) -> Vec<DependencyRow> {
    task.depends_on
        .iter()
        .filter_map(|id| index.get(id))
        .map(|dep| DependencyRow {
            id: dep.id.clone(),
            title: dep.title.clone(),
            due_date: dep.due_date,
            bar: dep
                .due_date
                .and_then(|_| compute_position(dep, window)),
            style: BarStyle::for_status(&dep.status),
        })
        .collect()
}

/// Short date label printed inside a bar.
fn bar_label(task: &Task) -> Option<String> {
    match (task.start_date, task.due_date) {
        (Some(start), Some(due)) => Some(format!(
            "{} - {}",
            start.format("%b %-d"),
            due.format("%b %-d")
        )),
        (None, Some(due)) => Some(due.format("%b %-d").to_string()),
        _ => None,
    }
}
