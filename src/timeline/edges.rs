// src/timeline/edges.rs

//! Directed dependency edges for arrow rendering.

use std::collections::HashSet;

use tracing::debug;

use crate::timeline::position::compute_position;
use crate::timeline::task::{Task, TaskId, TaskIndex};
use crate::timeline::window::TimelineWindow;

/// `from` must finish before `to` can be ready.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DependencyEdge {
    /// The dependency.
    pub from: TaskId,
    /// The task that declares the dependency.
    pub to: TaskId,
}

/// Horizontal attachment points of an edge, in percent of the window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeAnchors {
    /// Right edge of the dependency's bar.
    pub from_end: Option<f64>,
    /// Left edge of the dependent task's bar.
    pub to_start: Option<f64>,
}

impl EdgeAnchors {
    /// Both endpoints, when both tasks have a bar.
    pub fn both(&self) -> Option<(f64, f64)> {
        Some((self.from_end?, self.to_start?))
    }
}

/// Build one edge per distinct `(dependency, task)` pair whose dependency is
/// present in `index`.
///
/// Dangling references are dropped without error. No cycle detection is
/// done, so a cycle yields edges in both directions.
pub fn build_dependency_edges<'t>(
    tasks: impl IntoIterator<Item = &'t Task>,
    index: &TaskIndex<'_>,
) -> Vec<DependencyEdge> {
    let mut edges = Vec::new();
    let mut seen: HashSet<(&'t str, &'t str)> = HashSet::new();

    for task in tasks {
        for dep in &task.depends_on {
            if !index.contains(dep) {
                debug!(task = %task.id, dep = %dep, "dangling dependency; no edge");
                continue;
            }
            if !seen.insert((dep.as_str(), task.id.as_str())) {
                continue;
            }
            edges.push(DependencyEdge {
                from: dep.clone(),
                to: task.id.clone(),
            });
        }
    }

    edges
}

/// Where `edge` attaches to the two bars on `window`.
pub fn edge_anchors(
    edge: &DependencyEdge,
    index: &TaskIndex<'_>,
    window: &TimelineWindow,
) -> EdgeAnchors {
    let bar_of = |id: &str| index.get(id).and_then(|t| compute_position(t, window));

    EdgeAnchors {
        from_end: bar_of(&edge.from).map(|b| b.end()),
        to_start: bar_of(&edge.to).map(|b| b.left),
    }
}
