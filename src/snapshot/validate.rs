// src/snapshot/validate.rs

use std::collections::HashSet;

use petgraph::algo::tarjan_scc;
use petgraph::graphmap::DiGraphMap;
use tracing::warn;

use crate::errors::{Result, TasklineError};
use crate::snapshot::model::{RawSnapshot, Snapshot};

impl TryFrom<RawSnapshot> for Snapshot {
    type Error = crate::errors::TasklineError;

    fn try_from(raw: RawSnapshot) -> std::result::Result<Self, Self::Error> {
        validate_raw_snapshot(&raw)?;
        Ok(Snapshot::new_unchecked(raw))
    }
}

fn validate_raw_snapshot(raw: &RawSnapshot) -> Result<()> {
    validate_task_ids(raw)?;
    validate_project_bounds(raw);
    Ok(())
}

fn validate_task_ids(raw: &RawSnapshot) -> Result<()> {
    let mut seen: HashSet<&str> = HashSet::new();

    for (pos, task) in raw.task.iter().enumerate() {
        let id = task.id.trim();
        if id.is_empty() {
            return Err(TasklineError::SnapshotError(format!(
                "task #{} has an empty `id`",
                pos + 1
            )));
        }
        if id != task.id {
            return Err(TasklineError::SnapshotError(format!(
                "task id '{}' has leading or trailing whitespace",
                task.id
            )));
        }
        if !seen.insert(id) {
            return Err(TasklineError::SnapshotError(format!(
                "duplicate task id '{}'",
                id
            )));
        }
    }

    Ok(())
}

fn validate_project_bounds(raw: &RawSnapshot) {
    // An inverted range is still drawable (the window normalizes it), so
    // this only warns.
    if let (Some(start), Some(end)) = (raw.project.start_date, raw.project.end_date) {
        if end <= start {
            warn!(%start, %end, "[project] end_date is not after start_date");
        }
    }
}

/// Informational findings about a snapshot's dependency graph.
///
/// None of these change how tasks are classified: a dangling reference still
/// blocks its task, and tasks in a cycle simply stay blocked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnapshotDiagnostics {
    /// `(task, missing dependency)` pairs.
    pub dangling: Vec<(String, String)>,
    /// Groups of tasks that (transitively) depend on each other.
    pub cycles: Vec<Vec<String>>,
}

impl SnapshotDiagnostics {
    pub fn is_clean(&self) -> bool {
        self.dangling.is_empty() && self.cycles.is_empty()
    }
}

/// Find dangling references and dependency cycles.
pub fn diagnose(snapshot: &Snapshot) -> SnapshotDiagnostics {
    // Edge direction: dep -> task.
    let mut graph: DiGraphMap<&str, ()> = DiGraphMap::new();

    for task in &snapshot.tasks {
        graph.add_node(task.id.as_str());
    }

    let mut dangling = Vec::new();
    for task in &snapshot.tasks {
        for dep in &task.depends_on {
            if graph.contains_node(dep.as_str()) {
                graph.add_edge(dep.as_str(), task.id.as_str(), ());
            } else if !dangling.iter().any(|(t, d)| t == &task.id && d == dep) {
                warn!(task = %task.id, dep = %dep, "dependency refers to unknown task");
                dangling.push((task.id.clone(), dep.clone()));
            }
        }
    }

    let mut cycles: Vec<Vec<String>> = tarjan_scc(&graph)
        .into_iter()
        .filter(|component| {
            component.len() > 1 || graph.contains_edge(component[0], component[0])
        })
        .map(|component| {
            let mut ids: Vec<String> = component.into_iter().map(str::to_string).collect();
            ids.sort();
            ids
        })
        .collect();
    cycles.sort();

    for cycle in &cycles {
        warn!(tasks = ?cycle, "dependency cycle; these tasks can never become ready");
    }

    SnapshotDiagnostics { dangling, cycles }
}
