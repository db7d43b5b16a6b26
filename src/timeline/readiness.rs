// src/timeline/readiness.rs

//! Dependency readiness of a task, derived from the current snapshot.

use std::fmt;

use tracing::debug;

use crate::timeline::task::{Task, TaskId, TaskIndex};
use crate::types::TaskStatus;

/// Dependency state of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Readiness {
    /// The task declares no dependencies.
    None,
    /// Every dependency resolves to a task in `DONE`.
    Ready,
    /// At least one dependency is unknown or not `DONE`.
    Blocked,
}

impl Readiness {
    pub fn as_str(self) -> &'static str {
        match self {
            Readiness::None => "none",
            Readiness::Ready => "ready",
            Readiness::Blocked => "blocked",
        }
    }
}

impl fmt::Display for Readiness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a dependency holds a task back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockReason {
    /// The referenced task is not in the snapshot.
    Missing,
    /// The referenced task exists but is not `DONE`.
    Incomplete(TaskStatus),
}

/// A single dependency that keeps a task from being ready.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blocker {
    pub dependency: TaskId,
    pub reason: BlockReason,
}

/// Classify `task` against the snapshot in `index`.
///
/// A dangling reference counts as blocking. Cycles are not detected: tasks
/// that depend on each other simply stay blocked.
pub fn classify_readiness(task: &Task, index: &TaskIndex<'_>) -> Readiness {
    if !task.has_dependencies() {
        return Readiness::None;
    }

    let all_done = task
        .depends_on
        .iter()
        .all(|dep| index.get(dep).is_some_and(|d| d.status.is_done()));

    if all_done {
        Readiness::Ready
    } else {
        debug!(task = %task.id, "task blocked by dependencies");
        Readiness::Blocked
    }
}

/// Every dependency of `task` that is not satisfied, in declaration order.
///
/// Repeated references to the same id are reported once.
pub fn blockers(task: &Task, index: &TaskIndex<'_>) -> Vec<Blocker> {
    let mut out: Vec<Blocker> = Vec::new();

    for dep in &task.depends_on {
        if out.iter().any(|b| &b.dependency == dep) {
            continue;
        }
        let reason = match index.get(dep) {
            None => BlockReason::Missing,
            Some(d) if d.status.is_done() => continue,
            Some(d) => BlockReason::Incomplete(d.status.clone()),
        };
        out.push(Blocker {
            dependency: dep.clone(),
            reason,
        });
    }

    out
}
