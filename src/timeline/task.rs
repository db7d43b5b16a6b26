// src/timeline/task.rs

//! In-memory task records and the id lookup used by the engine.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::types::{TaskPriority, TaskStatus};

/// Canonical task identifier type.
pub type TaskId = String;

/// A unit of work as seen by the timeline engine.
///
/// Records arrive already deserialized from an external store; the engine
/// only ever reads them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub start_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    /// User id of the assignee, if any.
    pub assignee: Option<String>,
    /// Ids of the tasks this one depends on, in declaration order.
    ///
    /// Duplicates and references to unknown tasks are tolerated.
    pub depends_on: Vec<TaskId>,
}

impl Task {
    pub fn new(id: impl Into<TaskId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn has_dependencies(&self) -> bool {
        !self.depends_on.is_empty()
    }

    /// Whether the task carries any date at all (and therefore gets a bar).
    pub fn has_dates(&self) -> bool {
        self.start_date.is_some() || self.due_date.is_some()
    }
}

/// O(1) lookup from task id to task over a snapshot slice.
///
/// When the slice contains the same id twice, the first occurrence wins.
#[derive(Debug, Clone, Default)]
pub struct TaskIndex<'a> {
    by_id: HashMap<&'a str, &'a Task>,
}

impl<'a> TaskIndex<'a> {
    pub fn new(tasks: &'a [Task]) -> Self {
        tasks.iter().collect()
    }

    pub fn get(&self, id: &str) -> Option<&'a Task> {
        self.by_id.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

impl<'a> FromIterator<&'a Task> for TaskIndex<'a> {
    fn from_iter<I: IntoIterator<Item = &'a Task>>(iter: I) -> Self {
        let mut by_id = HashMap::new();
        for task in iter {
            by_id.entry(task.id.as_str()).or_insert(task);
        }
        Self { by_id }
    }
}
