// src/timeline/view.rs

//! Explicit UI state passed into the layout: view mode, filters, sorting
//! and the set of tasks whose dependency list is expanded.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::timeline::task::{Task, TaskId};
use crate::types::{SortField, SortOrder, TaskPriority, TaskStatus, ViewMode};

/// Everything about *how* a snapshot is looked at.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ViewState {
    pub mode: ViewMode,
    pub filter: TaskFilter,
    pub sort: Option<TaskSort>,
    /// Tasks whose dependencies are shown as nested rows.
    pub expanded: BTreeSet<TaskId>,
    /// Overrides the project start when set.
    pub window_start: Option<NaiveDate>,
    /// Overrides the project end when set.
    pub window_end: Option<NaiveDate>,
}

impl ViewState {
    /// Flip the expanded state of `task`. Returns the new state.
    pub fn toggle_expanded(&mut self, task: &str) -> bool {
        if self.expanded.remove(task) {
            false
        } else {
            self.expanded.insert(task.to_string());
            true
        }
    }

    pub fn is_expanded(&self, task: &str) -> bool {
        self.expanded.contains(task)
    }
}

/// Row filter. Every `None` field matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TaskFilter {
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    pub assignee: Option<String>,
    /// Inclusive lower bound on the start date.
    pub start_from: Option<NaiveDate>,
    /// Inclusive upper bound on the start date.
    pub start_to: Option<NaiveDate>,
}

impl TaskFilter {
    pub fn is_empty(&self) -> bool {
        *self == TaskFilter::default()
    }

    /// Whether `task` passes the filter.
    ///
    /// A start-date bound excludes tasks that have no start date.
    pub fn matches(&self, task: &Task) -> bool {
        if self.status.as_ref().is_some_and(|s| *s != task.status) {
            return false;
        }
        if self.priority.is_some_and(|p| p != task.priority) {
            return false;
        }
        if let Some(ref assignee) = self.assignee {
            if task.assignee.as_deref() != Some(assignee.as_str()) {
                return false;
            }
        }
        if let Some(from) = self.start_from {
            if !task.start_date.is_some_and(|d| d >= from) {
                return false;
            }
        }
        if let Some(to) = self.start_to {
            if !task.start_date.is_some_and(|d| d <= to) {
                return false;
            }
        }
        true
    }
}

/// Sort key and direction for the rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskSort {
    pub field: SortField,
    pub order: SortOrder,
}

impl TaskSort {
    pub fn new(field: SortField, order: SortOrder) -> Self {
        Self { field, order }
    }

    /// Compare two tasks. Missing dates and assignees compare greater than
    /// any present value.
    pub fn compare(&self, a: &Task, b: &Task) -> Ordering {
        let ord = match self.field {
            SortField::Title => a.title.cmp(&b.title),
            SortField::Priority => a.priority.sort_rank().cmp(&b.priority.sort_rank()),
            SortField::Status => a.status.sort_rank().cmp(&b.status.sort_rank()),
            SortField::StartDate => missing_last(a.start_date, b.start_date),
            SortField::DueDate => missing_last(a.due_date, b.due_date),
            SortField::Assignee => missing_last(a.assignee.as_ref(), b.assignee.as_ref()),
        };
        match self.order {
            SortOrder::Asc => ord,
            SortOrder::Desc => ord.reverse(),
        }
    }

    /// Stable in-place sort.
    pub fn apply(&self, tasks: &mut [&Task]) {
        tasks.sort_by(|a, b| self.compare(a, b));
    }
}

fn missing_last<T: Ord>(a: Option<T>, b: Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
