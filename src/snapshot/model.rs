// src/snapshot/model.rs

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::timeline::geometry::ChartGeometry;
use crate::timeline::task::Task;
use crate::types::{TaskPriority, TaskStatus, ViewMode};

/// Task snapshot as read from a TOML file.
///
/// ```toml
/// [project]
/// name = "Website relaunch"
/// start_date = "2026-01-01"
///
/// [users]
/// user-1 = "Alice"
///
/// [[task]]
/// id = "task-1"
/// title = "Setup"
/// status = "DONE"
/// due_date = "2026-01-08"
///
/// [[task]]
/// id = "task-2"
/// title = "Build"
/// depends_on = ["task-1"]
/// ```
///
/// All sections are optional. Tasks keep the order they appear in, which is
/// also the default row order of the timeline.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSnapshot {
    #[serde(default)]
    pub project: ProjectSection,

    /// User id -> display name, used to label assignees.
    #[serde(default)]
    pub users: BTreeMap<String, String>,

    #[serde(default)]
    pub view: ViewSection,

    #[serde(default)]
    pub chart: ChartGeometry,

    /// All tasks from `[[task]]`.
    #[serde(default)]
    pub task: Vec<TaskRecord>,
}

/// `[project]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize)]
pub struct ProjectSection {
    #[serde(default)]
    pub name: Option<String>,

    /// Explicit window start; wins over task due dates.
    #[serde(default)]
    pub start_date: Option<NaiveDate>,

    /// Explicit window end; wins over task due dates.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

/// `[view]` section: defaults for the view state, overridable from the CLI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ViewSection {
    #[serde(default)]
    pub mode: Option<ViewMode>,

    /// Tasks whose dependency rows start expanded.
    #[serde(default)]
    pub expanded: Vec<String>,
}

/// One `[[task]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskRecord {
    pub id: String,

    /// Falls back to the id when empty.
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub status: TaskStatus,

    #[serde(default)]
    pub priority: TaskPriority,

    #[serde(default)]
    pub start_date: Option<NaiveDate>,

    #[serde(default)]
    pub due_date: Option<NaiveDate>,

    #[serde(default, alias = "assigned_to")]
    pub assignee: Option<String>,

    #[serde(default)]
    pub depends_on: DependsOn,
}

/// Dependency list, either as a TOML array or as the comma-separated string
/// some stores persist (`"task-1,task-2"`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum DependsOn {
    List(Vec<String>),
    Joined(String),
}

impl Default for DependsOn {
    fn default() -> Self {
        DependsOn::List(Vec::new())
    }
}

impl DependsOn {
    /// Normalized ids in declaration order; empty pieces are dropped.
    pub fn into_ids(self) -> Vec<String> {
        let pieces: Vec<String> = match self {
            DependsOn::List(ids) => ids,
            DependsOn::Joined(joined) => joined.split(',').map(str::to_string).collect(),
        };
        pieces
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

impl From<TaskRecord> for Task {
    fn from(record: TaskRecord) -> Self {
        let title = if record.title.trim().is_empty() {
            record.id.clone()
        } else {
            record.title
        };
        Task {
            id: record.id,
            title,
            status: record.status,
            priority: record.priority,
            start_date: record.start_date,
            due_date: record.due_date,
            assignee: record.assignee.filter(|a| !a.trim().is_empty()),
            depends_on: record.depends_on.into_ids(),
        }
    }
}

/// A validated snapshot.
///
/// Only construct this via [`Snapshot::try_from`] on a [`RawSnapshot`] (which
/// checks task ids), or via [`Snapshot::from_tasks`] when the tasks come from
/// a trusted in-memory source.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub project: ProjectSection,
    pub users: BTreeMap<String, String>,
    pub view: ViewSection,
    pub chart: ChartGeometry,
    pub tasks: Vec<Task>,
}

impl Snapshot {
    pub(crate) fn new_unchecked(raw: RawSnapshot) -> Self {
        Self {
            project: raw.project,
            users: raw.users,
            view: raw.view,
            chart: raw.chart,
            tasks: raw.task.into_iter().map(Task::from).collect(),
        }
    }

    /// Wrap an in-memory task list with default project, users and chart.
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self {
            tasks,
            ..Self::default()
        }
    }

    /// Display name for an assignee id: `Unassigned` when there is none,
    /// `Unknown` when the id is not listed under `[users]`.
    pub fn assignee_name(&self, assignee: Option<&str>) -> String {
        match assignee {
            None => "Unassigned".to_string(),
            Some(id) => self
                .users
                .get(id)
                .cloned()
                .unwrap_or_else(|| "Unknown".to_string()),
        }
    }
}
