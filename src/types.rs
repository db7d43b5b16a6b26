// src/types.rs

//! Small shared enums used by the snapshot model, the timeline engine and
//! the CLI.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::Deserialize;

/// Workflow status of a task.
///
/// The canonical labels are `TODO`, `IN_PROGRESS`, `IN_REVIEW`, `DONE` and
/// `CANCELLED`. Stores in the wild carry other labels too (`COMPLETED`,
/// `TO DO`, ` DONE`, ...); those are kept verbatim in [`TaskStatus::Other`]
/// so that nothing is lost. Labels are matched byte for byte: only the exact
/// label `DONE` ever satisfies a dependency.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(from = "String")]
pub enum TaskStatus {
    #[default]
    Todo,
    InProgress,
    InReview,
    Done,
    Cancelled,
    Other(String),
}

impl TaskStatus {
    /// The label as it appears in the store.
    pub fn label(&self) -> &str {
        match self {
            TaskStatus::Todo => "TODO",
            TaskStatus::InProgress => "IN_PROGRESS",
            TaskStatus::InReview => "IN_REVIEW",
            TaskStatus::Done => "DONE",
            TaskStatus::Cancelled => "CANCELLED",
            TaskStatus::Other(s) => s.as_str(),
        }
    }

    /// Whether the label is exactly `DONE`. Judged on the label so that a
    /// hand-built `Other("DONE")` behaves like [`TaskStatus::Done`].
    pub fn is_done(&self) -> bool {
        self.label() == "DONE"
    }

    /// Position used when sorting by status. Unknown labels sort last.
    pub fn sort_rank(&self) -> u8 {
        match self {
            TaskStatus::Todo => 0,
            TaskStatus::InProgress => 1,
            TaskStatus::InReview => 2,
            TaskStatus::Done => 3,
            TaskStatus::Cancelled => 4,
            TaskStatus::Other(_) if self.is_done() => 3,
            TaskStatus::Other(_) => 5,
        }
    }
}

impl From<String> for TaskStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "TODO" => TaskStatus::Todo,
            "IN_PROGRESS" => TaskStatus::InProgress,
            "IN_REVIEW" => TaskStatus::InReview,
            "DONE" => TaskStatus::Done,
            "CANCELLED" => TaskStatus::Cancelled,
            _ => TaskStatus::Other(raw),
        }
    }
}

impl From<&str> for TaskStatus {
    fn from(raw: &str) -> Self {
        TaskStatus::from(raw.to_string())
    }
}

impl FromStr for TaskStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(TaskStatus::from(s))
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Task priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl TaskPriority {
    pub fn label(self) -> &'static str {
        match self {
            TaskPriority::Low => "LOW",
            TaskPriority::Medium => "MEDIUM",
            TaskPriority::High => "HIGH",
            TaskPriority::Urgent => "URGENT",
        }
    }

    /// Position used when sorting by priority (most urgent first).
    pub fn sort_rank(self) -> u8 {
        match self {
            TaskPriority::Urgent => 0,
            TaskPriority::High => 1,
            TaskPriority::Medium => 2,
            TaskPriority::Low => 3,
        }
    }
}

impl FromStr for TaskPriority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "LOW" => Ok(TaskPriority::Low),
            "MEDIUM" => Ok(TaskPriority::Medium),
            "HIGH" => Ok(TaskPriority::High),
            "URGENT" => Ok(TaskPriority::Urgent),
            other => Err(format!(
                "invalid priority: {other} (expected LOW, MEDIUM, HIGH or URGENT)"
            )),
        }
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Granularity of the timeline header columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Weekly,
    Monthly,
    Yearly,
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "weekly" => Ok(ViewMode::Weekly),
            "monthly" => Ok(ViewMode::Monthly),
            "yearly" => Ok(ViewMode::Yearly),
            other => Err(format!(
                "invalid view mode: {other} (expected \"weekly\", \"monthly\" or \"yearly\")"
            )),
        }
    }
}

/// Field a task list can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Title,
    Priority,
    StartDate,
    DueDate,
    Status,
    Assignee,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}
