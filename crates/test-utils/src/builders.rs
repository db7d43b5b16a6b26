#![allow(dead_code)]

use chrono::NaiveDate;
use taskline::snapshot::Snapshot;
use taskline::timeline::Task;
use taskline::types::{TaskPriority, TaskStatus};

/// Parse a `YYYY-MM-DD` literal. Panics on malformed input.
pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("test date must be YYYY-MM-DD")
}

/// Builder for `Task` to simplify test setup.
pub struct TaskBuilder {
    task: Task,
}

impl TaskBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            task: Task::new(id, id),
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.task.title = title.to_string();
        self
    }

    pub fn status(mut self, status: impl Into<TaskStatus>) -> Self {
        self.task.status = status.into();
        self
    }

    pub fn priority(mut self, priority: TaskPriority) -> Self {
        self.task.priority = priority;
        self
    }

    pub fn start(mut self, d: &str) -> Self {
        self.task.start_date = Some(date(d));
        self
    }

    pub fn due(mut self, d: &str) -> Self {
        self.task.due_date = Some(date(d));
        self
    }

    pub fn assignee(mut self, user: &str) -> Self {
        self.task.assignee = Some(user.to_string());
        self
    }

    pub fn depends_on(mut self, dep: &str) -> Self {
        self.task.depends_on.push(dep.to_string());
        self
    }

    pub fn build(self) -> Task {
        self.task
    }
}

/// Builder for `Snapshot`.
#[derive(Default)]
pub struct SnapshotBuilder {
    snapshot: Snapshot,
}

impl SnapshotBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_task(mut self, task: Task) -> Self {
        self.snapshot.tasks.push(task);
        self
    }

    pub fn with_user(mut self, id: &str, name: &str) -> Self {
        self.snapshot.users.insert(id.to_string(), name.to_string());
        self
    }

    pub fn project_name(mut self, name: &str) -> Self {
        self.snapshot.project.name = Some(name.to_string());
        self
    }

    pub fn project_window(mut self, start: &str, end: &str) -> Self {
        self.snapshot.project.start_date = Some(date(start));
        self.snapshot.project.end_date = Some(date(end));
        self
    }

    pub fn build(self) -> Snapshot {
        self.snapshot
    }
}
