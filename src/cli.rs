// src/cli.rs

//! CLI argument parsing using `clap`.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use clap::{Parser, ValueEnum};

use crate::render::DEFAULT_COLUMNS;
use crate::snapshot::Snapshot;
use crate::timeline::{TaskFilter, TaskSort, ViewState};
use crate::types::{SortField, SortOrder, TaskPriority, TaskStatus, ViewMode};

/// Command-line arguments for `taskline`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "taskline",
    version,
    about = "Render a dependency-aware task timeline from a task snapshot.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the task snapshot (TOML).
    ///
    /// Default: `Taskline.toml` in the current working directory.
    #[arg(long, value_name = "PATH")]
    pub snapshot: Option<String>,

    /// Keep running and redraw whenever the snapshot changes.
    #[arg(long)]
    pub watch: bool,

    /// Header granularity. Overrides `[view].mode`.
    #[arg(long, value_enum, value_name = "MODE")]
    pub view: Option<ViewMode>,

    /// Window start (YYYY-MM-DD). Overrides `[project].start_date`.
    #[arg(long, value_name = "DATE")]
    pub start: Option<NaiveDate>,

    /// Window end (YYYY-MM-DD). Overrides `[project].end_date`.
    #[arg(long, value_name = "DATE")]
    pub end: Option<NaiveDate>,

    /// Only show tasks with this exact status label (e.g. IN_PROGRESS).
    #[arg(long, value_name = "STATUS")]
    pub status: Option<TaskStatus>,

    /// Only show tasks with this priority.
    #[arg(long, value_name = "PRIORITY")]
    pub priority: Option<TaskPriority>,

    /// Only show tasks assigned to this user id.
    #[arg(long, value_name = "USER")]
    pub assignee: Option<String>,

    /// Only show tasks starting on or after this date.
    #[arg(long, value_name = "DATE")]
    pub start_from: Option<NaiveDate>,

    /// Only show tasks starting on or before this date.
    #[arg(long, value_name = "DATE")]
    pub start_to: Option<NaiveDate>,

    /// Sort rows by this field instead of snapshot order.
    #[arg(long, value_enum, value_name = "FIELD")]
    pub sort: Option<SortField>,

    /// Sort descending.
    #[arg(long, requires = "sort")]
    pub desc: bool,

    /// Show the dependencies of this task as nested rows (repeatable).
    #[arg(long = "expand", value_name = "ID")]
    pub expand: Vec<String>,

    /// Width of the chart area in characters.
    #[arg(long, value_name = "N", default_value_t = DEFAULT_COLUMNS)]
    pub columns: usize,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `TASKLINE_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Parse + validate, print tasks and diagnostics, but don't draw.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}

impl CliArgs {
    /// Build the initial view state: the snapshot's `[view]` section first,
    /// then CLI flags on top.
    ///
    /// `--expand` adds to the ids listed in `[view].expanded`.
    pub fn view_state(&self, snapshot: &Snapshot) -> ViewState {
        let mut expanded: BTreeSet<String> = snapshot.view.expanded.iter().cloned().collect();
        expanded.extend(self.expand.iter().cloned());

        let order = if self.desc {
            SortOrder::Desc
        } else {
            SortOrder::Asc
        };

        ViewState {
            mode: self.view.or(snapshot.view.mode).unwrap_or_default(),
            filter: TaskFilter {
                status: self.status.clone(),
                priority: self.priority,
                assignee: self.assignee.clone(),
                start_from: self.start_from,
                start_to: self.start_to,
            },
            sort: self.sort.map(|field| TaskSort::new(field, order)),
            expanded,
            window_start: self.start,
            window_end: self.end,
        }
    }
}
