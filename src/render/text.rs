// src/render/text.rs

//! Plain-text rendering of a [`TimelineLayout`].
//!
//! The engine hands out unclipped percentages; this is the caller that clips
//! them to the character canvas.

use std::fmt::Write as _;

use crate::snapshot::{Snapshot, SnapshotDiagnostics};
use crate::timeline::{BarStyle, BlockReason, LayoutRow, Readiness, TaskBar, TimelineLayout};

/// Width of the task-name column.
pub const LABEL_WIDTH: usize = 28;

/// Canvas width used when the caller does not pick one.
pub const DEFAULT_COLUMNS: usize = 60;

/// Where a bar lands on a canvas of `columns` cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarCells {
    /// Half-open cell range `[start, end)`, non-empty.
    Span(usize, usize),
    /// Entirely left of the canvas.
    BeforeWindow,
    /// Entirely right of the canvas.
    AfterWindow,
}

/// Clip `bar` to a canvas of `columns` cells. Every visible bar gets at
/// least one cell.
pub fn bar_cells(bar: &TaskBar, columns: usize) -> BarCells {
    let cols = columns.max(1) as f64;
    let start = bar.left / 100.0 * cols;
    let end = bar.end() / 100.0 * cols;

    if end <= 0.0 {
        return BarCells::BeforeWindow;
    }
    if start >= cols {
        return BarCells::AfterWindow;
    }

    let first = start.max(0.0).floor() as usize;
    let last = (end.min(cols).ceil() as usize).max(first + 1);
    BarCells::Span(first, last.min(columns.max(1)))
}

fn glyph(style: BarStyle) -> char {
    match style {
        BarStyle::Complete => '=',
        BarStyle::Active => '#',
        BarStyle::Pending => '-',
    }
}

fn readiness_marker(readiness: Readiness) -> &'static str {
    match readiness {
        Readiness::None => "  ",
        Readiness::Ready => "+ ",
        Readiness::Blocked => "! ",
    }
}

fn fit(text: &str, width: usize) -> String {
    let count = text.chars().count();
    if count <= width {
        return format!("{text:<width$}");
    }
    let mut out: String = text.chars().take(width.saturating_sub(1)).collect();
    out.push('~');
    out
}

fn draw_bar(bar: Option<&TaskBar>, fill: char, columns: usize) -> String {
    let mut cells = vec![' '; columns];
    match bar.map(|b| bar_cells(b, columns)) {
        None => {
            let note = "(no dates)";
            for (cell, ch) in cells.iter_mut().zip(note.chars()) {
                *cell = ch;
            }
        }
        Some(BarCells::Span(start, end)) => {
            for cell in &mut cells[start..end] {
                *cell = fill;
            }
        }
        Some(BarCells::BeforeWindow) => {
            if let Some(first) = cells.first_mut() {
                *first = '<';
            }
        }
        Some(BarCells::AfterWindow) => {
            if let Some(last) = cells.last_mut() {
                *last = '>';
            }
        }
    }
    cells.into_iter().collect()
}

fn header_line(layout: &TimelineLayout, columns: usize) -> String {
    let mut cells = vec![' '; columns];
    let mut offset = 0.0_f64;

    for header in &layout.headers {
        let col = (offset / 100.0 * columns as f64).floor();
        offset += header.width;
        if col < 0.0 || col as usize >= columns {
            continue;
        }
        let col = col as usize;
        cells[col] = '|';
        for (cell, ch) in cells[col + 1..].iter_mut().zip(header.label.chars()) {
            *cell = ch;
        }
    }

    cells.into_iter().collect()
}

fn render_row(out: &mut String, row: &LayoutRow, columns: usize) {
    let label = format!("{}{}", readiness_marker(row.readiness), row.title);
    let _ = write!(
        out,
        "{} |{}| {}",
        fit(&label, LABEL_WIDTH),
        draw_bar(row.bar.as_ref(), glyph(row.style), columns),
        row.assignee_name
    );
    if let Some(ref text) = row.bar_label {
        let _ = write!(out, "  {text}");
    }
    if let Some(days) = row.duration_days {
        let _ = write!(out, " ({days}d)");
    }
    out.push('\n');

    if row.readiness == Readiness::Blocked {
        let reasons: Vec<String> = row
            .blockers
            .iter()
            .map(|b| match &b.reason {
                BlockReason::Missing => format!("{} (missing)", b.dependency),
                BlockReason::Incomplete(status) => format!("{} ({status})", b.dependency),
            })
            .collect();
        let _ = writeln!(
            out,
            "{} blocked by: {}",
            " ".repeat(LABEL_WIDTH),
            reasons.join(", ")
        );
    }

    for dep in &row.dependencies {
        let label = format!("    -> {}", dep.title);
        let _ = writeln!(
            out,
            "{} |{}|",
            fit(&label, LABEL_WIDTH),
            draw_bar(dep.bar.as_ref(), '.', columns)
        );
    }
}

/// Render the layout as a fixed-width text chart.
pub fn render_text(layout: &TimelineLayout, columns: usize) -> String {
    let columns = columns.max(1);
    let mut out = String::new();

    let title = layout.project_name.as_deref().unwrap_or("timeline");
    let _ = writeln!(
        out,
        "{title}  {} .. {} ({} days, {:?})",
        layout.window.start(),
        layout.window.end(),
        layout.window.span_days(),
        layout.mode
    );
    let _ = writeln!(
        out,
        "{} |{}|",
        " ".repeat(LABEL_WIDTH),
        header_line(layout, columns)
    );

    for row in &layout.rows {
        render_row(&mut out, row, columns);
    }

    if layout.rows.len() < layout.total_tasks {
        let _ = writeln!(
            out,
            "({} of {} tasks shown)",
            layout.rows.len(),
            layout.total_tasks
        );
    }

    if !layout.edges.is_empty() {
        let links: Vec<String> = layout
            .edges
            .iter()
            .map(|e| format!("{} -> {}", e.edge.from, e.edge.to))
            .collect();
        let _ = writeln!(out, "dependencies: {}", links.join(", "));
    }

    let (none, ready, blocked) = layout.readiness_counts();
    let _ = writeln!(
        out,
        "legend: = done  # in progress  - to do  |  + ready ({ready})  ! blocked ({blocked})  no deps ({none})"
    );

    out
}

/// Dry-run output: tasks, dependencies and diagnostics, no chart.
pub fn render_dry_run(snapshot: &Snapshot, diagnostics: &SnapshotDiagnostics) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "taskline dry-run");
    if let Some(ref name) = snapshot.project.name {
        let _ = writeln!(out, "  project.name = {name}");
    }
    if let Some(start) = snapshot.project.start_date {
        let _ = writeln!(out, "  project.start_date = {start}");
    }
    if let Some(end) = snapshot.project.end_date {
        let _ = writeln!(out, "  project.end_date = {end}");
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "tasks ({}):", snapshot.tasks.len());
    for task in &snapshot.tasks {
        let _ = writeln!(out, "  - {} ({})", task.id, task.title);
        let _ = writeln!(out, "      status: {}  priority: {}", task.status, task.priority);
        if let Some(start) = task.start_date {
            let _ = writeln!(out, "      start: {start}");
        }
        if let Some(due) = task.due_date {
            let _ = writeln!(out, "      due: {due}");
        }
        if let Some(ref assignee) = task.assignee {
            let _ = writeln!(out, "      assignee: {assignee}");
        }
        if !task.depends_on.is_empty() {
            let _ = writeln!(out, "      depends_on: {:?}", task.depends_on);
        }
    }

    if !diagnostics.is_clean() {
        let _ = writeln!(out);
        let _ = writeln!(out, "diagnostics:");
        for (task, dep) in &diagnostics.dangling {
            let _ = writeln!(out, "  - {task} depends on unknown task {dep}");
        }
        for cycle in &diagnostics.cycles {
            let _ = writeln!(out, "  - dependency cycle: {}", cycle.join(", "));
        }
    }

    out
}
