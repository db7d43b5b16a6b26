// src/timeline/cache.rs

use std::sync::Arc;

use blake3::Hasher;
use chrono::NaiveDate;
use tracing::debug;

use crate::snapshot::Snapshot;
use crate::timeline::layout::TimelineLayout;
use crate::timeline::view::ViewState;

/// Cache of the most recent layout.
///
/// The key is a fingerprint of everything the layout depends on, so a hit
/// means the previous layout can be reused as is.
#[derive(Debug, Default)]
pub struct LayoutCache {
    last: Option<(String, Arc<TimelineLayout>)>,
    hits: u64,
    misses: u64,
}

impl LayoutCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the layout for these inputs, computing and caching it if needed.
    ///
    /// Returns the fingerprint together with the layout.
    pub fn get_or_compute(
        &mut self,
        snapshot: &Snapshot,
        view: &ViewState,
        today: NaiveDate,
    ) -> (String, Arc<TimelineLayout>) {
        let key = fingerprint(snapshot, view, today);

        if let Some((cached_key, layout)) = &self.last {
            if *cached_key == key {
                self.hits += 1;
                debug!(key = %key, "layout cache hit");
                return (key, Arc::clone(layout));
            }
        }

        self.misses += 1;
        debug!(key = %key, "layout cache miss: computing layout");
        let layout = Arc::new(TimelineLayout::compute(snapshot, view, today));
        self.last = Some((key.clone(), Arc::clone(&layout)));
        (key, layout)
    }

    /// Drop the cached layout.
    pub fn invalidate(&mut self) {
        if self.last.take().is_some() {
            debug!("invalidated layout cache");
        }
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}

/// Hash every input of [`TimelineLayout::compute`].
pub fn fingerprint(snapshot: &Snapshot, view: &ViewState, today: NaiveDate) -> String {
    let mut h = FieldHasher::new();

    h.field("today", &today.to_string());
    h.opt_date("project.start", snapshot.project.start_date);
    h.opt_date("project.end", snapshot.project.end_date);
    h.opt_str("project.name", snapshot.project.name.as_deref());

    for (id, name) in &snapshot.users {
        h.field("user.id", id);
        h.field("user.name", name);
    }

    let chart = &snapshot.chart;
    for value in [
        chart.label_column_px,
        chart.header_px,
        chart.row_px,
        chart.bar_center_px,
        chart.canvas_px,
    ] {
        h.field("chart", &value.to_bits().to_string());
    }

    for task in &snapshot.tasks {
        h.field("task.id", &task.id);
        h.field("task.title", &task.title);
        h.field("task.status", task.status.label());
        h.field("task.priority", task.priority.label());
        h.opt_date("task.start", task.start_date);
        h.opt_date("task.due", task.due_date);
        h.opt_str("task.assignee", task.assignee.as_deref());
        for dep in &task.depends_on {
            h.field("task.dep", dep);
        }
    }

    h.field("view.mode", &format!("{:?}", view.mode));
    h.field("view.filter", &format!("{:?}", view.filter));
    h.field("view.sort", &format!("{:?}", view.sort));
    h.opt_date("view.start", view.window_start);
    h.opt_date("view.end", view.window_end);
    for id in &view.expanded {
        h.field("view.expanded", id);
    }

    h.finish()
}

/// Length-prefixed field hashing, so adjacent fields cannot run together.
struct FieldHasher {
    inner: Hasher,
}

impl FieldHasher {
    fn new() -> Self {
        Self {
            inner: Hasher::new(),
        }
    }

    fn field(&mut self, tag: &str, value: &str) {
        for part in [tag, value] {
            self.inner.update(&(part.len() as u64).to_le_bytes());
            self.inner.update(part.as_bytes());
        }
    }

    fn opt_str(&mut self, tag: &str, value: Option<&str>) {
        match value {
            Some(v) => self.field(tag, v),
            None => self.field(tag, "\u{0}none"),
        }
    }

    fn opt_date(&mut self, tag: &str, value: Option<NaiveDate>) {
        match value {
            Some(d) => self.field(tag, &d.to_string()),
            None => self.field(tag, "\u{0}none"),
        }
    }

    fn finish(self) -> String {
        self.inner.finalize().to_hex().to_string()
    }
}
