// src/engine/core.rs

//! Pure core runtime state machine.
//!
//! This module contains a synchronous, deterministic "core runtime" that
//! consumes [`ViewerEvent`]s and produces:
//! - an updated core state
//! - a list of "commands" describing what the IO shell should do next
//!
//! The async/IO-heavy shell (`engine::runtime::Runtime`) is responsible for:
//! - reading events from channels
//! - handing layouts to the renderer
//! - handling Ctrl+C / shutdown
//!
//! The core is unit tested without any Tokio, channels, filesystem, or
//! terminal.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::engine::{ViewerEvent, ViewerOptions};
use crate::snapshot::Snapshot;
use crate::timeline::{LayoutCache, TimelineLayout, ViewState};

/// Command produced by the pure core, to be executed by the outer IO shell.
#[derive(Debug, Clone)]
pub enum CoreCommand {
    /// Show this layout.
    Render(Arc<TimelineLayout>),
    /// Tell the user the snapshot is unusable.
    ReportError(String),
    /// Request that the process exits.
    RequestExit,
}

/// Decision returned by the core after handling a single `ViewerEvent`.
#[derive(Debug, Clone)]
pub struct CoreStep {
    pub commands: Vec<CoreCommand>,
    /// Whether the outer runtime loop should keep running.
    pub keep_running: bool,
}

/// Pure core runtime state.
///
/// Owns the view state, the layout cache and the fingerprint of the last
/// layout that was rendered. It has **no** channels, no Tokio types, and
/// does not perform any IO.
#[derive(Debug)]
pub struct ViewerCore {
    view: ViewState,
    cache: LayoutCache,
    options: ViewerOptions,
    last_rendered: Option<String>,
    renders: u64,
}

impl ViewerCore {
    pub fn new(view: ViewState, options: ViewerOptions) -> Self {
        Self {
            view,
            cache: LayoutCache::new(),
            options,
            last_rendered: None,
            renders: 0,
        }
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Number of layouts handed out for rendering so far.
    pub fn renders(&self) -> u64 {
        self.renders
    }

    pub fn cache(&self) -> &LayoutCache {
        &self.cache
    }

    /// Handle a single event, updating core state and returning the
    /// resulting commands for the IO shell.
    pub fn step(&mut self, event: ViewerEvent) -> CoreStep {
        let mut step = match event {
            ViewerEvent::SnapshotLoaded { snapshot, today } => {
                self.handle_snapshot(&snapshot, today)
            }
            ViewerEvent::SnapshotFailed { message } => {
                warn!(error = %message, "snapshot rejected; keeping previous layout");
                CoreStep {
                    commands: vec![CoreCommand::ReportError(message)],
                    keep_running: true,
                }
            }
            ViewerEvent::ShutdownRequested => {
                return CoreStep {
                    commands: Vec::new(),
                    keep_running: false,
                };
            }
        };

        if self.options.exit_after_first {
            debug!("single-shot mode; requesting exit");
            step.commands.push(CoreCommand::RequestExit);
            step.keep_running = false;
        }

        step
    }

    fn handle_snapshot(&mut self, snapshot: &Snapshot, today: NaiveDate) -> CoreStep {
        let (key, layout) = self.cache.get_or_compute(snapshot, &self.view, today);

        if self.last_rendered.as_deref() == Some(key.as_str()) {
            debug!(key = %key, "layout unchanged; skipping render");
            return CoreStep {
                commands: Vec::new(),
                keep_running: true,
            };
        }

        info!(
            rows = layout.rows.len(),
            edges = layout.edges.len(),
            "rendering updated timeline"
        );
        self.last_rendered = Some(key);
        self.renders += 1;

        CoreStep {
            commands: vec![CoreCommand::Render(layout)],
            keep_running: true,
        }
    }
}
