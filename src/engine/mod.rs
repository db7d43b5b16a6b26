// src/engine/mod.rs

//! Orchestration engine for watch mode.
//!
//! This module ties together:
//! - the layout cache and the view state
//! - the main runtime event loop that reacts to:
//!   - freshly loaded snapshots
//!   - snapshots that failed to load
//!   - shutdown signals
//!
//! The pure core state machine lives in [`core`]; the async/IO shell is
//! implemented in [`runtime`].

use chrono::NaiveDate;

use crate::snapshot::Snapshot;

/// Events flowing into the runtime from the watcher, Ctrl-C handler, etc.
#[derive(Debug, Clone)]
pub enum ViewerEvent {
    /// A valid snapshot was read. `today` is the date the layout is computed
    /// for, stamped by whoever loaded the snapshot.
    SnapshotLoaded {
        snapshot: Box<Snapshot>,
        today: NaiveDate,
    },
    /// The snapshot could not be read or validated.
    SnapshotFailed { message: String },
    /// Graceful shutdown requested (e.g. Ctrl-C).
    ShutdownRequested,
}

/// Options used by the core.
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewerOptions {
    /// Exit after the first snapshot event has been handled (no watching).
    pub exit_after_first: bool,
}

pub mod core;
pub mod runtime;

pub use core::{CoreCommand, CoreStep, ViewerCore};
pub use runtime::Runtime;
