// src/watch/mod.rs

//! Snapshot file watching.
//!
//! This module is responsible for:
//! - Wiring up a cross-platform filesystem watcher (`notify`) on the
//!   snapshot file.
//! - Content hashing, so that a save that changes nothing does not cause a
//!   reload.
//! - Turning the file into `ViewerEvent`s for the runtime.
//!
//! It does **not** know about layouts; it only turns file changes into
//! freshly loaded snapshots.

pub mod hash;
pub mod watcher;

pub use hash::{compute_file_hash, ContentTracker};
pub use watcher::{load_event, spawn_watcher, WatcherHandle};
