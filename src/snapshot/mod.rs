// src/snapshot/mod.rs

//! Task snapshots: the read-only view of the external task store.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a snapshot file from disk (`loader.rs`).
//! - Validate task ids and report graph diagnostics (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{
    load_and_validate, load_from_path, parse_snapshot, resolve_snapshot_path, DEFAULT_SNAPSHOT_FILE,
};
pub use model::{DependsOn, ProjectSection, RawSnapshot, Snapshot, TaskRecord, ViewSection};
pub use validate::{diagnose, SnapshotDiagnostics};
