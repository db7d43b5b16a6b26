// src/snapshot/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::errors::Result;
use crate::snapshot::model::{RawSnapshot, Snapshot};

/// Name of the snapshot file looked up in the working directory by default.
pub const DEFAULT_SNAPSHOT_FILE: &str = "Taskline.toml";

/// Load a snapshot file and return the raw `RawSnapshot`.
///
/// This only performs TOML deserialization; it does **not** validate task
/// ids. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawSnapshot> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    parse_snapshot(&contents)
}

/// Parse snapshot TOML that is already in memory.
pub fn parse_snapshot(contents: &str) -> Result<RawSnapshot> {
    let raw: RawSnapshot = toml::from_str(contents)?;
    debug!(tasks = raw.task.len(), users = raw.users.len(), "parsed snapshot");
    Ok(raw)
}

/// Load a snapshot file and validate it.
///
/// This is the entry point the rest of the application uses:
///
/// - Reads TOML.
/// - Applies defaults (handled by `serde` + `Default` impls).
/// - Checks task ids are present and unique.
///
/// Dangling dependencies and cycles are *not* errors; see
/// [`crate::snapshot::diagnose`].
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<Snapshot> {
    let raw = load_from_path(&path)?;
    Snapshot::try_from(raw)
}

/// Resolve the snapshot path: an explicit path wins, otherwise
/// `Taskline.toml` in the current working directory.
pub fn resolve_snapshot_path(explicit: Option<&str>) -> PathBuf {
    match explicit {
        Some(p) => PathBuf::from(p),
        None => PathBuf::from(DEFAULT_SNAPSHOT_FILE),
    }
}
