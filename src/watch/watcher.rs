// src/watch/watcher.rs

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::engine::ViewerEvent;
use crate::snapshot::{diagnose, load_and_validate};
use crate::watch::hash::ContentTracker;

/// Handle for the filesystem watcher.
///
/// This exists mainly so the underlying `RecommendedWatcher` is kept alive for
/// as long as needed. Dropping this handle will stop file watching.
pub struct WatcherHandle {
    _inner: RecommendedWatcher,
}

impl std::fmt::Debug for WatcherHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WatcherHandle").finish()
    }
}

/// Read and validate the snapshot at `path` and wrap the outcome in an event.
///
/// Graph diagnostics (dangling references, cycles) are logged here but never
/// turn a snapshot into a failure.
pub fn load_event(path: &Path, today: NaiveDate) -> ViewerEvent {
    match load_and_validate(path) {
        Ok(snapshot) => {
            let diagnostics = diagnose(&snapshot);
            debug!(
                tasks = snapshot.tasks.len(),
                dangling = diagnostics.dangling.len(),
                cycles = diagnostics.cycles.len(),
                "snapshot loaded"
            );
            ViewerEvent::SnapshotLoaded {
                snapshot: Box::new(snapshot),
                today,
            }
        }
        Err(err) => ViewerEvent::SnapshotFailed {
            message: format!("{}: {err}", path.display()),
        },
    }
}

/// Spawn a filesystem watcher that reloads the snapshot whenever its
/// content changes and sends the result to the runtime.
///
/// The parent directory is watched rather than the file itself, so editors
/// that save by writing a new file and renaming it over the old one are
/// still picked up.
pub fn spawn_watcher(
    snapshot_path: impl Into<PathBuf>,
    runtime_tx: mpsc::Sender<ViewerEvent>,
) -> Result<WatcherHandle> {
    let snapshot_path = snapshot_path.into();
    let file_name: OsString = snapshot_path
        .file_name()
        .map(|n| n.to_os_string())
        .with_context(|| format!("snapshot path {:?} has no file name", snapshot_path))?;

    let dir = match snapshot_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    };
    let dir = dir.canonicalize().unwrap_or(dir);

    // Channel from the blocking notify callback into the async world.
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<Event>();

    let mut watcher = RecommendedWatcher::new(
        move |res: notify::Result<Event>| match res {
            Ok(event) => {
                if let Err(err) = event_tx.send(event) {
                    eprintln!("taskline: failed to forward notify event: {err}");
                }
            }
            Err(err) => {
                eprintln!("taskline: file watch error: {err}");
            }
        },
        Config::default(),
    )?;

    watcher.watch(&dir, RecursiveMode::NonRecursive)?;

    info!("watching {:?} for changes", snapshot_path);

    let mut tracker = ContentTracker::new();
    // The initial snapshot has already been loaded by the caller.
    if let Err(e) = tracker.changed(&snapshot_path) {
        warn!("could not hash snapshot at startup: {e:#}");
    }

    tokio::spawn(async move {
        while let Some(event) = event_rx.recv().await {
            if matches!(event.kind, EventKind::Access(_)) {
                continue;
            }
            let touches_snapshot = event
                .paths
                .iter()
                .any(|p| p.file_name() == Some(file_name.as_os_str()));
            if !touches_snapshot {
                continue;
            }

            debug!(?event, "snapshot file event");

            if !snapshot_path.exists() {
                // Mid-replace or deleted; wait for the next event.
                tracker.reset();
                continue;
            }

            match tracker.changed(&snapshot_path) {
                Ok(false) => continue,
                Ok(true) => {}
                Err(e) => {
                    warn!("failed to hash snapshot: {e:#}");
                    continue;
                }
            }

            let reload = load_event(&snapshot_path, crate::today());
            if runtime_tx.send(reload).await.is_err() {
                debug!("runtime gone; stopping watcher loop");
                break;
            }
        }
        debug!("watcher event loop finished");
    });

    Ok(WatcherHandle { _inner: watcher })
}
