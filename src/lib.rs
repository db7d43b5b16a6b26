// src/lib.rs

pub mod cli;
pub mod engine;
pub mod errors;
pub mod logging;
pub mod render;
pub mod snapshot;
pub mod timeline;
pub mod types;
pub mod watch;

use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::engine::{Runtime, ViewerCore, ViewerEvent, ViewerOptions};
use crate::render::{render_dry_run, TerminalRenderer};
use crate::snapshot::{diagnose, load_and_validate, resolve_snapshot_path};

/// The date layouts are computed for: the local calendar date.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - snapshot loading
/// - view state from `[view]` + CLI flags
/// - core / runtime / terminal renderer
/// - (optional) file watcher
/// - Ctrl-C handling
pub async fn run(args: CliArgs) -> Result<()> {
    let snapshot_path = resolve_snapshot_path(args.snapshot.as_deref());
    let snapshot = load_and_validate(&snapshot_path)
        .with_context(|| format!("failed to load snapshot {}", snapshot_path.display()))?;
    let diagnostics = diagnose(&snapshot);

    if args.dry_run {
        print!("{}", render_dry_run(&snapshot, &diagnostics));
        debug!("dry-run complete (nothing drawn)");
        return Ok(());
    }

    let view = args.view_state(&snapshot);
    info!(mode = ?view.mode, watch = args.watch, "starting timeline viewer");

    let (rt_tx, rt_rx) = mpsc::channel::<ViewerEvent>(16);

    // Optional file watcher (only in --watch mode).
    let _watcher_handle = if args.watch {
        Some(crate::watch::spawn_watcher(&snapshot_path, rt_tx.clone())?)
    } else {
        None
    };

    // Ctrl-C → graceful shutdown.
    {
        let tx = rt_tx.clone();
        tokio::spawn(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                eprintln!("failed to listen for Ctrl+C: {e}");
                return;
            }
            let _ = tx.send(ViewerEvent::ShutdownRequested).await;
        });
    }

    rt_tx
        .send(ViewerEvent::SnapshotLoaded {
            snapshot: Box::new(snapshot),
            today: today(),
        })
        .await
        .map_err(|_| anyhow!("runtime channel closed before the first snapshot"))?;

    let options = ViewerOptions {
        exit_after_first: !args.watch,
    };
    let core = ViewerCore::new(view, options);
    let renderer = TerminalRenderer::new(args.columns, args.watch);

    let core = Runtime::new(core, rt_rx, renderer).run().await?;
    debug!(
        renders = core.renders(),
        cache_hits = core.cache().hits(),
        "viewer finished"
    );
    Ok(())
}
