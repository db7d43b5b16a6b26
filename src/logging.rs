// src/logging.rs

//! `tracing` subscriber for the viewer.
//!
//! Diagnostics go to stderr; stdout carries only the chart. In `--watch`
//! mode the chart is redrawn over a cleared screen, so the fallback level
//! there is `warn` rather than `info` to keep reload chatter off the frame.

use anyhow::Result;
use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

use crate::cli::LogLevel;

/// Environment variable consulted when no `--log-level` flag is given.
pub const LOG_ENV_VAR: &str = "TASKLINE_LOG";

const CRATE_TARGET: &str = "taskline";

impl From<LogLevel> for Level {
    fn from(lvl: LogLevel) -> Self {
        match lvl {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}

/// Pick the level: the flag, then `TASKLINE_LOG`, then a mode default.
///
/// An unparseable env value is ignored.
pub fn resolve_level(cli_level: Option<LogLevel>, env_value: Option<&str>, watch: bool) -> Level {
    if let Some(lvl) = cli_level {
        return lvl.into();
    }
    env_value
        .and_then(parse_level_str)
        .unwrap_or(if watch { Level::WARN } else { Level::INFO })
}

/// Filter directive limiting output to this crate's targets.
pub fn crate_directive(level: Level) -> String {
    format!("{CRATE_TARGET}={}", level.as_str().to_ascii_lowercase())
}

pub fn parse_level_str(s: &str) -> Option<Level> {
    match s.trim().to_ascii_lowercase().as_str() {
        "error" => Some(Level::ERROR),
        "warn" | "warning" => Some(Level::WARN),
        "info" => Some(Level::INFO),
        "debug" => Some(Level::DEBUG),
        "trace" => Some(Level::TRACE),
        _ => None,
    }
}

/// Install the global subscriber. Call once, before the runtime starts.
pub fn init_logging(cli_level: Option<LogLevel>, watch: bool) -> Result<()> {
    let env_value = std::env::var(LOG_ENV_VAR).ok();
    let level = resolve_level(cli_level, env_value.as_deref(), watch);

    fmt()
        .with_env_filter(EnvFilter::new(crate_directive(level)))
        .with_target(watch)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}
