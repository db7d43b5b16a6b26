// src/render/backend.rs

//! Pluggable render backend abstraction.
//!
//! The runtime talks to a `Renderer` instead of writing to stdout directly.
//! This makes it easy to swap in a recording renderer in tests while keeping
//! the terminal output in [`TerminalRenderer`].

use std::future::Future;
use std::io::Write;
use std::pin::Pin;
use std::sync::Arc;

use anyhow::Context;

use crate::errors::Result;
use crate::render::text::render_text;
use crate::timeline::TimelineLayout;

/// Trait abstracting where layouts end up.
///
/// Production code uses [`TerminalRenderer`]; tests can provide their own
/// implementation that only records what it was given.
pub trait Renderer: Send {
    /// Show a freshly computed layout.
    fn render(
        &mut self,
        layout: Arc<TimelineLayout>,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>>;

    /// Show a problem with the current snapshot. The previous layout stays
    /// valid.
    fn report_error(
        &mut self,
        message: String,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>>;
}

/// Writes the text chart to stdout and problems to stderr.
#[derive(Debug, Clone)]
pub struct TerminalRenderer {
    columns: usize,
    /// Clear the screen before each frame (watch mode).
    clear: bool,
}

impl TerminalRenderer {
    pub fn new(columns: usize, clear: bool) -> Self {
        Self { columns, clear }
    }
}

impl Renderer for TerminalRenderer {
    fn render(
        &mut self,
        layout: Arc<TimelineLayout>,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>> {
        let columns = self.columns;
        let clear = self.clear;

        Box::pin(async move {
            let text = render_text(&layout, columns);
            let mut stdout = std::io::stdout();
            if clear {
                // ANSI: clear screen, cursor home.
                write!(stdout, "\x1b[2J\x1b[H")?;
            }
            stdout.write_all(text.as_bytes())?;
            stdout.flush().context("flushing stdout")?;
            Ok(())
        })
    }

    fn report_error(
        &mut self,
        message: String,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>> {
        Box::pin(async move {
            eprintln!("taskline: {message}");
            Ok(())
        })
    }
}
