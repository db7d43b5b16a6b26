// src/engine/runtime.rs

use std::fmt;

use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::errors::Result;
use crate::render::Renderer;

use super::core::{CoreCommand, ViewerCore};
use super::ViewerEvent;

/// Drives the core in response to `ViewerEvent`s and delegates output to a
/// `Renderer`.
///
/// All semantics live in `ViewerCore`; this struct only reads events from
/// the channel and executes the commands the core returns.
pub struct Runtime<R: Renderer> {
    core: ViewerCore,
    event_rx: mpsc::Receiver<ViewerEvent>,
    renderer: R,
}

impl<R: Renderer> fmt::Debug for Runtime<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Runtime")
            .field("core", &self.core)
            .finish_non_exhaustive()
    }
}

impl<R: Renderer> Runtime<R> {
    pub fn new(core: ViewerCore, event_rx: mpsc::Receiver<ViewerEvent>, renderer: R) -> Self {
        Self {
            core,
            event_rx,
            renderer,
        }
    }

    /// Main event loop.
    ///
    /// Returns the core so callers (and tests) can inspect the final state.
    pub async fn run(mut self) -> Result<ViewerCore> {
        info!("taskline runtime started");

        loop {
            let event = match self.event_rx.recv().await {
                Some(e) => e,
                None => {
                    info!("runtime event channel closed; exiting");
                    break;
                }
            };

            debug!(?event, "runtime received event");

            let step = self.core.step(event);

            for command in step.commands {
                self.execute_command(command).await?;
            }

            if !step.keep_running {
                info!("core requested exit; stopping runtime");
                break;
            }
        }

        info!("runtime exiting");
        Ok(self.core)
    }

    async fn execute_command(&mut self, command: CoreCommand) -> Result<()> {
        match command {
            CoreCommand::Render(layout) => self.renderer.render(layout).await,
            CoreCommand::ReportError(message) => self.renderer.report_error(message).await,
            CoreCommand::RequestExit => {
                debug!("core issued RequestExit command");
                Ok(())
            }
        }
    }
}
