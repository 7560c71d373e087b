// src/engine/runtime.rs

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::errors::Result;
use crate::fs::FileSystem;
use crate::output::{OutputTarget, render_graph};
use crate::types::OutputFormat;

use super::RuntimeEvent;
use super::core::{OutlineSession, SessionStep};

/// Static settings for the runtime shell.
#[derive(Debug, Clone)]
pub struct RuntimeOptions {
    pub input: PathBuf,
    pub target: OutputTarget,
    pub format: OutputFormat,
    pub pretty: bool,
}

/// Async shell around [`OutlineSession`].
///
/// Reads `RuntimeEvent`s, loads the outline through a [`FileSystem`], and
/// writes each rebuilt graph to the output target. All evaluations happen on
/// this loop, one at a time.
pub struct Runtime {
    session: OutlineSession,
    event_rx: mpsc::Receiver<RuntimeEvent>,
    fs: Arc<dyn FileSystem>,
    options: RuntimeOptions,
}

impl fmt::Debug for Runtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Runtime")
            .field("session", &self.session)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl Runtime {
    pub fn new(
        session: OutlineSession,
        event_rx: mpsc::Receiver<RuntimeEvent>,
        fs: Arc<dyn FileSystem>,
        options: RuntimeOptions,
    ) -> Self {
        Self {
            session,
            event_rx,
            fs,
            options,
        }
    }

    /// Main event loop. Returns the session so callers can inspect it.
    pub async fn run(mut self) -> Result<OutlineSession> {
        info!("sankeydag runtime started");

        loop {
            let event = match self.event_rx.recv().await {
                Some(e) => e,
                None => {
                    info!("runtime event channel closed; exiting");
                    break;
                }
            };

            debug!(?event, "runtime received event");

            match event {
                RuntimeEvent::OutlineChanged => self.reevaluate()?,
                RuntimeEvent::ShutdownRequested => {
                    info!("shutdown requested; stopping runtime");
                    break;
                }
            }
        }

        info!("runtime exiting");
        Ok(self.session)
    }

    fn reevaluate(&mut self) -> Result<()> {
        let input = &self.options.input;
        if !self.fs.exists(input) {
            // Editors may briefly remove the file while saving.
            debug!(path = ?input, "outline missing; waiting for next change");
            return Ok(());
        }

        let text = match self.fs.read_to_string(input) {
            Ok(text) => text,
            Err(err) => {
                warn!(path = ?input, error = %err, "failed to read outline");
                return Ok(());
            }
        };

        match self.session.update(&text) {
            SessionStep::Rebuilt(graph) => {
                let rendered = render_graph(&graph, self.options.format, self.options.pretty)?;
                self.options.target.emit(self.fs.as_ref(), &rendered)?;
            }
            SessionStep::Unchanged | SessionStep::Rejected(_) => {}
        }
        Ok(())
    }
}
