// src/engine/mod.rs

//! Re-evaluation engine for watch mode.
//!
//! The host re-runs the whole pipeline whenever the outline changes. This
//! module splits that into:
//! - a synchronous, deterministic [`core::OutlineSession`] that evaluates text
//!   and remembers the last valid graph
//! - an async IO shell ([`runtime::Runtime`]) that reads events from a
//!   channel, loads the outline and writes renderings
//!
//! The core is unit tested without Tokio, channels or the filesystem.

/// Events flowing into the runtime from the watcher and signal handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeEvent {
    /// The outline file may have new contents.
    OutlineChanged,
    /// Graceful shutdown requested (e.g. Ctrl-C).
    ShutdownRequested,
}

pub mod core;
pub mod runtime;

pub use core::{OutlineSession, SessionStep};
pub use runtime::{Runtime, RuntimeOptions};
