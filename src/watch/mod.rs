// src/watch/mod.rs

//! File watching and change detection.
//!
//! This module is responsible for:
//! - Wiring up a cross-platform filesystem watcher (`notify`) on the outline
//!   file.
//! - Content hashing, so saving the same text twice does not trigger a new
//!   evaluation.
//!
//! It does **not** know about graphs; it only turns filesystem changes into
//! runtime events.

pub mod hash;
pub mod watcher;

pub use hash::content_hash;
pub use watcher::{WatcherHandle, is_outline_event, spawn_watcher};
