// src/watch/watcher.rs

use std::path::{Path, PathBuf};

use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::engine::RuntimeEvent;
use crate::errors::Result;

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

/// Watch `input` and send `RuntimeEvent::OutlineChanged` whenever it is
/// written or re-created.
///
/// The parent directory is watched (non-recursively) rather than the file
/// itself, so editors that save by renaming a temp file over the original
/// keep being observed.
pub fn spawn_watcher(
    input: impl Into<PathBuf>,
    runtime_tx: mpsc::Sender<RuntimeEvent>,
) -> Result<WatcherHandle> {
    let input = input.into();
    let input = input.canonicalize().unwrap_or(input);
    let dir = match input.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    // Channel from the blocking notify callback into the async world.
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<Event>();

    let mut watcher = RecommendedWatcher::new(
        move |res: notify::Result<Event>| match res {
            Ok(event) => {
                if let Err(err) = event_tx.send(event) {
                    eprintln!("sankeydag: failed to forward notify event: {err}");
                }
            }
            Err(err) => {
                eprintln!("sankeydag: file watch error: {err}");
            }
        },
        Config::default(),
    )?;

    watcher.watch(&dir, RecursiveMode::NonRecursive)?;
    info!(path = ?input, "watching outline");

    tokio::spawn(async move {
        while let Some(event) = event_rx.recv().await {
            if !is_outline_event(&event, &input) {
                continue;
            }
            debug!(kind = ?event.kind, "outline changed on disk");
            if runtime_tx.send(RuntimeEvent::OutlineChanged).await.is_err() {
                warn!("runtime channel closed; stopping watcher loop");
                break;
            }
        }
        debug!("watcher event loop finished");
    });

    Ok(WatcherHandle { _inner: watcher })
}

/// Whether `event` is a content change (create/modify) touching `input`.
pub fn is_outline_event(event: &Event, input: &Path) -> bool {
    if !matches!(event.kind, EventKind::Create(_) | EventKind::Modify(_)) {
        return false;
    }
    event.paths.iter().any(|path| same_file(path, input))
}

fn same_file(candidate: &Path, input: &Path) -> bool {
    if candidate == input {
        return true;
    }
    candidate
        .canonicalize()
        .map(|resolved| resolved == input)
        .unwrap_or(false)
}
