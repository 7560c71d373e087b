// src/lib.rs

pub mod cli;
pub mod config;
pub mod dag;
pub mod engine;
pub mod errors;
pub mod fs;
pub mod logging;
pub mod outline;
pub mod output;
pub mod types;
pub mod watch;

use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::{ConfigFile, resolve_config};
use crate::dag::{GraphAggregator, MassGraph};
use crate::engine::{OutlineSession, Runtime, RuntimeEvent, RuntimeOptions};
use crate::fs::{FileSystem, RealFileSystem};
use crate::outline::EdgeParser;
use crate::output::{OutputTarget, render_edges, render_graph};

/// Parse `text` and aggregate it into a weighted DAG.
///
/// Pure: no IO, no global state. The same text and config always produce the
/// same graph.
pub fn build_graph(text: &str, cfg: &ConfigFile) -> errors::Result<MassGraph> {
    let edges = EdgeParser::new(cfg.parse_options()).parse(text);
    GraphAggregator::new(cfg.mass_options()).aggregate(&edges)
}

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading
/// - one-shot evaluation, or
/// - watch mode: file watcher + Ctrl-C handling + runtime loop
pub async fn run(args: CliArgs) -> Result<()> {
    let cfg = resolve_config(args.config.as_deref())?;
    let format = args.format.unwrap_or(cfg.output.format);
    let target = OutputTarget::from_arg(args.output.clone());
    let fs: Arc<dyn FileSystem> = Arc::new(RealFileSystem);

    if args.watch {
        if args.reads_stdin() {
            bail!("--watch needs an outline file, not stdin");
        }
        return run_watch(args, cfg, format, target, fs).await;
    }

    let text = read_input(&args, fs.as_ref())?;

    if args.edges_only {
        let edges = EdgeParser::new(cfg.parse_options()).parse(&text);
        let rendered = render_edges(&edges, cfg.output.pretty)?;
        target.emit(fs.as_ref(), &rendered)?;
        debug!(edges = edges.len(), "edges-only run complete");
        return Ok(());
    }

    let graph = build_graph(&text, &cfg)?;
    info!(
        nodes = graph.nodes().len(),
        edges = graph.edges().len(),
        median = graph.median(),
        "graph built"
    );
    let rendered = render_graph(&graph, format, cfg.output.pretty)?;
    target.emit(fs.as_ref(), &rendered)?;
    Ok(())
}

async fn run_watch(
    args: CliArgs,
    cfg: ConfigFile,
    format: types::OutputFormat,
    target: OutputTarget,
    fs: Arc<dyn FileSystem>,
) -> Result<()> {
    let input = PathBuf::from(&args.input);

    // Runtime event channel.
    let (rt_tx, rt_rx) = mpsc::channel::<RuntimeEvent>(64);

    let _watcher_handle = watch::spawn_watcher(input.clone(), rt_tx.clone())?;

    // Ctrl-C → graceful shutdown.
    {
        let tx = rt_tx.clone();
        tokio::spawn(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                eprintln!("failed to listen for Ctrl+C: {e}");
                return;
            }
            let _ = tx.send(RuntimeEvent::ShutdownRequested).await;
        });
    }

    // Initial evaluation before the first edit.
    rt_tx.send(RuntimeEvent::OutlineChanged).await?;

    let session = OutlineSession::new(
        EdgeParser::new(cfg.parse_options()),
        GraphAggregator::new(cfg.mass_options()),
    );
    let options = RuntimeOptions {
        input,
        target,
        format,
        pretty: cfg.output.pretty,
    };

    let runtime = Runtime::new(session, rt_rx, fs, options);
    let session = runtime.run().await?;
    debug!(revisions = session.revisions(), "watch mode finished");
    Ok(())
}

fn read_input(args: &CliArgs, fs: &dyn FileSystem) -> Result<String> {
    if args.reads_stdin() {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("reading outline from stdin")?;
        return Ok(text);
    }

    fs.read_to_string(Path::new(&args.input))
        .with_context(|| format!("reading outline at {:?}", args.input))
}
