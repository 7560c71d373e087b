// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::types::OutputFormat;

/// Command-line arguments for `sankeydag`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "sankeydag",
    version,
    about = "Turn a `* Child > Parent [effort|uncertainty]` outline into a weighted DAG for Sankey diagrams.",
    long_about = None
)]
pub struct CliArgs {
    /// Outline file to read, or `-` for stdin.
    #[arg(value_name = "INPUT")]
    pub input: String,

    /// Path to the config file (TOML).
    ///
    /// If omitted, `Sankeydag.toml` in the current working directory is used
    /// when it exists; otherwise built-in defaults apply.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format; overrides `[output].format`.
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Write the rendering to this file instead of stdout.
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Print the parsed edges as JSON and stop (no aggregation, no cycle
    /// check). Cannot be combined with `--watch` or `--format`.
    #[arg(long, conflicts_with_all = ["watch", "format"])]
    pub edges_only: bool,

    /// Keep running and re-evaluate the outline whenever INPUT changes.
    #[arg(long)]
    pub watch: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `SANKEYDAG_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

impl CliArgs {
    /// Whether the outline is read from stdin.
    pub fn reads_stdin(&self) -> bool {
        self.input == "-"
    }
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
