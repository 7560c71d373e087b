// src/output/mod.rs

//! Rendering of parsed edges and aggregated graphs.
//!
//! - [`json`] produces the node/edge document the Sankey renderer consumes.
//! - [`text`] produces a terminal table.

pub mod json;
pub mod text;

use std::path::PathBuf;

use crate::dag::MassGraph;
use crate::errors::Result;
use crate::fs::FileSystem;
use crate::outline::Edge;
use crate::types::OutputFormat;

pub use json::{GraphDocument, edges_to_json, graph_to_json};
pub use text::graph_to_text;

/// Render an aggregated graph in the requested format.
pub fn render_graph(graph: &MassGraph, format: OutputFormat, pretty: bool) -> Result<String> {
    match format {
        OutputFormat::Json => graph_to_json(graph, pretty),
        OutputFormat::Text => Ok(graph_to_text(graph)),
    }
}

/// Render parsed edges (always JSON).
pub fn render_edges(edges: &[Edge], pretty: bool) -> Result<String> {
    edges_to_json(edges, pretty)
}

/// Where renderings go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    /// Rewritten on every emit.
    File(PathBuf),
}

impl OutputTarget {
    pub fn from_arg(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => OutputTarget::File(path),
            None => OutputTarget::Stdout,
        }
    }

    pub fn emit(&self, fs: &dyn FileSystem, rendered: &str) -> Result<()> {
        match self {
            OutputTarget::Stdout => {
                println!("{rendered}");
                Ok(())
            }
            OutputTarget::File(path) => {
                let mut contents = rendered.to_string();
                if !contents.ends_with('\n') {
                    contents.push('\n');
                }
                fs.write(path, contents.as_bytes())?;
                Ok(())
            }
        }
    }
}
