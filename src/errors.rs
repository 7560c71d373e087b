// src/errors.rs

//! Crate-wide error type and result alias.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SankeyDagError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// The dependency graph contains at least one cycle.
    ///
    /// `cycle` lists one offending loop in dependency order, with the first
    /// node repeated at the end (`["A", "B", "A"]`).
    #[error(
        "the graph has cycles so it can't be visualized as a Sankey diagram: {}",
        .cycle.join(" -> ")
    )]
    CyclicGraph { cycle: Vec<String> },

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("File watch error: {0}")]
    WatchError(#[from] notify::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, SankeyDagError>;
