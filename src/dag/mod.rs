// src/dag/mod.rs

//! Weighted dependency DAG.
//!
//! - [`graph`] keeps task names in registration order and the dependency
//!   arcs between them; it also detects cycles.
//! - [`median`] computes the imputation value for tasks without effort.
//! - [`aggregate`] turns parsed edges into a [`MassGraph`].
//! - [`view`] holds the read-only node/edge view for the renderer.

pub mod aggregate;
pub mod graph;
pub mod median;
pub mod view;

pub use aggregate::{GraphAggregator, MassOptions};
pub use graph::{DependencyGraph, NodeId};
pub use median::median;
pub use view::{MassGraph, MassNode, NodeMetadata, RenderEdge};
