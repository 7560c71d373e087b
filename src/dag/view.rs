// src/dag/view.rs

//! Read-only result of aggregation, handed to the rendering layer.

use std::collections::HashMap;

use serde::Serialize;

use crate::dag::graph::NodeId;
use crate::outline::edge::TaskName;

/// Mass figures attached to a node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effort: Option<u64>,
    /// `0` when an effort was given without uncertainty; absent when the
    /// task never received an effort.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uncertainty: Option<f64>,
    pub own_mass: f64,
    pub downstream_mass: f64,
    pub mass: f64,
    /// Own mass was filled in with the median.
    pub imputed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MassNode {
    pub name: TaskName,
    pub metadata: NodeMetadata,
}

impl MassNode {
    pub fn mass(&self) -> f64 {
        self.metadata.mass
    }
}

/// One directive as drawn: `value` is the total mass of the source node.
///
/// `source` and `target` index into [`MassGraph::nodes`], so every edge that
/// touches a task refers to the same node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderEdge {
    pub source: NodeId,
    pub target: NodeId,
    pub value: f64,
}

/// Nodes in registration order, edges in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct MassGraph {
    nodes: Vec<MassNode>,
    edges: Vec<RenderEdge>,
    order: Vec<NodeId>,
    index: HashMap<TaskName, NodeId>,
    median: f64,
}

impl MassGraph {
    pub(crate) fn new(
        nodes: Vec<MassNode>,
        edges: Vec<RenderEdge>,
        order: Vec<NodeId>,
        index: HashMap<TaskName, NodeId>,
        median: f64,
    ) -> Self {
        Self {
            nodes,
            edges,
            order,
            index,
            median,
        }
    }

    pub fn nodes(&self) -> &[MassNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[RenderEdge] {
        &self.edges
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn id_of(&self, name: &str) -> Option<NodeId> {
        self.index.get(name).copied()
    }

    pub fn node(&self, name: &str) -> Option<&MassNode> {
        self.id_of(name).map(|id| &self.nodes[id])
    }

    pub fn source_of(&self, edge: &RenderEdge) -> &MassNode {
        &self.nodes[edge.source]
    }

    pub fn target_of(&self, edge: &RenderEdge) -> &MassNode {
        &self.nodes[edge.target]
    }

    /// Nodes in the order masses were propagated.
    pub fn topological_order(&self) -> impl Iterator<Item = &MassNode> {
        self.order.iter().map(|&id| &self.nodes[id])
    }

    /// Median own mass used for tasks without effort data.
    pub fn median(&self) -> f64 {
        self.median
    }
}
