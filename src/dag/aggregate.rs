// src/dag/aggregate.rs

use tracing::{debug, warn};

use crate::dag::graph::DependencyGraph;
use crate::dag::median::median;
use crate::dag::view::{MassGraph, MassNode, NodeMetadata, RenderEdge};
use crate::errors::Result;
use crate::outline::edge::{Edge, EdgeMetadata};

/// Knobs for mass computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MassOptions {
    /// Median used when no edge carries an effort.
    pub default_median: f64,
}

impl Default for MassOptions {
    fn default() -> Self {
        Self { default_median: 1.0 }
    }
}

/// Builds a [`MassGraph`] from parsed edges.
///
/// Steps:
/// 1. register every endpoint in first-seen order and record own masses
/// 2. reject cyclic input
/// 3. give tasks without effort the median own mass
/// 4. walk the topological order and accumulate dependency masses
/// 5. emit one render edge per input edge, valued at its source's mass
#[derive(Debug, Clone, Default)]
pub struct GraphAggregator {
    options: MassOptions,
}

impl GraphAggregator {
    pub fn new(options: MassOptions) -> Self {
        Self { options }
    }

    pub fn aggregate(&self, edges: &[Edge]) -> Result<MassGraph> {
        let mut graph = DependencyGraph::new();
        let mut known: Vec<Option<EdgeMetadata>> = Vec::new();
        let mut samples: Vec<f64> = Vec::new();
        let mut endpoints = Vec::with_capacity(edges.len());

        for edge in edges {
            let source = graph.register(&edge.source);
            let target = graph.register(&edge.target);
            known.resize(graph.len(), None);
            graph.add_dependency(source, target);
            endpoints.push((source, target));

            let Some(mass) = edge.metadata.own_mass() else {
                continue;
            };
            samples.push(mass);

            match known[source] {
                None => known[source] = Some(edge.metadata),
                Some(first) if first != edge.metadata => {
                    warn!(
                        task = %edge.source,
                        kept = ?first,
                        ignored = ?edge.metadata,
                        "task has conflicting effort data; keeping the first"
                    );
                }
                Some(_) => {}
            }
        }

        let order = graph.topological_order()?;

        let median = median(&mut samples).unwrap_or(self.options.default_median);
        debug!(nodes = graph.len(), edges = edges.len(), median, "imputing missing masses");

        let mut nodes: Vec<MassNode> = graph
            .names()
            .zip(known.iter())
            .map(|(name, meta)| MassNode {
                name: name.to_string(),
                metadata: own_metadata(*meta, median),
            })
            .collect();

        for &id in &order {
            let downstream: f64 = graph
                .dependencies_of(id)
                .into_iter()
                .map(|dep| nodes[dep].metadata.mass)
                .fold(0.0, |acc, mass| acc + mass);
            let meta = &mut nodes[id].metadata;
            meta.downstream_mass = downstream;
            meta.mass = meta.own_mass + downstream;
        }

        let render_edges = endpoints
            .into_iter()
            .map(|(source, target)| RenderEdge {
                source,
                target,
                value: nodes[source].metadata.mass,
            })
            .collect();

        Ok(MassGraph::new(nodes, render_edges, order, graph.into_index(), median))
    }
}

fn own_metadata(meta: Option<EdgeMetadata>, median: f64) -> NodeMetadata {
    match meta.and_then(|m| m.own_mass().map(|mass| (m, mass))) {
        Some((m, own_mass)) => NodeMetadata {
            effort: m.effort(),
            uncertainty: Some(m.uncertainty().unwrap_or(0.0)),
            own_mass,
            downstream_mass: 0.0,
            mass: own_mass,
            imputed: false,
        },
        None => NodeMetadata {
            effort: None,
            uncertainty: None,
            own_mass: median,
            downstream_mass: 0.0,
            mass: median,
            imputed: true,
        },
    }
}
