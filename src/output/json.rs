// src/output/json.rs

use serde::Serialize;

use crate::dag::{MassGraph, NodeMetadata};
use crate::errors::Result;
use crate::outline::{Edge, EdgeMetadata};

/// Wire form of a [`MassGraph`].
///
/// Edges name their endpoints; the renderer resolves nodes by `name`.
#[derive(Debug, Serialize)]
pub struct GraphDocument<'a> {
    pub nodes: Vec<NodeDocument<'a>>,
    pub edges: Vec<EdgeDocument<'a>>,
}

#[derive(Debug, Serialize)]
pub struct NodeDocument<'a> {
    pub name: &'a str,
    pub metadata: &'a NodeMetadata,
}

#[derive(Debug, Serialize)]
pub struct EdgeDocument<'a> {
    pub source: &'a str,
    pub target: &'a str,
    pub value: f64,
}

impl<'a> From<&'a MassGraph> for GraphDocument<'a> {
    fn from(graph: &'a MassGraph) -> Self {
        let nodes = graph
            .nodes()
            .iter()
            .map(|node| NodeDocument {
                name: &node.name,
                metadata: &node.metadata,
            })
            .collect();

        let edges = graph
            .edges()
            .iter()
            .map(|edge| EdgeDocument {
                source: &graph.source_of(edge).name,
                target: &graph.target_of(edge).name,
                value: edge.value,
            })
            .collect();

        Self { nodes, edges }
    }
}

/// Parsed edge plus its derived own mass.
#[derive(Debug, Serialize)]
struct EdgeRecord<'a> {
    source: &'a str,
    target: &'a str,
    metadata: EdgeMetadataRecord<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EdgeMetadataRecord<'a> {
    #[serde(flatten)]
    given: &'a EdgeMetadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    own_mass: Option<f64>,
}

pub fn graph_to_json(graph: &MassGraph, pretty: bool) -> Result<String> {
    to_json(&GraphDocument::from(graph), pretty)
}

pub fn edges_to_json(edges: &[Edge], pretty: bool) -> Result<String> {
    let records: Vec<EdgeRecord<'_>> = edges
        .iter()
        .map(|edge| EdgeRecord {
            source: &edge.source,
            target: &edge.target,
            metadata: EdgeMetadataRecord {
                given: &edge.metadata,
                own_mass: edge.metadata.own_mass(),
            },
        })
        .collect();
    to_json(&records, pretty)
}

fn to_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(rendered)
}
