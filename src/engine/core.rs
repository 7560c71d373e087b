// src/engine/core.rs

//! Pure core of watch mode.

use tracing::{debug, info, warn};

use crate::dag::{GraphAggregator, MassGraph};
use crate::errors::SankeyDagError;
use crate::outline::EdgeParser;
use crate::watch::content_hash;

/// Outcome of feeding one version of the outline to the session.
#[derive(Debug)]
pub enum SessionStep {
    /// Same text as the previous evaluation; nothing to do.
    Unchanged,
    /// New graph; it is now the last valid graph.
    Rebuilt(MassGraph),
    /// The text could not be turned into a graph. The last valid graph (if
    /// any) stays current.
    Rejected(SankeyDagError),
}

/// Evaluates successive versions of an outline.
///
/// Owns no IO. Each call to [`OutlineSession::update`] builds a fresh graph
/// from scratch; the only state carried between calls is the hash of the
/// last text seen and the last graph that was accepted.
#[derive(Debug)]
pub struct OutlineSession {
    parser: EdgeParser,
    aggregator: GraphAggregator,
    last_hash: Option<String>,
    last_valid: Option<MassGraph>,
    revisions: u64,
}

impl OutlineSession {
    pub fn new(parser: EdgeParser, aggregator: GraphAggregator) -> Self {
        Self {
            parser,
            aggregator,
            last_hash: None,
            last_valid: None,
            revisions: 0,
        }
    }

    /// Graph from the most recent accepted evaluation.
    pub fn last_valid(&self) -> Option<&MassGraph> {
        self.last_valid.as_ref()
    }

    /// Number of accepted evaluations so far.
    pub fn revisions(&self) -> u64 {
        self.revisions
    }

    pub fn update(&mut self, text: &str) -> SessionStep {
        let hash = content_hash(text);
        if self.last_hash.as_deref() == Some(hash.as_str()) {
            debug!("outline unchanged; skipping evaluation");
            return SessionStep::Unchanged;
        }
        self.last_hash = Some(hash);

        let edges = self.parser.parse(text);
        match self.aggregator.aggregate(&edges) {
            Ok(graph) => {
                self.revisions += 1;
                info!(
                    revision = self.revisions,
                    nodes = graph.nodes().len(),
                    edges = graph.edges().len(),
                    "graph rebuilt"
                );
                self.last_valid = Some(graph.clone());
                SessionStep::Rebuilt(graph)
            }
            Err(err) => {
                warn!(
                    error = %err,
                    keeping_previous = self.last_valid.is_some(),
                    "outline rejected"
                );
                SessionStep::Rejected(err)
            }
        }
    }
}
