// src/outline/edge.rs

use serde::Serialize;

/// Canonical task name type used throughout the crate.
pub type TaskName = String;

/// Optional `[effort|uncertainty]` data attached to an edge.
///
/// The metadata describes the *source* task of the edge (the right-hand side
/// of `>`). Uncertainty only exists together with an effort; the constructor
/// enforces that.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    effort: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    uncertainty: Option<f64>,
}

impl EdgeMetadata {
    /// Build metadata, discarding `uncertainty` when no `effort` is given.
    pub fn new(effort: Option<u64>, uncertainty: Option<f64>) -> Self {
        Self {
            effort,
            uncertainty: effort.and(uncertainty),
        }
    }

    /// Metadata with an effort and no uncertainty (`[effort]`).
    pub fn with_effort(effort: u64) -> Self {
        Self::new(Some(effort), None)
    }

    pub fn effort(&self) -> Option<u64> {
        self.effort
    }

    pub fn uncertainty(&self) -> Option<f64> {
        self.uncertainty
    }

    pub fn is_empty(&self) -> bool {
        self.effort.is_none()
    }

    /// Risk-adjusted mass: `effort * (1 + uncertainty)`.
    ///
    /// `None` when no effort was given; such tasks get the median later.
    pub fn own_mass(&self) -> Option<f64> {
        self.effort.map(|effort| {
            let effort = effort as f64;
            effort + effort * self.uncertainty.unwrap_or(0.0)
        })
    }
}

/// One `* target > source` directive.
///
/// Edge direction follows dependency order: `source` must be completed before
/// `target`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge {
    pub source: TaskName,
    pub target: TaskName,
    pub metadata: EdgeMetadata,
}

impl Edge {
    pub fn new<S, T>(source: S, target: T, metadata: EdgeMetadata) -> Self
    where
        S: Into<TaskName>,
        T: Into<TaskName>,
    {
        Self {
            source: source.into(),
            target: target.into(),
            metadata,
        }
    }

    /// Edge without effort data.
    pub fn plain<S, T>(source: S, target: T) -> Self
    where
        S: Into<TaskName>,
        T: Into<TaskName>,
    {
        Self::new(source, target, EdgeMetadata::default())
    }
}
