use std::str::FromStr;

use serde::Deserialize;

/// How a literal `0` in the `[effort|uncertainty]` suffix is interpreted.
///
/// - `Keep`: zero is a real value. `[0]` is a zero-effort task and `[5|0]`
///   is effort 5 with no uncertainty (default).
/// - `Drop`: zero counts as "not given", so a `[0]` task falls back to the
///   median like a task without metadata. Dropping the effort also drops the
///   uncertainty of that edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZeroMetadataPolicy {
    Keep,
    Drop,
}

impl Default for ZeroMetadataPolicy {
    fn default() -> Self {
        ZeroMetadataPolicy::Keep
    }
}

impl FromStr for ZeroMetadataPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "keep" => Ok(ZeroMetadataPolicy::Keep),
            "drop" => Ok(ZeroMetadataPolicy::Drop),
            other => Err(format!(
                "invalid zero_metadata: {other} (expected \"keep\" or \"drop\")"
            )),
        }
    }
}

/// Rendering used for the aggregated graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Node/edge JSON document consumed by the Sankey renderer.
    Json,
    /// Plain-text table for terminals.
    Text,
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Json
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "text" => Ok(OutputFormat::Text),
            other => Err(format!(
                "invalid output format: {other} (expected \"json\" or \"text\")"
            )),
        }
    }
}
