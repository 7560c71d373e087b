// src/outline/parser.rs

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, trace};

use crate::outline::edge::{Edge, EdgeMetadata};
use crate::types::ZeroMetadataPolicy;

/// `Name [effort|uncertainty]`, uncertainty may be fractional.
static EFFORT_AND_UNCERTAINTY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<name>.+?)\s+\[(?P<effort>\d+)\|(?P<uncertainty>\d+(?:\.\d+)?)\]$")
        .expect("effort/uncertainty pattern is valid")
});

/// `Name [effort]`.
static EFFORT_ONLY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<name>.+?)\s+\[(?P<effort>\d+)\]$").expect("effort pattern is valid")
});

/// Knobs for the outline syntax.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Prefix that marks a line as a directive. Default `"* "`.
    pub bullet: String,
    /// Literal between target and source. Default `" > "`.
    pub separator: String,
    pub zero_metadata: ZeroMetadataPolicy,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            bullet: "* ".to_string(),
            separator: " > ".to_string(),
            zero_metadata: ZeroMetadataPolicy::default(),
        }
    }
}

/// Result of looking at a single line.
#[derive(Debug, PartialEq)]
enum LineOutcome {
    Edge(Edge),
    /// Not a directive at all (prose, headings, blank lines).
    Prose,
    /// Looked like a directive but did not fit the grammar.
    Skipped(&'static str),
}

/// Turns outline text into an ordered list of [`Edge`]s.
///
/// Parsing is permissive: lines that are not directives, or directives that
/// do not fit the grammar, are dropped without an error. Skipped directives
/// are reported at `debug` level with their line number.
#[derive(Debug, Clone, Default)]
pub struct EdgeParser {
    options: ParseOptions,
}

impl EdgeParser {
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parse every directive in `text`, preserving line order.
    pub fn parse(&self, text: &str) -> Vec<Edge> {
        let mut edges = Vec::new();
        let mut skipped = 0usize;

        for (idx, line) in text.lines().enumerate() {
            match self.parse_line(line) {
                LineOutcome::Edge(edge) => {
                    trace!(line = idx + 1, source = %edge.source, target = %edge.target, "parsed edge");
                    edges.push(edge);
                }
                LineOutcome::Prose => {}
                LineOutcome::Skipped(reason) => {
                    skipped += 1;
                    debug!(line = idx + 1, reason, "skipping malformed directive");
                }
            }
        }

        debug!(edges = edges.len(), skipped, "parsed outline");
        edges
    }

    fn parse_line(&self, line: &str) -> LineOutcome {
        let Some(rest) = line.strip_prefix(self.options.bullet.as_str()) else {
            return LineOutcome::Prose;
        };

        let parts: Vec<&str> = rest.trim().split(self.options.separator.as_str()).collect();
        let [target, source] = parts.as_slice() else {
            return LineOutcome::Skipped("expected exactly one separator");
        };

        let target = target.trim();
        let mut source = source.trim();
        let mut effort: Option<u64> = None;
        let mut uncertainty: Option<f64> = None;

        if source.contains('[') && source.contains(']') {
            let pattern: &Regex = if source.contains('|') {
                &*EFFORT_AND_UNCERTAINTY
            } else {
                &*EFFORT_ONLY
            };

            let Some(caps) = pattern.captures(source) else {
                return LineOutcome::Skipped("metadata does not match [effort] or [effort|uncertainty]");
            };

            match caps["effort"].parse::<u64>() {
                Ok(value) => effort = Some(value),
                Err(_) => return LineOutcome::Skipped("effort out of range"),
            }
            if let Some(raw) = caps.name("uncertainty") {
                match raw.as_str().parse::<f64>() {
                    Ok(value) if value.is_finite() => uncertainty = Some(value),
                    _ => return LineOutcome::Skipped("invalid uncertainty"),
                }
            }
            if let Some(name) = caps.name("name") {
                source = name.as_str();
            }
        }

        if target.is_empty() || source.is_empty() {
            return LineOutcome::Skipped("empty task name");
        }

        if self.options.zero_metadata == ZeroMetadataPolicy::Drop {
            if effort == Some(0) {
                effort = None;
            }
            if uncertainty == Some(0.0) {
                uncertainty = None;
            }
        }

        LineOutcome::Edge(Edge::new(
            source,
            target,
            EdgeMetadata::new(effort, uncertainty),
        ))
    }
}
