#![allow(dead_code)]

use sankeydag::config::{ConfigFile, RawConfigFile};
use sankeydag::types::{OutputFormat, ZeroMetadataPolicy};

/// Builder for outline text, one directive per call.
///
/// ```ignore
/// let text = OutlineBuilder::new()
///     .heading("Plan")
///     .depends("Design", "Research", Some(5), Some(0.1))
///     .build();
/// ```
#[derive(Debug, Clone, Default)]
pub struct OutlineBuilder {
    lines: Vec<String>,
}

impl OutlineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// `* target > source [effort|uncertainty]`
    pub fn depends(
        mut self,
        target: &str,
        source: &str,
        effort: Option<u64>,
        uncertainty: Option<f64>,
    ) -> Self {
        let suffix = match (effort, uncertainty) {
            (Some(e), Some(u)) => format!(" [{e}|{u}]"),
            (Some(e), None) => format!(" [{e}]"),
            _ => String::new(),
        };
        self.lines.push(format!("* {target} > {source}{suffix}"));
        self
    }

    /// Directive without metadata.
    pub fn edge(self, target: &str, source: &str) -> Self {
        self.depends(target, source, None, None)
    }

    /// Directive with an effort only.
    pub fn effort(self, target: &str, source: &str, effort: u64) -> Self {
        self.depends(target, source, Some(effort), None)
    }

    pub fn heading(mut self, title: &str) -> Self {
        self.lines.push(format!("# {title}"));
        self
    }

    /// Free text that is not a directive.
    pub fn prose(mut self, text: &str) -> Self {
        self.lines.push(text.to_string());
        self
    }

    pub fn build(self) -> String {
        let mut text = self.lines.join("\n");
        text.push('\n');
        text
    }
}

/// Builder for `ConfigFile` to simplify test setup.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile::default(),
        }
    }

    pub fn bullet(mut self, bullet: &str) -> Self {
        self.config.parse.bullet = bullet.to_string();
        self
    }

    pub fn separator(mut self, separator: &str) -> Self {
        self.config.parse.separator = separator.to_string();
        self
    }

    pub fn zero_metadata(mut self, policy: ZeroMetadataPolicy) -> Self {
        self.config.parse.zero_metadata = policy;
        self
    }

    pub fn default_median(mut self, value: f64) -> Self {
        self.config.mass.default_median = value;
        self
    }

    pub fn format(mut self, format: OutputFormat) -> Self {
        self.config.output.format = format;
        self
    }

    pub fn pretty(mut self, pretty: bool) -> Self {
        self.config.output.pretty = pretty;
        self
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}
