// src/config/model.rs

use serde::Deserialize;

use crate::dag::MassOptions;
use crate::outline::ParseOptions;
use crate::types::{OutputFormat, ZeroMetadataPolicy};

/// Configuration as read from a TOML file, before validation.
///
/// ```toml
/// [parse]
/// bullet = "* "
/// separator = " > "
/// zero_metadata = "keep"
///
/// [mass]
/// default_median = 1.0
///
/// [output]
/// format = "json"
/// pretty = true
/// ```
///
/// All sections are optional and have reasonable defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfigFile {
    #[serde(default)]
    pub parse: ParseSection,

    #[serde(default)]
    pub mass: MassSection,

    #[serde(default)]
    pub output: OutputSection,
}

/// Validated configuration.
///
/// Construct it through `ConfigFile::try_from(raw)` so the invariants in
/// `validate.rs` always hold.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub parse: ParseSection,
    pub mass: MassSection,
    pub output: OutputSection,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(
        parse: ParseSection,
        mass: MassSection,
        output: OutputSection,
    ) -> Self {
        Self {
            parse,
            mass,
            output,
        }
    }

    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            bullet: self.parse.bullet.clone(),
            separator: self.parse.separator.clone(),
            zero_metadata: self.parse.zero_metadata,
        }
    }

    pub fn mass_options(&self) -> MassOptions {
        MassOptions {
            default_median: self.mass.default_median,
        }
    }
}

impl Default for ConfigFile {
    fn default() -> Self {
        let raw = RawConfigFile::default();
        Self::new_unchecked(raw.parse, raw.mass, raw.output)
    }
}

/// `[parse]` section: outline syntax.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParseSection {
    /// Prefix marking a directive line.
    #[serde(default = "default_bullet")]
    pub bullet: String,

    /// Literal between the dependent task and its dependency.
    #[serde(default = "default_separator")]
    pub separator: String,

    /// `"keep"` (default) or `"drop"`; see [`ZeroMetadataPolicy`].
    #[serde(default)]
    pub zero_metadata: ZeroMetadataPolicy,
}

fn default_bullet() -> String {
    "* ".to_string()
}

fn default_separator() -> String {
    " > ".to_string()
}

impl Default for ParseSection {
    fn default() -> Self {
        Self {
            bullet: default_bullet(),
            separator: default_separator(),
            zero_metadata: ZeroMetadataPolicy::default(),
        }
    }
}

/// `[mass]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MassSection {
    /// Own mass for tasks without effort when no task has any.
    #[serde(default = "default_median")]
    pub default_median: f64,
}

fn default_median() -> f64 {
    1.0
}

impl Default for MassSection {
    fn default() -> Self {
        Self {
            default_median: default_median(),
        }
    }
}

/// `[output]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSection {
    #[serde(default)]
    pub format: OutputFormat,

    /// Pretty-print JSON output.
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

fn default_pretty() -> bool {
    true
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            pretty: default_pretty(),
        }
    }
}
