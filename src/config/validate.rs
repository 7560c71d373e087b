// src/config/validate.rs

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{Result, SankeyDagError};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = crate::errors::SankeyDagError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.parse, raw.mass, raw.output))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    validate_syntax(cfg)?;
    validate_mass(cfg)?;
    Ok(())
}

fn validate_syntax(cfg: &RawConfigFile) -> Result<()> {
    if cfg.parse.bullet.is_empty() {
        return Err(SankeyDagError::ConfigError(
            "[parse].bullet must not be empty".to_string(),
        ));
    }

    let separator = &cfg.parse.separator;
    if separator.is_empty() {
        return Err(SankeyDagError::ConfigError(
            "[parse].separator must not be empty".to_string(),
        ));
    }

    // The metadata suffix is recognised by these characters.
    if let Some(c) = separator.chars().find(|c| matches!(c, '[' | ']' | '|')) {
        return Err(SankeyDagError::ConfigError(format!(
            "[parse].separator must not contain '{}' (got {:?})",
            c, separator
        )));
    }

    Ok(())
}

fn validate_mass(cfg: &RawConfigFile) -> Result<()> {
    let value = cfg.mass.default_median;
    if !value.is_finite() || value < 0.0 {
        return Err(SankeyDagError::ConfigError(format!(
            "[mass].default_median must be a finite number >= 0 (got {})",
            value
        )));
    }
    Ok(())
}
