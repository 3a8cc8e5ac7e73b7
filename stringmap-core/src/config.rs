//! Configuration loading from stringmap.toml.

use serde::Deserialize;
use std::{fs, path::Path};

use crate::error::{IoResultExt, StringmapError, StringmapResult};

/// File name looked up in the target directory.
pub const CONFIG_FILE: &str = "stringmap.toml";

/// Main configuration structure for stringmap.toml.
#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct StringmapConfig {
    /// Constant identifiers to leave out of the generated map.
    pub ignore: Option<Vec<String>>,
    /// Output configuration.
    pub output: Option<OutputConfig>,
}

/// Output file configuration.
#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Suffix appended to the lower-cased type name, e.g. "_stringmap.go".
    pub suffix: Option<String>,
    /// Tool name written in the generated-code header.
    pub generator: Option<String>,
}

/// Loads configuration from stringmap.toml if it exists.
pub fn load_config(dir: &Path) -> StringmapResult<Option<StringmapConfig>> {
    let path = dir.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(&path).with_path(&path)?;
    let cfg = toml::from_str(&content)
        .map_err(|e| StringmapError::config(&path, format!("Invalid {}: {}", CONFIG_FILE, e)))?;
    Ok(Some(cfg))
}
