//! Output path derivation and file persistence.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{IoResultExt, StringmapResult};

/// Suffix of generated files unless configured otherwise.
pub const DEFAULT_SUFFIX: &str = "_stringmap.go";

/// Path of the generated file: `dir/<lowercase name><suffix>`.
pub fn output_path(dir: &Path, name: &str, suffix: &str) -> PathBuf {
    dir.join(format!("{}{}", name.to_lowercase(), suffix))
}

/// Writes the generated source, replacing any existing file.
pub fn write_output(path: &Path, contents: &str) -> StringmapResult<()> {
    fs::write(path, contents).with_write_path(path)?;
    info!(path = %path.display(), bytes = contents.len(), "wrote generated file");
    Ok(())
}
