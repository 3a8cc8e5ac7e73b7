//! Builder pattern API for string map generation.
//!
//! Provides a fluent interface over the whole pipeline: package lookup,
//! constant extraction, rendering and writing.
//!
//! ```rust,ignore
//! use stringmap_core::prelude::*;
//!
//! let result = StringMap::new("/path/to/pkg", "robot.go", "robot")
//!     .suffix("_names.go")
//!     .ignore(["robot_Legacy"])
//!     .dry_run(true)
//!     .generate()?;
//!
//! println!("{}", result.source);
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, warn};

use crate::config::load_config;
use crate::error::{IoResultExt, StringmapError, StringmapResult};
use crate::extract::{extract_names, NamePair};
use crate::lexer::is_identifier;
use crate::output::{output_path, write_output, DEFAULT_SUFFIX};
use crate::package::load_package;
use crate::render::{object_name, render, RenderInput, DEFAULT_GENERATOR};

/// Builder for configuring one generation run.
///
/// # Example
///
/// ```rust,ignore
/// let result = StringMap::new(".", "robot.go", "robot").generate()?;
/// ```
#[derive(Debug, Clone)]
pub struct StringMap {
    /// Directory holding the package and receiving the output
    dir: PathBuf,

    /// Input file, relative to `dir`
    filename: PathBuf,

    /// Constant prefix and value type of the map
    type_name: String,

    /// Output suffix override
    suffix: Option<String>,

    /// Header generator name override
    generator: Option<String>,

    /// Constant identifiers left out of the map
    ignored: Vec<String>,

    /// Whether to read stringmap.toml from `dir`
    use_config: bool,

    /// Render without writing
    dry_run: bool,
}

/// Outcome of a generation run.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateResult {
    /// Go package of the input directory
    pub package: String,
    /// Type name the map values use (leading `*` removed)
    pub type_name: String,
    /// Exported base name of the generated identifiers
    pub name: String,
    /// Map entries in source order
    pub pairs: Vec<NamePair>,
    /// Where the generated file goes
    pub output_path: PathBuf,
    /// Generated Go source
    #[serde(skip)]
    pub source: String,
    /// Whether the file was written (false on dry runs)
    pub written: bool,
}

impl StringMap {
    /// Create a new generation builder.
    pub fn new(
        dir: impl Into<PathBuf>,
        filename: impl Into<PathBuf>,
        type_name: impl Into<String>,
    ) -> Self {
        Self {
            dir: dir.into(),
            filename: filename.into(),
            type_name: type_name.into(),
            suffix: None,
            generator: None,
            ignored: Vec::new(),
            use_config: true,
            dry_run: false,
        }
    }

    /// Override the output file suffix.
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    /// Override the generator name written in the header.
    pub fn generator(mut self, generator: impl Into<String>) -> Self {
        self.generator = Some(generator.into());
        self
    }

    /// Leave the given constant identifiers out of the map.
    pub fn ignore<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignored.extend(names.into_iter().map(Into::into));
        self
    }

    /// Enable or disable reading stringmap.toml.
    pub fn with_config(mut self, enabled: bool) -> Self {
        self.use_config = enabled;
        self
    }

    /// Render without writing the output file.
    pub fn dry_run(mut self, enabled: bool) -> Self {
        self.dry_run = enabled;
        self
    }

    fn validate(&self) -> StringmapResult<&str> {
        if self.type_name.is_empty() {
            return Err(StringmapError::invalid_argument("type name must not be empty"));
        }
        if self.dir.as_os_str().is_empty() {
            return Err(StringmapError::invalid_argument("directory must not be empty"));
        }
        if self.filename.as_os_str().is_empty() {
            return Err(StringmapError::invalid_argument("filename must not be empty"));
        }

        let base = self.type_name.trim_start_matches('*');
        if !is_identifier(base) {
            return Err(StringmapError::invalid_argument(format!(
                "type name {:?} is not a Go identifier",
                self.type_name
            )));
        }
        Ok(base)
    }

    /// Run the pipeline. Nothing is written if any step fails.
    pub fn generate(&self) -> StringmapResult<GenerateResult> {
        let base = self.validate()?;

        let config = if self.use_config {
            load_config(&self.dir)?.unwrap_or_default()
        } else {
            Default::default()
        };
        let output_cfg = config.output.unwrap_or_default();
        let suffix = self
            .suffix
            .clone()
            .or(output_cfg.suffix)
            .unwrap_or_else(|| DEFAULT_SUFFIX.to_string());
        let generator = self
            .generator
            .clone()
            .or(output_cfg.generator)
            .unwrap_or_else(|| DEFAULT_GENERATOR.to_string());

        let package = load_package(&self.dir)?;
        debug!(package = %package.name, files = package.files.len(), "loaded package");

        let input = self.dir.join(&self.filename);
        let source = fs::read_to_string(&input).with_path(&input)?;
        let mut pairs = extract_names(&source, base)?;

        let ignored: HashSet<&str> = self
            .ignored
            .iter()
            .chain(config.ignore.iter().flatten())
            .map(String::as_str)
            .collect();
        if !ignored.is_empty() {
            for name in &ignored {
                if !pairs.iter().any(|p| p.value == *name) {
                    warn!(name = %name, "ignored constant not found in {}", input.display());
                }
            }
            pairs.retain(|p| !ignored.contains(p.value.as_str()));
        }

        let name = object_name(base);
        let out_path = output_path(&self.dir, &name, &suffix);
        let rendered = render(&RenderInput {
            package: &package.name,
            type_name: base,
            name: &name,
            pairs: &pairs,
            generator: &generator,
        })?;

        if !self.dry_run {
            write_output(&out_path, &rendered)?;
        }

        Ok(GenerateResult {
            package: package.name,
            type_name: base.to_string(),
            name,
            pairs,
            output_path: out_path,
            source: rendered,
            written: !self.dry_run,
        })
    }
}

/// Generates `<type>_stringmap.go` in `dir` from the constants of `filename`
/// using default settings.
pub fn generate(
    type_name: &str,
    dir: impl Into<PathBuf>,
    filename: impl Into<PathBuf>,
) -> StringmapResult<GenerateResult> {
    StringMap::new(dir, filename, type_name).generate()
}
