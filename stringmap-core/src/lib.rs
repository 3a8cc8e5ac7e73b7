//! stringmap-core: string lookup maps for prefixed Go constants
//!
//! Scans a Go source file for top-level constants whose names start with a
//! type name, and generates a `map[string]<type>` from short keys to those
//! constants, plus a `Parse<Type>` lookup function.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use stringmap_core::prelude::*;
//!
//! // robot.go:
//! //   const robot_Chicken = "BAWK!"
//! //   const robotCow = "MOO!"
//! let result = StringMap::new(".", "robot.go", "robot").generate()?;
//!
//! for pair in &result.pairs {
//!     println!("{} => {}", pair.key, pair.value); // Chicken => robot_Chicken
//! }
//! ```
//!
//! # Module Organization
//!
//! - [`lexer`]: Go tokenizer with automatic semicolon insertion
//! - [`extract`]: Declaration tracking, prefix filtering and key derivation
//! - [`package`]: Package name resolution for a directory
//! - [`render`]: Go source generation
//! - [`output`]: Output path derivation and writing
//! - [`builder`]: Fluent builder API tying the pipeline together
//! - [`config`]: `stringmap.toml` loading
//! - [`error`]: Typed error handling

pub mod builder;
pub mod config;
pub mod error;
pub mod extract;
pub mod lexer;
pub mod logging;
pub mod output;
pub mod package;
pub mod prelude;
pub mod render;
pub mod report;

// Error types
pub use error::{IoResultExt, LexError, LexErrorKind, StringmapError, StringmapResult};

// Builder API
pub use builder::{generate, GenerateResult, StringMap};

// Configuration
pub use config::{load_config, OutputConfig, StringmapConfig, CONFIG_FILE};

// Extraction engine
pub use extract::{
    declared_constants, derive_key, derive_pairs, extract_names, filter_prefixed, upper_first,
    DeclTracker, NamePair, ScannerState,
};

// Lexer
pub use lexer::{is_identifier, tokenize, Keyword, Position, Scanner, Token, TokenKind};

// Logging
pub use logging::{init_logging, log_error, log_info};

// Output
pub use output::{output_path, write_output, DEFAULT_SUFFIX};

// Package metadata
pub use package::{gather_go_files, load_package, package_clause, PackageInfo};

// Rendering
pub use render::{object_name, render, RenderInput, DEFAULT_GENERATOR};

// Reporting
pub use report::{print_json, print_plain};

#[cfg(test)]
mod tests;
