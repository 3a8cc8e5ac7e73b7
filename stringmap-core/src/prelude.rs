//! Prelude module for convenient imports.
//!
//! ```rust,ignore
//! use stringmap_core::prelude::*;
//! ```

// Error types
pub use crate::error::{LexError, StringmapError, StringmapResult};

// Extraction engine
pub use crate::extract::{extract_names, NamePair};

// Builder API
pub use crate::builder::{generate, GenerateResult, StringMap};

// Package metadata
pub use crate::package::{load_package, PackageInfo};

// Configuration
pub use crate::config::{load_config, StringmapConfig};
