//! Typed error handling for stringmap.
//!
//! Every failure is terminal for one generation run: either the full pair list
//! is produced and written, or the first error is surfaced to the caller.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

use crate::lexer::Position;

/// What the tokenizer could not make sense of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexErrorKind {
    /// `"` literal without a closing quote on the same line
    UnterminatedString,
    /// `` ` `` literal without a closing backtick
    UnterminatedRawString,
    /// `'` literal without a closing quote on the same line
    UnterminatedRune,
    /// `''`
    EmptyRune,
    /// `/*` without `*/`
    UnterminatedComment,
    /// A character that cannot begin any token
    InvalidCharacter(char),
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnterminatedString => f.write_str("string literal not terminated"),
            Self::UnterminatedRawString => f.write_str("raw string literal not terminated"),
            Self::UnterminatedRune => f.write_str("rune literal not terminated"),
            Self::EmptyRune => f.write_str("empty rune literal"),
            Self::UnterminatedComment => f.write_str("comment not terminated"),
            Self::InvalidCharacter(c) => write!(f, "invalid character {:?}", c),
        }
    }
}

/// Tokenizer failure with the position of the offending input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{position}: {kind}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub position: Position,
}

impl LexError {
    pub fn new(kind: LexErrorKind, position: Position) -> Self {
        Self { kind, position }
    }
}

/// Main error type for stringmap operations.
#[derive(Error, Debug)]
pub enum StringmapError {
    /// Empty or malformed argument rejected before any work starts
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// The tokenizer hit input it cannot classify
    #[error("Lexical error at {0}")]
    Lexical(#[from] LexError),

    /// I/O error when reading input files
    #[error("I/O error at {path}: {message}")]
    Io {
        path: PathBuf,
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Package information could not be resolved for a directory
    #[error("Metadata error at {path}: {message}")]
    Metadata { path: PathBuf, message: String },

    /// The generated source could not be produced
    #[error("Render error: {message}")]
    Render { message: String },

    /// The generated file could not be persisted
    #[error("Write error at {path}: {message}")]
    Write {
        path: PathBuf,
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Configuration file errors
    #[error("Config error at {path}: {message}")]
    Config { path: PathBuf, message: String },
}

impl StringmapError {
    /// Create an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: err.to_string(),
            source: Some(err),
        }
    }

    /// Create a metadata error.
    pub fn metadata(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Metadata {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a render error.
    pub fn render(message: impl Into<String>) -> Self {
        Self::Render {
            message: message.into(),
        }
    }

    /// Create a write error with path context.
    pub fn write(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            message: err.to_string(),
            source: Some(err),
        }
    }

    /// Create a config error.
    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Get the path associated with this error, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Io { path, .. } => Some(path),
            Self::Metadata { path, .. } => Some(path),
            Self::Write { path, .. } => Some(path),
            Self::Config { path, .. } => Some(path),
            _ => None,
        }
    }
}

/// Convenience type alias for stringmap results.
pub type StringmapResult<T> = Result<T, StringmapError>;

/// Extension trait for converting std::io::Error with path context.
pub trait IoResultExt<T> {
    /// Add path context to a read-side I/O error.
    fn with_path(self, path: impl Into<PathBuf>) -> StringmapResult<T>;

    /// Add path context to a write-side I/O error.
    fn with_write_path(self, path: impl Into<PathBuf>) -> StringmapResult<T>;
}

impl<T> IoResultExt<T> for std::io::Result<T> {
    fn with_path(self, path: impl Into<PathBuf>) -> StringmapResult<T> {
        self.map_err(|e| StringmapError::io(path, e))
    }

    fn with_write_path(self, path: impl Into<PathBuf>) -> StringmapResult<T> {
        self.map_err(|e| StringmapError::write(path, e))
    }
}
