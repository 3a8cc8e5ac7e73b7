//! Package metadata loading.
//!
//! Resolves the Go package a directory belongs to by reading the `package`
//! clause of every non-test `.go` file directly inside it. All files must
//! agree on one name.

use rayon::prelude::*;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{IoResultExt, LexError, StringmapError, StringmapResult};
use crate::lexer::{Keyword, Scanner, TokenKind};

/// The package a directory of Go files belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageInfo {
    /// Package name from the `package` clause
    pub name: String,
    /// Directory that was loaded
    pub dir: PathBuf,
    /// Go files that declared the package, sorted
    pub files: Vec<PathBuf>,
}

/// Reads the package name from the `package` clause of `src`.
///
/// Returns `Ok(None)` when the first token is not `package <name>`. Only the
/// head of the file is scanned.
pub fn package_clause(src: &str) -> Result<Option<String>, LexError> {
    let mut tokens = Scanner::new(src).filter(|t| !matches!(t, Ok(tok) if tok.kind == TokenKind::Semicolon));

    match tokens.next().transpose()? {
        Some(tok) if tok.is_keyword(Keyword::Package) => {}
        _ => return Ok(None),
    }
    match tokens.next().transpose()? {
        Some(tok) if tok.kind == TokenKind::Ident => Ok(Some(tok.text.to_string())),
        _ => Ok(None),
    }
}

/// Lists the non-test `.go` files directly inside `dir`, sorted.
pub fn gather_go_files(dir: &Path) -> StringmapResult<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(dir).to_path_buf();
            match e.into_io_error() {
                Some(io) => StringmapError::io(path, io),
                None => StringmapError::metadata(path, "filesystem loop"),
            }
        })?;
        let path = entry.path();
        let is_go = path.extension().is_some_and(|ext| ext == "go");
        let is_test = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.ends_with("_test.go"));
        if entry.file_type().is_file() && is_go && !is_test {
            files.push(path.to_path_buf());
        }
    }
    files.sort();
    Ok(files)
}

/// Resolves the package declared by the Go files in `dir`.
pub fn load_package(dir: &Path) -> StringmapResult<PackageInfo> {
    if !dir.is_dir() {
        return Err(StringmapError::metadata(dir, "invalid directory given"));
    }

    let files = gather_go_files(dir)?;
    if files.is_empty() {
        return Err(StringmapError::metadata(dir, "no Go files in directory"));
    }

    let clauses = files
        .par_iter()
        .map(|path| {
            let content = fs::read_to_string(path).with_path(path)?;
            let name = package_clause(&content)
                .map_err(|e| StringmapError::metadata(path, format!("cannot read package clause: {}", e)))?
                .ok_or_else(|| StringmapError::metadata(path, "missing package clause"))?;
            Ok((path.clone(), name))
        })
        .collect::<StringmapResult<Vec<_>>>()?;

    let mut by_name: BTreeMap<&str, &Path> = BTreeMap::new();
    for (path, name) in &clauses {
        by_name.entry(name.as_str()).or_insert(path.as_path());
    }

    let mut names = by_name.iter();
    match (names.next(), names.next()) {
        (Some((name, _)), None) => Ok(PackageInfo {
            name: name.to_string(),
            dir: dir.to_path_buf(),
            files,
        }),
        (Some((a, a_file)), Some((b, b_file))) => Err(StringmapError::metadata(
            dir,
            format!(
                "found packages {} ({}) and {} ({})",
                a,
                a_file.display(),
                b,
                b_file.display()
            ),
        )),
        _ => Err(StringmapError::metadata(dir, "no package clause found")),
    }
}
