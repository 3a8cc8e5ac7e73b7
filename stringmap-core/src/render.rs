//! Go source rendering for the generated string map.
//!
//! Uses the `std::fmt::Write` trait over a pre-sized buffer. The output
//! carries the standard `Code generated ... DO NOT EDIT.` header so Go tooling
//! recognizes it as generated.

use std::collections::HashMap;
use std::fmt::Write;

use crate::error::{StringmapError, StringmapResult};
use crate::extract::{upper_first, NamePair};

/// Generator name written into the header by default.
pub const DEFAULT_GENERATOR: &str = "stringmap";

/// Everything the renderer needs for one output file.
#[derive(Debug, Clone, Copy)]
pub struct RenderInput<'a> {
    /// Go package of the generated file
    pub package: &'a str,
    /// Go type of the map values (`robot`)
    pub type_name: &'a str,
    /// Exported base name of the generated identifiers (`Robot`)
    pub name: &'a str,
    /// Map entries in output order
    pub pairs: &'a [NamePair],
    /// Tool name for the generated-code header
    pub generator: &'a str,
}

/// Exported base name for a type: leading `*` removed, first letter upper-cased.
pub fn object_name(type_name: &str) -> String {
    upper_first(type_name.trim_start_matches('*'))
}

/// Renders the Go source of the string map.
///
/// Fails when two pairs share a key, since Go rejects duplicate keys in a
/// map literal.
pub fn render(input: &RenderInput<'_>) -> StringmapResult<String> {
    let mut seen: HashMap<&str, &str> = HashMap::with_capacity(input.pairs.len());
    for pair in input.pairs {
        if let Some(previous) = seen.insert(&pair.key, &pair.value) {
            return Err(StringmapError::render(format!(
                "duplicate key \"{}\" for {} and {}",
                pair.key, previous, pair.value
            )));
        }
    }

    // ~40 bytes per entry + ~400 bytes of fixed text
    let mut out = String::with_capacity(input.pairs.len() * 40 + 400);
    write_source(&mut out, input)
        .map_err(|e| StringmapError::render(format!("failed to format source: {}", e)))?;
    Ok(out)
}

fn write_source(out: &mut String, input: &RenderInput<'_>) -> std::fmt::Result {
    let RenderInput {
        package,
        type_name,
        name,
        pairs,
        generator,
    } = *input;

    writeln!(out, "// Code generated by {}; DO NOT EDIT.", generator)?;
    writeln!(out)?;
    writeln!(out, "package {}", package)?;
    writeln!(out)?;

    writeln!(out, "// {}StringMap maps short names to {} values.", name, type_name)?;
    if pairs.is_empty() {
        writeln!(out, "var {}StringMap = map[string]{}{{}}", name, type_name)?;
    } else {
        writeln!(out, "var {}StringMap = map[string]{}{{", name, type_name)?;
        for pair in pairs {
            writeln!(out, "\t\"{}\": {},", pair.key, pair.value)?;
        }
        writeln!(out, "}}")?;
    }
    writeln!(out)?;

    writeln!(out, "// Parse{} returns the {} value registered under key.", name, type_name)?;
    writeln!(out, "func Parse{}(key string) ({}, bool) {{", name, type_name)?;
    writeln!(out, "\tv, ok := {}StringMap[key]", name)?;
    writeln!(out, "\treturn v, ok")?;
    writeln!(out, "}}")?;
    Ok(())
}
