//! Short key derivation for prefixed constant names.

use serde::{Deserialize, Serialize};

/// One generated map entry: derived short key and the original identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NamePair {
    /// Short, capitalized name (`Chicken`)
    pub key: String,
    /// Identifier as declared in the source (`robot_Chicken`)
    pub value: String,
}

/// Upper-cases the first character, leaving the rest untouched.
pub fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Derives the short key for `name`.
///
/// Strips `prefix`, then any leading underscores, then capitalizes the first
/// remaining character. `robot_Chicken` with prefix `robot` becomes `Chicken`.
pub fn derive_key(name: &str, prefix: &str) -> String {
    let rest = name.strip_prefix(prefix).unwrap_or(name);
    upper_first(rest.trim_start_matches('_'))
}

/// Maps every name to its pair, preserving order and duplicates.
pub fn derive_pairs(names: &[&str], prefix: &str) -> Vec<NamePair> {
    names
        .iter()
        .map(|name| NamePair {
            key: derive_key(name, prefix),
            value: (*name).to_string(),
        })
        .collect()
}
