//! Prefix filtering of declared constant names.

/// Keeps the names that start with `prefix`, in order and with duplicates.
///
/// The match is exact and case-sensitive. A name equal to the prefix itself
/// is dropped so the type named by the prefix never maps to itself.
pub fn filter_prefixed<'a>(names: &[&'a str], prefix: &str) -> Vec<&'a str> {
    names
        .iter()
        .copied()
        .filter(|name| *name != prefix && name.starts_with(prefix))
        .collect()
}
