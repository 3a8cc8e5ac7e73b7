//! Output formatting - plaintext and JSON.

use crate::builder::GenerateResult;
use crate::extract::NamePair;

/// Prints the extracted pairs in plain text format.
pub fn print_plain(pairs: &[NamePair]) {
    if pairs.is_empty() {
        println!("No prefixed constants found.");
    } else {
        println!("CONSTANTS ({}):", pairs.len());
        for p in pairs {
            println!("- {} => {}", p.key, p.value);
        }
    }
}

/// Prints a generation result in JSON format.
///
/// Falls back to a minimal listing if serialization fails.
pub fn print_json(result: &GenerateResult) {
    match serde_json::to_string_pretty(result) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("[WARN] JSON serialization failed: {}", e);
            let values: Vec<_> = result.pairs.iter().map(|p| p.value.as_str()).collect();
            println!("{{\"pairs\": {:?}}}", values);
        }
    }
}
