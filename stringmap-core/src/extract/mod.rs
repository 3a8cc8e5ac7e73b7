//! Name extraction engine.
//!
//! Turns Go source text into the ordered key/value pairs of a string map:
//!
//! ```text
//! ┌─────────────┐   ┌─────────────────┐   ┌──────────────────┐   ┌─────────────────┐
//! │   lexer     │──▶│ decl_tracker.rs │──▶│ prefix_filter.rs │──▶│ name_deriver.rs │
//! │  tokens     │   │ top-level const │   │ starts with      │   │ key/value pairs │
//! │             │   │ declared names  │   │ prefix           │   │                 │
//! └─────────────┘   └─────────────────┘   └──────────────────┘   └─────────────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use stringmap_core::extract::extract_names;
//!
//! let pairs = extract_names("const robot_Chicken = \"BAWK!\"", "robot")?;
//! assert_eq!(pairs[0].key, "Chicken");
//! assert_eq!(pairs[0].value, "robot_Chicken");
//! ```

pub mod decl_tracker;
pub mod name_deriver;
pub mod prefix_filter;

pub use decl_tracker::{declared_constants, DeclTracker, ScannerState};
pub use name_deriver::{derive_key, derive_pairs, upper_first, NamePair};
pub use prefix_filter::filter_prefixed;

use tracing::debug;

use crate::error::{StringmapError, StringmapResult};

/// Extracts the string map pairs for every top-level constant of `source`
/// whose name starts with `prefix`.
///
/// Pairs are ordered by first occurrence. Lexical errors abort the whole
/// extraction.
pub fn extract_names(source: &str, prefix: &str) -> StringmapResult<Vec<NamePair>> {
    if prefix.is_empty() {
        return Err(StringmapError::invalid_argument("prefix must not be empty"));
    }

    let declared = declared_constants(source)?;
    let prefixed = filter_prefixed(&declared, prefix);
    debug!(
        prefix = %prefix,
        declared = declared.len(),
        prefixed = prefixed.len(),
        "extracted constant names"
    );

    Ok(derive_pairs(&prefixed, prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROBOT_SOURCE: &str = r#"
//go:generate go run github.com/example/stringmap robot.go robot

package example

type robot string

// const robot_comment = "no!"

const robot_Chicken = "BAWK!"
const robotCow = "MOO!"

var robot_variable = "no!"

const (
	robot_R2D2 = "R2-D2"
	robot_C3P0 = "C3P0"
	foobar     = 2
)

type bar struct {
	robotVar string
}

func (r robot) String() string {
	const robot_local = "no!"
	return string(r)
}

func anotherFunc() string {
	const robot_local = "no!"
	return robot_local
}

func robotFunc() bool {
	return true
}
"#;

    fn pair(key: &str, value: &str) -> NamePair {
        NamePair {
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_robot_end_to_end() {
        let pairs = extract_names(ROBOT_SOURCE, "robot").unwrap();
        assert_eq!(
            pairs,
            vec![
                pair("Chicken", "robot_Chicken"),
                pair("Cow", "robotCow"),
                pair("R2D2", "robot_R2D2"),
                pair("C3P0", "robot_C3P0"),
            ]
        );
    }

    #[test]
    fn test_idempotent() {
        let first = extract_names(ROBOT_SOURCE, "robot").unwrap();
        let second = extract_names(ROBOT_SOURCE, "robot").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_grouped_and_ungrouped_agree() {
        let ungrouped = extract_names(r#"const robot_X = "a""#, "robot").unwrap();
        let grouped = extract_names(r#"const ( robot_X = "a" )"#, "robot").unwrap();
        assert_eq!(ungrouped, grouped);
        assert_eq!(ungrouped, vec![pair("X", "robot_X")]);
    }

    #[test]
    fn test_right_hand_side_not_captured() {
        let pairs = extract_names("const robot_A = robot_B", "robot").unwrap();
        assert_eq!(pairs, vec![pair("A", "robot_A")]);
    }

    #[test]
    fn test_prefix_itself_excluded() {
        let pairs = extract_names("const robot = 1\nconst robotA = 2", "robot").unwrap();
        assert_eq!(pairs, vec![pair("A", "robotA")]);
    }

    #[test]
    fn test_string_contents_ignored() {
        let src = "const robot_A = \"const robot_B = 1\"\nconst robot_C = `\nconst robot_D = 2\n`";
        let pairs = extract_names(src, "robot").unwrap();
        let values: Vec<_> = pairs.iter().map(|p| p.value.as_str()).collect();
        assert_eq!(values, vec!["robot_A", "robot_C"]);
    }

    #[test]
    fn test_empty_prefix_rejected() {
        let err = extract_names(ROBOT_SOURCE, "").unwrap_err();
        assert!(matches!(err, StringmapError::InvalidArgument { .. }));
    }

    #[test]
    fn test_unterminated_string_fails() {
        let src = "const robot_A = 1\nconst robot_B = \"unterminated\n";
        let err = extract_names(src, "robot").unwrap_err();
        assert!(matches!(err, StringmapError::Lexical(_)));
    }
}
