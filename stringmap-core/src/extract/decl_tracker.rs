//! Scope and declaration tracking over the token stream.
//!
//! Recognizes the declared names of top-level constant declarations:
//! - `const NAME = ...`
//! - `const ( NAME = ...; NAME2; ... )`
//!
//! Constants inside function bodies, `var` and `type` declarations, struct
//! fields and right-hand-side identifiers are never reported.

use crate::error::LexError;
use crate::lexer::{Keyword, Scanner, Token, TokenKind};

/// Mutable state of one tracking pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScannerState {
    /// Brace nesting depth, 0 at top level
    pub depth: usize,
    /// A top-level `const` declaration is open
    pub in_const: bool,
    /// The open declaration is a parenthesized group
    pub in_group: bool,
    /// Parenthesis nesting inside the group, 1 directly inside `const (`
    pub group_parens: usize,
    /// The next identifier of the group is a spec's declared name
    pub spec_armed: bool,
}

/// Token consumer that collects declared constant names in source order.
#[derive(Debug, Default)]
pub struct DeclTracker<'src> {
    state: ScannerState,
    results: Vec<Token<'src>>,
}

impl<'src> DeclTracker<'src> {
    pub fn new() -> Self {
        Self {
            state: ScannerState::default(),
            results: Vec::with_capacity(16),
        }
    }

    pub fn state(&self) -> &ScannerState {
        &self.state
    }

    /// Advances the state machine by one token.
    pub fn feed(&mut self, token: Token<'src>) {
        let st = &mut self.state;
        match token.kind {
            TokenKind::LBrace => st.depth += 1,
            TokenKind::RBrace => st.depth = st.depth.saturating_sub(1),

            TokenKind::Keyword(Keyword::Const) if st.depth == 0 => {
                st.in_const = true;
                st.in_group = false;
                st.group_parens = 0;
                st.spec_armed = false;
            }

            TokenKind::LParen if st.in_group => st.group_parens += 1,
            TokenKind::LParen if st.in_const => {
                st.in_group = true;
                st.group_parens = 1;
                st.spec_armed = true;
            }

            TokenKind::RParen if st.in_group => {
                st.group_parens -= 1;
                if st.group_parens == 0 {
                    st.in_group = false;
                    st.in_const = false;
                    st.spec_armed = false;
                }
            }

            TokenKind::Semicolon if st.in_group && st.group_parens == 1 => st.spec_armed = true,

            TokenKind::Ident if st.in_group => {
                if st.spec_armed && st.group_parens == 1 {
                    st.spec_armed = false;
                    self.results.push(token);
                }
            }
            TokenKind::Ident if st.in_const => {
                // An ungrouped statement declares one name; the rest is its value.
                st.in_const = false;
                self.results.push(token);
            }

            _ => {}
        }

        debug_assert!(!self.state.in_group || self.state.in_const);
    }

    /// Returns the collected declared-name tokens.
    pub fn finish(self) -> Vec<Token<'src>> {
        self.results
    }
}

/// Returns the names of all top-level constants declared in `src`, in order.
///
/// Fails on the first lexical error; no partial list is returned.
pub fn declared_constants(src: &str) -> Result<Vec<&str>, LexError> {
    let mut tracker = DeclTracker::new();
    for token in Scanner::new(src) {
        tracker.feed(token?);
    }
    Ok(tracker.finish().into_iter().map(|t| t.text).collect())
}
