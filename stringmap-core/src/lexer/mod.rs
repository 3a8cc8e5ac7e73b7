//! Go tokenizer.
//!
//! Converts source text into a lazy stream of classified tokens. Whitespace
//! and comments are dropped, literal contents are skipped verbatim, and
//! statement-terminating semicolons are inserted at line breaks.
//!
//! ```ignore
//! use stringmap_core::lexer::{Scanner, TokenKind};
//!
//! for token in Scanner::new("const robotCow = \"MOO!\"") {
//!     let token = token?;
//!     if token.kind == TokenKind::Ident {
//!         println!("{} at {}", token.text, token.position);
//!     }
//! }
//! ```

mod scanner;
mod token;

pub use scanner::{tokenize, Scanner};
pub use token::{Keyword, Position, Token, TokenKind};

/// Whether `s` is exactly one Go identifier (not a keyword).
pub fn is_identifier(s: &str) -> bool {
    let mut tokens = Scanner::new(s);
    let first = matches!(tokens.next(), Some(Ok(Token { kind: TokenKind::Ident, text, .. })) if text == s);
    first
        && tokens.all(|t| matches!(t, Ok(Token { kind: TokenKind::Semicolon | TokenKind::Eof, text: "", .. })))
}
