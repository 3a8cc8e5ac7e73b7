//! Single-pass Go scanner.
//!
//! Produces tokens lazily and inserts statement-terminating semicolons at
//! line breaks the same way the Go compiler does, so declaration specs inside
//! `const ( ... )` groups are separated even when written one per line.

use unicode_xid::UnicodeXID;

use super::token::{Keyword, Position, Token, TokenKind};
use crate::error::{LexError, LexErrorKind};

/// Operators and delimiters, longest first so matching is greedy.
const OPERATORS: &[&str] = &[
    "<<=", ">>=", "&^=", "...", "&&", "||", "<-", "++", "--", "==", "!=", "<=", ">=", ":=",
    "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=", "<<", ">>", "&^", "+", "-", "*", "/", "%",
    "&", "|", "^", "<", ">", "=", "!", "(", ")", "[", "]", "{", "}", ",", ";", ".", ":", "~",
];

const BYTE_ORDER_MARK: &str = "\u{FEFF}";

/// Lazy token stream over one source text.
///
/// Yields `Ok` tokens ending with exactly one [`TokenKind::Eof`], or stops
/// after the first `Err`. Not restartable.
pub struct Scanner<'src> {
    src: &'src str,
    pos: usize,
    line: usize,
    line_start: usize,
    /// Whether a line break after the previous token ends a statement
    insert_semi: bool,
    done: bool,
}

impl<'src> Scanner<'src> {
    pub fn new(src: &'src str) -> Self {
        let pos = if src.starts_with(BYTE_ORDER_MARK) {
            BYTE_ORDER_MARK.len()
        } else {
            0
        };
        Self {
            src,
            pos,
            line: 1,
            line_start: pos,
            insert_semi: false,
            done: false,
        }
    }

    fn bytes(&self) -> &'src [u8] {
        self.src.as_bytes()
    }

    fn peek_at(&self, i: usize) -> Option<u8> {
        self.bytes().get(i).copied()
    }

    fn position_of(&self, offset: usize) -> Position {
        Position {
            offset,
            line: self.line,
            column: offset - self.line_start + 1,
        }
    }

    /// Moves to `end`, keeping line bookkeeping in sync with any newlines crossed.
    fn advance_to(&mut self, end: usize) {
        for (i, b) in self.bytes()[self.pos..end].iter().enumerate() {
            if *b == b'\n' {
                self.line += 1;
                self.line_start = self.pos + i + 1;
            }
        }
        self.pos = end;
    }

    fn make(&mut self, kind: TokenKind, start: usize, end: usize, position: Position) -> Token<'src> {
        let src = self.src;
        self.advance_to(end);
        self.insert_semi = match kind {
            TokenKind::Ident | TokenKind::Literal | TokenKind::RParen | TokenKind::RBrace => true,
            TokenKind::Keyword(kw) => kw.ends_statement(),
            TokenKind::Punct => matches!(&src[start..end], "]" | "++" | "--"),
            _ => false,
        };
        Token {
            kind,
            text: &src[start..end],
            position,
        }
    }

    /// Semicolon implied by a line break (or end of input) at `offset`.
    fn implicit_semicolon(&mut self, offset: usize, text: &'static str) -> Token<'src> {
        self.insert_semi = false;
        Token {
            kind: TokenKind::Semicolon,
            text,
            position: self.position_of(offset),
        }
    }

    /// Skips blanks and comments. Returns an implied semicolon if one was crossed.
    fn skip_trivia(&mut self) -> Result<Option<Token<'src>>, LexError> {
        loop {
            match self.peek_at(self.pos) {
                Some(b' ' | b'\t' | b'\r') => self.pos += 1,
                Some(b'\n') => {
                    if self.insert_semi {
                        let tok = self.implicit_semicolon(self.pos, "\n");
                        self.advance_to(self.pos + 1);
                        return Ok(Some(tok));
                    }
                    self.advance_to(self.pos + 1);
                }
                Some(b'/') if self.peek_at(self.pos + 1) == Some(b'/') => {
                    // Stop before the newline so it still terminates the statement.
                    let end = self.src[self.pos..]
                        .find('\n')
                        .map_or(self.src.len(), |i| self.pos + i);
                    self.pos = end;
                }
                Some(b'/') if self.peek_at(self.pos + 1) == Some(b'*') => {
                    let start = self.pos;
                    let Some(close) = self.src[start + 2..].find("*/") else {
                        return Err(LexError::new(
                            LexErrorKind::UnterminatedComment,
                            self.position_of(start),
                        ));
                    };
                    let end = start + 2 + close + 2;
                    let spans_lines = self.src[start..end].contains('\n');
                    if spans_lines && self.insert_semi {
                        let tok = self.implicit_semicolon(start, "\n");
                        self.advance_to(end);
                        return Ok(Some(tok));
                    }
                    self.advance_to(end);
                }
                _ => return Ok(None),
            }
        }
    }

    fn scan(&mut self) -> Result<Token<'src>, LexError> {
        if let Some(semi) = self.skip_trivia()? {
            return Ok(semi);
        }

        let src = self.src;
        let start = self.pos;
        let position = self.position_of(start);
        let Some(c) = src[start..].chars().next() else {
            if self.insert_semi {
                return Ok(self.implicit_semicolon(start, ""));
            }
            return Ok(Token {
                kind: TokenKind::Eof,
                text: "",
                position,
            });
        };

        if c == '_' || c.is_xid_start() {
            let end = self.scan_identifier(start);
            let text = &src[start..end];
            let kind = match Keyword::from_ident(text) {
                Some(kw) => TokenKind::Keyword(kw),
                None => TokenKind::Ident,
            };
            return Ok(self.make(kind, start, end, position));
        }

        let next_is_digit = self.peek_at(start + 1).is_some_and(|b| b.is_ascii_digit());
        if c.is_ascii_digit() || (c == '.' && next_is_digit) {
            let end = self.scan_number(start);
            return Ok(self.make(TokenKind::Literal, start, end, position));
        }

        match c {
            '"' => {
                let end = self.scan_quoted(start, b'"', LexErrorKind::UnterminatedString)?;
                return Ok(self.make(TokenKind::Literal, start, end, position));
            }
            '\'' => {
                if self.peek_at(start + 1) == Some(b'\'') {
                    return Err(LexError::new(LexErrorKind::EmptyRune, position));
                }
                let end = self.scan_quoted(start, b'\'', LexErrorKind::UnterminatedRune)?;
                return Ok(self.make(TokenKind::Literal, start, end, position));
            }
            '`' => {
                let Some(close) = src[start + 1..].find('`') else {
                    return Err(LexError::new(LexErrorKind::UnterminatedRawString, position));
                };
                let end = start + 1 + close + 1;
                return Ok(self.make(TokenKind::Literal, start, end, position));
            }
            _ => {}
        }

        let rest = &src[start..];
        let Some(op) = OPERATORS.iter().find(|op| rest.starts_with(**op)) else {
            return Err(LexError::new(LexErrorKind::InvalidCharacter(c), position));
        };
        let kind = match *op {
            "(" => TokenKind::LParen,
            ")" => TokenKind::RParen,
            "{" => TokenKind::LBrace,
            "}" => TokenKind::RBrace,
            ";" => TokenKind::Semicolon,
            _ => TokenKind::Punct,
        };
        Ok(self.make(kind, start, start + op.len(), position))
    }

    fn scan_identifier(&self, start: usize) -> usize {
        self.src[start..]
            .char_indices()
            .find(|(_, ch)| !(*ch == '_' || ch.is_xid_continue()))
            .map_or(self.src.len(), |(i, _)| start + i)
    }

    /// Numeric literals are only delimited, never validated.
    fn scan_number(&self, start: usize) -> usize {
        let bytes = self.bytes();
        let is_hex = bytes[start] == b'0' && matches!(self.peek_at(start + 1), Some(b'x' | b'X'));
        let mut i = start;
        while let Some(&b) = bytes.get(i) {
            if !(b.is_ascii_alphanumeric() || b == b'_' || b == b'.') {
                break;
            }
            let exponent = if is_hex {
                matches!(b, b'p' | b'P')
            } else {
                matches!(b, b'e' | b'E')
            };
            i += 1;
            if exponent && matches!(bytes.get(i), Some(b'+' | b'-')) {
                i += 1;
            }
        }
        i
    }

    /// Scans a single-line quoted literal with backslash escapes.
    fn scan_quoted(&self, start: usize, quote: u8, unterminated: LexErrorKind) -> Result<usize, LexError> {
        let bytes = self.bytes();
        let mut i = start + 1;
        loop {
            match bytes.get(i) {
                None | Some(b'\n') => {
                    return Err(LexError::new(unterminated, self.position_of(start)));
                }
                Some(b'\\') => {
                    if matches!(bytes.get(i + 1), None | Some(b'\n')) {
                        return Err(LexError::new(unterminated, self.position_of(start)));
                    }
                    i += 2;
                }
                Some(&b) if b == quote => return Ok(i + 1),
                Some(_) => i += 1,
            }
        }
    }
}

impl<'src> Iterator for Scanner<'src> {
    type Item = Result<Token<'src>, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let result = self.scan();
        if matches!(result, Err(_) | Ok(Token { kind: TokenKind::Eof, .. })) {
            self.done = true;
        }
        Some(result)
    }
}

/// Tokenizes the whole input, failing on the first lexical error.
pub fn tokenize(src: &str) -> Result<Vec<Token<'_>>, LexError> {
    Scanner::new(src).collect()
}
