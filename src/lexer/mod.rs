//! Lexical analyzer for the Kea programming language.
//!
//! This module provides the [`Lexer`] struct which converts source text
//! into a stream of [`Token`]s for parsing.
//!
//! # Overview
//!
//! The lexer is a byte-oriented cursor over the input (source is expected
//! to be 7-bit ASCII). It performs the following tasks:
//!
//! - Scans the input byte by byte with a single byte of lookahead
//! - Recognizes identifiers, keywords, integer and string literals,
//!   operators, and punctuation
//! - Tracks source positions for error reporting
//! - Skips whitespace
//!
//! The lexer NEVER fails: bytes it does not recognize become
//! [`TokenKind::Illegal`] tokens, which the parser diagnoses. Once the end
//! of input is reached, [`Lexer::next_token`] returns [`TokenKind::Eof`]
//! forever.
//!
//! # Supported Tokens
//!
//! - **Keywords**: `fn`, `let`, `true`, `false`, `if`, `else`, `return`,
//!   `for` (reserved)
//! - **Identifiers**: maximal runs over `[A-Za-z_]`; a digit ends an
//!   identifier
//! - **Integer literals**: maximal runs of ASCII digits; the raw text is
//!   kept in the token literal and converted by the parser
//! - **String literals**: enclosed in double quotes, no escape sequences;
//!   an unterminated string yields the content accumulated up to the end
//!   of input
//! - **Operators**: `= + - ! * / < >` and the two-byte `==`, `!=`
//! - **Punctuation**: `, ; : ( ) { } [ ]`
//!
//! # Examples
//!
//! ```
//! use kea::lexer::Lexer;
//! use kea::token::TokenKind;
//!
//! let mut lexer = Lexer::new("let five = 5;");
//! assert_eq!(lexer.next_token().kind, TokenKind::Let);
//! assert_eq!(lexer.next_token().kind, TokenKind::Ident);
//! ```
//!
//! # Module Structure
//!
//! - [`cursor`] - Byte cursor, lookahead, and whitespace skipping
//! - [`tokens`] - Token recognition and reading
//! - `tests` - Unit tests (test-only)
//!
//! # See Also
//!
//! * [`crate::token`] - Token type definitions
//! * [`crate::parser`] - Parser that consumes the token stream

mod cursor;
mod tokens;

#[cfg(test)]
mod tests;

use crate::token::{Token, TokenKind};

/// A lexical analyzer that tokenizes Kea source code.
///
/// The `Lexer` maintains a current byte, a read position one byte ahead,
/// and line/column counters for span construction. It is designed to be
/// driven on demand by the parser via [`Lexer::next_token`].
///
/// # Lifetime
///
/// The `'a` lifetime parameter ties the lexer to the input string slice,
/// ensuring the input remains valid while the lexer is in use.
pub struct Lexer<'a> {
    /// The input source code being tokenized, viewed as bytes.
    pub(super) input: &'a [u8],
    /// Byte index of the current byte (`ch`).
    pub(super) pos: usize,
    /// Byte index of the next byte to examine.
    pub(super) read_pos: usize,
    /// The current byte; 0 is the end-of-input sentinel.
    pub(super) ch: u8,
    /// Line number of the current byte (1-indexed).
    pub(super) line: usize,
    /// Column number of the current byte (1-indexed).
    pub(super) column: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new `Lexer` for the given input string.
    ///
    /// The first byte is loaded immediately so that [`Lexer::next_token`]
    /// can dispatch on it without a priming step.
    pub fn new(input: &'a str) -> Self {
        let mut lexer = Lexer {
            input: input.as_bytes(),
            pos: 0,
            read_pos: 0,
            ch: 0,
            line: 1,
            column: 0,
        };
        lexer.read_char();
        lexer
    }

    /// Tokenizes the entire remaining input.
    ///
    /// Drains [`Lexer::next_token`] until end of input. The returned vector
    /// always ends with exactly one [`TokenKind::Eof`] token.
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token();
            let done = token.kind == TokenKind::Eof;
            tokens.push(token);
            if done {
                break;
            }
        }

        tokens
    }
}
