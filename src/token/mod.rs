//! Token definitions for the Kea lexer.
//!
//! This module provides the fundamental token types used throughout the
//! interpreter. It defines [`Span`] for source location tracking,
//! [`TokenKind`] for token types, and [`Token`] for representing lexical
//! units with their positions.
//!
//! # Overview
//!
//! The lexer produces [`Token`]s on demand, each containing:
//! - A [`TokenKind`] describing what type of token it is
//! - The `literal`: the exact source text that produced the token
//! - A [`Span`] indicating where in the source code it appears
//!
//! # Module Structure
//!
//! - [`span`] - Source location tracking ([`Span`] struct)
//! - [`kind`] - Token type definitions ([`TokenKind`] enum)
//!
//! # See Also
//!
//! * [`crate::lexer`] - The lexer that produces these tokens
//! * [`crate::parser`] - The parser that consumes these tokens

mod kind;
mod span;

pub use kind::TokenKind;
pub use span::Span;

/// A token with its kind, source text, and location.
///
/// The `literal` is the exact source slice that produced the token. It is
/// the textual form of identifier, integer, and string tokens, and it is
/// what error messages quote. `Eof` carries an empty literal; `Illegal`
/// carries the offending byte.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The kind of this token.
    pub kind: TokenKind,
    /// The exact source text of this token.
    pub literal: String,
    /// The source location of this token.
    pub span: Span,
}

impl Token {
    /// Creates a new `Token` with the given kind, literal, and span.
    pub fn new(kind: TokenKind, literal: impl Into<String>, span: Span) -> Self {
        Token {
            kind,
            literal: literal.into(),
            span,
        }
    }

    /// Creates an `Eof` token at the given span.
    pub fn eof(span: Span) -> Self {
        Token::new(TokenKind::Eof, "", span)
    }
}
