//! Parse error types.

use crate::token::{Span, TokenKind};

/// The category of a parse error.
///
/// Used by tests and diagnostics to react to errors without string
/// matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The token after the current one was not what a production required.
    UnexpectedToken,
    /// No expression can start with the current token.
    MissingPrefixParse,
    /// An integer literal does not fit in an `i64`.
    InvalidIntegerLiteral,
}

/// An error recorded during parsing.
///
/// The parser never aborts: errors accumulate in the parser's error list
/// while parsing continues on a best-effort basis. The `message` wording
/// is part of the observable interface and is asserted by tests.
#[derive(Debug)]
pub struct ParseError {
    kind: ParseErrorKind,
    message: String,
    span: Span,
}

impl ParseError {
    /// The token after the current one did not match the production.
    ///
    /// Message: `excepted next token to be <EXPECTED>, got <GOT> instead`.
    pub(super) fn unexpected_token(expected: TokenKind, got: TokenKind, span: Span) -> Self {
        ParseError {
            kind: ParseErrorKind::UnexpectedToken,
            message: format!(
                "excepted next token to be {}, got {} instead",
                expected.name(),
                got.name()
            ),
            span,
        }
    }

    /// No expression form starts with this token.
    ///
    /// Message: `no prefix parse function for <KIND> found`.
    pub(super) fn missing_prefix_parse(kind: TokenKind, span: Span) -> Self {
        ParseError {
            kind: ParseErrorKind::MissingPrefixParse,
            message: format!("no prefix parse function for {} found", kind.name()),
            span,
        }
    }

    /// An integer literal is out of the `i64` range.
    ///
    /// Message: `could not parse <LITERAL> as integer`.
    pub(super) fn invalid_integer_literal(literal: &str, span: Span) -> Self {
        ParseError {
            kind: ParseErrorKind::InvalidIntegerLiteral,
            message: format!("could not parse {} as integer", literal),
            span,
        }
    }

    /// Returns the category of this error.
    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    /// Returns the full error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns a short headline for diagnostic reports.
    pub fn short_message(&self) -> &'static str {
        match self.kind {
            ParseErrorKind::UnexpectedToken => "Unexpected token",
            ParseErrorKind::MissingPrefixParse => "Expression expected",
            ParseErrorKind::InvalidIntegerLiteral => "Invalid integer literal",
        }
    }

    /// Returns the source location of the offending token.
    pub fn span(&self) -> Span {
        self.span
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}: {}",
            self.span.line, self.span.column, self.message
        )
    }
}

impl std::error::Error for ParseError {}
