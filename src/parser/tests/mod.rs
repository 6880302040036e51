//! Unit tests for parsing.
//!
//! Tests are organized by parser component:
//! - [`stmt`]: Statement parsing (let, return, expression statements)
//! - [`expr`]: Expression parsing (literals, operators, if, functions,
//!   calls, arrays, indexing)
//! - [`precedence`]: Operator precedence and associativity via rendering
//! - [`errors`]: Error accumulation and message wording
//! - [`roundtrip`]: Re-parsing rendered ASTs

use super::*;
use crate::ast::{Expr, StmtKind};
use crate::token::Span;


/// Parses input and returns the program, panicking on parser errors.
pub(super) fn parse(input: &str) -> Program {
    let lexer = Lexer::new(input);
    let mut parser = Parser::new(lexer);
    let program = parser.parse_program();
    assert!(
        parser.errors().is_empty(),
        "unexpected parser errors for input {:?}: {:?}",
        input,
        parser
            .errors()
            .iter()
            .map(|e| e.message().to_string())
            .collect::<Vec<_>>()
    );
    program
}

/// Parses input and returns the accumulated error messages.
pub(super) fn parse_error_messages(input: &str) -> Vec<String> {
    let lexer = Lexer::new(input);
    let mut parser = Parser::new(lexer);
    parser.parse_program();
    assert!(
        !parser.errors().is_empty(),
        "expected parser errors for input {:?}, got none",
        input
    );
    parser
        .errors()
        .iter()
        .map(|e| e.message().to_string())
        .collect()
}

/// Parses input and extracts the expression from its first statement.
pub(super) fn parse_first_expr(input: &str) -> Expr {
    let program = parse(input);
    let first = program
        .statements
        .first()
        .unwrap_or_else(|| panic!("input {:?} produced no statements", input));
    match &first.kind {
        StmtKind::Expr(expr) => expr.clone(),
        other => panic!("expected expression statement, got {:?}", other),
    }
}

// ============================================================================
// ParseError constructor tests
// ============================================================================

fn span_at(line: usize, column: usize) -> Span {
    Span::new(0, 0, line, column)
}

#[test]
fn test_parse_error_unexpected_token_constructor() {
    let err = ParseError::unexpected_token(TokenKind::Assign, TokenKind::Int, span_at(1, 7));
    assert_eq!(err.kind(), ParseErrorKind::UnexpectedToken);
    assert_eq!(
        err.message(),
        "excepted next token to be ASSIGN, got INT instead"
    );
    assert_eq!(err.span().line, 1);
    assert_eq!(err.span().column, 7);
}

#[test]
fn test_parse_error_missing_prefix_parse_constructor() {
    let err = ParseError::missing_prefix_parse(TokenKind::For, span_at(2, 1));
    assert_eq!(err.kind(), ParseErrorKind::MissingPrefixParse);
    assert_eq!(err.message(), "no prefix parse function for FOR found");
}

#[test]
fn test_parse_error_invalid_integer_literal_constructor() {
    let err = ParseError::invalid_integer_literal("99999999999999999999", span_at(1, 1));
    assert_eq!(err.kind(), ParseErrorKind::InvalidIntegerLiteral);
    assert_eq!(
        err.message(),
        "could not parse 99999999999999999999 as integer"
    );
}

#[test]
fn test_parse_error_display() {
    let err = ParseError::unexpected_token(TokenKind::RightParen, TokenKind::Eof, span_at(3, 12));
    assert_eq!(
        err.to_string(),
        "3:12: excepted next token to be RPAREN, got EOF instead"
    );
}

#[test]
fn test_parse_error_short_messages() {
    let err = ParseError::unexpected_token(TokenKind::Assign, TokenKind::Int, span_at(1, 1));
    assert_eq!(err.short_message(), "Unexpected token");

    let err = ParseError::missing_prefix_parse(TokenKind::Semicolon, span_at(1, 1));
    assert_eq!(err.short_message(), "Expression expected");

    let err = ParseError::invalid_integer_literal("9", span_at(1, 1));
    assert_eq!(err.short_message(), "Invalid integer literal");
}
