//! Unit tests for evaluation.
//!
//! Tests are organized by language area:
//! - [`expressions`]: Literals, prefix and infix operators, truthiness
//! - [`conditionals`]: If/else evaluation
//! - [`returns`]: Return propagation and unwrapping
//! - [`bindings`]: Let statements and identifier resolution
//! - [`functions`]: Function values, application, closures, recursion
//! - [`arrays`]: Array literals and indexing
//! - [`builtins`]: Built-in functions
//! - [`errors`]: Runtime error creation and propagation
//! - [`values`]: Value inspection and equality

use super::*;
use crate::lexer::Lexer;
use crate::parser::Parser;

mod conditionals;
mod values;

/// Parses and evaluates input against a fresh environment.
pub(super) fn run(input: &str) -> Value {
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

    let env = Environment::new();
    eval(&program, &env)
}

pub(super) fn assert_integer(input: &str, expected: i64) {
    assert_eq!(run(input), Value::Integer(expected), "input {:?}", input);
}

pub(super) fn assert_boolean(input: &str, expected: bool) {
    assert_eq!(run(input), Value::Boolean(expected), "input {:?}", input);
}

pub(super) fn assert_null(input: &str) {
    assert_eq!(run(input), Value::Null, "input {:?}", input);
}

pub(super) fn assert_error(input: &str, expected_message: &str) {
    match run(input) {
        Value::Error(message) => assert_eq!(message, expected_message, "input {:?}", input),
        other => panic!(
            "expected error {:?} for input {:?}, got {:?}",
            expected_message, input, other
        ),
    }
}
