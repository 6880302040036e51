//! End-to-end interpreter tests through the public API.
//!
//! Each case drives the full pipeline (lex → parse → eval) and asserts
//! on the inspected form of the final value, the way the driver renders
//! results.

use kea::eval::{Environment, eval};
use kea::lexer::Lexer;
use kea::parser::Parser;

#[derive(Debug)]
struct Case {
    source: &'static str,
    expected: &'static str,
}

fn interpret(source: &str) -> String {
    let lexer = Lexer::new(source);
    let mut parser = Parser::new(lexer);
    let program = parser.parse_program();
    assert!(
        parser.errors().is_empty(),
        "unexpected parser errors for {:?}: {:?}",
        source,
        parser
            .errors()
            .iter()
            .map(|e| e.message().to_string())
            .collect::<Vec<_>>()
    );

    let env = Environment::new();
    eval(&program, &env).inspect()
}

fn run_cases(cases: &[Case]) {
    for case in cases {
        assert_eq!(
            interpret(case.source),
            case.expected,
            "source {:?}",
            case.source
        );
    }
}

#[test]
fn test_arithmetic_and_bindings() {
    run_cases(&[
        Case {
            source: "let x = 5 * 5 + 10; x;",
            expected: "35",
        },
        Case {
            source: "let a = 2; let b = a * 3; a + b;",
            expected: "8",
        },
        Case {
            source: "(5 + 10 * 2 + 15 / 3) * 2 + -10;",
            expected: "50",
        },
    ]);
}

#[test]
fn test_conditionals() {
    run_cases(&[
        Case {
            source: "if (1 < 2) { 10 } else { 20 }",
            expected: "10",
        },
        Case {
            source: "if (1 > 2) { 10 } else { 20 }",
            expected: "20",
        },
        Case {
            source: "if (false) { 10 }",
            expected: "null",
        },
    ]);
}

#[test]
fn test_closures() {
    run_cases(&[Case {
        source: "let adder = fn(x) { fn(y) { x + y } }; let addTwo = adder(2); addTwo(3);",
        expected: "5",
    }]);
}

#[test]
fn test_recursion() {
    run_cases(&[
        Case {
            source: "let fact = fn(n) { if (n < 2) { 1 } else { n * fact(n - 1) } }; fact(5);",
            expected: "120",
        },
        Case {
            source: "let fib = fn(n) { if (n < 2) { n } else { fib(n - 1) + fib(n - 2) } }; fib(15);",
            expected: "610",
        },
    ]);
}

#[test]
fn test_builtin_len() {
    run_cases(&[
        Case {
            source: r#"len("hello")"#,
            expected: "5",
        },
        Case {
            source: "len([1, 2, 3])",
            expected: "3",
        },
        Case {
            source: "len(1)",
            expected: "ERROR: argument to \"len\" not supported, got INTEGER",
        },
    ]);
}

#[test]
fn test_runtime_errors() {
    run_cases(&[
        Case {
            source: "5 + true;",
            expected: "ERROR: type mismatch: INTEGER + BOOLEAN",
        },
        Case {
            source: "foobar",
            expected: "ERROR: identifier not found: foobar",
        },
    ]);
}

#[test]
fn test_arrays() {
    run_cases(&[
        Case {
            source: "[1, 2, 3][1]",
            expected: "2",
        },
        Case {
            source: "[1, 2, 3][5]",
            expected: "null",
        },
        Case {
            source: r#"["a", "b"][0] + "c""#,
            expected: "ac",
        },
    ]);
}

#[test]
fn test_strings() {
    run_cases(&[
        Case {
            source: r#""Hello" + " " + "World!""#,
            expected: "Hello World!",
        },
        Case {
            source: r#"let greet = fn(name) { "Hello, " + name }; greet("Kea");"#,
            expected: "Hello, Kea",
        },
    ]);
}

#[test]
fn test_environment_persists_across_programs() {
    // REPL semantics: one environment, several inputs.
    let env = Environment::new();

    let mut results = Vec::new();
    for source in ["let x = 10;", "let double = fn(n) { n * 2 };", "double(x);"] {
        let lexer = Lexer::new(source);
        let mut parser = Parser::new(lexer);
        let program = parser.parse_program();
        assert!(parser.errors().is_empty());
        results.push(eval(&program, &env).inspect());
    }

    assert_eq!(results.last().map(String::as_str), Some("20"));
}

#[test]
fn test_parser_errors_reported_not_evaluated() {
    let lexer = Lexer::new("let x 5;");
    let mut parser = Parser::new(lexer);
    parser.parse_program();

    let messages: Vec<&str> = parser.errors().iter().map(|e| e.message()).collect();
    assert!(
        messages
            .iter()
            .any(|m| m.contains("ASSIGN")),
        "expected a message mentioning ASSIGN, got {:?}",
        messages
    );
}

#[test]
fn test_list_programs_with_builtins() {
    let source = r#"
        let reduce = fn(xs, initial, f) {
            let iter = fn(xs, acc) {
                if (len(xs) == 0) { acc } else { iter(rest(xs), f(acc, first(xs))) }
            };
            iter(xs, initial);
        };
        let sum = fn(xs) { reduce(xs, 0, fn(acc, el) { acc + el }) };
        sum([1, 2, 3, 4, 5]);
    "#;
    assert_eq!(interpret(source), "15");
}
