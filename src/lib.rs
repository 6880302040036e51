//! The Kea programming language interpreter library.
//!
//! Kea is a small, dynamically-typed, C-family expression language with
//! integers, booleans, strings, arrays, first-class functions with
//! lexical closures, `let` bindings, `return`, `if`/`else`, and array
//! indexing. This library provides the interpreter pipeline:
//!
//! ```text
//! source text → Lexer → tokens → Parser → Program → eval + Environment → Value
//! ```
//!
//! # Modules
//!
//! - [`token`] - Token types and source location tracking
//! - [`lexer`] - Lexical analysis (tokenization)
//! - [`parser`] - Pratt parser producing the AST
//! - [`ast`] - Abstract Syntax Tree definitions
//! - [`eval`] - Tree-walking evaluator, value domain, environments
//!
//! # Example
//!
//! ```
//! use kea::eval::{Environment, Value, eval};
//! use kea::lexer::Lexer;
//! use kea::parser::Parser;
//!
//! let source = "let adder = fn(x) { fn(y) { x + y } }; adder(2)(3);";
//!
//! // Lexical analysis + parsing
//! let lexer = Lexer::new(source);
//! let mut parser = Parser::new(lexer);
//! let program = parser.parse_program();
//! assert!(parser.errors().is_empty());
//!
//! // Evaluation
//! let env = Environment::new();
//! let result = eval(&program, &env);
//! assert_eq!(result, Value::Integer(5));
//! ```

pub mod ast;
pub mod eval;
pub mod lexer;
pub mod parser;
pub mod token;
