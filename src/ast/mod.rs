//! Abstract Syntax Tree definitions for the Kea programming language.
//!
//! This module defines the data structures that represent parsed Kea
//! programs. The AST is produced by the [`crate::parser`] and consumed by
//! the [`crate::eval`] module; nodes are built once by the parser and
//! never mutated afterwards.
//!
//! # Structure
//!
//! The AST has a hierarchical structure:
//! - [`Program`] - The root node: a sequence of statements
//! - [`Stmt`] - Statements (`let`, `return`, expression statements)
//! - [`Block`] - A braced sequence of statements
//! - [`Expr`] - Expressions (literals, identifiers, operators, `if`,
//!   function literals, calls, indexing)
//!
//! Each AST node includes source location information
//! ([`Span`](crate::token::Span)) for error reporting.
//!
//! Every node implements [`std::fmt::Display`]; the rendering is valid Kea
//! source that re-parses to a structurally equivalent tree, which the
//! tests rely on.
//!
//! # Module Structure
//!
//! - [`expr`] - Expression nodes, identifier nodes, and operator enums
//! - [`stmt`] - Statement and block nodes
//! - [`program`] - Top-level program structure
//! - [`display`] - Source rendering of every node
//!
//! # See Also
//!
//! * [`crate::parser`] - Produces the AST from tokens
//! * [`crate::eval`] - Evaluates the AST

mod display;
mod expr;
mod program;
mod stmt;


pub use expr::{Expr, ExprKind, Ident, InfixOp, PrefixOp};
pub use program::Program;
pub use stmt::{Block, Stmt, StmtKind};
