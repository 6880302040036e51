//! Statement and block nodes for the Kea AST.

use crate::token::Span;

use super::expr::{Expr, Ident};

/// The kind of a statement in the Kea language.
///
/// This enum represents the different types of statements without
/// source location information. Use [`Stmt`] for the full AST node
/// with span information.
#[derive(Debug, Clone)]
pub enum StmtKind {
    /// A binding: `let name = value;`.
    ///
    /// Bindings are immutable; there is no reassignment statement.
    Let {
        /// The name being bound.
        name: Ident,
        /// The bound expression.
        value: Expr,
    },

    /// A return statement: `return value;`.
    ///
    /// Unwinds to the nearest enclosing function boundary (or terminates
    /// the program when used at the top level).
    Return(Expr),

    /// An expression statement.
    ///
    /// The expression is evaluated and its value becomes the statement's
    /// result; at the end of a program or block, the last such value is
    /// the overall result.
    Expr(Expr),
}

/// A statement in the Kea language with source location.
#[derive(Debug, Clone)]
pub struct Stmt {
    /// The kind of statement.
    pub kind: StmtKind,
    /// The source location of this statement.
    pub span: Span,
}

impl Stmt {
    /// Creates a new statement with the given kind and span.
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }
}

/// A braced sequence of statements.
///
/// Blocks own their child statements. A block does NOT introduce a new
/// scope: a `let` inside an `if` body writes to the surrounding function
/// (or program) environment.
#[derive(Debug, Clone)]
pub struct Block {
    /// The statements in this block.
    pub statements: Vec<Stmt>,
    /// The source location of this block (from `{` to `}`).
    pub span: Span,
}

impl Block {
    /// Creates a new block with the given statements and span.
    pub fn new(statements: Vec<Stmt>, span: Span) -> Self {
        Block { statements, span }
    }
}
