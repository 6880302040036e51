//! Top-level program structure for the Kea AST.

use super::stmt::Stmt;

/// The root node of a Kea program's AST.
///
/// A `Program` is a sequence of statements and owns them. The parser is
/// the sole producer; a program may be partial when parse errors were
/// recorded.
#[derive(Debug, Clone, Default)]
pub struct Program {
    /// The statements in this program.
    pub statements: Vec<Stmt>,
}

impl Program {
    /// Creates an empty program.
    pub fn new() -> Self {
        Program {
            statements: Vec::new(),
        }
    }
}
