//! Source rendering of AST nodes.
//!
//! Every node renders to valid Kea source. Prefix, infix, and index
//! expressions are parenthesized so the rendering makes grouping explicit,
//! and statements keep their `;` terminator; re-parsing a rendering
//! therefore yields a structurally equivalent tree.

use std::fmt;

use super::expr::{Expr, ExprKind, Ident, InfixOp, PrefixOp};
use super::program::Program;
use super::stmt::{Block, Stmt, StmtKind};

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for stmt in &self.statements {
            if !first {
                write!(f, " ")?;
            }
            first = false;
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            StmtKind::Let { name, value } => write!(f, "let {} = {};", name, value),
            StmtKind::Return(value) => write!(f, "return {};", value),
            StmtKind::Expr(expr) => write!(f, "{};", expr),
        }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for stmt in &self.statements {
            write!(f, " {}", stmt)?;
        }
        write!(f, " }}")
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Display for PrefixOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for InfixOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ExprKind::Identifier(name) => f.write_str(name),
            ExprKind::IntLiteral(value) => write!(f, "{}", value),
            ExprKind::BoolLiteral(value) => write!(f, "{}", value),
            ExprKind::StringLiteral(value) => write!(f, "\"{}\"", value),
            ExprKind::ArrayLiteral(elements) => {
                write!(f, "[")?;
                write_comma_separated(f, elements)?;
                write!(f, "]")
            }
            ExprKind::Prefix { op, right } => write!(f, "({}{})", op, right),
            ExprKind::Infix { op, left, right } => write!(f, "({} {} {})", left, op, right),
            ExprKind::If {
                condition,
                consequence,
                alternative,
            } => {
                write!(f, "if ({}) {}", condition, consequence)?;
                if let Some(alternative) = alternative {
                    write!(f, " else {}", alternative)?;
                }
                Ok(())
            }
            ExprKind::FnLiteral { params, body } => {
                write!(f, "fn(")?;
                let mut first = true;
                for param in params {
                    if !first {
                        write!(f, ", ")?;
                    }
                    first = false;
                    write!(f, "{}", param)?;
                }
                write!(f, ") {}", body)
            }
            ExprKind::Call { callee, args } => {
                write!(f, "{}(", callee)?;
                write_comma_separated(f, args)?;
                write!(f, ")")
            }
            ExprKind::Index { object, index } => write!(f, "({}[{}])", object, index),
        }
    }
}

fn write_comma_separated(f: &mut fmt::Formatter<'_>, exprs: &[Expr]) -> fmt::Result {
    let mut first = true;
    for expr in exprs {
        if !first {
            write!(f, ", ")?;
        }
        first = false;
        write!(f, "{}", expr)?;
    }
    Ok(())
}
