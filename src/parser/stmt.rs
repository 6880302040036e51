//! Statement and block parsing.

use super::Parser;
use super::expr::Precedence;
use crate::ast::{Block, Ident, Stmt, StmtKind};
use crate::token::TokenKind;

impl<'a> Parser<'a> {
    /// Parses a single statement.
    ///
    /// Returns `None` when the statement fails to parse; the error has
    /// already been recorded and the caller resynchronizes.
    ///
    /// # Grammar
    ///
    /// ```text
    /// statement → let_stmt | return_stmt | expr_stmt
    /// ```
    pub(super) fn parse_stmt(&mut self) -> Option<Stmt> {
        match self.cur_token.kind {
            TokenKind::Let => self.parse_let_stmt(),
            TokenKind::Return => self.parse_return_stmt(),
            _ => self.parse_expr_stmt(),
        }
    }

    /// Parses a let statement.
    ///
    /// # Grammar
    ///
    /// ```text
    /// let_stmt → "let" IDENT "=" expr ";"?
    /// ```
    fn parse_let_stmt(&mut self) -> Option<Stmt> {
        let start_span = self.cur_token.span;

        if !self.expect_peek(TokenKind::Ident) {
            return None;
        }
        let name = Ident::new(self.cur_token.literal.clone(), self.cur_token.span);

        if !self.expect_peek(TokenKind::Assign) {
            return None;
        }

        self.next_token();
        let value = self.parse_expression(Precedence::Lowest)?;

        if self.peek_is(TokenKind::Semicolon) {
            self.next_token();
        }

        let span = start_span.to(self.cur_token.span);
        Some(Stmt::new(StmtKind::Let { name, value }, span))
    }

    /// Parses a return statement.
    ///
    /// # Grammar
    ///
    /// ```text
    /// return_stmt → "return" expr ";"?
    /// ```
    fn parse_return_stmt(&mut self) -> Option<Stmt> {
        let start_span = self.cur_token.span;

        self.next_token();
        let value = self.parse_expression(Precedence::Lowest)?;

        if self.peek_is(TokenKind::Semicolon) {
            self.next_token();
        }

        let span = start_span.to(self.cur_token.span);
        Some(Stmt::new(StmtKind::Return(value), span))
    }

    /// Parses an expression statement.
    ///
    /// # Grammar
    ///
    /// ```text
    /// expr_stmt → expr ";"?
    /// ```
    fn parse_expr_stmt(&mut self) -> Option<Stmt> {
        let start_span = self.cur_token.span;

        let expr = self.parse_expression(Precedence::Lowest)?;

        if self.peek_is(TokenKind::Semicolon) {
            self.next_token();
        }

        let span = start_span.to(self.cur_token.span);
        Some(Stmt::new(StmtKind::Expr(expr), span))
    }

    /// Parses a block of statements.
    ///
    /// The current token is `{` on entry and `}` (or `Eof` for an
    /// unclosed block) on exit. Statements that fail to parse are
    /// dropped, like at the top level.
    ///
    /// # Grammar
    ///
    /// ```text
    /// block → "{" statement* "}"
    /// ```
    pub(super) fn parse_block(&mut self) -> Block {
        let start_span = self.cur_token.span;
        self.next_token();

        let mut statements = Vec::new();
        while !self.cur_is(TokenKind::RightBrace) && !self.cur_is(TokenKind::Eof) {
            if let Some(stmt) = self.parse_stmt() {
                statements.push(stmt);
            }
            self.next_token();
        }

        let span = start_span.to(self.cur_token.span);
        Block::new(statements, span)
    }
}
