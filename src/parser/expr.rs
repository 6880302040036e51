//! Expression parsing using Pratt parsing (precedence climbing).
//!
//! This module implements expression parsing with proper operator
//! precedence. Each token kind that can start an expression has a prefix
//! arm in [`Parser::parse_prefix`]; each token that can extend one has an
//! infix arm in the [`Parser::parse_expression`] loop.
//!
//! # Precedence
//!
//! The ladder, ascending (higher binds tighter):
//!
//! | Level | Tokens |
//! |---|---|
//! | `Lowest` | (none) |
//! | `Equals` | `==`, `!=` |
//! | `LessGreater` | `<`, `>` |
//! | `Sum` | `+`, `-` |
//! | `Product` | `*`, `/` |
//! | `Prefix` | unary `!`, `-` |
//! | `Call` | `(` as a call opener |
//! | `Index` | `[` as an index opener |
//!
//! Binary operators are left-associative: the right-hand side of an infix
//! expression is parsed at the operator's own precedence, so the loop in
//! `parse_expression` stops before an operator of equal precedence and
//! `a - b - c` groups as `((a - b) - c)`.

use super::Parser;
use super::error::ParseError;
use crate::ast::{Expr, ExprKind, Ident, InfixOp, PrefixOp};
use crate::token::TokenKind;

/// Operator precedence levels, ascending.
///
/// The derived ordering is what drives the parser: consuming an infix
/// operator requires the operator's precedence to be strictly greater
/// than the level being parsed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(super) enum Precedence {
    Lowest,
    Equals,
    LessGreater,
    Sum,
    Product,
    Prefix,
    Call,
    Index,
}

impl Precedence {
    /// Returns the infix precedence of a token kind.
    ///
    /// Tokens that are not infix operators sit at `Lowest`, which makes
    /// the expression loop stop in front of them.
    pub(super) fn of(kind: TokenKind) -> Precedence {
        match kind {
            TokenKind::Eq | TokenKind::NotEq => Precedence::Equals,
            TokenKind::Lt | TokenKind::Gt => Precedence::LessGreater,
            TokenKind::Plus | TokenKind::Minus => Precedence::Sum,
            TokenKind::Asterisk | TokenKind::Slash => Precedence::Product,
            TokenKind::LeftParen => Precedence::Call,
            TokenKind::LeftBracket => Precedence::Index,
            _ => Precedence::Lowest,
        }
    }
}

impl<'a> Parser<'a> {
    /// Parses an expression at the given precedence level.
    ///
    /// This is the core Pratt loop:
    /// 1. Parse a prefix form for the current token (recording an error
    ///    and returning `None` if the token cannot start an expression).
    /// 2. While the peek token is an infix operator binding tighter than
    ///    `precedence` (and is not `;`), consume it and fold the parsed
    ///    right-hand side into the left one.
    pub(super) fn parse_expression(&mut self, precedence: Precedence) -> Option<Expr> {
        let mut left = self.parse_prefix()?;

        while !self.peek_is(TokenKind::Semicolon) && precedence < self.peek_precedence() {
            left = match self.peek_token.kind {
                TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Asterisk
                | TokenKind::Slash
                | TokenKind::Eq
                | TokenKind::NotEq
                | TokenKind::Lt
                | TokenKind::Gt => {
                    self.next_token();
                    self.parse_infix_expr(left)?
                }
                TokenKind::LeftParen => {
                    self.next_token();
                    self.parse_call_expr(left)?
                }
                TokenKind::LeftBracket => {
                    self.next_token();
                    self.parse_index_expr(left)?
                }
                _ => return Some(left),
            };
        }

        Some(left)
    }

    /// Dispatches on the current token to a prefix parse arm.
    fn parse_prefix(&mut self) -> Option<Expr> {
        match self.cur_token.kind {
            TokenKind::Ident => Some(Expr::new(
                ExprKind::Identifier(self.cur_token.literal.clone()),
                self.cur_token.span,
            )),
            TokenKind::Int => self.parse_int_literal(),
            TokenKind::True => Some(Expr::new(ExprKind::BoolLiteral(true), self.cur_token.span)),
            TokenKind::False => Some(Expr::new(ExprKind::BoolLiteral(false), self.cur_token.span)),
            TokenKind::String => Some(Expr::new(
                ExprKind::StringLiteral(self.cur_token.literal.clone()),
                self.cur_token.span,
            )),
            TokenKind::Bang | TokenKind::Minus => self.parse_prefix_expr(),
            TokenKind::LeftParen => self.parse_grouped_expr(),
            TokenKind::If => self.parse_if_expr(),
            TokenKind::Function => self.parse_fn_literal(),
            TokenKind::LeftBracket => self.parse_array_literal(),
            kind => {
                self.errors
                    .push(ParseError::missing_prefix_parse(kind, self.cur_token.span));
                None
            }
        }
    }

    /// Parses an integer literal from the current token's text.
    ///
    /// Out-of-range literals record an error and produce no expression.
    fn parse_int_literal(&mut self) -> Option<Expr> {
        match self.cur_token.literal.parse::<i64>() {
            Ok(value) => Some(Expr::new(ExprKind::IntLiteral(value), self.cur_token.span)),
            Err(_) => {
                self.errors.push(ParseError::invalid_integer_literal(
                    &self.cur_token.literal,
                    self.cur_token.span,
                ));
                None
            }
        }
    }

    /// Parses a prefix operator expression: `!x` or `-x`.
    fn parse_prefix_expr(&mut self) -> Option<Expr> {
        let start_span = self.cur_token.span;
        let op = match self.cur_token.kind {
            TokenKind::Bang => PrefixOp::Bang,
            _ => PrefixOp::Neg,
        };

        self.next_token();
        let right = self.parse_expression(Precedence::Prefix)?;

        let span = start_span.to(right.span);
        Some(Expr::new(
            ExprKind::Prefix {
                op,
                right: Box::new(right),
            },
            span,
        ))
    }

    /// Parses the right-hand side of an infix operator expression.
    ///
    /// The current token is the operator. The right side is parsed at the
    /// operator's own precedence, which yields left-associativity.
    fn parse_infix_expr(&mut self, left: Expr) -> Option<Expr> {
        let op = match self.cur_token.kind {
            TokenKind::Plus => InfixOp::Add,
            TokenKind::Minus => InfixOp::Sub,
            TokenKind::Asterisk => InfixOp::Mul,
            TokenKind::Slash => InfixOp::Div,
            TokenKind::Lt => InfixOp::Lt,
            TokenKind::Gt => InfixOp::Gt,
            TokenKind::Eq => InfixOp::Eq,
            _ => InfixOp::NotEq,
        };
        let precedence = self.cur_precedence();

        self.next_token();
        let right = self.parse_expression(precedence)?;

        let span = left.span.to(right.span);
        Some(Expr::new(
            ExprKind::Infix {
                op,
                left: Box::new(left),
                right: Box::new(right),
            },
            span,
        ))
    }

    /// Parses a parenthesized expression.
    fn parse_grouped_expr(&mut self) -> Option<Expr> {
        self.next_token();

        let expr = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenKind::RightParen) {
            return None;
        }

        Some(expr)
    }

    /// Parses an if expression: `if (cond) { … }` with an optional
    /// `else { … }`.
    fn parse_if_expr(&mut self) -> Option<Expr> {
        let start_span = self.cur_token.span;

        if !self.expect_peek(TokenKind::LeftParen) {
            return None;
        }

        self.next_token();
        let condition = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenKind::RightParen) {
            return None;
        }
        if !self.expect_peek(TokenKind::LeftBrace) {
            return None;
        }

        let consequence = self.parse_block();

        let alternative = if self.peek_is(TokenKind::Else) {
            self.next_token();
            if !self.expect_peek(TokenKind::LeftBrace) {
                return None;
            }
            Some(self.parse_block())
        } else {
            None
        };

        let end_span = alternative
            .as_ref()
            .map(|block| block.span)
            .unwrap_or(consequence.span);
        let span = start_span.to(end_span);

        Some(Expr::new(
            ExprKind::If {
                condition: Box::new(condition),
                consequence,
                alternative,
            },
            span,
        ))
    }

    /// Parses a function literal: `fn(params) { body }`.
    fn parse_fn_literal(&mut self) -> Option<Expr> {
        let start_span = self.cur_token.span;

        if !self.expect_peek(TokenKind::LeftParen) {
            return None;
        }

        let params = self.parse_fn_params()?;

        if !self.expect_peek(TokenKind::LeftBrace) {
            return None;
        }

        let body = self.parse_block();

        let span = start_span.to(body.span);
        Some(Expr::new(ExprKind::FnLiteral { params, body }, span))
    }

    /// Parses a comma-separated parameter list terminated by `)`.
    ///
    /// The current token is `(` on entry and `)` on successful exit.
    /// Duplicate names are accepted here; binding is positional at call
    /// time, so the last duplicate wins.
    fn parse_fn_params(&mut self) -> Option<Vec<Ident>> {
        let mut params = Vec::new();

        if self.peek_is(TokenKind::RightParen) {
            self.next_token();
            return Some(params);
        }

        if !self.expect_peek(TokenKind::Ident) {
            return None;
        }
        params.push(Ident::new(
            self.cur_token.literal.clone(),
            self.cur_token.span,
        ));

        while self.peek_is(TokenKind::Comma) {
            self.next_token();
            if !self.expect_peek(TokenKind::Ident) {
                return None;
            }
            params.push(Ident::new(
                self.cur_token.literal.clone(),
                self.cur_token.span,
            ));
        }

        if !self.expect_peek(TokenKind::RightParen) {
            return None;
        }

        Some(params)
    }

    /// Parses a call expression. The current token is the opening `(`.
    fn parse_call_expr(&mut self, callee: Expr) -> Option<Expr> {
        let args = self.parse_expression_list(TokenKind::RightParen)?;

        let span = callee.span.to(self.cur_token.span);
        Some(Expr::new(
            ExprKind::Call {
                callee: Box::new(callee),
                args,
            },
            span,
        ))
    }

    /// Parses an array literal. The current token is the opening `[`.
    fn parse_array_literal(&mut self) -> Option<Expr> {
        let start_span = self.cur_token.span;

        let elements = self.parse_expression_list(TokenKind::RightBracket)?;

        let span = start_span.to(self.cur_token.span);
        Some(Expr::new(ExprKind::ArrayLiteral(elements), span))
    }

    /// Parses an index expression. The current token is the opening `[`.
    fn parse_index_expr(&mut self, object: Expr) -> Option<Expr> {
        self.next_token();
        let index = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenKind::RightBracket) {
            return None;
        }

        let span = object.span.to(self.cur_token.span);
        Some(Expr::new(
            ExprKind::Index {
                object: Box::new(object),
                index: Box::new(index),
            },
            span,
        ))
    }

    /// Parses a comma-separated expression list terminated by `end`.
    ///
    /// The current token is the opener on entry and `end` on successful
    /// exit. Shared by call argument lists and array literals.
    fn parse_expression_list(&mut self, end: TokenKind) -> Option<Vec<Expr>> {
        let mut list = Vec::new();

        if self.peek_is(end) {
            self.next_token();
            return Some(list);
        }

        self.next_token();
        list.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek_is(TokenKind::Comma) {
            self.next_token();
            self.next_token();
            list.push(self.parse_expression(Precedence::Lowest)?);
        }

        if !self.expect_peek(end) {
            return None;
        }

        Some(list)
    }
}
