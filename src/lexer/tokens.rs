//! Token recognition for the lexer.
//!
//! This module provides [`Lexer::next_token`] and the readers for
//! identifiers, numbers, and strings.

use super::Lexer;
use crate::token::{Span, Token, TokenKind};

/// Returns `true` for bytes that may appear in an identifier.
///
/// Digits are NOT identifier bytes: `foo1` lexes as the identifier `foo`
/// followed by the integer `1`.
fn is_letter(ch: u8) -> bool {
    ch.is_ascii_alphabetic() || ch == b'_'
}

impl<'a> Lexer<'a> {
    /// Reads and returns the next token from the input.
    ///
    /// Dispatches on the current byte after skipping whitespace. Unknown
    /// bytes produce [`TokenKind::Illegal`] tokens; this method never
    /// fails. At end of input it returns [`TokenKind::Eof`], forever.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let start = self.pos;
        let line = self.line;
        let column = self.column;

        let token = match self.ch {
            b'=' => {
                if self.peek_char() == b'=' {
                    self.read_char();
                    Token::new(TokenKind::Eq, "==", Span::new(start, self.pos + 1, line, column))
                } else {
                    self.byte_token(TokenKind::Assign)
                }
            }
            b'!' => {
                if self.peek_char() == b'=' {
                    self.read_char();
                    Token::new(
                        TokenKind::NotEq,
                        "!=",
                        Span::new(start, self.pos + 1, line, column),
                    )
                } else {
                    self.byte_token(TokenKind::Bang)
                }
            }
            b'+' => self.byte_token(TokenKind::Plus),
            b'-' => self.byte_token(TokenKind::Minus),
            b'*' => self.byte_token(TokenKind::Asterisk),
            b'/' => self.byte_token(TokenKind::Slash),
            b'<' => self.byte_token(TokenKind::Lt),
            b'>' => self.byte_token(TokenKind::Gt),
            b',' => self.byte_token(TokenKind::Comma),
            b';' => self.byte_token(TokenKind::Semicolon),
            b':' => self.byte_token(TokenKind::Colon),
            b'(' => self.byte_token(TokenKind::LeftParen),
            b')' => self.byte_token(TokenKind::RightParen),
            b'{' => self.byte_token(TokenKind::LeftBrace),
            b'}' => self.byte_token(TokenKind::RightBrace),
            b'[' => self.byte_token(TokenKind::LeftBracket),
            b']' => self.byte_token(TokenKind::RightBracket),
            b'"' => {
                let literal = self.read_string();
                // The closing quote (if any) is still the current byte;
                // the advance below steps past it.
                let end = if self.ch == b'"' { self.pos + 1 } else { self.pos };
                Token::new(TokenKind::String, literal, Span::new(start, end, line, column))
            }
            0 => {
                return Token::eof(Span::new(self.pos, self.pos, line, column));
            }
            ch if is_letter(ch) => {
                // read_identifier leaves the cursor past the identifier;
                // do not advance again.
                let literal = self.read_identifier();
                let kind = TokenKind::lookup_ident(&literal);
                return Token::new(kind, literal, Span::new(start, self.pos, line, column));
            }
            ch if ch.is_ascii_digit() => {
                let literal = self.read_number();
                return Token::new(TokenKind::Int, literal, Span::new(start, self.pos, line, column));
            }
            _ => self.byte_token(TokenKind::Illegal),
        };

        self.read_char();
        token
    }

    /// Creates a token for the single current byte without advancing.
    ///
    /// The caller (the tail of [`Lexer::next_token`]) performs the advance.
    fn byte_token(&self, kind: TokenKind) -> Token {
        let span = Span::new(self.pos, self.pos + 1, self.line, self.column);
        Token::new(kind, (self.ch as char).to_string(), span)
    }

    /// Reads a maximal run of identifier bytes starting at the current byte.
    fn read_identifier(&mut self) -> String {
        let start = self.pos;
        while is_letter(self.ch) {
            self.read_char();
        }
        String::from_utf8_lossy(&self.input[start..self.pos]).into_owned()
    }

    /// Reads a maximal run of ASCII digits starting at the current byte.
    ///
    /// The raw text is returned; conversion to `i64` (and the error for
    /// out-of-range literals) is the parser's job.
    fn read_number(&mut self) -> String {
        let start = self.pos;
        while self.ch.is_ascii_digit() {
            self.read_char();
        }
        String::from_utf8_lossy(&self.input[start..self.pos]).into_owned()
    }

    /// Reads a string literal's content.
    ///
    /// The opening quote is the current byte on entry. On exit the current
    /// byte is the closing quote, or 0 if the input ended inside the
    /// string; in that case the content accumulated so far is the literal.
    /// No escape sequences are processed.
    fn read_string(&mut self) -> String {
        let start = self.pos + 1;
        loop {
            self.read_char();
            if self.ch == b'"' || self.ch == 0 {
                break;
            }
        }
        String::from_utf8_lossy(&self.input[start..self.pos]).into_owned()
    }
}
