//! Token kinds for the Kea lexer.
//!
//! This module defines the [`TokenKind`] enum representing all possible
//! token types in the Kea language, the keyword table, and the stable
//! token-type names used in parser error messages.

/// The kind of token recognized by the lexer.
///
/// `TokenKind` carries no payload; the textual form of a token lives in
/// [`Token::literal`](super::Token). This keeps the parser responsible for
/// interpreting literals (e.g. converting `INT` text to an `i64`), which is
/// where conversion failures are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A byte the lexer does not recognize. The offending byte is kept as
    /// the token literal; the parser reports it, the lexer never fails.
    Illegal,

    /// End of input. Emitted forever once the input is exhausted.
    Eof,

    /// An identifier (variable or function name): `[A-Za-z_][A-Za-z0-9_]*`.
    Ident,

    /// An integer literal: a maximal run of ASCII digits.
    Int,

    /// A string literal enclosed in double quotes. The literal is the raw
    /// content between the quotes; no escape sequences are processed.
    String,

    /// An equals sign `=` for let bindings.
    Assign,

    /// A plus sign `+`.
    Plus,

    /// A minus sign `-`, both infix subtraction and prefix negation.
    Minus,

    /// A bang `!` for logical negation.
    Bang,

    /// An asterisk `*`.
    Asterisk,

    /// A forward slash `/`.
    Slash,

    /// Less than `<`.
    Lt,

    /// Greater than `>`.
    Gt,

    /// Double equals `==` for equality comparison.
    Eq,

    /// Not equals `!=` for inequality comparison.
    NotEq,

    /// A comma `,`.
    Comma,

    /// A semicolon `;`, the (optional) statement terminator.
    Semicolon,

    /// A colon `:`. Lexed but currently consumed by no production.
    Colon,

    /// A left parenthesis `(`: grouping or a call argument list.
    LeftParen,

    /// A right parenthesis `)`.
    RightParen,

    /// A left brace `{`: opens a block.
    LeftBrace,

    /// A right brace `}`.
    RightBrace,

    /// A left bracket `[`: array literal or index expression.
    LeftBracket,

    /// A right bracket `]`.
    RightBracket,

    /// The `fn` keyword for function literals.
    Function,

    /// The `let` keyword for bindings.
    Let,

    /// The `true` keyword.
    True,

    /// The `false` keyword.
    False,

    /// The `if` keyword.
    If,

    /// The `else` keyword.
    Else,

    /// The `return` keyword.
    Return,

    /// The `for` keyword. Reserved: lexed as a keyword but consumed by no
    /// parser production, so using it is always a parse error.
    For,
}

impl TokenKind {
    /// Returns the stable token-type name used in parser error messages.
    ///
    /// These names are part of the observable interface (e.g.
    /// `excepted next token to be ASSIGN, got INT instead`) and must not
    /// change.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Eof => "EOF",
            TokenKind::Ident => "IDENT",
            TokenKind::Int => "INT",
            TokenKind::String => "STRING",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Bang => "BANG",
            TokenKind::Asterisk => "ASTERISK",
            TokenKind::Slash => "SLASH",
            TokenKind::Lt => "LT",
            TokenKind::Gt => "GT",
            TokenKind::Eq => "EQ",
            TokenKind::NotEq => "NOT_EQ",
            TokenKind::Comma => "COMMA",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Colon => "COLON",
            TokenKind::LeftParen => "LPAREN",
            TokenKind::RightParen => "RPAREN",
            TokenKind::LeftBrace => "LBRACE",
            TokenKind::RightBrace => "RBRACE",
            TokenKind::LeftBracket => "LBRACKET",
            TokenKind::RightBracket => "RBRACKET",
            TokenKind::Function => "FUNCTION",
            TokenKind::Let => "LET",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::Return => "RETURN",
            TokenKind::For => "FOR",
        }
    }

    /// Classifies an identifier as a keyword or a plain `Ident`.
    ///
    /// The keyword table: `fn`, `let`, `true`, `false`, `if`, `else`,
    /// `return`, `for`.
    pub fn lookup_ident(ident: &str) -> TokenKind {
        match ident {
            "fn" => TokenKind::Function,
            "let" => TokenKind::Let,
            "true" => TokenKind::True,
            "false" => TokenKind::False,
            "if" => TokenKind::If,
            "else" => TokenKind::Else,
            "return" => TokenKind::Return,
            "for" => TokenKind::For,
            _ => TokenKind::Ident,
        }
    }
}
