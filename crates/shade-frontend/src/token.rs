//! Token types produced by the lexer.

use std::fmt;

use crate::ast::BinOp;
use crate::errors::SourcePosition;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Ident,
    Int,
    Op(BinOp),
    Equals,
    LParen,
    RParen,
    /// End of a non-blank line.
    Newline,
    /// End of input. Only present when the sequence is non-empty.
    Eof,
    /// Character the lexer does not recognize.
    Unknown(char),
}

impl TokenKind {
    /// True for tokens that can begin an atom.
    pub fn starts_atom(self) -> bool {
        matches!(self, Self::Ident | Self::Int | Self::LParen)
    }

    /// Human-readable description used in "expecting ..." messages.
    pub fn describe(self) -> &'static str {
        match self {
            Self::Ident => "identifier",
            Self::Int => "integer",
            Self::Op(_) => "operator",
            Self::Equals => "'='",
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::Newline => "end of line",
            Self::Eof => "end of input",
            Self::Unknown(_) => "unknown character",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub position: SourcePosition,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, position: SourcePosition) -> Self {
        Self {
            kind,
            text: text.into(),
            position,
        }
    }

    /// Whether this token closes a statement line.
    pub fn ends_line(&self) -> bool {
        matches!(self.kind, TokenKind::Newline | TokenKind::Eof)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
