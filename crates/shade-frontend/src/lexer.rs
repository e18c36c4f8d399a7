//! # Lexer
//!
//! Converts source text into a flat token sequence, one statement per line.
//!
//! Tokenizing never fails: characters outside the language become
//! [`TokenKind::Unknown`] tokens, which [`lex_errors`] turns into
//! [`FrontendError::Lex`] values and the parser rejects line by line.
//! `#` starts a comment that runs to the end of the line.

use std::iter::Peekable;
use std::str::Chars;

use crate::ast::BinOp;
use crate::errors::{FrontendError, SourcePosition};
use crate::token::{Token, TokenKind};

/// Tokenizes `source`.
///
/// Every line that yields at least one token is closed by a
/// [`TokenKind::Newline`]; a non-empty sequence ends with [`TokenKind::Eof`].
/// Empty or all-blank input yields an empty vector.
pub fn tokenize(source: &str) -> Vec<Token> {
    let tokens = Lexer::new(source).lex_all();
    #[cfg(feature = "tracing")]
    tracing::debug!("tokenized {} bytes into {} tokens", source.len(), tokens.len());
    tokens
}

/// Collects a lex error for every unrecognized character in `tokens`.
pub fn lex_errors(tokens: &[Token]) -> Vec<FrontendError> {
    tokens
        .iter()
        .filter_map(|t| match t.kind {
            TokenKind::Unknown(found) => Some(FrontendError::Lex {
                position: t.position,
                found,
            }),
            _ => None,
        })
        .collect()
}

struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
    line: u32,
    col: u32,
    tokens: Vec<Token>,
    line_has_tokens: bool,
}

impl<'a> Lexer<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            chars: src.chars().peekable(),
            line: 1,
            col: 1,
            tokens: Vec::new(),
            line_has_tokens: false,
        }
    }

    fn lex_all(mut self) -> Vec<Token> {
        while let Some(&ch) = self.chars.peek() {
            let position = self.position();
            match ch {
                '\n' => {
                    self.end_line(position);
                    self.advance();
                    self.line += 1;
                    self.col = 1;
                }
                ' ' | '\t' | '\r' => self.advance(),
                '#' => self.skip_comment(),
                c if is_ident_start(c) => {
                    let text = self.read_while(is_ident_continue);
                    self.push(TokenKind::Ident, text, position);
                }
                c if c.is_ascii_digit() => {
                    let text = self.read_while(|c| c.is_ascii_digit());
                    self.push(TokenKind::Int, text, position);
                }
                c => {
                    self.advance();
                    let kind = match c {
                        '=' => TokenKind::Equals,
                        '(' => TokenKind::LParen,
                        ')' => TokenKind::RParen,
                        _ => match BinOp::from_symbol(c) {
                            Some(op) => TokenKind::Op(op),
                            None => TokenKind::Unknown(c),
                        },
                    };
                    self.push(kind, c.to_string(), position);
                }
            }
        }

        let position = self.position();
        self.end_line(position);
        if !self.tokens.is_empty() {
            self.tokens.push(Token::new(TokenKind::Eof, "", position));
        }
        self.tokens
    }

    fn position(&self) -> SourcePosition {
        SourcePosition::new(self.line, self.col)
    }

    fn advance(&mut self) {
        if self.chars.next().is_some() {
            self.col += 1;
        }
    }

    fn push(&mut self, kind: TokenKind, text: String, position: SourcePosition) {
        self.tokens.push(Token::new(kind, text, position));
        self.line_has_tokens = true;
    }

    fn end_line(&mut self, position: SourcePosition) {
        if self.line_has_tokens {
            self.tokens.push(Token::new(TokenKind::Newline, "", position));
            self.line_has_tokens = false;
        }
    }

    fn skip_comment(&mut self) {
        while let Some(&c) = self.chars.peek() {
            if c == '\n' {
                break;
            }
            self.advance();
        }
    }

    fn read_while(&mut self, pred: impl Fn(char) -> bool) -> String {
        let mut out = String::new();
        while let Some(&c) = self.chars.peek() {
            if !pred(c) {
                break;
            }
            out.push(c);
            self.advance();
        }
        out
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
