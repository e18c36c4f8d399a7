//! # Shade Parser
//!
//! Recursive-descent parser over the token stream produced by
//! [`crate::lexer::tokenize`]. Each source line holds one definition:
//!
//! ```text
//! definition  := IDENT param* '=' expression NEWLINE
//! param       := IDENT
//! expression  := binary(0)
//! binary(p)   := application (OP binary(p'))*      -- see OPERATOR_TABLE
//! application := atom atom*
//! atom        := IDENT | INT | '(' expression ')'
//! ```
//!
//! ## Precedence
//!
//! Binary operators are parsed by precedence climbing driven by
//! [`OPERATOR_TABLE`]. Juxtaposition binds tighter than every operator: a
//! maximal run of adjacent atoms becomes a single [`Expr::Application`] whose
//! first atom is the callee, so `sin x + baz 2 sin 3` reads as
//! `(+ (sin x) (baz 2 sin 3))`.
//!
//! ## Error Handling
//!
//! [`parse`] stops at the first error. [`parse_recovering`] drops only the
//! offending line and keeps going, which is what the report drivers use.
//! Expressions deeper than [`MAX_DEPTH`] are rejected as syntax errors so
//! that no later stage recurses without bound.

use crate::ast::{BinOp, Definition, Expr};
use crate::errors::{FrontendError, SourcePosition};
use crate::lexer::tokenize;
use crate::token::{Token, TokenKind};

/// Associativity of a binary operator. Every operator in the language
/// groups to the left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assoc {
    Left,
}

/// Binding information for one binary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorInfo {
    pub op: BinOp,
    /// Higher binds tighter.
    pub precedence: u8,
    pub assoc: Assoc,
}

const ADD: OperatorInfo = OperatorInfo {
    op: BinOp::Add,
    precedence: 1,
    assoc: Assoc::Left,
};
const SUB: OperatorInfo = OperatorInfo {
    op: BinOp::Sub,
    precedence: 1,
    assoc: Assoc::Left,
};
const MUL: OperatorInfo = OperatorInfo {
    op: BinOp::Mul,
    precedence: 2,
    assoc: Assoc::Left,
};
const DIV: OperatorInfo = OperatorInfo {
    op: BinOp::Div,
    precedence: 2,
    assoc: Assoc::Left,
};

/// Grammar table for binary operators.
pub const OPERATOR_TABLE: &[OperatorInfo] = &[ADD, SUB, MUL, DIV];

/// Deepest expression the parser accepts.
///
/// Counts both tree depth (`x + x + x` is three deep) and parenthesis
/// nesting. Lines past the limit are syntax errors.
pub const MAX_DEPTH: usize = 256;

/// Table entry for `op`.
pub fn operator_info(op: BinOp) -> OperatorInfo {
    match op {
        BinOp::Add => ADD,
        BinOp::Sub => SUB,
        BinOp::Mul => MUL,
        BinOp::Div => DIV,
    }
}

/// Definitions parsed from a token stream together with the lines that failed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedUnit {
    pub definitions: Vec<Definition>,
    /// Lex and syntax errors, in source order.
    pub errors: Vec<FrontendError>,
}

impl ParsedUnit {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Tokenizes and parses `source`, failing on the first error.
///
/// # Example
///
/// ```rust,ignore
/// use shade_frontend::parse_program;
///
/// let defs = parse_program("mult matrix vector = matrix * vector\n")?;
/// assert_eq!(defs[0].params, vec!["matrix", "vector"]);
/// ```
pub fn parse_program(source: &str) -> Result<Vec<Definition>, FrontendError> {
    parse(&tokenize(source))
}

/// Parses every line of `tokens`, failing on the first lex or syntax error.
pub fn parse(tokens: &[Token]) -> Result<Vec<Definition>, FrontendError> {
    let mut definitions = Vec::new();
    for line in lines(tokens) {
        definitions.push(parse_line(line)?);
    }
    Ok(definitions)
}

/// Parses every line of `tokens`, skipping lines that fail.
pub fn parse_recovering(tokens: &[Token]) -> ParsedUnit {
    let mut unit = ParsedUnit::default();
    for line in lines(tokens) {
        match parse_line(line) {
            Ok(def) => unit.definitions.push(def),
            Err(err) => {
                #[cfg(feature = "tracing")]
                tracing::debug!("skipping line: {}", err);
                unit.errors.push(err);
            }
        }
    }
    unit
}

/// Parses a standalone infix expression such as `a + b * c`.
pub fn parse_expression(tokens: &[Token]) -> Result<Expr, FrontendError> {
    if let Some(unknown) = first_unknown(tokens) {
        return Err(unknown);
    }
    let mut parser = Parser::new(tokens);
    let parsed = parser.expression()?;
    parser.skip_line_ends();
    parser.expect_end("end of input")?;
    Ok(parsed.expr)
}

/// Splits `tokens` into statement lines, each ending with its `Newline`.
fn lines<'a>(tokens: &'a [Token]) -> impl Iterator<Item = &'a [Token]> {
    tokens
        .split_inclusive(|t| t.kind == TokenKind::Newline)
        .filter(|line| line.iter().any(|t| !t.ends_line()))
}

fn first_unknown(tokens: &[Token]) -> Option<FrontendError> {
    tokens.iter().find_map(|t| match t.kind {
        TokenKind::Unknown(found) => Some(FrontendError::Lex {
            position: t.position,
            found,
        }),
        _ => None,
    })
}

fn parse_line(line: &[Token]) -> Result<Definition, FrontendError> {
    if let Some(unknown) = first_unknown(line) {
        return Err(unknown);
    }
    let mut parser = Parser::new(line);
    let def = parser.definition()?;
    parser.expect_end("end of line")?;
    Ok(def)
}

/// An expression together with the depth of its tree.
struct Parsed {
    expr: Expr,
    depth: usize,
}

impl Parsed {
    fn leaf(expr: Expr) -> Self {
        Self { expr, depth: 1 }
    }
}

struct Parser<'t> {
    tokens: &'t [Token],
    idx: usize,
    /// Open parentheses around the current position.
    nesting: usize,
}

impl<'t> Parser<'t> {
    fn new(tokens: &'t [Token]) -> Self {
        Self {
            tokens,
            idx: 0,
            nesting: 0,
        }
    }

    fn peek(&self) -> Option<&'t Token> {
        self.tokens.get(self.idx)
    }

    fn peek_kind(&self) -> TokenKind {
        self.peek().map(|t| t.kind).unwrap_or(TokenKind::Eof)
    }

    fn bump(&mut self) -> Option<&'t Token> {
        let tok = self.tokens.get(self.idx);
        if tok.is_some() {
            self.idx += 1;
        }
        tok
    }

    /// Position of the current token, or just past the last one.
    fn here(&self) -> SourcePosition {
        match self.peek().or_else(|| self.tokens.last()) {
            Some(t) => t.position,
            None => SourcePosition::new(1, 1),
        }
    }

    fn error(&self, expected: &str) -> FrontendError {
        let found = self.peek().map(|t| t.text.as_str()).unwrap_or("");
        FrontendError::syntax(self.here(), expected, found)
    }

    fn expect(&mut self, kind: TokenKind) -> Result<&'t Token, FrontendError> {
        if self.peek_kind() == kind {
            if let Some(tok) = self.bump() {
                return Ok(tok);
            }
        }
        Err(self.error(kind.describe()))
    }

    fn skip_line_ends(&mut self) {
        while self.peek().is_some_and(|t| t.kind == TokenKind::Newline) {
            self.idx += 1;
        }
    }

    fn limit_depth(&self, depth: usize) -> Result<usize, FrontendError> {
        if depth > MAX_DEPTH {
            return Err(self.error(&format!("expression nested at most {} deep", MAX_DEPTH)));
        }
        Ok(depth)
    }

    fn expect_end(&mut self, expected: &str) -> Result<(), FrontendError> {
        match self.peek_kind() {
            TokenKind::Newline | TokenKind::Eof => Ok(()),
            _ => Err(self.error(expected)),
        }
    }

    fn definition(&mut self) -> Result<Definition, FrontendError> {
        let position = self.here();
        let name = self.expect(TokenKind::Ident)?.text.clone();

        let mut params = Vec::new();
        let mut param_positions = Vec::new();
        while self.peek_kind() == TokenKind::Ident {
            if let Some(tok) = self.bump() {
                params.push(tok.text.clone());
                param_positions.push(tok.position);
            }
        }
        self.expect(TokenKind::Equals)?;

        let body = self.expression()?.expr;
        Ok(Definition {
            name,
            params,
            param_positions,
            body,
            position,
        })
    }

    fn expression(&mut self) -> Result<Parsed, FrontendError> {
        self.binary(0)
    }

    fn binary(&mut self, min_precedence: u8) -> Result<Parsed, FrontendError> {
        let mut lhs = self.application()?;
        while let TokenKind::Op(op) = self.peek_kind() {
            let info = operator_info(op);
            if info.precedence < min_precedence {
                break;
            }
            self.bump();
            let next = match info.assoc {
                Assoc::Left => info.precedence + 1,
            };
            let rhs = self.binary(next)?;
            let depth = self.limit_depth(lhs.depth.max(rhs.depth) + 1)?;
            lhs = Parsed {
                expr: Expr::binary(op, lhs.expr, rhs.expr),
                depth,
            };
        }
        Ok(lhs)
    }

    fn application(&mut self) -> Result<Parsed, FrontendError> {
        let callee = self.atom()?;
        let mut depth = callee.depth;
        let mut args = Vec::new();
        while self.peek_kind().starts_atom() {
            let arg = self.atom()?;
            depth = depth.max(arg.depth);
            args.push(arg.expr);
        }
        if args.is_empty() {
            return Ok(callee);
        }
        let depth = self.limit_depth(depth + 1)?;
        Ok(Parsed {
            expr: Expr::apply(callee.expr, args),
            depth,
        })
    }

    fn atom(&mut self) -> Result<Parsed, FrontendError> {
        match self.peek_kind() {
            TokenKind::Ident => {
                let tok = self.expect(TokenKind::Ident)?;
                Ok(Parsed::leaf(Expr::Identifier(tok.text.clone())))
            }
            TokenKind::Int => {
                let position = self.here();
                let tok = self.expect(TokenKind::Int)?;
                tok.text
                    .parse::<i64>()
                    .map(|n| Parsed::leaf(Expr::Literal(n)))
                    .map_err(|_| {
                        FrontendError::syntax(position, "integer literal within 64-bit range", &tok.text)
                    })
            }
            TokenKind::LParen => {
                self.bump();
                self.nesting += 1;
                self.limit_depth(self.nesting)?;
                let inner = self.expression()?;
                self.expect(TokenKind::RParen)?;
                self.nesting -= 1;
                Ok(inner)
            }
            _ => Err(self.error("expression")),
        }
    }
}
