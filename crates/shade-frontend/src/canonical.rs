//! Reader for the canonical prefix form produced by [`crate::printer`].
//!
//! Accepts both the compact and the spaced layout. `(op a b)` with `op` one of
//! `+ - * /` reads as a binary operation; any other list `(head a ...)` reads
//! as an application and must have at least one argument.

use std::collections::VecDeque;

use crate::ast::{BinOp, Expr};
use crate::errors::{FrontendError, SourcePosition};
use crate::parser::MAX_DEPTH;

/// Parses one canonical expression.
pub fn read_canonical(text: &str) -> Result<Expr, FrontendError> {
    let padded = text.replace('(', " ( ").replace(')', " ) ");
    let mut atoms: VecDeque<&str> = padded.split_whitespace().collect();
    let expr = read_expr(&mut atoms, 1)?;
    match atoms.pop_front() {
        None => Ok(expr),
        Some(extra) => Err(error("end of input", extra)),
    }
}

fn read_expr(atoms: &mut VecDeque<&str>, depth: usize) -> Result<Expr, FrontendError> {
    match atoms.pop_front() {
        None => Err(error("expression", "")),
        Some("(") if depth > MAX_DEPTH => Err(error(
            &format!("expression nested at most {} deep", MAX_DEPTH),
            "(",
        )),
        Some("(") => read_list(atoms, depth),
        Some(")") => Err(error("expression", ")")),
        Some(atom) => read_atom(atom),
    }
}

fn read_list(atoms: &mut VecDeque<&str>, depth: usize) -> Result<Expr, FrontendError> {
    let op = atoms
        .front()
        .and_then(|head| single_char(head))
        .and_then(BinOp::from_symbol);

    let expr = match op {
        Some(op) => {
            atoms.pop_front();
            let lhs = read_expr(atoms, depth + 1)?;
            let rhs = read_expr(atoms, depth + 1)?;
            Expr::binary(op, lhs, rhs)
        }
        None => {
            let callee = read_expr(atoms, depth + 1)?;
            let mut args = Vec::new();
            while !matches!(atoms.front(), Some(&")") | None) {
                args.push(read_expr(atoms, depth + 1)?);
            }
            if args.is_empty() {
                return Err(error("application argument", ")"));
            }
            Expr::apply(callee, args)
        }
    };

    match atoms.pop_front() {
        Some(")") => Ok(expr),
        other => Err(error("')'", other.unwrap_or(""))),
    }
}

fn read_atom(atom: &str) -> Result<Expr, FrontendError> {
    let digits = atom.strip_prefix('-').unwrap_or(atom);
    if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) {
        return atom
            .parse::<i64>()
            .map(Expr::Literal)
            .map_err(|_| error("integer literal within 64-bit range", atom));
    }
    let mut chars = atom.chars();
    let valid_start = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    if valid_start && chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        Ok(Expr::ident(atom))
    } else {
        Err(error("identifier or integer", atom))
    }
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

// The reader works on whitespace-split atoms and does not track positions.
fn error(expected: &str, found: &str) -> FrontendError {
    FrontendError::syntax(SourcePosition::new(1, 1), expected, found)
}
