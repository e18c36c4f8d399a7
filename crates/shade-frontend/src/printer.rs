//! Canonical text rendering for expressions, definitions and token lines.
//!
//! Two layouts share the same prefix structure:
//!
//! - **compact** (`(+ (sin x) (baz 2 sin 3))`) is the canonical form used by
//!   the validator report and by [`crate::canonical::read_canonical`];
//! - **spaced** (`( + ( sin x ) ( baz 2 sin 3 ) )`) is the parser report form.

use std::fmt::{self, Write};

use crate::ast::{Definition, Expr};
use crate::token::{Token, TokenKind};

#[derive(Clone, Copy)]
enum Layout {
    Compact,
    Spaced,
}

/// Renders `expr` in compact canonical form.
pub fn print_expr(expr: &Expr) -> String {
    let mut out = String::new();
    write_expr(&mut out, expr, Layout::Compact);
    out
}

/// Renders `expr` in the spaced layout of the parser report.
pub fn print_expr_spaced(expr: &Expr) -> String {
    let mut out = String::new();
    write_expr(&mut out, expr, Layout::Spaced);
    out
}

/// Renders one parser-report line, including the leading space and newline.
///
/// ```text
///  ( = foo 1 )
///  ( = ( mult matrix vector ) ( * matrix vector ) )
/// ```
pub fn print_definition(def: &Definition) -> String {
    let mut out = String::from(" ( = ");
    if def.params.is_empty() {
        out.push_str(&def.name);
    } else {
        out.push_str("( ");
        out.push_str(&def.name);
        for param in &def.params {
            out.push(' ');
            out.push_str(param);
        }
        out.push_str(" )");
    }
    out.push(' ');
    write_expr(&mut out, &def.body, Layout::Spaced);
    out.push_str(" )\n");
    out
}

/// Renders the texts of one statement line joined by single spaces.
///
/// Line terminators are skipped, so the result has no trailing newline.
pub fn print_token_line(tokens: &[Token]) -> String {
    tokens
        .iter()
        .filter(|t| !matches!(t.kind, TokenKind::Newline | TokenKind::Eof))
        .map(|t| t.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

fn write_expr(out: &mut String, expr: &Expr, layout: Layout) {
    match expr {
        Expr::Literal(n) => {
            let _ = write!(out, "{}", n);
        }
        Expr::Identifier(name) => out.push_str(name),
        Expr::BinaryOp { op, lhs, rhs } => {
            open(out, layout);
            out.push(op.symbol());
            out.push(' ');
            write_expr(out, lhs, layout);
            out.push(' ');
            write_expr(out, rhs, layout);
            close(out, layout);
        }
        Expr::Application { callee, args } => {
            open(out, layout);
            write_expr(out, callee, layout);
            for arg in args {
                out.push(' ');
                write_expr(out, arg, layout);
            }
            close(out, layout);
        }
    }
}

fn open(out: &mut String, layout: Layout) {
    match layout {
        Layout::Compact => out.push('('),
        Layout::Spaced => out.push_str("( "),
    }
}

fn close(out: &mut String, layout: Layout) {
    match layout {
        Layout::Compact => out.push(')'),
        Layout::Spaced => out.push_str(" )"),
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&print_expr(self))
    }
}
