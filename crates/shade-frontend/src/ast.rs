//! # Abstract Syntax Tree
//!
//! A Shade source file is a sequence of definitions, one per line:
//!
//! ```text
//! foo = 1
//! mult matrix vector = matrix * vector
//! gl_Position = mult gl_ModelViewProjection gl_Vertex
//! ```
//!
//! Expressions are integer literals, identifiers, binary arithmetic and
//! juxtaposition application. Every node owns its children.

use crate::errors::SourcePosition;

/// Binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinOp {
    pub const ALL: [BinOp; 4] = [BinOp::Add, BinOp::Sub, BinOp::Mul, BinOp::Div];

    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    pub fn from_symbol(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == c)
    }
}

/// Expression tree.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Expr {
    Literal(i64),
    Identifier(String),
    BinaryOp {
        op: BinOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    /// `callee arg1 arg2 ...`; `args` is never empty.
    Application { callee: Box<Expr>, args: Vec<Expr> },
}

impl Expr {
    pub fn ident(name: impl Into<String>) -> Self {
        Self::Identifier(name.into())
    }

    pub fn binary(op: BinOp, lhs: Expr, rhs: Expr) -> Self {
        Self::BinaryOp {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    pub fn apply(callee: Expr, args: Vec<Expr>) -> Self {
        Self::Application {
            callee: Box::new(callee),
            args,
        }
    }

    /// Name of the callee when this is an application of an identifier.
    pub fn callee_name(&self) -> Option<&str> {
        match self {
            Self::Application { callee, .. } => match callee.as_ref() {
                Self::Identifier(name) => Some(name),
                _ => None,
            },
            _ => None,
        }
    }

    /// Calls `f` on this node and every descendant, parents first.
    pub fn walk<'a, F>(&'a self, f: &mut F)
    where
        F: FnMut(&'a Expr),
    {
        f(self);
        match self {
            Self::Literal(_) | Self::Identifier(_) => {}
            Self::BinaryOp { lhs, rhs, .. } => {
                lhs.walk(f);
                rhs.walk(f);
            }
            Self::Application { callee, args } => {
                callee.walk(f);
                for arg in args {
                    arg.walk(f);
                }
            }
        }
    }
}

/// A top-level binding: `name params* = body`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Definition {
    pub name: String,
    /// Empty for value bindings.
    pub params: Vec<String>,
    /// Position of each parameter, parallel to `params`.
    pub param_positions: Vec<SourcePosition>,
    pub body: Expr,
    /// Position of the leading name.
    pub position: SourcePosition,
}

impl Definition {
    pub fn is_function(&self) -> bool {
        !self.params.is_empty()
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Position of the `index`th parameter, falling back to the name.
    pub fn param_position(&self, index: usize) -> SourcePosition {
        self.param_positions
            .get(index)
            .copied()
            .unwrap_or(self.position)
    }
}
