// SPDX-License-Identifier: MIT

//! Abstract Syntax Tree for property micro-expressions

use std::cmp::Ordering;

/// A parsed expression: one term followed by connector/term pairs,
/// evaluated strictly left to right
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    pub source: String,
    pub first: Term,
    pub rest: Vec<(Connector, Term)>,
}

/// A single comparison or a bare operand
#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    Compare {
        left: Literal,
        op: CompareOp,
        right: Literal,
    },
    Bare(Literal),
}

/// Logical connectors; both bind equally
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connector {
    /// &&
    And,
    /// ||
    Or,
}

/// Comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    /// ==
    Eq,
    /// !=
    NotEq,
    /// >
    Gt,
    /// >=
    Gte,
    /// <
    Lt,
    /// <=
    Lte,
}

impl CompareOp {
    /// Whether `ordering` (left relative to right) satisfies this operator
    pub fn holds(self, ordering: Ordering) -> bool {
        match self {
            CompareOp::Eq => ordering == Ordering::Equal,
            CompareOp::NotEq => ordering != Ordering::Equal,
            CompareOp::Gt => ordering == Ordering::Greater,
            CompareOp::Gte => ordering != Ordering::Less,
            CompareOp::Lt => ordering == Ordering::Less,
            CompareOp::Lte => ordering != Ordering::Greater,
        }
    }

    pub fn is_equality(self) -> bool {
        matches!(self, CompareOp::Eq | CompareOp::NotEq)
    }
}

/// Literal operands
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    String(String),
    /// Integer written without a fraction, kept exact
    Int(i64),
    Number(f64),
    Boolean(bool),
}

impl Literal {
    pub fn kind(&self) -> &'static str {
        match self {
            Literal::String(_) => "string",
            Literal::Int(_) | Literal::Number(_) => "number",
            Literal::Boolean(_) => "bool",
        }
    }
}

impl std::fmt::Display for CompareOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompareOp::Eq => write!(f, "=="),
            CompareOp::NotEq => write!(f, "!="),
            CompareOp::Gt => write!(f, ">"),
            CompareOp::Gte => write!(f, ">="),
            CompareOp::Lt => write!(f, "<"),
            CompareOp::Lte => write!(f, "<="),
        }
    }
}

impl std::fmt::Display for Connector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Connector::And => write!(f, "&&"),
            Connector::Or => write!(f, "||"),
        }
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Literal::String(s) => write!(f, "{:?}", s),
            Literal::Int(n) => write!(f, "{}", n),
            Literal::Number(n) => write!(f, "{}", n),
            Literal::Boolean(b) => write!(f, "{}", b),
        }
    }
}
