//! Micro-expression evaluator

use super::ast::{CompareOp, Connector, Expression, Literal, Term};
use crate::kit::error::{ParseError, ParseErrorKind};
use crate::kit::value::cmp_int_float;
use std::cmp::Ordering;

/// Evaluate a parsed expression left to right.
///
/// `&&` skips its right term once the running result is false and `||`
/// skips it once the result is true. Skipped terms are never evaluated.
pub fn evaluate(expr: &Expression) -> Result<bool, ParseError> {
    let mut result = evaluate_term(&expr.first, &expr.source)?;
    for (connector, term) in &expr.rest {
        match (connector, result) {
            (Connector::And, false) | (Connector::Or, true) => continue,
            _ => result = evaluate_term(term, &expr.source)?,
        }
    }
    Ok(result)
}

fn evaluate_term(term: &Term, source: &str) -> Result<bool, ParseError> {
    match term {
        Term::Bare(literal) => Ok(matches!(literal, Literal::Boolean(true))),
        Term::Compare { left, op, right } => compare(left, *op, right, source),
    }
}

fn compare(left: &Literal, op: CompareOp, right: &Literal, source: &str) -> Result<bool, ParseError> {
    match (left, right) {
        (Literal::Int(a), Literal::Int(b)) => Ok(op.holds(a.cmp(b))),
        (Literal::Number(a), Literal::Number(b)) => Ok(holds(op, a.partial_cmp(b))),
        (Literal::Int(a), Literal::Number(b)) => Ok(holds(op, cmp_int_float(*a, *b))),
        (Literal::Number(a), Literal::Int(b)) => {
            Ok(holds(op, cmp_int_float(*b, *a).map(Ordering::reverse)))
        }
        (Literal::String(a), Literal::String(b)) => Ok(op.holds(a.cmp(b))),
        (Literal::Boolean(a), Literal::Boolean(b)) if op.is_equality() => Ok(op.holds(a.cmp(b))),
        (Literal::Boolean(_), Literal::Boolean(_)) => Err(mismatch(
            format!("booleans do not support '{}'", op),
            source,
        )),
        _ => Err(mismatch(
            format!("cannot compare {} {} {}", left.kind(), op, right.kind()),
            source,
        )),
    }
}

/// Unordered operands (NaN) satisfy nothing
fn holds(op: CompareOp, ordering: Option<Ordering>) -> bool {
    ordering.is_some_and(|o| op.holds(o))
}

fn mismatch(message: String, source: &str) -> ParseError {
    ParseError::new(ParseErrorKind::TypeMismatch(message), source, None)
}
