// SPDX-License-Identifier: MIT

//! Micro-expressions for property value conditions
//!
//! A deliberately small language: literals, comparisons and `&&`/`||`
//! evaluated strictly left to right, no parentheses:
//! - `3 > 2 && 3 < 4`
//! - `"abc" == "abc"`
//! - `false == false || 1 >= 2`
//!
//! Property conditions fill in the `$` placeholder before parsing.

mod ast;
mod evaluator;
mod parser;
pub mod template;

pub use ast::{CompareOp, Connector, Expression, Literal, Term};
pub use evaluator::evaluate;
pub use parser::parse;

use crate::kit::error::ParseError;

/// Parse and evaluate in one step
pub fn eval(input: &str) -> Result<bool, ParseError> {
    let expr = parse(input)?;
    evaluate(&expr)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eval_reports_parse_errors_before_evaluating() {
        // the broken term sits behind a short-circuit but parsing still fails
        assert!(eval("false && 3 >").is_err());
    }

    #[test]
    fn test_eval_simple() {
        assert!(eval("3>2&&3<4").unwrap());
        assert!(!eval("3>5").unwrap());
    }
}
