// SPDX-License-Identifier: MIT

//! Typed error handling for wirebox-rs
//!
//! Condition evaluation only ever fails for authoring defects: a connector
//! left without a following condition, or a malformed property expression.
//! Absence of a property, bean or profile is a normal `false`/`true` result
//! and never shows up here.

use std::fmt;
use thiserror::Error;

/// Top-level error type for wirebox-rs
#[derive(Debug, Error)]
pub enum WireboxError {
    /// Condition authoring or evaluation errors
    #[error("Condition error: {0}")]
    Condition(#[from] ConditionError),

    /// A component's condition chain is malformed
    #[error("Component '{name}': {source}")]
    Component {
        name: String,
        #[source]
        source: ConditionError,
    },

    /// Two components registered under the same name
    #[error("Component '{name}' is already registered")]
    DuplicateComponent { name: String },

    /// Configuration errors (invalid manifest, bad context definition)
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// YAML parsing errors
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Generic error wrapper
    #[error("{0}")]
    Other(String),
}

impl WireboxError {
    /// Create a duplicate component error
    pub fn duplicate(name: impl Into<String>) -> Self {
        Self::DuplicateComponent { name: name.into() }
    }

    /// Attribute a condition error to a component
    pub fn component(name: impl Into<String>, source: ConditionError) -> Self {
        Self::Component {
            name: name.into(),
            source,
        }
    }

    /// The condition error behind this error, if any
    pub fn condition_error(&self) -> Option<&ConditionError> {
        match self {
            Self::Condition(err) | Self::Component { source: err, .. } => Some(err),
            _ => None,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create from a generic error
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }
}

impl From<ParseError> for WireboxError {
    fn from(err: ParseError) -> Self {
        Self::Condition(ConditionError::Expression(err))
    }
}

/// Errors surfaced while composing or evaluating conditions
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConditionError {
    /// An `and()`/`or()` connector has no condition to combine with
    #[error("dangling '{operator}' operator: {reason}")]
    DanglingOperator {
        operator: &'static str,
        reason: &'static str,
    },

    /// A property expression failed to parse or evaluate
    #[error(transparent)]
    Expression(#[from] ParseError),
}

impl ConditionError {
    pub fn dangling(operator: &'static str, reason: &'static str) -> Self {
        Self::DanglingOperator { operator, reason }
    }

    pub fn is_dangling_operator(&self) -> bool {
        matches!(self, Self::DanglingOperator { .. })
    }
}

/// What went wrong inside a micro-expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    Empty,
    UnexpectedChar(char),
    UnterminatedString,
    InvalidNumber(String),
    UnknownWord(String),
    ExpectedOperand,
    UnexpectedToken(String),
    TypeMismatch(String),
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::Empty => write!(f, "empty expression"),
            ParseErrorKind::UnexpectedChar(c) => write!(f, "unexpected character '{}'", c),
            ParseErrorKind::UnterminatedString => write!(f, "unterminated string literal"),
            ParseErrorKind::InvalidNumber(s) => write!(f, "invalid number '{}'", s),
            ParseErrorKind::UnknownWord(s) => write!(f, "unknown word '{}'", s),
            ParseErrorKind::ExpectedOperand => write!(f, "expected an operand"),
            ParseErrorKind::UnexpectedToken(s) => write!(f, "unexpected token '{}'", s),
            ParseErrorKind::TypeMismatch(s) => write!(f, "type mismatch: {}", s),
        }
    }
}

/// Malformed micro-expression
#[derive(Debug, Clone, PartialEq, Error)]
#[error("failed to parse '{expression}'{}: {kind}", .position.map(|p| format!(" at {}", p)).unwrap_or_default())]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub expression: String,
    /// Byte offset into `expression`, when known
    pub position: Option<usize>,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, expression: impl Into<String>, position: Option<usize>) -> Self {
        Self {
            kind,
            expression: expression.into(),
            position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display_with_position() {
        let err = ParseError::new(ParseErrorKind::UnexpectedChar('#'), "1 # 2", Some(2));
        assert_eq!(
            err.to_string(),
            "failed to parse '1 # 2' at 2: unexpected character '#'"
        );
    }

    #[test]
    fn test_parse_error_display_without_position() {
        let err = ParseError::new(ParseErrorKind::Empty, "", None);
        assert_eq!(err.to_string(), "failed to parse '': empty expression");
    }

    #[test]
    fn test_dangling_operator_display() {
        let err = ConditionError::dangling("and", "no condition follows it");
        assert!(err.is_dangling_operator());
        assert_eq!(
            err.to_string(),
            "dangling 'and' operator: no condition follows it"
        );
    }

    #[test]
    fn test_component_error_keeps_condition_kind() {
        let err = WireboxError::component("cache", ConditionError::dangling("or", "no condition follows it"));
        assert_eq!(
            err.to_string(),
            "Component 'cache': dangling 'or' operator: no condition follows it"
        );
        assert!(err.condition_error().is_some_and(ConditionError::is_dangling_operator));
        assert!(WireboxError::config("x").condition_error().is_none());
    }

    #[test]
    fn test_parse_error_converts_to_top_level() {
        let err: WireboxError = ParseError::new(ParseErrorKind::Empty, "", None).into();
        assert!(matches!(
            err,
            WireboxError::Condition(ConditionError::Expression(_))
        ));
    }
}
