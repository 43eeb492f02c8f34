// SPDX-License-Identifier: MIT

//! Property based conditions

use super::Condition;
use crate::kit::context::ContextAdapter;
use crate::kit::error::ConditionError;
use crate::kit::value::Value;
use crate::wirebox::expression::{self, template};

/// True if the property, or any property below it, is set
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyCondition {
    path: String,
}

impl PropertyCondition {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl Condition for PropertyCondition {
    fn matches(&self, ctx: &dyn ContextAdapter) -> Result<bool, ConditionError> {
        Ok(ctx.has_property_prefix(&self.path))
    }
}

/// True if neither the property nor anything below it is set
#[derive(Debug, Clone, PartialEq)]
pub struct MissingPropertyCondition {
    path: String,
}

impl MissingPropertyCondition {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl Condition for MissingPropertyCondition {
    fn matches(&self, ctx: &dyn ContextAdapter) -> Result<bool, ConditionError> {
        Ok(!ctx.has_property_prefix(&self.path))
    }
}

/// Checks a property's value.
///
/// A string `expected` containing `$` is an expression template: each `$`
/// is replaced by the actual value and the result is evaluated, e.g.
/// `"$>2&&$<4"`. Any other `expected` is compared for equality with
/// [`Value::loosely_equals`]. An unset property never matches.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyValueCondition {
    path: String,
    expected: Value,
}

impl PropertyValueCondition {
    pub fn new(path: impl Into<String>, expected: impl Into<Value>) -> Self {
        Self {
            path: path.into(),
            expected: expected.into(),
        }
    }

    fn template(&self) -> Option<&str> {
        match &self.expected {
            Value::Str(s) if template::has_placeholder(s) => Some(s),
            _ => None,
        }
    }
}

impl Condition for PropertyValueCondition {
    fn matches(&self, ctx: &dyn ContextAdapter) -> Result<bool, ConditionError> {
        let Some(actual) = ctx.property_value(&self.path) else {
            log::debug!("Property '{}' is not set", self.path);
            return Ok(false);
        };

        match self.template() {
            Some(tpl) => {
                let source = template::substitute(tpl, &actual);
                log::debug!("Evaluating '{}' for property '{}'", source, self.path);
                Ok(expression::eval(&source)?)
            }
            None => Ok(actual.loosely_equals(&self.expected)),
        }
    }
}
