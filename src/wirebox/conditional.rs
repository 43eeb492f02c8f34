// SPDX-License-Identifier: MIT

//! Composable condition chains
//!
//! A `Conditional` accumulates conditions joined by `and()`/`or()`:
//!
//! ```
//! use wirebox_rs::wirebox::conditional::Conditional;
//!
//! let cond = Conditional::new()
//!     .on_property("server.port")
//!     .and()
//!     .on_property_value("server.tls", true)
//!     .or()
//!     .on_profile("dev");
//! assert!(cond.build().is_ok());
//! ```
//!
//! Conditions added back to back without a connector are joined with AND.
//! The chain folds strictly left to right, so the example reads
//! `(port && tls) || dev`.

use crate::kit::context::ContextAdapter;
use crate::kit::error::ConditionError;
use crate::kit::value::Value;
use crate::wirebox::condition::{
    BeanCondition, Condition, FunctionCondition, MissingBeanCondition, MissingPropertyCondition,
    NotCondition, ProfileCondition, PropertyCondition, PropertyValueCondition,
};
use std::fmt;
use std::sync::Arc;

/// Connector between two conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    And,
    Or,
}

impl Operator {
    pub fn as_str(self) -> &'static str {
        match self {
            Operator::And => "and",
            Operator::Or => "or",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a chain stands during construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuilderState {
    /// Nothing added yet; evaluates to true
    Empty,
    /// At least one condition, no connector waiting
    HasResult,
    /// `and()`/`or()` called, waiting for a condition
    PendingOp,
}

/// An ordered chain of conditions.
///
/// Builder methods take `self` by value, so a chain has a single owner while
/// it is assembled. Once assembled it is only read: share it behind an `Arc`
/// or clone it freely, and evaluate it from as many threads as needed.
///
/// A misplaced `and()`/`or()` is latched and reported by `build()` and by
/// every evaluation, before any condition runs.
#[derive(Debug, Clone, Default)]
pub struct Conditional {
    steps: Vec<(Operator, Arc<dyn Condition>)>,
    pending: Option<Operator>,
    error: Option<ConditionError>,
}

impl Conditional {
    /// Empty chain. Matches everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a condition joined by the pending connector, or AND if none
    pub fn on(self, condition: impl Condition + 'static) -> Self {
        self.on_arc(Arc::new(condition))
    }

    /// Append an already shared condition
    pub fn on_arc(mut self, condition: Arc<dyn Condition>) -> Self {
        let op = self.pending.take().unwrap_or(Operator::And);
        self.steps.push((op, condition));
        self
    }

    pub fn on_property(self, path: impl Into<String>) -> Self {
        self.on(PropertyCondition::new(path))
    }

    pub fn on_missing_property(self, path: impl Into<String>) -> Self {
        self.on(MissingPropertyCondition::new(path))
    }

    pub fn on_property_value(self, path: impl Into<String>, expected: impl Into<Value>) -> Self {
        self.on(PropertyValueCondition::new(path, expected))
    }

    pub fn on_bean(self, descriptor: impl Into<String>) -> Self {
        self.on(BeanCondition::new(descriptor))
    }

    pub fn on_missing_bean(self, descriptor: impl Into<String>) -> Self {
        self.on(MissingBeanCondition::new(descriptor))
    }

    pub fn on_profile(self, name: impl Into<String>) -> Self {
        self.on(ProfileCondition::new(name))
    }

    pub fn on_function<F>(self, predicate: F) -> Self
    where
        F: Fn(&dyn ContextAdapter) -> bool + Send + Sync + 'static,
    {
        self.on(FunctionCondition::new(predicate))
    }

    /// Append the negation of `condition`
    pub fn on_condition_not(self, condition: impl Condition + 'static) -> Self {
        self.on(NotCondition::new(condition))
    }

    /// Join the next condition with AND
    pub fn and(self) -> Self {
        self.connect(Operator::And)
    }

    /// Join the next condition with OR
    pub fn or(self) -> Self {
        self.connect(Operator::Or)
    }

    fn connect(mut self, op: Operator) -> Self {
        if self.error.is_some() {
            return self;
        }

        let reason = match self.state() {
            BuilderState::Empty => Some("no condition precedes it"),
            BuilderState::PendingOp => Some("the previous connector has no condition"),
            BuilderState::HasResult => None,
        };

        match reason {
            Some(reason) => {
                log::error!("Malformed conditional: dangling '{}' ({})", op, reason);
                self.error = Some(ConditionError::dangling(op.as_str(), reason));
            }
            None => self.pending = Some(op),
        }
        self
    }

    pub fn state(&self) -> BuilderState {
        if self.pending.is_some() {
            BuilderState::PendingOp
        } else if self.steps.is_empty() {
            BuilderState::Empty
        } else {
            BuilderState::HasResult
        }
    }

    /// Number of conditions in the chain
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Check the chain is well formed
    pub fn validate(&self) -> Result<(), ConditionError> {
        if let Some(err) = &self.error {
            return Err(err.clone());
        }
        if let Some(op) = self.pending {
            return Err(ConditionError::dangling(op.as_str(), "no condition follows it"));
        }
        Ok(())
    }

    /// Finish construction, failing on a dangling connector
    pub fn build(self) -> Result<Self, ConditionError> {
        self.validate()?;
        Ok(self)
    }
}

impl Condition for Conditional {
    fn matches(&self, ctx: &dyn ContextAdapter) -> Result<bool, ConditionError> {
        self.validate()?;

        let mut steps = self.steps.iter();
        let Some((_, first)) = steps.next() else {
            return Ok(true);
        };

        let mut result = first.matches(ctx)?;
        for (i, (op, condition)) in steps.enumerate() {
            match (op, result) {
                (Operator::And, false) | (Operator::Or, true) => {
                    log::debug!("Skipping condition {} after {} short-circuit", i + 1, op);
                }
                _ => result = condition.matches(ctx)?,
            }
        }
        Ok(result)
    }
}
