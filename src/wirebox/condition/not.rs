// SPDX-License-Identifier: MIT

use super::Condition;
use crate::kit::context::ContextAdapter;
use crate::kit::error::ConditionError;
use std::sync::Arc;

/// Negates any condition, including a whole `Conditional`.
/// Errors from the inner condition pass through unchanged.
#[derive(Debug, Clone)]
pub struct NotCondition {
    inner: Arc<dyn Condition>,
}

impl NotCondition {
    pub fn new(inner: impl Condition + 'static) -> Self {
        Self {
            inner: Arc::new(inner),
        }
    }

    pub fn from_arc(inner: Arc<dyn Condition>) -> Self {
        Self { inner }
    }
}

impl Condition for NotCondition {
    fn matches(&self, ctx: &dyn ContextAdapter) -> Result<bool, ConditionError> {
        Ok(!self.inner.matches(ctx)?)
    }
}
