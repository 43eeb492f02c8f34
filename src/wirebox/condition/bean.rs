// SPDX-License-Identifier: MIT

use super::Condition;
use crate::kit::context::ContextAdapter;
use crate::kit::error::ConditionError;

/// True if a bean matching the descriptor is registered
#[derive(Debug, Clone, PartialEq)]
pub struct BeanCondition {
    descriptor: String,
}

impl BeanCondition {
    pub fn new(descriptor: impl Into<String>) -> Self {
        Self {
            descriptor: descriptor.into(),
        }
    }
}

impl Condition for BeanCondition {
    fn matches(&self, ctx: &dyn ContextAdapter) -> Result<bool, ConditionError> {
        Ok(ctx.bean_exists(&self.descriptor))
    }
}

/// True if no bean matching the descriptor is registered
#[derive(Debug, Clone, PartialEq)]
pub struct MissingBeanCondition {
    descriptor: String,
}

impl MissingBeanCondition {
    pub fn new(descriptor: impl Into<String>) -> Self {
        Self {
            descriptor: descriptor.into(),
        }
    }
}

impl Condition for MissingBeanCondition {
    fn matches(&self, ctx: &dyn ContextAdapter) -> Result<bool, ConditionError> {
        Ok(!ctx.bean_exists(&self.descriptor))
    }
}
