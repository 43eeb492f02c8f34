// SPDX-License-Identifier: MIT

use super::Condition;
use crate::kit::context::ContextAdapter;
use crate::kit::error::ConditionError;

/// True if the named profile is active
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileCondition {
    name: String,
}

impl ProfileCondition {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Condition for ProfileCondition {
    fn matches(&self, ctx: &dyn ContextAdapter) -> Result<bool, ConditionError> {
        Ok(ctx.is_profile_active(&self.name))
    }
}
