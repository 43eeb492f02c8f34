// SPDX-License-Identifier: MIT

use super::Condition;
use crate::kit::context::ContextAdapter;
use crate::kit::error::ConditionError;
use std::fmt;
use std::sync::Arc;

type Predicate = dyn Fn(&dyn ContextAdapter) -> bool + Send + Sync;

/// Condition backed by a caller-supplied predicate
#[derive(Clone)]
pub struct FunctionCondition {
    predicate: Arc<Predicate>,
}

impl FunctionCondition {
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&dyn ContextAdapter) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Arc::new(predicate),
        }
    }
}

impl fmt::Debug for FunctionCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FunctionCondition(<fn>)")
    }
}

impl Condition for FunctionCondition {
    fn matches(&self, ctx: &dyn ContextAdapter) -> Result<bool, ConditionError> {
        Ok((self.predicate)(ctx))
    }
}
