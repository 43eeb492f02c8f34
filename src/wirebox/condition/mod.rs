// SPDX-License-Identifier: MIT

//! Wiring conditions
//!
//! Each condition is a predicate over a `ContextAdapter` deciding whether a
//! component gets wired:
//! - `PropertyCondition` / `MissingPropertyCondition` - property subtree present or not
//! - `PropertyValueCondition` - property equals a value or satisfies a `$` expression
//! - `BeanCondition` / `MissingBeanCondition` - bean registered or not
//! - `ProfileCondition` - profile active
//! - `FunctionCondition` - arbitrary closure
//! - `NotCondition` - negation of any other condition

mod bean;
mod function;
mod not;
mod profile;
mod property;

pub use bean::{BeanCondition, MissingBeanCondition};
pub use function::FunctionCondition;
pub use not::NotCondition;
pub use profile::ProfileCondition;
pub use property::{MissingPropertyCondition, PropertyCondition, PropertyValueCondition};

use crate::kit::context::ContextAdapter;
use crate::kit::error::ConditionError;
use std::fmt::Debug;
use std::sync::Arc;

/// A predicate gating component registration.
///
/// Conditions are immutable once built and may be evaluated any number of
/// times, from any thread. A missing property or bean is a `false` (or, for
/// the `Missing*` variants, `true`) result, never an error; errors are
/// reserved for malformed expressions and unterminated chains.
pub trait Condition: Send + Sync + Debug {
    fn matches(&self, ctx: &dyn ContextAdapter) -> Result<bool, ConditionError>;
}

impl<C: Condition + ?Sized> Condition for Arc<C> {
    fn matches(&self, ctx: &dyn ContextAdapter) -> Result<bool, ConditionError> {
        (**self).matches(ctx)
    }
}

impl<C: Condition + ?Sized> Condition for Box<C> {
    fn matches(&self, ctx: &dyn ContextAdapter) -> Result<bool, ConditionError> {
        (**self).matches(ctx)
    }
}
