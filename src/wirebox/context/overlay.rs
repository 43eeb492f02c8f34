// SPDX-License-Identifier: MIT

//! Bean overlay used while resolving a registry

use crate::kit::context::ContextAdapter;
use crate::kit::value::Value;
use std::collections::HashSet;

/// Wraps a base context and adds beans that were wired so far.
///
/// The base is only ever read, so resolution never mutates the caller's
/// context.
pub struct WiringContext<'a> {
    base: &'a dyn ContextAdapter,
    wired: HashSet<String>,
}

impl<'a> WiringContext<'a> {
    pub fn new(base: &'a dyn ContextAdapter) -> Self {
        Self {
            base,
            wired: HashSet::new(),
        }
    }

    /// Make a bean visible under each of the given descriptors
    pub fn wire<I, S>(&mut self, descriptors: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.wired.extend(descriptors.into_iter().map(Into::into));
    }
}

impl ContextAdapter for WiringContext<'_> {
    fn property_value(&self, path: &str) -> Option<Value> {
        self.base.property_value(path)
    }

    fn has_property_prefix(&self, path: &str) -> bool {
        self.base.has_property_prefix(path)
    }

    fn bean_exists(&self, descriptor: &str) -> bool {
        self.wired.contains(descriptor) || self.base.bean_exists(descriptor)
    }

    fn active_profiles(&self) -> HashSet<String> {
        self.base.active_profiles()
    }

    fn is_profile_active(&self, name: &str) -> bool {
        self.base.is_profile_active(name)
    }
}
