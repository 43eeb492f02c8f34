// SPDX-License-Identifier: MIT

//! Read-only query surface the condition engine evaluates against

use super::value::Value;
use std::collections::HashSet;

/// Read-only view of properties, registered beans and active profiles.
///
/// Conditions never mutate a context, so any implementation shared across
/// threads only needs to be `Sync` for its reads.
pub trait ContextAdapter: Send + Sync {
    /// Value stored under exactly `path`, if any
    fn property_value(&self, path: &str) -> Option<Value>;

    /// True if a key equals `path` or starts with `path` followed by `.`
    fn has_property_prefix(&self, path: &str) -> bool;

    /// True if a bean matching the type descriptor is registered.
    /// Unknown descriptors are simply not found.
    fn bean_exists(&self, descriptor: &str) -> bool;

    /// Currently active profiles
    fn active_profiles(&self) -> HashSet<String>;

    fn is_profile_active(&self, name: &str) -> bool {
        self.active_profiles().contains(name)
    }
}
