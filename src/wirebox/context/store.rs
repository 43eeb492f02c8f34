// SPDX-License-Identifier: MIT

//! In-memory property, bean and profile storage

use crate::kit::context::ContextAdapter;
use crate::kit::error::WireboxError;
use crate::kit::value::Value;
use std::collections::{BTreeMap, HashSet};
use std::ops::Bound;

/// In-memory context adapter.
///
/// Property keys are kept sorted so subtree checks are a single range probe.
#[derive(Debug, Clone, Default)]
pub struct PropertyContext {
    properties: BTreeMap<String, Value>,
    bean_types: HashSet<String>,
    bean_names: HashSet<String>,
    profiles: HashSet<String>,
}

impl PropertyContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property, replacing any previous value
    pub fn set_property(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.properties.insert(key.into(), value.into());
    }

    /// Set a possibly nested YAML value under `key`.
    ///
    /// Maps are expanded with `.` and sequences with `[i]` until every leaf
    /// is a scalar property; nulls are skipped.
    pub fn set_nested(&mut self, key: &str, value: &serde_yaml::Value) -> Result<(), WireboxError> {
        use serde_yaml::Value as Yaml;

        match value {
            Yaml::Null => {}
            Yaml::Bool(b) => self.set_property(key, *b),
            Yaml::Number(n) => {
                let v = if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else if let Some(f) = n.as_f64().filter(|f| f.is_finite()) {
                    Value::Float(f)
                } else {
                    return Err(WireboxError::config(format!(
                        "property '{}' has an unsupported number: {}",
                        key, n
                    )));
                };
                self.set_property(key, v);
            }
            Yaml::String(s) => self.set_property(key, s.as_str()),
            Yaml::Sequence(items) => {
                for (i, item) in items.iter().enumerate() {
                    self.set_nested(&format!("{}[{}]", key, i), item)?;
                }
            }
            Yaml::Mapping(map) => {
                for (k, v) in map {
                    let segment = scalar_key(k).ok_or_else(|| {
                        WireboxError::config(format!("property '{}' has a non-scalar key", key))
                    })?;
                    let child = if key.is_empty() {
                        segment
                    } else {
                        format!("{}.{}", key, segment)
                    };
                    self.set_nested(&child, v)?;
                }
            }
            Yaml::Tagged(tagged) => self.set_nested(key, &tagged.value)?,
        }
        Ok(())
    }

    /// Register a bean by its type descriptor
    pub fn register_bean(&mut self, type_name: impl Into<String>) {
        self.bean_types.insert(type_name.into());
    }

    /// Register a bean reachable by name as well as by type
    pub fn register_named_bean(&mut self, name: impl Into<String>, type_name: impl Into<String>) {
        self.bean_names.insert(name.into());
        self.bean_types.insert(type_name.into());
    }

    /// Activate a profile
    pub fn set_profile(&mut self, name: impl Into<String>) {
        self.profiles.insert(name.into());
    }

    /// Get a property value
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    /// All property keys in sorted order
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.properties.keys()
    }
}

fn scalar_key(key: &serde_yaml::Value) -> Option<String> {
    match key {
        serde_yaml::Value::String(s) => Some(s.clone()),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

impl ContextAdapter for PropertyContext {
    fn property_value(&self, path: &str) -> Option<Value> {
        self.properties.get(path).cloned()
    }

    fn has_property_prefix(&self, path: &str) -> bool {
        if self.properties.contains_key(path) {
            return true;
        }
        let child = format!("{}.", path);
        self.properties
            .range::<str, _>((Bound::Included(child.as_str()), Bound::Unbounded))
            .next()
            .is_some_and(|(k, _)| k.starts_with(&child))
    }

    fn bean_exists(&self, descriptor: &str) -> bool {
        self.bean_types.contains(descriptor) || self.bean_names.contains(descriptor)
    }

    fn active_profiles(&self) -> HashSet<String> {
        self.profiles.clone()
    }

    fn is_profile_active(&self, name: &str) -> bool {
        self.profiles.contains(name)
    }
}
