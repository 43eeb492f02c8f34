// SPDX-License-Identifier: MIT

//! Manifest builder - turns declarative manifests into live registries
//!
//! Condition chains are assembled and validated here, so a malformed
//! manifest fails before anything is resolved.

use crate::kit::error::WireboxError;
use crate::wirebox::conditional::Conditional;
use crate::wirebox::context::PropertyContext;
use crate::wirebox::loader::ManifestLoader;
use crate::wirebox::registry::{ComponentDefinition, ComponentRegistry};
use crate::wirebox::types::{ConditionStep, ContextDefinition, ManifestDefinition};
use std::path::Path;

/// A built manifest
#[derive(Debug)]
pub struct Wiring {
    pub name: String,
    pub registry: ComponentRegistry,
    /// Context declared inside the manifest, if any
    pub context: Option<PropertyContext>,
}

/// High-level builder for wiring manifests
pub struct Builder {
    loader: ManifestLoader,
}

impl Builder {
    pub fn new() -> Self {
        Self {
            loader: ManifestLoader::new(),
        }
    }

    /// Build from a YAML manifest file
    pub fn build_from_file<P: AsRef<Path>>(&self, path: P) -> Result<Wiring, WireboxError> {
        let def = self.loader.load_manifest(path)?;
        Self::build_from_def(&def)
    }

    /// Build a context from a standalone YAML file
    pub fn context_from_file<P: AsRef<Path>>(&self, path: P) -> Result<PropertyContext, WireboxError> {
        let def = self.loader.load_context(path)?;
        Self::build_context(&def)
    }

    /// Build from a parsed manifest
    pub fn build_from_def(def: &ManifestDefinition) -> Result<Wiring, WireboxError> {
        let mut registry = ComponentRegistry::new();
        for spec in &def.components {
            let conditional = Self::build_conditional(&spec.when).map_err(|e| match e {
                WireboxError::Condition(source) => WireboxError::component(&spec.name, source),
                WireboxError::Config(msg) => {
                    WireboxError::config(format!("component '{}': {}", spec.name, msg))
                }
                other => other,
            })?;
            registry.register(
                ComponentDefinition::new(&spec.name, &spec.type_name).with_condition(conditional),
            )?;
        }

        let context = def.context.as_ref().map(Self::build_context).transpose()?;

        log::info!(
            "Built manifest '{}' with {} component(s)",
            def.name,
            registry.len()
        );

        Ok(Wiring {
            name: def.name.clone(),
            registry,
            context,
        })
    }

    /// Assemble a condition chain from manifest steps
    pub fn build_conditional(steps: &[ConditionStep]) -> Result<Conditional, WireboxError> {
        let mut cond = Conditional::new();
        for step in steps {
            cond = match step {
                ConditionStep::And => cond.and(),
                ConditionStep::Or => cond.or(),
                ConditionStep::OnProperty(path) => cond.on_property(path.as_str()),
                ConditionStep::OnMissingProperty(path) => cond.on_missing_property(path.as_str()),
                ConditionStep::OnPropertyValue(spec) => {
                    cond.on_property_value(spec.path.as_str(), spec.expected.clone())
                }
                ConditionStep::OnBean(descriptor) => cond.on_bean(descriptor.as_str()),
                ConditionStep::OnMissingBean(descriptor) => cond.on_missing_bean(descriptor.as_str()),
                ConditionStep::OnProfile(name) => cond.on_profile(name.as_str()),
                ConditionStep::Not(inner) => {
                    if inner.is_empty() {
                        return Err(WireboxError::config("empty 'not' block"));
                    }
                    cond.on_condition_not(Self::build_conditional(inner)?)
                }
            };
        }
        Ok(cond.build()?)
    }

    /// Build an in-memory context from its definition
    pub fn build_context(def: &ContextDefinition) -> Result<PropertyContext, WireboxError> {
        let mut ctx = PropertyContext::new();
        if !def.properties.is_null() && !def.properties.is_mapping() {
            return Err(WireboxError::config("context properties must be a mapping"));
        }
        ctx.set_nested("", &def.properties)?;
        for bean in &def.beans {
            ctx.register_bean(bean.as_str());
        }
        for profile in &def.profiles {
            ctx.set_profile(profile.as_str());
        }
        Ok(ctx)
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}
