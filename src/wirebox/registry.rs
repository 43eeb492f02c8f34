// SPDX-License-Identifier: MIT

//! Component registry that decides which components get wired

use crate::kit::context::ContextAdapter;
use crate::kit::error::WireboxError;
use crate::wirebox::condition::Condition;
use crate::wirebox::conditional::Conditional;
use crate::wirebox::context::WiringContext;
use serde::Serialize;
use std::collections::HashSet;

/// A component and the condition gating it
#[derive(Debug, Clone)]
pub struct ComponentDefinition {
    pub name: String,
    pub type_name: String,
    pub conditional: Conditional,
}

impl ComponentDefinition {
    /// Unconditional component
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            conditional: Conditional::new(),
        }
    }

    pub fn with_condition(mut self, conditional: Conditional) -> Self {
        self.conditional = conditional;
        self
    }
}

/// A component as reported by a resolution
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedComponent {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
}

/// Outcome of resolving a registry against a context
#[derive(Debug, Clone, Default, Serialize)]
pub struct Resolution {
    pub included: Vec<ResolvedComponent>,
    pub excluded: Vec<ResolvedComponent>,
}

impl Resolution {
    pub fn is_included(&self, name: &str) -> bool {
        self.included.iter().any(|c| c.name == name)
    }

    pub fn included_names(&self) -> Vec<&str> {
        self.included.iter().map(|c| c.name.as_str()).collect()
    }
}

/// Ordered set of component definitions.
///
/// Registration happens up front on a single thread; resolution only reads.
#[derive(Debug, Clone, Default)]
pub struct ComponentRegistry {
    components: Vec<ComponentDefinition>,
    names: HashSet<String>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a component. Malformed conditions and duplicate names are
    /// rejected here, before any wiring starts.
    pub fn register(&mut self, definition: ComponentDefinition) -> Result<(), WireboxError> {
        definition.conditional.validate()?;
        if !self.names.insert(definition.name.clone()) {
            return Err(WireboxError::duplicate(definition.name));
        }
        log::debug!(
            "Registered component '{}' ({}) with {} condition(s)",
            definition.name,
            definition.type_name,
            definition.conditional.len()
        );
        self.components.push(definition);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&ComponentDefinition> {
        self.components.iter().find(|c| c.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ComponentDefinition> {
        self.components.iter()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Decide which components get wired.
    ///
    /// Components are checked in registration order. Each included component
    /// becomes visible by name and type to bean conditions of the components
    /// after it. `ctx` itself is never modified.
    pub fn resolve(&self, ctx: &dyn ContextAdapter) -> Result<Resolution, WireboxError> {
        let mut overlay = WiringContext::new(ctx);
        let mut resolution = Resolution::default();

        for def in &self.components {
            let included = def.conditional.matches(&overlay).map_err(|e| {
                log::error!("Condition of component '{}' failed: {}", def.name, e);
                e
            })?;

            let resolved = ResolvedComponent {
                name: def.name.clone(),
                type_name: def.type_name.clone(),
            };
            if included {
                log::info!("Wiring component '{}' ({})", def.name, def.type_name);
                overlay.wire([def.name.as_str(), def.type_name.as_str()]);
                resolution.included.push(resolved);
            } else {
                log::info!("Skipping component '{}': conditions not met", def.name);
                resolution.excluded.push(resolved);
            }
        }

        Ok(resolution)
    }
}
