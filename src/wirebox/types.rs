// SPDX-License-Identifier: MIT

//! YAML schema types for wiring manifests
//!
//! A manifest lists components with the conditions that gate them, plus an
//! optional context to evaluate against.

use crate::kit::value::Value;
use serde::{Deserialize, Serialize};

/// Top-level manifest definition
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ManifestDefinition {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Context used when none is supplied separately
    pub context: Option<ContextDefinition>,
    #[serde(default)]
    pub components: Vec<ComponentSpec>,
}

/// Properties, beans and profiles of an in-memory context
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct ContextDefinition {
    /// Nested values are flattened into dotted keys
    #[serde(default)]
    pub properties: serde_yaml::Value,
    #[serde(default)]
    pub beans: Vec<String>,
    #[serde(default)]
    pub profiles: Vec<String>,
}

/// A component declaration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ComponentSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    /// Condition chain; empty means always wired
    #[serde(default, with = "serde_yaml::with::singleton_map_recursive")]
    pub when: Vec<ConditionStep>,
}

/// One element of a condition chain.
///
/// Connectors are bare strings (`and`, `or`); conditions are single-key
/// maps such as `on_property: server.port`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum ConditionStep {
    And,
    Or,
    OnProperty(String),
    OnMissingProperty(String),
    OnPropertyValue(PropertyValueSpec),
    OnBean(String),
    OnMissingBean(String),
    OnProfile(String),
    /// Negation of a nested chain
    Not(Vec<ConditionStep>),
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PropertyValueSpec {
    pub path: String,
    pub expected: Value,
}
