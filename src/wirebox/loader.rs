//! Manifest loader - YAML file loading and parsing

use super::types::{ContextDefinition, ManifestDefinition};
use crate::kit::error::WireboxError;
use std::fs;
use std::path::Path;

/// Loads wiring manifests and context definitions from YAML
pub struct ManifestLoader;

impl ManifestLoader {
    pub fn new() -> Self {
        Self
    }

    /// Load a manifest from a YAML file
    pub fn load_manifest<P: AsRef<Path>>(&self, path: P) -> Result<ManifestDefinition, WireboxError> {
        let content = fs::read_to_string(path)?;
        Self::parse_manifest(&content)
    }

    /// Load a standalone context definition from a YAML file
    pub fn load_context<P: AsRef<Path>>(&self, path: P) -> Result<ContextDefinition, WireboxError> {
        let content = fs::read_to_string(path)?;
        Self::parse_context(&content)
    }

    /// Parse a manifest from a YAML string
    pub fn parse_manifest(content: &str) -> Result<ManifestDefinition, WireboxError> {
        let def: ManifestDefinition = serde_yaml::from_str(content)?;
        Ok(def)
    }

    /// Parse a context definition from a YAML string
    pub fn parse_context(content: &str) -> Result<ContextDefinition, WireboxError> {
        let def: ContextDefinition = serde_yaml::from_str(content)?;
        Ok(def)
    }
}

impl Default for ManifestLoader {
    fn default() -> Self {
        Self::new()
    }
}
