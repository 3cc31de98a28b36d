//! # Compute Policy
//!
//! Names the attribute keys that carry metadata conventions (position, root
//! flag, timestamps, ...). Computers never hard-code these keys; they read
//! them from the policy in effect for the current call.
//!
//! A policy can be supplied in code, merged from a partial [`PolicyOverride`],
//! or loaded from TOML:
//!
//! ```toml
//! position = "xy"
//! time = "timestamp"
//! ```

use crate::GraphSpecError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Attribute-key conventions for metadata axes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComputePolicy {
    /// Vertex key holding a numeric coordinate list.
    pub position: String,
    /// Vertex key holding a boolean root marker.
    pub root: String,
    /// Vertex/edge key holding a timestamp.
    pub time: String,
    /// Vertex key holding a layer or community tag.
    pub layer: String,
    /// Edge key holding an ordering index.
    pub edge_order: String,
    /// Vertex key holding a port list or port count.
    pub ports: String,
    /// Edge key holding a numeric weight vector.
    pub weight_vector: String,
    /// Edge key holding an existence probability.
    pub probability: String,
    /// Vertex key whose `false` value marks a non-probe vertex.
    pub probe: String,
    /// Vertex/edge key whose `false` value marks an unobserved element.
    pub observed: String,
}

impl Default for ComputePolicy {
    fn default() -> Self {
        Self {
            position: "position".to_string(),
            root: "root".to_string(),
            time: "time".to_string(),
            layer: "layer".to_string(),
            edge_order: "order".to_string(),
            ports: "ports".to_string(),
            weight_vector: "weights".to_string(),
            probability: "probability".to_string(),
            probe: "probe".to_string(),
            observed: "observed".to_string(),
        }
    }
}

impl ComputePolicy {
    /// Default policy with the given override merged on top.
    #[must_use]
    pub fn merged(overrides: &PolicyOverride) -> Self {
        let mut policy = Self::default();
        policy.apply(overrides);
        policy
    }

    /// Replace every key the override supplies.
    pub fn apply(&mut self, overrides: &PolicyOverride) {
        let slots: [(&mut String, &Option<String>); 10] = [
            (&mut self.position, &overrides.position),
            (&mut self.root, &overrides.root),
            (&mut self.time, &overrides.time),
            (&mut self.layer, &overrides.layer),
            (&mut self.edge_order, &overrides.edge_order),
            (&mut self.ports, &overrides.ports),
            (&mut self.weight_vector, &overrides.weight_vector),
            (&mut self.probability, &overrides.probability),
            (&mut self.probe, &overrides.probe),
            (&mut self.observed, &overrides.observed),
        ];
        for (slot, value) in slots {
            if let Some(v) = value {
                slot.clone_from(v);
            }
        }
    }

    /// Parse a (possibly partial) policy from TOML and merge it over defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, GraphSpecError> {
        let overrides: PolicyOverride =
            toml::from_str(source).map_err(|e| GraphSpecError::PolicyParse(e.to_string()))?;
        Ok(Self::merged(&overrides))
    }

    /// Load a policy file.
    pub fn from_file(path: &Path) -> Result<Self, GraphSpecError> {
        let source = std::fs::read_to_string(path).map_err(|e| {
            GraphSpecError::IoError(format!("Cannot read policy '{}': {}", path.display(), e))
        })?;
        Self::from_toml_str(&source)
    }

    /// Whether `key` is one of the metadata keys named by this policy.
    ///
    /// Data-shape and schema axes ignore these keys so that metadata does not
    /// count as user data.
    #[must_use]
    pub fn is_metadata_key(&self, key: &str) -> bool {
        [
            &self.position,
            &self.root,
            &self.time,
            &self.layer,
            &self.edge_order,
            &self.ports,
            &self.weight_vector,
            &self.probability,
            &self.probe,
            &self.observed,
        ]
        .iter()
        .any(|k| k.as_str() == key)
    }
}

/// A partial policy: any subset of keys to replace.
///
/// ```
/// use graphspec_core::{ComputePolicy, PolicyOverride};
///
/// let overrides = PolicyOverride {
///     position: Some("xy".to_string()),
///     ..PolicyOverride::default()
/// };
/// let policy = ComputePolicy::merged(&overrides);
/// assert_eq!(policy.position, "xy");
/// assert_eq!(policy.root, "root");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PolicyOverride {
    /// Replacement for [`ComputePolicy::position`].
    pub position: Option<String>,
    /// Replacement for [`ComputePolicy::root`].
    pub root: Option<String>,
    /// Replacement for [`ComputePolicy::time`].
    pub time: Option<String>,
    /// Replacement for [`ComputePolicy::layer`].
    pub layer: Option<String>,
    /// Replacement for [`ComputePolicy::edge_order`].
    pub edge_order: Option<String>,
    /// Replacement for [`ComputePolicy::ports`].
    pub ports: Option<String>,
    /// Replacement for [`ComputePolicy::weight_vector`].
    pub weight_vector: Option<String>,
    /// Replacement for [`ComputePolicy::probability`].
    pub probability: Option<String>,
    /// Replacement for [`ComputePolicy::probe`].
    pub probe: Option<String>,
    /// Replacement for [`ComputePolicy::observed`].
    pub observed: Option<String>,
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_keys() {
        let policy = ComputePolicy::default();
        assert_eq!(policy.position, "position");
        assert_eq!(policy.edge_order, "order");
        assert_eq!(policy.weight_vector, "weights");
    }

    #[test]
    fn override_replaces_only_given_keys() {
        let overrides = PolicyOverride {
            time: Some("ts".to_string()),
            ..PolicyOverride::default()
        };
        let policy = ComputePolicy::merged(&overrides);
        assert_eq!(policy.time, "ts");
        assert_eq!(policy.root, "root");
    }

    #[test]
    fn toml_partial_policy() {
        let policy = ComputePolicy::from_toml_str("layer = \"community\"\n").expect("parse");
        assert_eq!(policy.layer, "community");
        assert_eq!(policy.position, "position");
    }

    #[test]
    fn toml_unknown_key_rejected() {
        let result = ComputePolicy::from_toml_str("colour = \"red\"\n");
        assert!(matches!(result, Err(GraphSpecError::PolicyParse(_))));
    }

    #[test]
    fn metadata_keys_are_recognised() {
        let policy = ComputePolicy::default();
        assert!(policy.is_metadata_key("position"));
        assert!(!policy.is_metadata_key("colour"));
    }
}
