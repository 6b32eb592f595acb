//! Compiler settings.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::SchemaError;

pub const DEFAULT_NAMESPACE: &str = "http://www.biopax.org/release/biopax-level3.owl#";
pub const DEFAULT_PACKAGE: &str = "biopax";
pub const DEFAULT_FIELD_TYPE: &str = "string";
pub const DEFAULT_COMMENT_WIDTH: usize = 70;

/// Settings for one compiler run.
///
/// The defaults reproduce a BioPAX level-3 build. Every field is optional in
/// a JSON config file; missing keys keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SchemaConfig {
    /// Only IRIs starting with this prefix are modeled.
    pub namespace: String,
    /// Name written on the `package` line.
    pub package: String,
    /// Field type used when a property has no in-namespace range.
    pub default_type: String,
    /// Column width for wrapped class comments.
    pub comment_width: usize,
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            package: DEFAULT_PACKAGE.to_string(),
            default_type: DEFAULT_FIELD_TYPE.to_string(),
            comment_width: DEFAULT_COMMENT_WIDTH,
        }
    }
}

impl SchemaConfig {
    pub fn from_json_str(text: &str) -> Result<Self, SchemaError> {
        serde_json::from_str(text).map_err(SchemaError::ConfigParse)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, SchemaError> {
        let text = std::fs::read_to_string(path).map_err(|source| SchemaError::ConfigRead {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<(), SchemaError> {
        if self.namespace.trim().is_empty() {
            return Err(SchemaError::InvalidConfig("namespace must not be empty"));
        }
        if self.package.trim().is_empty() {
            return Err(SchemaError::InvalidConfig("package must not be empty"));
        }
        if self.default_type.trim().is_empty() {
            return Err(SchemaError::InvalidConfig("default_type must not be empty"));
        }
        if self.comment_width == 0 {
            return Err(SchemaError::InvalidConfig("comment_width must be at least 1"));
        }
        Ok(())
    }

    /// Whether `iri` falls under the configured namespace.
    pub fn in_namespace(&self, iri: &str) -> bool {
        iri.starts_with(&self.namespace)
    }
}
