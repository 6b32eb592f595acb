//! OWL → proto3 schema compiler.
//!
//! Pipeline (strictly sequential, each stage consumes the previous one):
//!
//! 1. [`extract::extract_classes`]: one [`MessageEntity`] per in-namespace
//!    `owl:Class`, with its sanitized comment.
//! 2. [`properties::resolve_properties`]: object properties become fields on
//!    their domain's entity.
//! 3. [`inheritance::resolve_inheritance`]: superclass fields are copied into
//!    subclasses until a fixed point.
//! 4. [`render::render_schema`]: deterministic proto3 text.
//!
//! The registry and every field map are insertion-ordered, so the same
//! document always yields byte-identical output.

pub mod config;
pub mod extract;
pub mod inheritance;
pub mod model;
pub mod properties;
pub mod render;
pub mod text;

pub use config::SchemaConfig;
pub use inheritance::InheritanceReport;
pub use model::{local_name, FieldMap, MessageEntity, Registry, SubclassRelation};
pub use properties::PropertyStats;

use owlproto_rdfowl::TripleStore;
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    ConfigParse(#[source] serde_json::Error),
    #[error("failed to serialize model: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// What each stage did.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct CompileReport {
    pub classes: usize,
    pub properties: PropertyStats,
    pub inheritance: InheritanceReport,
}

/// A fully resolved registry plus the settings it was built with.
#[derive(Debug, Clone)]
pub struct CompiledSchema {
    pub registry: Registry,
    pub report: CompileReport,
    package: String,
}

impl CompiledSchema {
    pub fn render(&self) -> String {
        render::render_schema(&self.registry, &self.package)
    }

    /// The resolved registry as pretty JSON.
    pub fn model_json(&self) -> Result<String, SchemaError> {
        Ok(serde_json::to_string_pretty(&self.registry)?)
    }
}

/// Run extraction and both resolution stages over `store`.
pub fn compile(store: &TripleStore, config: &SchemaConfig) -> Result<CompiledSchema, SchemaError> {
    config.validate()?;

    let mut registry = extract::extract_classes(store, config);
    let classes = registry.len();
    let properties = properties::resolve_properties(store, &mut registry, config);
    let inheritance = inheritance::resolve_inheritance(store, &mut registry, config);

    Ok(CompiledSchema {
        registry,
        report: CompileReport {
            classes,
            properties,
            inheritance,
        },
        package: config.package.clone(),
    })
}
