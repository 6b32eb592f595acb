//! Class model: message entities and the registry that holds them.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Field name → field type name. Insertion order is field-number order.
pub type FieldMap = IndexMap<String, String>;

/// One ontology class, rendered as one `message`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageEntity {
    pub name: String,
    pub fields: FieldMap,
    /// Reserved for repeated relation fields; nothing populates it yet.
    pub edges: Vec<String>,
    pub comment: Option<String>,
}

impl MessageEntity {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: FieldMap::new(),
            edges: Vec::new(),
            comment: None,
        }
    }

    /// Set a field's type. A re-declared name keeps its original position.
    pub fn add_field(&mut self, name: impl Into<String>, field_type: impl Into<String>) {
        self.fields.insert(name.into(), field_type.into());
    }

    pub fn add_edge_type(&mut self, name: impl Into<String>) {
        self.edges.push(name.into());
    }

    /// Copy every field of `parent` this entity does not already have.
    ///
    /// Returns the number of fields added.
    pub fn inherit_fields(&mut self, parent: &FieldMap) -> usize {
        let mut added = 0;
        for (name, field_type) in parent {
            if !self.fields.contains_key(name) {
                self.fields.insert(name.clone(), field_type.clone());
                added += 1;
            }
        }
        added
    }
}

/// `child rdfs:subClassOf parent`, both ends known to the registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubclassRelation {
    pub child: String,
    pub parent: String,
}

/// Class name → entity, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Registry {
    entities: IndexMap<String, MessageEntity>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The entity named `name`, created empty on first use.
    pub fn entry(&mut self, name: &str) -> &mut MessageEntity {
        self.entities
            .entry(name.to_string())
            .or_insert_with(|| MessageEntity::new(name))
    }

    pub fn get(&self, name: &str) -> Option<&MessageEntity> {
        self.entities.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut MessageEntity> {
        self.entities.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entities.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MessageEntity> {
        self.entities.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entities.keys().map(String::as_str)
    }

    /// Total number of fields across all entities.
    pub fn field_count(&self) -> usize {
        self.entities.values().map(|e| e.fields.len()).sum()
    }
}

/// Local name of an IRI: the text between the first `#` and the next one
/// (or the end), or after the last `/` when there is no `#`.
pub fn local_name(iri: &str) -> &str {
    match iri.split('#').nth(1) {
        Some(fragment) => fragment,
        None => iri.rsplit('/').next().unwrap_or(iri),
    }
}
