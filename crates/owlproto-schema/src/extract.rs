//! Class extraction: one message entity per in-namespace `owl:Class`.

use owlproto_rdfowl::vocab::{OWL_CLASS, RDFS_COMMENT};
use owlproto_rdfowl::{RdfObject, TripleStore};

use crate::config::SchemaConfig;
use crate::model::{local_name, Registry};
use crate::text::sanitize_comment;

/// Build the registry from the class declarations in `store`.
///
/// Blank-node classes (anonymous restrictions, unions) are never modeled.
/// When a class carries several `rdfs:comment` literals the last one wins.
pub fn extract_classes(store: &TripleStore, config: &SchemaConfig) -> Registry {
    let mut registry = Registry::new();

    for subject in store.subjects_with_type(OWL_CLASS) {
        let Some(iri) = subject.as_iri() else {
            continue;
        };
        if !config.in_namespace(iri) {
            continue;
        }

        let entity = registry.entry(local_name(iri));
        for lit in store
            .objects(subject, RDFS_COMMENT)
            .filter_map(RdfObject::as_literal)
        {
            entity.comment = sanitize_comment(&lit.lexical, config.comment_width);
        }
    }

    tracing::info!(classes = registry.len(), "extracted classes");
    registry
}
