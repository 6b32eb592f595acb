//! Property resolution: attach each object property to its domain's message.

use owlproto_rdfowl::vocab::{OWL_OBJECT_PROPERTY, RDFS_DOMAIN, RDFS_RANGE};
use owlproto_rdfowl::{RdfNode, RdfObject, TripleStore};
use serde::Serialize;

use crate::config::SchemaConfig;
use crate::model::{local_name, Registry};

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyStats {
    /// In-namespace object properties examined.
    pub properties: usize,
    pub fields_attached: usize,
    /// Fields typed with the default type because no range resolved.
    pub defaulted_ranges: usize,
    pub skipped_no_domain: usize,
    /// Domain resolved to a name that is not a declared class.
    pub skipped_unknown_domain: usize,
}

/// The last in-namespace IRI among `subject predicate ?o`.
fn last_in_namespace<'a>(
    store: &'a TripleStore,
    subject: &'a RdfNode,
    predicate: &'a str,
    config: &SchemaConfig,
) -> Option<&'a str> {
    store
        .objects(subject, predicate)
        .filter_map(RdfObject::as_iri)
        .filter(|iri| config.in_namespace(iri))
        .last()
}

/// Add one field per object property to the entity named by its domain.
///
/// Never creates entities: a property whose domain is missing, out of
/// namespace, or not a declared class is skipped.
pub fn resolve_properties(
    store: &TripleStore,
    registry: &mut Registry,
    config: &SchemaConfig,
) -> PropertyStats {
    let mut stats = PropertyStats::default();

    for subject in store.subjects_with_type(OWL_OBJECT_PROPERTY) {
        let Some(iri) = subject.as_iri() else {
            continue;
        };
        if !config.in_namespace(iri) {
            continue;
        }
        stats.properties += 1;
        let field_name = local_name(iri);

        let Some(domain) = last_in_namespace(store, subject, RDFS_DOMAIN, config) else {
            tracing::debug!(property = field_name, "no in-namespace domain; skipped");
            stats.skipped_no_domain += 1;
            continue;
        };
        let domain = local_name(domain);

        let field_type = match last_in_namespace(store, subject, RDFS_RANGE, config) {
            Some(range) => local_name(range),
            None => {
                stats.defaulted_ranges += 1;
                config.default_type.as_str()
            }
        };

        match registry.get_mut(domain) {
            Some(entity) => {
                entity.add_field(field_name, field_type);
                stats.fields_attached += 1;
            }
            None => {
                tracing::warn!(
                    property = field_name,
                    domain,
                    "domain is not a declared class; skipped"
                );
                stats.skipped_unknown_domain += 1;
            }
        }
    }

    tracing::info!(
        properties = stats.properties,
        fields = stats.fields_attached,
        "resolved object properties"
    );
    stats
}
