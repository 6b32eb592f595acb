//! Inheritance resolution: propagate fields down `rdfs:subClassOf` to a fixed
//! point.
//!
//! Each pass walks the relation list once and copies, for every
//! `(child, parent)`, the parent's *current* fields into the child (fields the
//! child already has are left alone, so a subclass declaration always wins).
//! A pass sees the additions of earlier relations in the same pass. The loop
//! stops after the first pass that adds nothing.
//!
//! Termination: the total field count only grows, and is bounded by
//! `classes × distinct field names`. A subclass cycle saturates like any other
//! chain; it is not reported as an error.

use owlproto_rdfowl::vocab::RDFS_SUBCLASS_OF;
use owlproto_rdfowl::TripleStore;
use serde::Serialize;

use crate::config::SchemaConfig;
use crate::model::{local_name, Registry, SubclassRelation};

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct InheritanceReport {
    pub relations: usize,
    /// Passes run, including the final pass that changed nothing.
    pub passes: usize,
    pub fields_inherited: usize,
}

/// In-namespace subclass relations whose ends are both registered classes.
pub fn collect_subclass_relations(
    store: &TripleStore,
    registry: &Registry,
    config: &SchemaConfig,
) -> Vec<SubclassRelation> {
    let mut relations = Vec::new();

    for stmt in store.triples(None, Some(RDFS_SUBCLASS_OF), None) {
        let (Some(child), Some(parent)) = (stmt.subject.as_iri(), stmt.object.as_iri()) else {
            continue;
        };
        if !config.in_namespace(child) || !config.in_namespace(parent) {
            continue;
        }

        let (child, parent) = (local_name(child), local_name(parent));
        if !registry.contains(child) || !registry.contains(parent) {
            tracing::debug!(child, parent, "dangling subclass relation; skipped");
            continue;
        }
        relations.push(SubclassRelation {
            child: child.to_string(),
            parent: parent.to_string(),
        });
    }

    relations
}

/// Run one pass over `relations`; returns the number of fields added.
fn propagate_once(registry: &mut Registry, relations: &[SubclassRelation]) -> usize {
    let mut added = 0;
    for rel in relations {
        let Some(parent_fields) = registry.get(&rel.parent).map(|p| p.fields.clone()) else {
            continue;
        };
        if let Some(child) = registry.get_mut(&rel.child) {
            added += child.inherit_fields(&parent_fields);
        }
    }
    added
}

/// Propagate fields along `relations` until a pass adds nothing.
pub fn propagate(registry: &mut Registry, relations: &[SubclassRelation]) -> InheritanceReport {
    let mut report = InheritanceReport {
        relations: relations.len(),
        ..InheritanceReport::default()
    };

    loop {
        report.passes += 1;
        let added = propagate_once(registry, relations);
        tracing::debug!(pass = report.passes, added, "inheritance pass");
        if added == 0 {
            break;
        }
        report.fields_inherited += added;
    }

    report
}

/// Collect relations from `store` and propagate them through `registry`.
pub fn resolve_inheritance(
    store: &TripleStore,
    registry: &mut Registry,
    config: &SchemaConfig,
) -> InheritanceReport {
    let relations = collect_subclass_relations(store, registry, config);
    let report = propagate(registry, &relations);
    tracing::info!(
        relations = report.relations,
        passes = report.passes,
        inherited = report.fields_inherited,
        "resolved inheritance"
    );
    report
}
