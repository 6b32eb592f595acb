//! Integration tests for the complete owlproto pipeline
//!
//! These tests run load → extract → resolve → render across crates on the
//! fixture ontologies.
//!
//! Run with: cargo test --test integration_tests

use owlproto_rdfowl::{load_file, load_str, RdfFormat};
use owlproto_schema::{compile, SchemaConfig};
use std::path::PathBuf;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

fn pathway_config() -> SchemaConfig {
    SchemaConfig {
        namespace: "http://example.org/pathways#".to_string(),
        package: "pathways".to_string(),
        ..SchemaConfig::default()
    }
}

// ============================================================================
// BioPAX excerpt (RDF/XML)
// ============================================================================

#[test]
fn test_biopax_fixture_matches_golden_output() {
    let store = load_file(&fixtures_dir().join("biopax-mini.owl"), None).expect("load owl");
    let schema = compile(&store, &SchemaConfig::default()).expect("compile");

    let expected = std::fs::read_to_string(fixtures_dir().join("biopax-mini.proto")).unwrap();
    assert_eq!(schema.render(), expected);
}

#[test]
fn test_biopax_fixture_report() {
    let store = load_file(&fixtures_dir().join("biopax-mini.owl"), None).unwrap();
    let report = compile(&store, &SchemaConfig::default()).unwrap().report;

    // Foreign class excluded; blank-node restriction is not a class.
    assert_eq!(report.classes, 6);
    // xref, pathwayComponent, organism, memberPhysicalEntity, evidence, dataSource
    assert_eq!(report.properties.properties, 6);
    assert_eq!(report.properties.fields_attached, 5);
    assert_eq!(report.properties.skipped_no_domain, 1);
    assert_eq!(report.properties.defaulted_ranges, 1);
    // Pathway ⊂ Entity, PhysicalEntity ⊂ Entity, Protein ⊂ PhysicalEntity
    assert_eq!(report.inheritance.relations, 3);
    assert_eq!(report.inheritance.passes, 2);
    assert_eq!(report.inheritance.fields_inherited, 7);
}

#[test]
fn test_edges_stay_reserved() {
    let store = load_file(&fixtures_dir().join("biopax-mini.owl"), None).unwrap();
    let schema = compile(&store, &SchemaConfig::default()).unwrap();

    // `organism` is functional, but functional properties do not become edges.
    assert!(schema.registry.iter().all(|e| e.edges.is_empty()));
    assert!(!schema.render().contains("repeated"));
}

// ============================================================================
// Turtle / N-Triples agree
// ============================================================================

#[test]
fn test_turtle_and_ntriples_render_identically() {
    let ttl = load_file(&fixtures_dir().join("pathway.ttl"), None).unwrap();

    let nt_text = r#"
<http://example.org/pathways#Entity> <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> <http://www.w3.org/2002/07/owl#Class> .
<http://example.org/pathways#Entity> <http://www.w3.org/2000/01/rdf-schema#comment> "Base entity" .
<http://example.org/pathways#Pathway> <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> <http://www.w3.org/2002/07/owl#Class> .
<http://example.org/pathways#Pathway> <http://www.w3.org/2000/01/rdf-schema#subClassOf> <http://example.org/pathways#Entity> .
<http://example.org/pathways#displayName> <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> <http://www.w3.org/2002/07/owl#ObjectProperty> .
<http://example.org/pathways#displayName> <http://www.w3.org/2000/01/rdf-schema#domain> <http://example.org/pathways#Pathway> .
<http://example.org/pathways#component> <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> <http://www.w3.org/2002/07/owl#ObjectProperty> .
<http://example.org/pathways#component> <http://www.w3.org/2000/01/rdf-schema#domain> <http://example.org/pathways#Pathway> .
<http://example.org/pathways#component> <http://www.w3.org/2000/01/rdf-schema#range> <http://example.org/pathways#Entity> .
"#;
    let nt = load_str(nt_text, RdfFormat::NTriples).unwrap();

    let a = compile(&ttl, &pathway_config()).unwrap().render();
    let b = compile(&nt, &pathway_config()).unwrap().render();
    assert_eq!(a, b);
    assert_eq!(
        a,
        "syntax = \"proto3\";\n\
         package pathways;\n\
         \n\
         /*\n\
         Base entity\n\
         */\n\
         message Entity {\n\
         }\n\
         \n\
         message Pathway {\n\
         \x20   string displayName = 1;\n\
         \x20   Entity component = 2;\n\
         }\n"
    );
}

#[test]
fn test_wrong_namespace_yields_empty_schema() {
    let store = load_file(&fixtures_dir().join("pathway.ttl"), None).unwrap();
    let schema = compile(&store, &SchemaConfig::default()).unwrap();
    assert!(schema.registry.is_empty());
    assert_eq!(schema.render(), "syntax = \"proto3\";\npackage biopax;\n");
}
