//! In-memory triple store with pattern queries.

use indexmap::IndexSet;

// ============================================================================
// RDF term model
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RdfNode {
    Iri(String),
    BlankNode(String),
}

impl RdfNode {
    pub fn iri(iri: impl Into<String>) -> Self {
        Self::Iri(iri.into())
    }

    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Self::Iri(iri) => Some(iri),
            Self::BlankNode(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RdfLiteral {
    pub lexical: String,
    pub datatype: Option<String>,
    pub language: Option<String>,
}

impl RdfLiteral {
    pub fn plain(lexical: impl Into<String>) -> Self {
        Self {
            lexical: lexical.into(),
            datatype: None,
            language: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RdfObject {
    Node(RdfNode),
    Literal(RdfLiteral),
}

impl RdfObject {
    pub fn iri(iri: impl Into<String>) -> Self {
        Self::Node(RdfNode::Iri(iri.into()))
    }

    pub fn literal(lexical: impl Into<String>) -> Self {
        Self::Literal(RdfLiteral::plain(lexical))
    }

    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Self::Node(node) => node.as_iri(),
            Self::Literal(_) => None,
        }
    }

    pub fn as_literal(&self) -> Option<&RdfLiteral> {
        match self {
            Self::Literal(lit) => Some(lit),
            Self::Node(_) => None,
        }
    }
}

/// One (subject, predicate, object) triple.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Statement {
    pub subject: RdfNode,
    pub predicate: String,
    pub object: RdfObject,
}

impl Statement {
    pub fn new(subject: RdfNode, predicate: impl Into<String>, object: RdfObject) -> Self {
        Self {
            subject,
            predicate: predicate.into(),
            object,
        }
    }
}

// ============================================================================
// Store
// ============================================================================

/// A set of statements kept in first-seen order.
///
/// Exact duplicates collapse on insert, so a document that repeats a triple
/// behaves the same as one that states it once. Iteration order is the order
/// in which distinct statements were first inserted, which keeps every query
/// (and everything derived from it) reproducible for the same input.
#[derive(Debug, Clone, Default)]
pub struct TripleStore {
    statements: IndexSet<Statement>,
}

impl TripleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_statements(statements: impl IntoIterator<Item = Statement>) -> Self {
        let mut store = Self::new();
        for stmt in statements {
            store.insert(stmt);
        }
        store
    }

    /// Returns `true` if the statement was not already present.
    pub fn insert(&mut self, statement: Statement) -> bool {
        self.statements.insert(statement)
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Statement> {
        self.statements.iter()
    }

    /// All statements matching the pattern; `None` is a wildcard.
    pub fn triples<'a>(
        &'a self,
        subject: Option<&'a RdfNode>,
        predicate: Option<&'a str>,
        object: Option<&'a RdfObject>,
    ) -> impl Iterator<Item = &'a Statement> + 'a {
        self.statements.iter().filter(move |stmt| {
            subject.map_or(true, |s| &stmt.subject == s)
                && predicate.map_or(true, |p| stmt.predicate == p)
                && object.map_or(true, |o| &stmt.object == o)
        })
    }

    /// Subjects `s` with a `s rdf:type <type_iri>` statement.
    pub fn subjects_with_type<'a>(
        &'a self,
        type_iri: &'a str,
    ) -> impl Iterator<Item = &'a RdfNode> + 'a {
        self.statements
            .iter()
            .filter(move |stmt| {
                stmt.predicate == crate::vocab::RDF_TYPE && stmt.object.as_iri() == Some(type_iri)
            })
            .map(|stmt| &stmt.subject)
    }

    /// Objects of every `subject predicate ?o` statement.
    pub fn objects<'a>(
        &'a self,
        subject: &'a RdfNode,
        predicate: &'a str,
    ) -> impl Iterator<Item = &'a RdfObject> + 'a {
        self.triples(Some(subject), Some(predicate), None)
            .map(|stmt| &stmt.object)
    }
}

impl Extend<Statement> for TripleStore {
    fn extend<T: IntoIterator<Item = Statement>>(&mut self, iter: T) {
        for stmt in iter {
            self.insert(stmt);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::{OWL_CLASS, RDFS_COMMENT, RDF_TYPE};

    fn sample() -> TripleStore {
        TripleStore::from_statements([
            Statement::new(RdfNode::iri("ex:A"), RDF_TYPE, RdfObject::iri(OWL_CLASS)),
            Statement::new(RdfNode::iri("ex:B"), RDF_TYPE, RdfObject::iri(OWL_CLASS)),
            Statement::new(RdfNode::iri("ex:A"), RDFS_COMMENT, RdfObject::literal("first")),
            Statement::new(RdfNode::iri("ex:A"), RDF_TYPE, RdfObject::iri(OWL_CLASS)),
        ])
    }

    #[test]
    fn duplicate_statements_collapse() {
        let store = sample();
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn wildcard_patterns_match_in_insertion_order() {
        let store = sample();
        let a = RdfNode::iri("ex:A");

        let all_a: Vec<_> = store.triples(Some(&a), None, None).collect();
        assert_eq!(all_a.len(), 2);
        assert_eq!(all_a[0].predicate, RDF_TYPE);
        assert_eq!(all_a[1].predicate, RDFS_COMMENT);

        let classes: Vec<_> = store.subjects_with_type(OWL_CLASS).collect();
        assert_eq!(classes, vec![&RdfNode::iri("ex:A"), &RdfNode::iri("ex:B")]);
    }

    #[test]
    fn objects_filters_by_subject_and_predicate() {
        let store = sample();
        let a = RdfNode::iri("ex:A");
        let comments: Vec<_> = store
            .objects(&a, RDFS_COMMENT)
            .filter_map(RdfObject::as_literal)
            .map(|lit| lit.lexical.as_str())
            .collect();
        assert_eq!(comments, vec!["first"]);

        let b = RdfNode::iri("ex:B");
        assert_eq!(store.objects(&b, RDFS_COMMENT).count(), 0);
    }
}
