//! RDF/OWL loading for owlproto (boundary adapter).
//!
//! This crate turns a serialized ontology into a [`TripleStore`] that the
//! schema compiler queries by pattern. It knows nothing about messages or
//! fields; it only parses and stores triples.
//!
//! Parsing is done by **Sophia**:
//! - N-Triples (`.nt`)
//! - Turtle (`.ttl`)
//! - RDF/XML (`.rdf`, `.owl`, `.xml`)

pub mod store;
pub mod vocab;

pub use store::{RdfLiteral, RdfNode, RdfObject, Statement, TripleStore};

use sophia::api::prelude::*;
use sophia::api::term::{Term, TermKind};
use std::convert::Infallible;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, thiserror::Error)]
pub enum RdfError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("unsupported RDF format: {0}")]
    UnsupportedFormat(String),
    #[error("failed to parse {format}: {message}")]
    Parse {
        format: &'static str,
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, RdfError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RdfFormat {
    NTriples,
    Turtle,
    RdfXml,
}

impl RdfFormat {
    /// Guess the syntax from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or("")
            .to_lowercase();
        match ext.as_str() {
            "nt" | "ntriples" => Ok(Self::NTriples),
            "ttl" | "turtle" => Ok(Self::Turtle),
            "rdf" | "owl" | "xml" => Ok(Self::RdfXml),
            other => Err(RdfError::UnsupportedFormat(format!(".{other}"))),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::NTriples => "N-Triples",
            Self::Turtle => "Turtle",
            Self::RdfXml => "RDF/XML",
        }
    }
}

impl FromStr for RdfFormat {
    type Err = RdfError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "nt" | "ntriples" | "n-triples" => Ok(Self::NTriples),
            "ttl" | "turtle" => Ok(Self::Turtle),
            "rdfxml" | "rdf/xml" | "rdf" | "owl" | "xml" => Ok(Self::RdfXml),
            other => Err(RdfError::UnsupportedFormat(other.to_string())),
        }
    }
}

// ============================================================================
// Term decoding
// ============================================================================

fn decode_node<T: Term>(term: T) -> Option<RdfNode> {
    match term.kind() {
        TermKind::Iri => term.iri().map(|iri| RdfNode::Iri(iri.as_str().to_string())),
        TermKind::BlankNode => term
            .bnode_id()
            .map(|id| RdfNode::BlankNode(id.as_str().to_string())),
        _ => None,
    }
}

fn decode_object<T: Term>(term: T) -> Option<RdfObject> {
    if term.kind() != TermKind::Literal {
        return decode_node(term).map(RdfObject::Node);
    }
    let lexical = term.lexical_form()?.to_string();
    let datatype = term.datatype().map(|dt| dt.as_str().to_string());
    let language = term.language_tag().map(|tag| tag.as_str().to_string());
    Some(RdfObject::Literal(RdfLiteral {
        lexical,
        datatype,
        language,
    }))
}

// ============================================================================
// Loading
// ============================================================================

/// Drain a Sophia triple source into the store.
///
/// Each parser has its own concrete triple type, so this is a macro rather
/// than a generic function over `TripleSource`.
macro_rules! drain_triples {
    ($parser:expr, $store:expr, $format:expr) => {{
        let store: &mut TripleStore = $store;
        let mut parser = $parser;
        parser
            .try_for_each_triple(|t| -> std::result::Result<(), Infallible> {
                // Quoted triples and variables have no place in an ontology.
                let (Some(subject), Some(RdfNode::Iri(predicate)), Some(object)) =
                    (decode_node(t.s()), decode_node(t.p()), decode_object(t.o()))
                else {
                    return Ok(());
                };
                store.insert(Statement {
                    subject,
                    predicate,
                    object,
                });
                Ok(())
            })
            .map_err(|e| RdfError::Parse {
                format: $format.label(),
                message: e.to_string(),
            })
    }};
}

/// Parse `bytes` in the given syntax into a fresh store.
pub fn load_bytes(bytes: &[u8], format: RdfFormat) -> Result<TripleStore> {
    let reader = std::io::BufReader::new(std::io::Cursor::new(bytes));
    let mut store = TripleStore::new();

    match format {
        RdfFormat::NTriples => drain_triples!(
            sophia::turtle::parser::nt::parse_bufread(reader),
            &mut store,
            format
        )?,
        RdfFormat::Turtle => drain_triples!(
            sophia::turtle::parser::turtle::parse_bufread(reader),
            &mut store,
            format
        )?,
        RdfFormat::RdfXml => drain_triples!(
            sophia::xml::parser::parse_bufread(reader),
            &mut store,
            format
        )?,
    }

    tracing::debug!(
        format = format.label(),
        statements = store.len(),
        "loaded RDF document"
    );
    Ok(store)
}

pub fn load_str(text: &str, format: RdfFormat) -> Result<TripleStore> {
    load_bytes(text.as_bytes(), format)
}

/// Read and parse a file, detecting the syntax from its extension unless
/// `format` is given.
pub fn load_file(path: &Path, format: Option<RdfFormat>) -> Result<TripleStore> {
    let format = match format {
        Some(format) => format,
        None => RdfFormat::from_path(path)?,
    };
    let bytes = std::fs::read(path)?;
    load_bytes(&bytes, format)
}
