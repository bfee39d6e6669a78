//! Turtle and N-Triples loading.
//!
//! Parsing is delegated to `sophia_turtle`; each parsed triple is converted
//! into the store's own [`Node`] representation and inserted into a fresh
//! [`Graph`]. Duplicate statements in the source collapse on insertion.

use std::path::Path;

use sophia_api::source::TripleSource;
use sophia_api::term::{Term, TermKind};
use sophia_api::triple::Triple as _;
use sophia_turtle::parser::{nt, turtle};

use crate::error::{Format, LoadError};
use crate::graph::Graph;
use crate::term::{Literal, Node, Triple};

/// Parses a Turtle document.
///
/// # Errors
///
/// Returns [`LoadError::Syntax`] if the document is malformed and
/// [`LoadError::UnsupportedTerm`] for RDF-star or variable terms.
pub fn load_turtle(src: &str) -> Result<Graph, LoadError> {
    collect(turtle::parse_str(src), Format::Turtle)
}

/// Parses an N-Triples document.
///
/// # Errors
///
/// Returns [`LoadError::Syntax`] if the document is malformed and
/// [`LoadError::UnsupportedTerm`] for RDF-star or variable terms.
pub fn load_ntriples(src: &str) -> Result<Graph, LoadError> {
    collect(nt::parse_str(src), Format::NTriples)
}

/// Parses `src` in the given format.
///
/// # Errors
///
/// See [`load_turtle`] and [`load_ntriples`].
pub fn load_str(src: &str, format: Format) -> Result<Graph, LoadError> {
    match format {
        Format::Turtle => load_turtle(src),
        Format::NTriples => load_ntriples(src),
    }
}

/// Reads and parses a file, choosing the format from its extension.
///
/// # Errors
///
/// Returns [`LoadError::UnsupportedFormat`] for unknown extensions,
/// [`LoadError::Io`] if the file cannot be read, and the parse errors of
/// [`load_str`].
pub fn load_path(path: &Path) -> Result<Graph, LoadError> {
    let format = path
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(Format::from_extension)
        .ok_or_else(|| LoadError::UnsupportedFormat(path.to_path_buf()))?;
    let src = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_str(&src, format)
}

fn collect<S: TripleSource>(mut source: S, format: Format) -> Result<Graph, LoadError> {
    let mut triples = Vec::new();
    let mut unsupported = None;
    source
        .for_each_triple(|t| {
            let converted = (convert(t.s()), convert(t.p()), convert(t.o()));
            match converted {
                (Some(s), Some(p), Some(o)) => triples.push(Triple::new(s, p, o)),
                (s, p, _) => {
                    let position = if s.is_none() {
                        "subject"
                    } else if p.is_none() {
                        "predicate"
                    } else {
                        "object"
                    };
                    unsupported.get_or_insert(position);
                }
            }
        })
        .map_err(|e| LoadError::Syntax {
            format,
            message: e.to_string(),
        })?;
    if let Some(position) = unsupported {
        return Err(LoadError::UnsupportedTerm { format, position });
    }
    Ok(triples.into_iter().collect())
}

fn convert<T: Term>(term: T) -> Option<Node> {
    match term.kind() {
        TermKind::Iri => term.iri().map(|iri| Node::iri(iri.as_str())),
        TermKind::BlankNode => term.bnode_id().map(|id| Node::blank(id.as_str())),
        TermKind::Literal => {
            let lexical = term.lexical_form()?;
            let literal = match term.language_tag() {
                Some(tag) => Literal::lang(&*lexical, tag.as_str()),
                None => match term.datatype() {
                    Some(dt) => Literal::typed(&*lexical, dt.as_str()),
                    None => Literal::string(&*lexical),
                },
            };
            Some(Node::Literal(literal))
        }
        _ => None,
    }
}
