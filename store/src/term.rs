//! RDF term and triple types.
//!
//! A [`Node`] is either a resource (IRI or blank node) or a literal. Nodes
//! are cheap to clone (`Arc<str>` payloads) and totally ordered so they can
//! key `BTreeMap`/`BTreeSet` collections with deterministic iteration.

use std::fmt;
use std::sync::Arc;

use qb_vocab::{rdf, xsd};
use serde::{Serialize, Serializer};

/// A literal value: lexical form, datatype IRI and optional language tag.
///
/// Language-tagged literals carry `rdf:langString` as their datatype.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Literal {
    lexical: Arc<str>,
    datatype: Arc<str>,
    language: Option<Arc<str>>,
}

impl Literal {
    /// Creates a typed literal.
    pub fn typed(lexical: impl AsRef<str>, datatype: impl AsRef<str>) -> Self {
        Self {
            lexical: Arc::from(lexical.as_ref()),
            datatype: Arc::from(datatype.as_ref()),
            language: None,
        }
    }

    /// Creates a language-tagged string.
    pub fn lang(lexical: impl AsRef<str>, language: impl AsRef<str>) -> Self {
        Self {
            lexical: Arc::from(lexical.as_ref()),
            datatype: Arc::from(rdf::LANG_STRING),
            language: Some(Arc::from(language.as_ref())),
        }
    }

    /// Creates an `xsd:string` literal.
    pub fn string(lexical: impl AsRef<str>) -> Self {
        Self::typed(lexical, xsd::STRING)
    }

    /// The lexical form.
    pub fn lexical(&self) -> &str {
        &self.lexical
    }

    /// The datatype IRI.
    pub fn datatype(&self) -> &str {
        &self.datatype
    }

    /// The language tag, if any.
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Interprets an `xsd:boolean` literal. Returns `None` for any other
    /// datatype or an invalid lexical form.
    pub fn as_bool(&self) -> Option<bool> {
        if &*self.datatype != xsd::BOOLEAN {
            return None;
        }
        match self.lexical.trim() {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        }
    }
}

/// An RDF node.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Node {
    /// A resource identified by an absolute IRI.
    Iri(Arc<str>),
    /// A resource identified by a document-local blank node label
    /// (without the `_:` prefix).
    Blank(Arc<str>),
    /// A literal value.
    Literal(Literal),
}

impl Node {
    /// Creates an IRI node.
    pub fn iri(iri: impl AsRef<str>) -> Self {
        Node::Iri(Arc::from(iri.as_ref()))
    }

    /// Creates a blank node.
    pub fn blank(label: impl AsRef<str>) -> Self {
        Node::Blank(Arc::from(label.as_ref()))
    }

    /// Creates a typed literal node.
    pub fn literal(lexical: impl AsRef<str>, datatype: impl AsRef<str>) -> Self {
        Node::Literal(Literal::typed(lexical, datatype))
    }

    /// Creates an `xsd:boolean` literal node.
    pub fn boolean(value: bool) -> Self {
        Node::literal(if value { "true" } else { "false" }, xsd::BOOLEAN)
    }

    /// True for IRIs and blank nodes.
    pub fn is_resource(&self) -> bool {
        !matches!(self, Node::Literal(_))
    }

    /// True for IRIs.
    pub fn is_iri(&self) -> bool {
        matches!(self, Node::Iri(_))
    }

    /// True for blank nodes.
    pub fn is_blank(&self) -> bool {
        matches!(self, Node::Blank(_))
    }

    /// Returns the IRI string of an IRI node.
    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Node::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    /// Returns the literal of a literal node.
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Node::Literal(lit) => Some(lit),
            _ => None,
        }
    }

    /// Returns the node rendered for humans: IRIs compacted against the
    /// known vocabulary prefixes, everything else in N-Triples form.
    pub fn display_compact(&self) -> String {
        match self {
            Node::Iri(iri) => qb_vocab::compact(iri),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\"")?;
        for c in self.lexical.chars() {
            match c {
                '\\' => f.write_str("\\\\")?,
                '"' => f.write_str("\\\"")?,
                '\n' => f.write_str("\\n")?,
                '\r' => f.write_str("\\r")?,
                c => write!(f, "{}", c)?,
            }
        }
        f.write_str("\"")?;
        match &self.language {
            Some(lang) => write!(f, "@{}", lang),
            None if &*self.datatype == xsd::STRING => Ok(()),
            None => write!(f, "^^<{}>", self.datatype),
        }
    }
}

/// N-Triples rendering.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Iri(iri) => write!(f, "<{}>", iri),
            Node::Blank(label) => write!(f, "_:{}", label),
            Node::Literal(lit) => fmt::Display::fmt(lit, f),
        }
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A (subject, predicate, object) statement.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Triple {
    /// Subject resource.
    pub subject: Node,
    /// Predicate (an IRI used as a property).
    pub predicate: Node,
    /// Object node.
    pub object: Node,
}

impl Triple {
    /// Creates a triple.
    pub fn new(subject: Node, predicate: Node, object: Node) -> Self {
        Self {
            subject,
            predicate,
            object,
        }
    }

    /// True when every bound position equals the corresponding term.
    pub fn matches(&self, s: Option<&Node>, p: Option<&Node>, o: Option<&Node>) -> bool {
        s.map_or(true, |s| *s == self.subject)
            && p.map_or(true, |p| *p == self.predicate)
            && o.map_or(true, |o| *o == self.object)
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} .", self.subject, self.predicate, self.object)
    }
}
