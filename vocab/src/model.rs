//! Vocabulary model types.
//!
//! A vocabulary is a set of namespace modules, each listing the class and
//! property terms the validator refers to. Only terms that the normalizer or
//! one of the integrity constraints actually reads are listed.

/// An RDF namespace (e.g., `qb:`, `skos:`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
    /// The conventional prefix (e.g., `"qb"`).
    pub prefix: &'static str,
    /// The full namespace IRI (e.g., `"http://purl.org/linked-data/cube#"`).
    pub iri: &'static str,
    /// Human-readable label.
    pub label: &'static str,
}

/// Whether a vocabulary term names a class or a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermKind {
    /// Used as the object of `rdf:type`.
    Class,
    /// Used as a predicate.
    Property,
}

/// A single vocabulary term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    /// Full IRI.
    pub id: &'static str,
    /// Local name within its namespace.
    pub label: &'static str,
    /// Class or property.
    pub kind: TermKind,
}

impl Term {
    /// Declares a class term.
    #[must_use]
    pub const fn class(id: &'static str, label: &'static str) -> Self {
        Self {
            id,
            label,
            kind: TermKind::Class,
        }
    }

    /// Declares a property term.
    #[must_use]
    pub const fn property(id: &'static str, label: &'static str) -> Self {
        Self {
            id,
            label,
            kind: TermKind::Property,
        }
    }
}

/// A namespace together with the terms the validator uses from it.
#[derive(Debug, Clone)]
pub struct NamespaceModule {
    /// Namespace metadata.
    pub namespace: Namespace,
    /// Terms declared in this namespace.
    pub terms: Vec<Term>,
}

/// The complete vocabulary: every namespace module the validator knows.
#[derive(Debug)]
pub struct Vocabulary {
    /// Namespace modules, `qb:` first.
    pub namespaces: Vec<NamespaceModule>,
}

impl Vocabulary {
    /// Rewrites `iri` as `prefix:local` when it falls in a known namespace.
    ///
    /// IRIs outside every namespace are returned wrapped in angle brackets,
    /// the way N-Triples prints them.
    #[must_use]
    pub fn compact(&self, iri: &str) -> String {
        for module in &self.namespaces {
            let ns = &module.namespace;
            if let Some(local) = iri.strip_prefix(ns.iri) {
                if !local.is_empty() && !local.contains(['/', '#']) {
                    return format!("{}:{}", ns.prefix, local);
                }
            }
        }
        format!("<{}>", iri)
    }
}
