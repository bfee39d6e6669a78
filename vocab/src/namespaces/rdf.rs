//! `rdf:` namespace.

use crate::model::{Namespace, NamespaceModule, Term};

/// Namespace IRI.
pub const NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

/// `rdf:type`.
pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
/// `rdf:Property`.
pub const PROPERTY: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#Property";
/// `rdf:langString`, the implicit datatype of language-tagged literals.
pub const LANG_STRING: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";

/// Returns the `rdf:` namespace module.
#[must_use]
pub fn module() -> NamespaceModule {
    NamespaceModule {
        namespace: Namespace {
            prefix: "rdf",
            iri: NS,
            label: "RDF",
        },
        terms: vec![
            Term::property(TYPE, "type"),
            Term::class(PROPERTY, "Property"),
            Term::class(LANG_STRING, "langString"),
        ],
    }
}
