//! `rdfs:` namespace.

use crate::model::{Namespace, NamespaceModule, Term};

/// Namespace IRI.
pub const NS: &str = "http://www.w3.org/2000/01/rdf-schema#";

/// `rdfs:range`.
pub const RANGE: &str = "http://www.w3.org/2000/01/rdf-schema#range";
/// `rdfs:label`.
pub const LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";

/// Returns the `rdfs:` namespace module.
#[must_use]
pub fn module() -> NamespaceModule {
    NamespaceModule {
        namespace: Namespace {
            prefix: "rdfs",
            iri: NS,
            label: "RDF Schema",
        },
        terms: vec![Term::property(RANGE, "range"), Term::property(LABEL, "label")],
    }
}
