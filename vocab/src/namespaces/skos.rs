//! `skos:` namespace: code list membership.

use crate::model::{Namespace, NamespaceModule, Term};

/// Namespace IRI.
pub const NS: &str = "http://www.w3.org/2004/02/skos/core#";

/// `skos:Concept`.
pub const CONCEPT: &str = "http://www.w3.org/2004/02/skos/core#Concept";
/// `skos:ConceptScheme`.
pub const CONCEPT_SCHEME: &str = "http://www.w3.org/2004/02/skos/core#ConceptScheme";
/// `skos:Collection`.
pub const COLLECTION: &str = "http://www.w3.org/2004/02/skos/core#Collection";
/// `skos:inScheme`.
pub const IN_SCHEME: &str = "http://www.w3.org/2004/02/skos/core#inScheme";
/// `skos:member`.
pub const MEMBER: &str = "http://www.w3.org/2004/02/skos/core#member";
/// `skos:narrower`.
pub const NARROWER: &str = "http://www.w3.org/2004/02/skos/core#narrower";
/// `skos:broader`.
pub const BROADER: &str = "http://www.w3.org/2004/02/skos/core#broader";

/// Returns the `skos:` namespace module.
#[must_use]
pub fn module() -> NamespaceModule {
    NamespaceModule {
        namespace: Namespace {
            prefix: "skos",
            iri: NS,
            label: "Simple Knowledge Organization System",
        },
        terms: vec![
            Term::class(CONCEPT, "Concept"),
            Term::class(CONCEPT_SCHEME, "ConceptScheme"),
            Term::class(COLLECTION, "Collection"),
            Term::property(IN_SCHEME, "inScheme"),
            Term::property(MEMBER, "member"),
            Term::property(NARROWER, "narrower"),
            Term::property(BROADER, "broader"),
        ],
    }
}
