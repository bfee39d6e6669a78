//! `owl:` namespace. Only `owl:inverseOf` is read, to recognise inverse
//! parent-child properties on hierarchical code lists.

use crate::model::{Namespace, NamespaceModule, Term};

/// Namespace IRI.
pub const NS: &str = "http://www.w3.org/2002/07/owl#";

/// `owl:inverseOf`.
pub const INVERSE_OF: &str = "http://www.w3.org/2002/07/owl#inverseOf";

/// Returns the `owl:` namespace module.
#[must_use]
pub fn module() -> NamespaceModule {
    NamespaceModule {
        namespace: Namespace {
            prefix: "owl",
            iri: NS,
            label: "OWL 2",
        },
        terms: vec![Term::property(INVERSE_OF, "inverseOf")],
    }
}
