//! `xsd:` namespace: literal datatypes.

use crate::model::{Namespace, NamespaceModule, Term};

/// Namespace IRI.
pub const NS: &str = "http://www.w3.org/2001/XMLSchema#";

/// `xsd:string`.
pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
/// `xsd:boolean`.
pub const BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";
/// `xsd:integer`.
pub const INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
/// `xsd:decimal`.
pub const DECIMAL: &str = "http://www.w3.org/2001/XMLSchema#decimal";

/// `xsd:gYear`.
pub const G_YEAR: &str = "http://www.w3.org/2001/XMLSchema#gYear";

/// Returns the `xsd:` namespace module.
#[must_use]
pub fn module() -> NamespaceModule {
    NamespaceModule {
        namespace: Namespace {
            prefix: "xsd",
            iri: NS,
            label: "XML Schema Datatypes",
        },
        terms: vec![
            Term::class(STRING, "string"),
            Term::class(BOOLEAN, "boolean"),
            Term::class(INTEGER, "integer"),
            Term::class(DECIMAL, "decimal"),
            Term::class(G_YEAR, "gYear"),
        ],
    }
}
