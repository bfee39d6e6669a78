//! RDF Data Cube vocabulary encoded as typed Rust data.
//!
//! The `qb-vocab` crate lists every namespace and term the cube validator
//! reads (the Data Cube `qb:` vocabulary plus the SKOS, RDF, RDFS, OWL and
//! XSD terms the integrity constraints mention) as `&'static str` IRI
//! constants, along with prefix compaction for human-readable reports.
//!
//! # Entry Point
//!
//! ```
//! let vocab = qb_vocab::Vocabulary::full();
//! assert_eq!(vocab.namespaces.len(), 6);
//! assert_eq!(vocab.compact(qb_vocab::qb::DATA_SET), "qb:DataSet");
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod model;
pub mod namespaces;

pub use model::{Namespace, NamespaceModule, Term, Vocabulary};
pub use namespaces::{owl, qb, rdf, rdfs, skos, xsd};

impl Vocabulary {
    /// Returns the complete vocabulary with all six namespaces.
    #[must_use]
    pub fn full() -> &'static Vocabulary {
        static VOCABULARY: std::sync::OnceLock<Vocabulary> = std::sync::OnceLock::new();
        VOCABULARY.get_or_init(|| Vocabulary {
            namespaces: vec![
                namespaces::qb::module(),
                namespaces::skos::module(),
                namespaces::rdf::module(),
                namespaces::rdfs::module(),
                namespaces::owl::module(),
                namespaces::xsd::module(),
            ],
        })
    }
}

/// Compacts an IRI against [`Vocabulary::full`].
#[must_use]
pub fn compact(iri: &str) -> String {
    Vocabulary::full().compact(iri)
}
