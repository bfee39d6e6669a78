//! In-memory RDF graph store for cube validation.
//!
//! Provides the term model ([`Node`], [`Literal`], [`Triple`]), an indexed
//! triple set ([`Graph`]) answering any `(s?, p?, o?)` pattern, loaders for
//! Turtle and N-Triples documents, and an N-Triples writer.
//!
//! # Entry Point
//!
//! ```
//! use qb_store::{load_turtle, Node};
//!
//! let graph = load_turtle(
//!     "@prefix qb: <http://purl.org/linked-data/cube#> .
//!      <http://example.org/o1> qb:dataSet <http://example.org/ds> .",
//! )
//! .expect("valid Turtle");
//! let obs = Node::iri("http://example.org/o1");
//! assert_eq!(graph.triples_with(Some(&obs), None, None).len(), 1);
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod error;
pub mod graph;
pub mod loader;
pub mod ntriples;
pub mod term;

pub use error::{Format, LoadError};
pub use graph::Graph;
pub use loader::{load_ntriples, load_path, load_str, load_turtle};
pub use ntriples::to_ntriples;
pub use term::{Literal, Node, Triple};
