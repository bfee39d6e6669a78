//! Namespace modules.
//!
//! Each sub-module exposes its term IRIs as `&'static str` constants and a
//! `module()` constructor used to assemble [`crate::Vocabulary::full`].

pub mod owl;
pub mod qb;
pub mod rdf;
pub mod rdfs;
pub mod skos;
pub mod xsd;
