//! Turtle cube fixtures shared by unit and integration tests.

pub mod fixtures;

/// Prefix declarations prepended to inline test cubes.
pub const PREFIXES: &str = r#"
@prefix rdf:  <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix owl:  <http://www.w3.org/2002/07/owl#> .
@prefix xsd:  <http://www.w3.org/2001/XMLSchema#> .
@prefix skos: <http://www.w3.org/2004/02/skos/core#> .
@prefix qb:   <http://purl.org/linked-data/cube#> .
@prefix ex:   <http://example.org/ns#> .
"#;

/// Parses `body` with [`PREFIXES`] prepended.
#[cfg(test)]
#[allow(clippy::panic)]
pub(crate) fn cube(body: &str) -> qb_store::Graph {
    match qb_store::load_turtle(&format!("{}{}", PREFIXES, body)) {
        Ok(graph) => graph,
        Err(e) => panic!("test cube does not parse: {}", e),
    }
}

/// Parses and normalizes `body`.
#[cfg(test)]
pub(crate) fn normalized(body: &str) -> qb_store::Graph {
    let mut graph = cube(body);
    crate::normalize::normalize(&mut graph);
    graph
}

/// `ex:` IRI node.
#[cfg(test)]
pub(crate) fn ex(local: &str) -> qb_store::Node {
    qb_store::Node::iri(format!("http://example.org/ns#{}", local))
}
