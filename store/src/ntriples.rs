//! N-Triples serializer.
//!
//! Produces one triple per line with absolute IRIs, in the graph's
//! insertion order. Suitable for diffing a normalized cube against its
//! source.

use std::fmt::Write as _;

use crate::graph::Graph;
use crate::term::Node;

/// Serializes the graph to an N-Triples string.
#[must_use]
pub fn to_ntriples(graph: &Graph) -> String {
    let mut out = String::with_capacity(graph.len() * 96);
    for t in graph.iter() {
        triple(&mut out, &t.subject, &t.predicate, &t.object);
    }
    out
}

fn triple(out: &mut String, s: &Node, p: &Node, o: &Node) {
    // Writing into a String never fails.
    let _ = writeln!(out, "{} {} {} .", s, p, o);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::load_ntriples;
    use crate::term::Literal;

    #[test]
    fn one_line_per_triple() {
        let mut g = Graph::new();
        g.insert(
            Node::iri("http://ex.org/a"),
            Node::iri("http://ex.org/p"),
            Node::blank("b0"),
        );
        g.insert(
            Node::blank("b0"),
            Node::iri("http://ex.org/q"),
            Node::Literal(Literal::string("line\nbreak")),
        );
        let nt = to_ntriples(&g);
        assert_eq!(
            nt,
            "<http://ex.org/a> <http://ex.org/p> _:b0 .\n_:b0 <http://ex.org/q> \"line\\nbreak\" .\n"
        );
    }

    #[test]
    fn output_parses_back() -> Result<(), crate::LoadError> {
        let mut g = Graph::new();
        g.insert(
            Node::iri("http://ex.org/a"),
            Node::iri("http://ex.org/p"),
            Node::boolean(true),
        );
        let reparsed = load_ntriples(&to_ntriples(&g))?;
        assert_eq!(reparsed.len(), 1);
        assert!(reparsed.contains(
            &Node::iri("http://ex.org/a"),
            &Node::iri("http://ex.org/p"),
            &Node::boolean(true)
        ));
        Ok(())
    }
}
