//! Indexed in-memory triple set.
//!
//! The [`Graph`] stores each distinct triple once (set semantics) and keeps
//! insertion order: every lookup returns matches in the order they were
//! first inserted. Five positional indexes map a bound pattern to the
//! positions of the triples it matches, so every pattern with at least one
//! bound term is answered without a full scan.

use std::collections::HashMap;

use crate::term::{Node, Triple};

/// A set of RDF triples with indexed pattern lookup.
///
/// # Example
///
/// ```
/// use qb_store::{Graph, Node};
///
/// let mut graph = Graph::new();
/// let s = Node::iri("http://example.org/obs1");
/// let p = Node::iri("http://purl.org/linked-data/cube#dataSet");
/// let o = Node::iri("http://example.org/ds");
///
/// assert!(graph.insert(s.clone(), p.clone(), o.clone()));
/// assert!(!graph.insert(s.clone(), p.clone(), o.clone())); // idempotent
/// assert_eq!(graph.objects(&s, &p), vec![o]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Graph {
    triples: Vec<Triple>,
    positions: HashMap<Triple, usize>,
    by_subject: HashMap<Node, Vec<usize>>,
    by_predicate: HashMap<Node, Vec<usize>>,
    by_object: HashMap<Node, Vec<usize>>,
    by_subject_predicate: HashMap<(Node, Node), Vec<usize>>,
    by_predicate_object: HashMap<(Node, Node), Vec<usize>>,
}

const NO_MATCH: &[usize] = &[];

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct triples.
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// True when the graph holds no triples.
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Iterates over all triples in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// Inserts a triple. Returns `true` if it was not already present.
    pub fn insert(&mut self, subject: Node, predicate: Node, object: Node) -> bool {
        self.insert_triple(Triple::new(subject, predicate, object))
    }

    /// Inserts an owned triple. Returns `true` if it was not already present.
    pub fn insert_triple(&mut self, triple: Triple) -> bool {
        if self.positions.contains_key(&triple) {
            return false;
        }
        let pos = self.triples.len();
        push(&mut self.by_subject, triple.subject.clone(), pos);
        push(&mut self.by_predicate, triple.predicate.clone(), pos);
        push(&mut self.by_object, triple.object.clone(), pos);
        push(
            &mut self.by_subject_predicate,
            (triple.subject.clone(), triple.predicate.clone()),
            pos,
        );
        push(
            &mut self.by_predicate_object,
            (triple.predicate.clone(), triple.object.clone()),
            pos,
        );
        self.positions.insert(triple.clone(), pos);
        self.triples.push(triple);
        true
    }

    /// True if the exact triple is present.
    pub fn contains(&self, subject: &Node, predicate: &Node, object: &Node) -> bool {
        self.positions.contains_key(&Triple::new(
            subject.clone(),
            predicate.clone(),
            object.clone(),
        ))
    }

    /// Returns every triple matching the pattern, in insertion order.
    ///
    /// `None` leaves a position unbound. The fully unbound pattern returns
    /// the whole graph.
    pub fn triples_with(
        &self,
        subject: Option<&Node>,
        predicate: Option<&Node>,
        object: Option<&Node>,
    ) -> Vec<Triple> {
        match (subject, predicate, object) {
            (Some(s), Some(p), Some(o)) => {
                if self.contains(s, p, o) {
                    vec![Triple::new(s.clone(), p.clone(), o.clone())]
                } else {
                    Vec::new()
                }
            }
            (None, None, None) => self.triples.clone(),
            _ => self
                .candidates(subject, predicate, object)
                .iter()
                .map(|&pos| &self.triples[pos])
                .filter(|t| t.matches(subject, predicate, object))
                .cloned()
                .collect(),
        }
    }

    /// Objects of `(subject, predicate, *)`, in insertion order.
    pub fn objects(&self, subject: &Node, predicate: &Node) -> Vec<Node> {
        lookup_pair(&self.by_subject_predicate, subject, predicate)
            .iter()
            .map(|&pos| self.triples[pos].object.clone())
            .collect()
    }

    /// Subjects of `(*, predicate, object)`, in insertion order.
    pub fn subjects(&self, predicate: &Node, object: &Node) -> Vec<Node> {
        lookup_pair(&self.by_predicate_object, predicate, object)
            .iter()
            .map(|&pos| self.triples[pos].subject.clone())
            .collect()
    }

    /// True if at least one `(subject, predicate, *)` triple exists.
    pub fn has_property(&self, subject: &Node, predicate: &Node) -> bool {
        !lookup_pair(&self.by_subject_predicate, subject, predicate).is_empty()
    }

    /// Number of `(subject, predicate, *)` triples.
    pub fn count_objects(&self, subject: &Node, predicate: &Node) -> usize {
        lookup_pair(&self.by_subject_predicate, subject, predicate).len()
    }

    /// Picks the smallest position list that covers the bound terms.
    fn candidates(
        &self,
        subject: Option<&Node>,
        predicate: Option<&Node>,
        object: Option<&Node>,
    ) -> &[usize] {
        match (subject, predicate, object) {
            (Some(s), Some(p), _) => lookup_pair(&self.by_subject_predicate, s, p),
            (_, Some(p), Some(o)) => lookup_pair(&self.by_predicate_object, p, o),
            (Some(s), None, Some(o)) => {
                let by_s = lookup(&self.by_subject, s);
                let by_o = lookup(&self.by_object, o);
                if by_s.len() <= by_o.len() {
                    by_s
                } else {
                    by_o
                }
            }
            (Some(s), None, None) => lookup(&self.by_subject, s),
            (None, Some(p), None) => lookup(&self.by_predicate, p),
            (None, None, Some(o)) => lookup(&self.by_object, o),
            (None, None, None) => NO_MATCH,
        }
    }
}

fn lookup_pair<'a>(
    index: &'a HashMap<(Node, Node), Vec<usize>>,
    a: &Node,
    b: &Node,
) -> &'a [usize] {
    index
        .get(&(a.clone(), b.clone()))
        .map_or(NO_MATCH, Vec::as_slice)
}

fn lookup<'a>(index: &'a HashMap<Node, Vec<usize>>, key: &Node) -> &'a [usize] {
    index.get(key).map_or(NO_MATCH, Vec::as_slice)
}

fn push<K: std::hash::Hash + Eq>(index: &mut HashMap<K, Vec<usize>>, key: K, pos: usize) {
    index.entry(key).or_default().push(pos);
}

impl Extend<Triple> for Graph {
    fn extend<I: IntoIterator<Item = Triple>>(&mut self, iter: I) {
        for triple in iter {
            self.insert_triple(triple);
        }
    }
}

impl FromIterator<Triple> for Graph {
    fn from_iter<I: IntoIterator<Item = Triple>>(iter: I) -> Self {
        let mut graph = Graph::new();
        graph.extend(iter);
        graph
    }
}
