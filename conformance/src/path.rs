//! Path & join engine.
//!
//! The traversal primitives every constraint is built from:
//!
//! - [`PropertyPath`] evaluates a fixed sequence `p1/p2/…/pn` forward from a
//!   subject, backward from an object, or for every subject at once.
//! - [`Join`] finds the subjects that carry every required
//!   `predicate → object` pair and collects the object sets of extra
//!   predicates for each of them.
//! - [`connectivity`] and [`transitive_connectivity`] answer reachability
//!   questions; the transitive variant repeats one property zero or more
//!   times, forward or inverse, with a visited set so cyclic data
//!   terminates.
//!
//! Every hop is applied to the union of nodes reached so far. Absence is
//! not an error: a lookup that matches nothing yields an empty set.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use qb_store::{Graph, Node};

/// A deterministic set of nodes.
pub type NodeSet = BTreeSet<Node>;

/// A fixed-length property path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyPath {
    steps: Vec<Node>,
}

/// The answer to [`PropertyPath::lookup`], one variant per binding mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathResult {
    /// Subject bound: the nodes reached from it.
    Reached(NodeSet),
    /// Subject and object bound: whether the object is reached.
    Connected(bool),
    /// Object bound: the subjects that reach it.
    Sources(NodeSet),
    /// Nothing bound: every node with a first hop, mapped to what it reaches.
    All(BTreeMap<Node, NodeSet>),
}

impl PropertyPath {
    /// Builds a path from property nodes.
    ///
    /// An empty path is the identity: it reaches only its start node.
    pub fn new(steps: impl IntoIterator<Item = Node>) -> Self {
        Self {
            steps: steps.into_iter().collect(),
        }
    }

    /// Builds a path from property nodes given by reference.
    #[must_use]
    pub fn of(steps: &[&Node]) -> Self {
        Self::new(steps.iter().map(|&n| n.clone()))
    }

    /// The properties of this path, in traversal order.
    #[must_use]
    pub fn steps(&self) -> &[Node] {
        &self.steps
    }

    /// Dispatches on which ends are bound.
    #[must_use]
    pub fn lookup(
        &self,
        graph: &Graph,
        subject: Option<&Node>,
        object: Option<&Node>,
    ) -> PathResult {
        match (subject, object) {
            (Some(s), Some(o)) => PathResult::Connected(self.reaches(graph, s, o)),
            (Some(s), None) => PathResult::Reached(self.reachable_from(graph, s)),
            (None, Some(o)) => PathResult::Sources(self.sources_of(graph, o)),
            (None, None) => PathResult::All(self.closure(graph)),
        }
    }

    /// Nodes reachable from `subject` by walking the full path.
    #[must_use]
    pub fn reachable_from(&self, graph: &Graph, subject: &Node) -> NodeSet {
        self.walk_forward(graph, NodeSet::from([subject.clone()]))
    }

    /// True iff `object` is reachable from `subject` along the path.
    #[must_use]
    pub fn reaches(&self, graph: &Graph, subject: &Node, object: &Node) -> bool {
        self.reachable_from(graph, subject).contains(object)
    }

    /// Subjects from which `object` is reachable, walking the path backward.
    #[must_use]
    pub fn sources_of(&self, graph: &Graph, object: &Node) -> NodeSet {
        let mut frontier = NodeSet::from([object.clone()]);
        for step in self.steps.iter().rev() {
            if frontier.is_empty() {
                break;
            }
            frontier = frontier
                .iter()
                .flat_map(|node| graph.subjects(step, node))
                .collect();
        }
        frontier
    }

    /// Every subject of the first step mapped to its full reachable set.
    ///
    /// Subjects whose walk dies out part-way map to an empty set.
    #[must_use]
    pub fn closure(&self, graph: &Graph) -> BTreeMap<Node, NodeSet> {
        let Some(first) = self.steps.first() else {
            return BTreeMap::new();
        };
        let mut starts: BTreeMap<Node, NodeSet> = BTreeMap::new();
        for t in graph.triples_with(None, Some(first), None) {
            starts.entry(t.subject).or_default().insert(t.object);
        }
        let rest = PropertyPath::new(self.steps[1..].iter().cloned());
        starts
            .into_iter()
            .map(|(subject, first_hop)| {
                let reached = rest.walk_forward(graph, first_hop);
                (subject, reached)
            })
            .collect()
    }

    fn walk_forward(&self, graph: &Graph, start: NodeSet) -> NodeSet {
        let mut frontier = start;
        for step in &self.steps {
            if frontier.is_empty() {
                break;
            }
            frontier = frontier
                .iter()
                .flat_map(|node| graph.objects(node, step))
                .collect();
        }
        frontier
    }
}

/// A multi-predicate conjunctive join.
///
/// ```
/// use qb_conformance::path::Join;
/// use qb_store::{Graph, Node};
///
/// let mut g = Graph::new();
/// let (a, ty, class, range) = (
///     Node::iri("http://ex.org/a"),
///     Node::iri("http://ex.org/type"),
///     Node::iri("http://ex.org/Dim"),
///     Node::iri("http://ex.org/range"),
/// );
/// g.insert(a.clone(), ty.clone(), class.clone());
/// let rows = Join::new().require(ty, class).collect(range).run(&g, None);
/// assert!(rows[&a][0].is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Join {
    required: Vec<(Node, Node)>,
    extra: Vec<Node>,
}

impl Join {
    /// An empty join.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires `(subject, predicate, object)` to hold.
    #[must_use]
    pub fn require(mut self, predicate: Node, object: Node) -> Self {
        self.required.push((predicate, object));
        self
    }

    /// Collects the object set of `predicate` for every matching subject.
    #[must_use]
    pub fn collect(mut self, predicate: Node) -> Self {
        self.extra.push(predicate);
        self
    }

    /// Runs the join.
    ///
    /// Returns each matching subject with one object set per collected
    /// predicate, in the order they were added. With `subject` bound the
    /// result holds that subject or nothing. With no required pair and no
    /// subject, every subject in the graph matches.
    #[must_use]
    pub fn run(&self, graph: &Graph, subject: Option<&Node>) -> BTreeMap<Node, Vec<NodeSet>> {
        self.subjects(graph, subject)
            .into_iter()
            .map(|s| {
                let extra = self
                    .extra
                    .iter()
                    .map(|p| graph.objects(&s, p).into_iter().collect())
                    .collect();
                (s, extra)
            })
            .collect()
    }

    /// The subjects satisfying every required pair, without collecting.
    #[must_use]
    pub fn subjects(&self, graph: &Graph, subject: Option<&Node>) -> NodeSet {
        if let Some(s) = subject {
            let satisfied = self.required.iter().all(|(p, o)| graph.contains(s, p, o));
            let present = !self.required.is_empty()
                || !graph.triples_with(Some(s), None, None).is_empty();
            return if satisfied && present {
                NodeSet::from([s.clone()])
            } else {
                NodeSet::new()
            };
        }

        // Seed with the most selective pair, then intersect with the rest.
        let seed = self
            .required
            .iter()
            .map(|(p, o)| (graph.subjects(p, o), (p, o)))
            .min_by_key(|(subjects, _)| subjects.len());
        match seed {
            Some((candidates, seed_pair)) => candidates
                .into_iter()
                .filter(|s| {
                    self.required
                        .iter()
                        .filter(|(p, o)| (p, o) != seed_pair)
                        .all(|(p, o)| graph.contains(s, p, o))
                })
                .collect(),
            None => graph.iter().map(|t| t.subject.clone()).collect(),
        }
    }
}

/// Traversal direction for [`transitive_connectivity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Follow `(node, p, next)`.
    Forward,
    /// Follow `(next, p, node)`: subject and object roles swapped.
    Inverse,
}

/// True iff `object ∈ path(subject)`.
#[must_use]
pub fn connectivity(graph: &Graph, subject: &Node, path: &PropertyPath, object: &Node) -> bool {
    path.reaches(graph, subject, object)
}

/// True iff `object` is reachable from any node of `fixed(subject)` by zero
/// or more hops of `repeatable` in `direction`.
#[must_use]
pub fn transitive_connectivity(
    graph: &Graph,
    subject: &Node,
    fixed: &PropertyPath,
    repeatable: &Node,
    object: &Node,
    direction: Direction,
) -> bool {
    let starts = fixed.reachable_from(graph, subject);
    expand(graph, starts, repeatable, direction, Some(object)).contains(object)
}

/// Every node reachable from `starts` by zero or more hops of `property`.
///
/// The start nodes are themselves included.
#[must_use]
pub fn transitive_closure(
    graph: &Graph,
    starts: NodeSet,
    property: &Node,
    direction: Direction,
) -> NodeSet {
    expand(graph, starts, property, direction, None)
}

/// Breadth-first frontier expansion with a visited set. Stops early once
/// `target` has been visited.
fn expand(
    graph: &Graph,
    starts: NodeSet,
    property: &Node,
    direction: Direction,
    target: Option<&Node>,
) -> NodeSet {
    let mut queue: VecDeque<Node> = starts.iter().cloned().collect();
    let mut visited = starts;
    if target.is_some_and(|t| visited.contains(t)) {
        return visited;
    }
    while let Some(node) = queue.pop_front() {
        let next = match direction {
            Direction::Forward => graph.objects(&node, property),
            Direction::Inverse => graph.subjects(property, &node),
        };
        for n in next {
            if visited.insert(n.clone()) {
                if target == Some(&n) {
                    return visited;
                }
                queue.push_back(n);
            }
        }
    }
    visited
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(local: &str) -> Node {
        Node::iri(format!("http://example.org/{}", local))
    }

    fn set(locals: &[&str]) -> NodeSet {
        locals.iter().map(|l| n(l)).collect()
    }

    /// a -p-> b, a -p-> c, b -q-> d, c -q-> e, x -p-> b
    fn diamond() -> Graph {
        let mut g = Graph::new();
        g.insert(n("a"), n("p"), n("b"));
        g.insert(n("a"), n("p"), n("c"));
        g.insert(n("b"), n("q"), n("d"));
        g.insert(n("c"), n("q"), n("e"));
        g.insert(n("x"), n("p"), n("b"));
        g
    }

    #[test]
    fn forward_walk_unions_each_hop() {
        let g = diamond();
        let path = PropertyPath::new([n("p"), n("q")]);
        assert_eq!(path.reachable_from(&g, &n("a")), set(&["d", "e"]));
        assert_eq!(path.reachable_from(&g, &n("x")), set(&["d"]));
        assert!(path.reachable_from(&g, &n("d")).is_empty());
        assert!(path.reaches(&g, &n("a"), &n("e")));
        assert!(!path.reaches(&g, &n("x"), &n("e")));
    }

    #[test]
    fn backward_walk_finds_sources() {
        let g = diamond();
        let path = PropertyPath::new([n("p"), n("q")]);
        assert_eq!(path.sources_of(&g, &n("d")), set(&["a", "x"]));
        assert_eq!(path.sources_of(&g, &n("e")), set(&["a"]));
        assert!(path.sources_of(&g, &n("b")).is_empty());
    }

    #[test]
    fn closure_maps_every_first_hop_subject() {
        let g = diamond();
        let path = PropertyPath::new([n("p"), n("q")]);
        let all = path.closure(&g);
        assert_eq!(all.len(), 2);
        assert_eq!(all[&n("a")], set(&["d", "e"]));
        assert_eq!(all[&n("x")], set(&["d"]));
    }

    #[test]
    fn lookup_dispatches_on_bindings() {
        let g = diamond();
        let path = PropertyPath::new([n("p")]);
        assert_eq!(
            path.lookup(&g, Some(&n("a")), None),
            PathResult::Reached(set(&["b", "c"]))
        );
        assert_eq!(
            path.lookup(&g, Some(&n("a")), Some(&n("c"))),
            PathResult::Connected(true)
        );
        assert_eq!(
            path.lookup(&g, None, Some(&n("b"))),
            PathResult::Sources(set(&["a", "x"]))
        );
        assert!(matches!(path.lookup(&g, None, None), PathResult::All(m) if m.len() == 2));
    }

    #[test]
    fn empty_path_is_identity() {
        let g = diamond();
        let path = PropertyPath::new([]);
        assert_eq!(path.reachable_from(&g, &n("a")), set(&["a"]));
        assert!(path.closure(&g).is_empty());
    }

    #[test]
    fn join_intersects_required_pairs() {
        let mut g = Graph::new();
        g.insert(n("d1"), n("type"), n("Dim"));
        g.insert(n("d1"), n("range"), n("Concept"));
        g.insert(n("d1"), n("codeList"), n("cl"));
        g.insert(n("d2"), n("type"), n("Dim"));
        g.insert(n("d2"), n("range"), n("Concept"));
        g.insert(n("d3"), n("type"), n("Dim"));

        let join = Join::new()
            .require(n("type"), n("Dim"))
            .require(n("range"), n("Concept"))
            .collect(n("codeList"));
        let rows = join.run(&g, None);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[&n("d1")], vec![set(&["cl"])]);
        assert_eq!(rows[&n("d2")], vec![NodeSet::new()]);

        assert_eq!(join.run(&g, Some(&n("d1"))).len(), 1);
        assert!(join.run(&g, Some(&n("d3"))).is_empty());
    }

    #[test]
    fn join_without_requirements_covers_every_subject() {
        let g = diamond();
        assert_eq!(Join::new().subjects(&g, None), set(&["a", "b", "c", "x"]));
        assert!(Join::new().subjects(&g, Some(&n("zzz"))).is_empty());
    }

    #[test]
    fn transitive_connectivity_forward_and_inverse() {
        // list -root-> r, r -narrower-> x -narrower-> v
        let mut g = Graph::new();
        g.insert(n("list"), n("root"), n("r"));
        g.insert(n("r"), n("narrower"), n("x"));
        g.insert(n("x"), n("narrower"), n("v"));
        let fixed = PropertyPath::new([n("root")]);

        for target in ["r", "x", "v"] {
            assert!(transitive_connectivity(
                &g,
                &n("list"),
                &fixed,
                &n("narrower"),
                &n(target),
                Direction::Forward
            ));
        }
        assert!(!transitive_connectivity(
            &g,
            &n("list"),
            &fixed,
            &n("narrower"),
            &n("v"),
            Direction::Inverse
        ));

        // Same hierarchy expressed child -broader-> parent.
        let mut inv = Graph::new();
        inv.insert(n("list"), n("root"), n("r"));
        inv.insert(n("x"), n("broader"), n("r"));
        inv.insert(n("v"), n("broader"), n("x"));
        assert!(transitive_connectivity(
            &inv,
            &n("list"),
            &fixed,
            &n("broader"),
            &n("v"),
            Direction::Inverse
        ));
    }

    #[test]
    fn transitive_closure_terminates_on_cycles() {
        let mut g = Graph::new();
        g.insert(n("a"), n("p"), n("b"));
        g.insert(n("b"), n("p"), n("c"));
        g.insert(n("c"), n("p"), n("a"));
        g.insert(n("c"), n("p"), n("c"));
        let reached = transitive_closure(&g, set(&["a"]), &n("p"), Direction::Forward);
        assert_eq!(reached, set(&["a", "b", "c"]));
        assert!(!transitive_connectivity(
            &g,
            &n("a"),
            &PropertyPath::new([]),
            &n("p"),
            &n("zzz"),
            Direction::Forward
        ));
    }

    #[test]
    fn connectivity_is_path_membership() {
        let g = diamond();
        let path = PropertyPath::new([n("p")]);
        assert!(connectivity(&g, &n("a"), &path, &n("c")));
        assert!(!connectivity(&g, &n("x"), &path, &n("c")));
    }
}
