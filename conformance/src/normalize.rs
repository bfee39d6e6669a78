//! Normalizer.
//!
//! A cube document may leave out facts its structure implies. Two phases
//! make them explicit before any constraint runs:
//!
//! 1. **Type and property closure** types the ends of `qb:observation`,
//!    `qb:dataSet` and `qb:slice`, and rewrites the `qb:dimension`,
//!    `qb:measure` and `qb:attribute` shortcuts into `qb:componentProperty`
//!    plus a component type.
//! 2. **Attachment push-down** copies values attached at data set or slice
//!    level down to the observations they cover.
//!
//! Each round of a phase computes its inserts from the graph as it stood when
//! the round began and applies them afterwards, so rule order never matters.
//! Push-down repeats rounds until one adds nothing, since a copied value can
//! itself be pushed further down a `qb:dataSet` chain. [`normalize`] repeats
//! both phases the same way. Only existing nodes are ever combined, so the
//! fixpoint is reached, and once reached re-running is a no-op.

use serde::Serialize;
use tracing::debug;

use qb_store::{Graph, Node, Triple};

use crate::path::PropertyPath;
use crate::terms::terms;

/// Number of new triples each phase added.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NormalizeStats {
    /// Triples added by type and property closure.
    pub type_closure: usize,
    /// Triples added by attachment push-down.
    pub push_down: usize,
}

impl NormalizeStats {
    /// Total triples added.
    #[must_use]
    pub fn total(&self) -> usize {
        self.type_closure + self.push_down
    }
}

/// Runs type and property closure, then attachment push-down, until neither
/// adds a triple.
pub fn normalize(graph: &mut Graph) -> NormalizeStats {
    let mut stats = NormalizeStats::default();
    loop {
        let type_closure = type_and_property_closure(graph);
        let push_down = push_down_attachments(graph);
        stats.type_closure += type_closure;
        stats.push_down += push_down;
        if type_closure + push_down == 0 {
            break;
        }
    }
    debug!(
        type_closure = stats.type_closure,
        push_down = stats.push_down,
        triples = graph.len(),
        "normalized graph"
    );
    stats
}

/// Phase 1. Returns the number of triples added.
pub fn type_and_property_closure(graph: &mut Graph) -> usize {
    let t = terms();
    let mut inserts = Vec::new();

    for triple in graph.triples_with(None, Some(&t.observation), None) {
        inserts.push(typed(triple.object, &t.observation_class));
    }
    for triple in graph.triples_with(None, Some(&t.data_set), None) {
        inserts.push(typed(triple.object, &t.data_set_class));
        inserts.push(typed(triple.subject, &t.observation_class));
    }
    for triple in graph.triples_with(None, Some(&t.slice), None) {
        inserts.push(typed(triple.object, &t.slice_class));
    }

    let shortcuts = [
        (&t.dimension, &t.dimension_property),
        (&t.measure, &t.measure_property),
        (&t.attribute, &t.attribute_property),
    ];
    for (shortcut, class) in shortcuts {
        for triple in graph.triples_with(None, Some(shortcut), None) {
            inserts.push(Triple::new(
                triple.subject,
                t.component_property.clone(),
                triple.object.clone(),
            ));
            inserts.push(typed(triple.object, class));
        }
    }

    apply(graph, inserts, "type and property closure")
}

/// Phase 2. Returns the number of triples added.
pub fn push_down_attachments(graph: &mut Graph) -> usize {
    let mut added = 0;
    loop {
        match push_down_round(graph) {
            0 => return added,
            n => added += n,
        }
    }
}

fn push_down_round(graph: &mut Graph) -> usize {
    let t = terms();
    let specs_of = PropertyPath::of(&[&t.structure, &t.component]);
    let mut inserts = Vec::new();

    let data_sets = subjects_of(graph, &t.structure);
    for data_set in &data_sets {
        let specs = specs_of.reachable_from(graph, data_set);
        let observations = graph.subjects(&t.data_set, data_set);
        let slices = graph.objects(data_set, &t.slice);

        for spec in &specs {
            let attachment = graph.objects(spec, &t.component_attachment);
            for property in graph.objects(spec, &t.component_property) {
                let is_dimension = graph.contains(&property, &t.rdf_type, &t.dimension_property);

                if attachment.contains(&t.data_set_class) {
                    copy_values(graph, data_set, &property, &observations, &mut inserts);
                }
                if attachment.contains(&t.slice_class) || is_dimension {
                    for slice in &slices {
                        let members = graph.objects(slice, &t.observation);
                        copy_values(graph, slice, &property, &members, &mut inserts);
                    }
                }
            }
        }
    }

    apply(graph, inserts, "attachment push-down")
}

fn typed(subject: Node, class: &Node) -> Triple {
    Triple::new(subject, terms().rdf_type.clone(), class.clone())
}

/// Distinct subjects of `predicate`, in first-seen order.
fn subjects_of(graph: &Graph, predicate: &Node) -> Vec<Node> {
    let mut seen = std::collections::HashSet::new();
    graph
        .triples_with(None, Some(predicate), None)
        .into_iter()
        .filter_map(|t| seen.insert(t.subject.clone()).then_some(t.subject))
        .collect()
}

/// Queues `(target, property, v)` for every value `v` of `(source, property)`.
fn copy_values(
    graph: &Graph,
    source: &Node,
    property: &Node,
    targets: &[Node],
    inserts: &mut Vec<Triple>,
) {
    let values = graph.objects(source, property);
    for target in targets {
        for value in &values {
            inserts.push(Triple::new(target.clone(), property.clone(), value.clone()));
        }
    }
}

fn apply(graph: &mut Graph, inserts: Vec<Triple>, phase: &str) -> usize {
    let added = inserts
        .into_iter()
        .filter(|triple| graph.insert_triple(triple.clone()))
        .count();
    debug!(phase, added, "normalization phase complete");
    added
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{cube, ex, fixtures};
    use qb_vocab::qb;

    #[test]
    fn closure_types_link_ends() {
        let t = terms();
        let mut g = Graph::new();
        g.insert(ex("ds"), t.slice.clone(), ex("s1"));
        g.insert(ex("s1"), t.observation.clone(), ex("o1"));
        g.insert(ex("o2"), t.data_set.clone(), ex("ds"));
        let added = type_and_property_closure(&mut g);
        assert_eq!(added, 4);
        assert!(g.contains(&ex("s1"), &t.rdf_type, &t.slice_class));
        assert!(g.contains(&ex("o1"), &t.rdf_type, &t.observation_class));
        assert!(g.contains(&ex("o2"), &t.rdf_type, &t.observation_class));
        assert!(g.contains(&ex("ds"), &t.rdf_type, &t.data_set_class));
    }

    #[test]
    fn closure_expands_component_shortcuts() {
        let t = terms();
        let mut g = Graph::new();
        g.insert(ex("c1"), t.dimension.clone(), ex("refArea"));
        g.insert(ex("c2"), t.measure.clone(), ex("value"));
        g.insert(ex("c3"), t.attribute.clone(), ex("unit"));
        type_and_property_closure(&mut g);
        for (spec, prop, class) in [
            ("c1", "refArea", qb::DIMENSION_PROPERTY),
            ("c2", "value", qb::MEASURE_PROPERTY),
            ("c3", "unit", qb::ATTRIBUTE_PROPERTY),
        ] {
            assert!(g.contains(&ex(spec), &t.component_property, &ex(prop)));
            assert!(g.contains(&ex(prop), &t.rdf_type, &Node::iri(class)));
        }
    }

    #[test]
    fn pushes_data_set_attachments_to_observations() {
        let mut g = cube(fixtures::ABBREVIATED_CUBE);
        let stats = normalize(&mut g);
        assert!(stats.type_closure > 0);
        assert!(stats.push_down > 0);
        for obs in ["o1", "o2", "o3"] {
            assert!(g.contains(&ex(obs), &ex("unit"), &ex("euro")), "{}", obs);
        }
    }

    #[test]
    fn pushes_slice_values_to_members() {
        let mut g = cube(fixtures::ABBREVIATED_CUBE);
        normalize(&mut g);
        // refArea is a dimension fixed on the slice, status is slice-attached.
        for obs in ["o1", "o2"] {
            assert!(g.contains(&ex(obs), &ex("refArea"), &ex("uk")), "{}", obs);
            assert!(g.contains(&ex(obs), &ex("status"), &ex("final")), "{}", obs);
        }
        assert!(!g.contains(&ex("o3"), &ex("status"), &ex("final")));
    }

    #[test]
    fn normalization_is_idempotent_and_monotone() {
        let mut g = cube(fixtures::ABBREVIATED_CUBE);
        let before: Vec<Triple> = g.iter().cloned().collect();
        normalize(&mut g);
        for t in &before {
            assert!(g.contains(&t.subject, &t.predicate, &t.object));
        }
        let len = g.len();
        assert_eq!(normalize(&mut g), NormalizeStats::default());
        assert_eq!(g.len(), len);
    }

    #[test]
    fn missing_structure_pushes_nothing() {
        let t = terms();
        let mut g = Graph::new();
        g.insert(ex("o1"), t.data_set.clone(), ex("ds"));
        assert_eq!(push_down_attachments(&mut g), 0);
    }

    #[test]
    fn push_down_follows_data_set_chains() {
        let mut g = cube(
            r#"
            ex:dsd qb:component [ qb:attribute ex:unit ; qb:componentAttachment qb:DataSet ] .
            ex:d1 qb:structure ex:dsd ; ex:unit ex:euro .
            ex:d2 qb:structure ex:dsd ; qb:dataSet ex:d1 .
            ex:o qb:dataSet ex:d2 .
            "#,
        );
        let first = normalize(&mut g);
        assert_eq!(first.push_down, 2);
        assert!(g.contains(&ex("d2"), &ex("unit"), &ex("euro")));
        assert!(g.contains(&ex("o"), &ex("unit"), &ex("euro")));
        assert_eq!(normalize(&mut g), NormalizeStats::default());
    }
}
