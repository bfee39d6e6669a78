//! Cross-observation and measure-dimension checks: IC-12, IC-15, IC-16 and
//! IC-17.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use qb_store::{Graph, Node};

use crate::constraint::ConstraintId;
use crate::path::{NodeSet, PropertyPath};
use crate::report::{ViolationDetail, ViolationReport};
use crate::terms::terms;
use crate::validators::{components, components_of_type, instances, is_a};

/// An observation's values for a fixed list of dimensions.
type Key = Vec<(Node, NodeSet)>;

/// IC-12: no two observations of a data set share every dimension value.
///
/// Observations are visited in insertion order; the first one holding a
/// given key is kept and each later duplicate is reported with it as detail.
#[must_use]
pub fn no_duplicate_observations(graph: &Graph) -> ViolationReport {
    let t = terms();
    let dims_of = PropertyPath::of(&[&t.structure, &t.component, &t.component_property]);
    let mut report = ViolationReport::new(ConstraintId::Ic12);

    for data_set in instances(graph, &t.data_set_class) {
        let dims: Vec<Node> = dims_of
            .reachable_from(graph, &data_set)
            .into_iter()
            .filter(|p| is_a(graph, p, &t.dimension_property))
            .collect();
        let mut seen: BTreeMap<Key, Node> = BTreeMap::new();
        for obs in graph.subjects(&t.data_set, &data_set) {
            match seen.entry(key(graph, &obs, &dims)) {
                Entry::Occupied(first) => {
                    report.flag(obs, ViolationDetail::Node(first.get().clone()));
                }
                Entry::Vacant(slot) => {
                    slot.insert(obs);
                }
            }
        }
    }
    report
}

/// IC-15: in a cube with a measure dimension, an observation names exactly
/// one measure through `qb:measureType` and carries exactly one value for it.
///
/// The detail is the `qb:measureType` set when that is not a singleton, or
/// the number of values of the named measure otherwise.
#[must_use]
pub fn measure_type_consistent(graph: &Graph) -> ViolationReport {
    let t = terms();
    let mut report = ViolationReport::new(ConstraintId::Ic15);
    for obs in measure_dimension_observations(graph).into_keys() {
        let named: NodeSet = graph.objects(&obs, &t.measure_type).into_iter().collect();
        let Some(measure) = single(&named) else {
            report.flag(obs, ViolationDetail::Nodes(named));
            continue;
        };
        let count = graph.count_objects(&obs, measure);
        if count != 1 {
            report.flag(obs, ViolationDetail::Count(count));
        }
    }
    report
}

/// IC-16: in a cube with a measure dimension, an observation carries no
/// value for any measure other than the one it names.
#[must_use]
pub fn single_measure_per_observation(graph: &Graph) -> ViolationReport {
    let t = terms();
    let mut report = ViolationReport::new(ConstraintId::Ic16);
    for (obs, dsds) in measure_dimension_observations(graph) {
        let named: NodeSet = graph.objects(&obs, &t.measure_type).into_iter().collect();
        let extra: NodeSet = dsds
            .iter()
            .flat_map(|dsd| components_of_type(graph, dsd, &t.measure_property))
            .filter(|m| !named.contains(m) && graph.has_property(&obs, m))
            .collect();
        if !extra.is_empty() {
            report.flag_nodes(obs, extra);
        }
    }
    report
}

/// IC-17: in a cube with a measure dimension, each combination of the other
/// dimension values appears once per declared measure.
///
/// For every observation with a `qb:measureType` the observations of the same
/// data set that agree with it on every other dimension are counted, itself
/// included. A count that differs from the DSD's measure count is reported.
/// Two observations agree on a dimension unless both have values for it and
/// some pair of those values differs.
#[must_use]
pub fn measures_complete_per_key(graph: &Graph) -> ViolationReport {
    let t = terms();
    let mut report = ViolationReport::new(ConstraintId::Ic17);

    for data_set in instances(graph, &t.data_set_class) {
        let members: Vec<Node> = graph
            .subjects(&t.data_set, &data_set)
            .into_iter()
            .filter(|obs| graph.has_property(obs, &t.measure_type))
            .collect();
        if members.is_empty() {
            continue;
        }

        for dsd in graph.objects(&data_set, &t.structure) {
            let measure_count = components_of_type(graph, &dsd, &t.measure_property).len();
            let dims: Vec<Node> = components_of_type(graph, &dsd, &t.dimension_property)
                .into_iter()
                .filter(|d| *d != t.measure_type)
                .collect();
            let keys: Vec<Key> = members.iter().map(|obs| key(graph, obs, &dims)).collect();

            for (i, obs) in members.iter().enumerate() {
                let agreeing = keys.iter().filter(|other| agree(&keys[i], other)).count();
                if agreeing != measure_count {
                    report.flag(obs.clone(), ViolationDetail::Count(agreeing));
                }
            }
        }
    }
    report
}

/// Observations whose DSD uses `qb:measureType`, mapped to those DSDs.
fn measure_dimension_observations(graph: &Graph) -> BTreeMap<Node, NodeSet> {
    let t = terms();
    PropertyPath::of(&[&t.data_set, &t.structure])
        .closure(graph)
        .into_iter()
        .filter_map(|(obs, dsds)| {
            let with_measure_type: NodeSet = dsds
                .into_iter()
                .filter(|dsd| components(graph, dsd).contains(&t.measure_type))
                .collect();
            (!with_measure_type.is_empty()).then_some((obs, with_measure_type))
        })
        .collect()
}

fn key(graph: &Graph, obs: &Node, dims: &[Node]) -> Key {
    dims.iter()
        .map(|d| (d.clone(), graph.objects(obs, d).into_iter().collect()))
        .collect()
}

fn agree(a: &Key, b: &Key) -> bool {
    a.iter().zip(b).all(|((_, va), (_, vb))| {
        va.is_empty() || vb.is_empty() || (va.len() == 1 && va == vb)
    })
}

fn single(set: &NodeSet) -> Option<&Node> {
    match set.len() {
        1 => set.first(),
        _ => None,
    }
}
