//! Constraint validators, grouped by the kind of check they perform.
//!
//! Every validator takes a normalized graph by shared reference and returns
//! a [`ViolationReport`]. None of them mutate the graph, so they can run in
//! any order or concurrently.

pub mod codelist;
pub mod completeness;
pub mod consistency;
pub mod links;
pub mod structure;
pub mod uniqueness;

use std::collections::BTreeMap;

use qb_store::{Graph, Node};

use crate::constraint::ConstraintId;
use crate::path::{NodeSet, PropertyPath};
use crate::report::ViolationReport;
use crate::terms::terms;

/// Runs the validator for a single constraint.
#[must_use]
pub fn run(graph: &Graph, id: ConstraintId) -> ViolationReport {
    match id {
        ConstraintId::Ic1 => uniqueness::unique_data_set(graph),
        ConstraintId::Ic2 => uniqueness::unique_structure(graph),
        ConstraintId::Ic3 => structure::structure_has_measure(graph),
        ConstraintId::Ic4 => structure::dimensions_have_range(graph),
        ConstraintId::Ic5 => structure::concept_dimensions_have_code_list(graph),
        ConstraintId::Ic6 => structure::only_attributes_optional(graph),
        ConstraintId::Ic7 => structure::slice_keys_declared(graph),
        ConstraintId::Ic8 => structure::slice_keys_consistent(graph),
        ConstraintId::Ic9 => uniqueness::unique_slice_structure(graph),
        ConstraintId::Ic10 => completeness::slice_dimensions_complete(graph),
        ConstraintId::Ic11 => completeness::all_dimensions_present(graph),
        ConstraintId::Ic12 => consistency::no_duplicate_observations(graph),
        ConstraintId::Ic13 => completeness::required_attributes_present(graph),
        ConstraintId::Ic14 => completeness::all_measures_present(graph),
        ConstraintId::Ic15 => consistency::measure_type_consistent(graph),
        ConstraintId::Ic16 => consistency::single_measure_per_observation(graph),
        ConstraintId::Ic17 => consistency::measures_complete_per_key(graph),
        ConstraintId::Ic18 => links::consistent_data_set_links(graph),
        ConstraintId::Ic19 => codelist::codes_from_code_list(graph),
        ConstraintId::Ic20 => codelist::codes_from_hierarchy(graph),
        ConstraintId::Ic21 => codelist::codes_from_inverse_hierarchy(graph),
    }
}

/// Subjects typed `class`, in insertion order.
pub(crate) fn instances(graph: &Graph, class: &Node) -> Vec<Node> {
    graph.subjects(&terms().rdf_type, class)
}

/// True if `node` is typed `class`.
pub(crate) fn is_a(graph: &Graph, node: &Node, class: &Node) -> bool {
    graph.contains(node, &terms().rdf_type, class)
}

/// Component properties declared by a DSD.
pub(crate) fn components(graph: &Graph, dsd: &Node) -> NodeSet {
    let t = terms();
    PropertyPath::of(&[&t.component, &t.component_property]).reachable_from(graph, dsd)
}

/// Component properties of a DSD restricted to one component type.
pub(crate) fn components_of_type(graph: &Graph, dsd: &Node, class: &Node) -> NodeSet {
    components(graph, dsd)
        .into_iter()
        .filter(|p| is_a(graph, p, class))
        .collect()
}

/// Every observation mapped to the component properties its DSD declares.
pub(crate) fn observation_components(graph: &Graph) -> BTreeMap<Node, NodeSet> {
    let t = terms();
    PropertyPath::of(&[
        &t.data_set,
        &t.structure,
        &t.component,
        &t.component_property,
    ])
    .closure(graph)
}

/// The subset of `properties` for which `anchor` has no value.
pub(crate) fn missing_on<'a>(
    graph: &Graph,
    anchor: &Node,
    properties: impl IntoIterator<Item = &'a Node>,
) -> NodeSet {
    properties
        .into_iter()
        .filter(|p| !graph.has_property(anchor, p))
        .cloned()
        .collect()
}
