//! Presence checks over anchors: IC-10, IC-11, IC-13 and IC-14.
//!
//! Each check pairs an anchor (a slice or an observation) with the set of
//! properties its structure requires, and reports the subset the anchor has
//! no value for.

use qb_store::Graph;

use crate::constraint::ConstraintId;
use crate::path::{NodeSet, PropertyPath};
use crate::report::ViolationReport;
use crate::terms::terms;
use crate::validators::{components, is_a, missing_on, observation_components};

/// IC-10: a slice has a value for every dimension of its slice key.
#[must_use]
pub fn slice_dimensions_complete(graph: &Graph) -> ViolationReport {
    let t = terms();
    let keyed = PropertyPath::of(&[&t.slice_structure, &t.component_property]).closure(graph);
    let mut report = ViolationReport::new(ConstraintId::Ic10);
    for (slice, dims) in keyed {
        let missing = missing_on(graph, &slice, &dims);
        if !missing.is_empty() {
            report.flag_nodes(slice, missing);
        }
    }
    report
}

/// IC-11: an observation has a value for every dimension of its DSD.
#[must_use]
pub fn all_dimensions_present(graph: &Graph) -> ViolationReport {
    let t = terms();
    let mut report = ViolationReport::new(ConstraintId::Ic11);
    for (obs, props) in observation_components(graph) {
        let dims = props.iter().filter(|p| is_a(graph, p, &t.dimension_property));
        let missing = missing_on(graph, &obs, dims);
        if !missing.is_empty() {
            report.flag_nodes(obs, missing);
        }
    }
    report
}

/// IC-13: an observation has a value for every component its DSD marks
/// `qb:componentRequired true`.
#[must_use]
pub fn required_attributes_present(graph: &Graph) -> ViolationReport {
    let t = terms();
    let specs_of = PropertyPath::of(&[&t.data_set, &t.structure, &t.component]);
    let mut report = ViolationReport::new(ConstraintId::Ic13);

    for (obs, specs) in specs_of.closure(graph) {
        let required: NodeSet = specs
            .iter()
            .filter(|spec| {
                graph
                    .objects(spec, &t.component_required)
                    .iter()
                    .any(|flag| flag.as_literal().and_then(|l| l.as_bool()) == Some(true))
            })
            .flat_map(|spec| graph.objects(spec, &t.component_property))
            .collect();
        let missing = missing_on(graph, &obs, &required);
        if !missing.is_empty() {
            report.flag_nodes(obs, missing);
        }
    }
    report
}

/// IC-14: without a measure dimension, an observation has a value for every
/// measure of its DSD.
#[must_use]
pub fn all_measures_present(graph: &Graph) -> ViolationReport {
    let t = terms();
    let structures = PropertyPath::of(&[&t.data_set, &t.structure]);
    let mut report = ViolationReport::new(ConstraintId::Ic14);

    for (obs, dsds) in structures.closure(graph) {
        for dsd in &dsds {
            let props = components(graph, dsd);
            if props.contains(&t.measure_type) {
                continue;
            }
            let measures = props.iter().filter(|p| is_a(graph, p, &t.measure_property));
            let missing = missing_on(graph, &obs, measures);
            if !missing.is_empty() {
                report.flag_nodes(obs.clone(), missing);
            }
        }
    }
    report
}
